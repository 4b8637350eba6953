pub mod common;
pub mod profiler;
pub mod strategy;
