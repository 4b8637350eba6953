use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("iterations must be a positive integer, got {0}")]
    InvalidIterations(usize),
    #[error("cannot evict from an empty {strategy} window")]
    EmptyWindow { strategy: &'static str },
    #[error("columnar backend error: {0}")]
    Columnar(#[from] PolarsError),
}
