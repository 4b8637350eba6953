/// Discarded `advance` calls executed before the measured phase so buffer
/// growth and allocator warm paths stabilize first.
pub const WARMUP_OPS: usize = 100;

pub const DEFAULT_WINDOW_SIZE: usize = 1000; // seed window length
pub const DEFAULT_ITERATIONS: &[usize] = &[1000]; // measured advance calls per run

/// Compiled-in suite configuration. There are no command-line flags or
/// environment overrides; the binary always runs the default sweep.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    pub window_size: usize,
    pub iteration_counts: Vec<usize>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            iteration_counts: DEFAULT_ITERATIONS.to_vec(),
        }
    }
}
