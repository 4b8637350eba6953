use std::time::Instant;

use log::debug;

use crate::common::config::WARMUP_OPS;
use crate::common::exception::BenchError;
use crate::profiler::heap;
use crate::profiler::workload::initial_window;
use crate::strategy::WindowStrategy;

/// Metrics for one (strategy, iteration count) run. Values are raw and
/// unrounded; display precision is applied by the reporter.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub algorithm: &'static str,
    pub iterations: usize,
    pub total_time_ms: f64,
    pub average_time_ms: f64,
    pub ops_per_second: f64,
    pub memory_delta_mb: f64,
}

/// Measures `iterations` append-plus-evict calls against `strategy` and
/// derives the normalized metrics.
///
/// The warm-up phase advances a throwaway representation `WARMUP_OPS`
/// times, then the measured phase starts over from a fresh representation
/// of the same seed, so steady-state cost is measured from an initial
/// state the warm-up never touched. Wall-clock time and the heap counter
/// are sampled immediately around the measured loop; no I/O happens
/// between the two samples.
pub fn profile_window_ops<S: WindowStrategy>(
    strategy: &S,
    iterations: usize,
    window_size: usize,
) -> Result<BenchmarkResult, BenchError> {
    // Rejecting zero up front keeps the per-op division well-defined.
    if iterations == 0 {
        return Err(BenchError::InvalidIterations(iterations));
    }

    let seed = initial_window(window_size);

    let mut warm = strategy.create(&seed)?;
    for i in 0..WARMUP_OPS {
        warm = strategy.advance(i as i64, warm)?;
    }
    drop(warm);

    let mut state = strategy.create(&seed)?;
    debug!(
        "{}: measuring {} advance calls over a window of {}",
        strategy.name(),
        iterations,
        window_size
    );

    let start_heap = heap::net_live_bytes();
    let start = Instant::now();
    for i in 0..iterations {
        state = strategy.advance(i as i64, state)?;
    }
    let total_time_ms = start.elapsed().as_secs_f64() * 1_000.0;
    let end_heap = heap::net_live_bytes();
    drop(state);

    let average_time_ms = total_time_ms / iterations as f64;
    let ops_per_second = 1_000.0 / average_time_ms;
    let memory_delta_mb = (end_heap as f64 - start_heap as f64) / 1024.0 / 1024.0;

    Ok(BenchmarkResult {
        algorithm: strategy.name(),
        iterations,
        total_time_ms,
        average_time_ms,
        ops_per_second,
        memory_delta_mb,
    })
}
