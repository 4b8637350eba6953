use log::{debug, info};

use crate::common::config::SuiteConfig;
use crate::common::exception::BenchError;
use crate::profiler::runner::{profile_window_ops, BenchmarkResult};
use crate::strategy::{ColumnarSeries, NaiveVec, PersistentQueue, WindowStrategy};

/// Runs every strategy against every configured iteration count and
/// collects the results strategy-major (strategy outer, iteration count
/// inner), one run at a time. Runs never overlap; concurrent measurement
/// would share the CPU and heap and corrupt both samples. The first
/// failing run aborts the remainder, so a returned `Vec` is always the
/// full cross product.
pub fn run_suite(config: &SuiteConfig) -> Result<Vec<BenchmarkResult>, BenchError> {
    info!(
        "running sliding-window suite: window size {}, iteration counts {:?}",
        config.window_size, config.iteration_counts
    );

    let mut results = Vec::new();
    collect_strategy(&NaiveVec, config, &mut results)?;
    collect_strategy(&PersistentQueue, config, &mut results)?;
    collect_strategy(&ColumnarSeries, config, &mut results)?;

    info!("suite complete: {} results", results.len());
    Ok(results)
}

fn collect_strategy<S: WindowStrategy>(
    strategy: &S,
    config: &SuiteConfig,
    results: &mut Vec<BenchmarkResult>,
) -> Result<(), BenchError> {
    for &iterations in &config.iteration_counts {
        let result = profile_window_ops(strategy, iterations, config.window_size)?;
        debug!(
            "{}: {} iterations in {:.3} ms",
            result.algorithm, result.iterations, result.total_time_ms
        );
        results.push(result);
    }
    Ok(())
}
