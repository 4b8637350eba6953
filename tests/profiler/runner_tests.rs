use slidebench::common::exception::BenchError;
use slidebench::profiler::runner::profile_window_ops;
use slidebench::strategy::{ColumnarSeries, NaiveVec, PersistentQueue, WindowStrategy};

use crate::assert_err;
use crate::common::logger::init_test_logger;

fn metrics_hold<S: WindowStrategy>(strategy: &S) {
    let result = profile_window_ops(strategy, 50, 100).unwrap();

    assert_eq!(result.algorithm, strategy.name());
    assert_eq!(result.iterations, 50);
    assert!(result.total_time_ms >= 0.0);
    assert!(result.average_time_ms.is_finite());
    assert_eq!(
        result.average_time_ms,
        result.total_time_ms / result.iterations as f64
    );
    assert_eq!(result.ops_per_second, 1_000.0 / result.average_time_ms);
    assert!(result.memory_delta_mb.is_finite());
}

#[test]
fn test_metric_consistency_for_every_strategy() {
    init_test_logger();
    metrics_hold(&NaiveVec);
    metrics_hold(&PersistentQueue);
    metrics_hold(&ColumnarSeries);
}

#[test]
fn test_zero_iterations_never_produces_a_result() {
    init_test_logger();
    assert_err!(profile_window_ops(&NaiveVec, 0, 100));
    assert_err!(profile_window_ops(&PersistentQueue, 0, 100));
    assert_err!(profile_window_ops(&ColumnarSeries, 0, 100));
}

#[test]
fn test_zero_iterations_error_is_a_configuration_error() {
    init_test_logger();
    let err = profile_window_ops(&NaiveVec, 0, 100).unwrap_err();

    assert!(matches!(err, BenchError::InvalidIterations(0)));
    assert_eq!(
        err.to_string(),
        "iterations must be a positive integer, got 0"
    );
}

#[test]
fn test_runner_does_not_share_state_between_invocations() {
    init_test_logger();
    let first = profile_window_ops(&NaiveVec, 25, 40).unwrap();
    let second = profile_window_ops(&NaiveVec, 25, 40).unwrap();

    // Same configuration twice: identical shape, independent measurements.
    assert_eq!(first.algorithm, second.algorithm);
    assert_eq!(first.iterations, second.iterations);
}
