use slidebench::common::config::SuiteConfig;
use slidebench::common::exception::BenchError;
use slidebench::common::logger::initialize_logger;
use slidebench::common::result_writer::{report, CliResultWriter};
use slidebench::profiler::heap::TrackingAllocator;
use slidebench::profiler::suite::run_suite;

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

fn main() -> Result<(), BenchError> {
    initialize_logger();

    // Measure everything first; the table is rendered only after the last
    // run completes, and a failed run exits with no report at all.
    let results = run_suite(&SuiteConfig::default())?;

    let mut writer = CliResultWriter::new();
    report(&results, &mut writer);
    Ok(())
}
