use slidebench::common::config::SuiteConfig;
use slidebench::common::result_writer::{report, BufferedResultWriter, REPORT_COLUMNS};
use slidebench::profiler::suite::run_suite;

use crate::assert_ok;
use crate::common::logger::init_test_logger;

#[test]
fn test_default_suite_has_one_row_per_strategy() {
    init_test_logger();
    let results = assert_ok!(run_suite(&SuiteConfig::default()));

    assert_eq!(results.len(), 3);
    let names: Vec<&str> = results.iter().map(|r| r.algorithm).collect();
    assert_eq!(names, vec!["naive", "persistent", "columnar"]);
    assert!(results.iter().all(|r| r.iterations == 1000));
}

#[test]
fn test_report_renders_every_result() {
    init_test_logger();
    let config = SuiteConfig {
        window_size: 64,
        iteration_counts: vec![10, 25],
    };
    let results = assert_ok!(run_suite(&config));

    let mut writer = BufferedResultWriter::new();
    report(&results, &mut writer);

    assert_eq!(writer.column_names, REPORT_COLUMNS.to_vec());
    assert_eq!(writer.rows.len(), results.len());

    for row in &writer.rows {
        assert_eq!(row.len(), REPORT_COLUMNS.len());
        // Numeric columns must render as finite figures, not inf/NaN.
        for cell in &row[2..] {
            let value: f64 = assert_ok!(cell.parse());
            assert!(value.is_finite(), "non-finite cell {}", cell);
        }
    }
}
