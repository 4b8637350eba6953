use colored::Colorize;
use prettytable::{format, Cell, Row, Table};

use crate::profiler::runner::BenchmarkResult;

/// Column order of the suite report.
pub const REPORT_COLUMNS: [&str; 6] = [
    "algo",
    "iterations",
    "Total(ms)",
    "Average(ms)",
    "Ops/s",
    "Mem(MB)",
];

/// Trait for writing suite results in a tabular format
pub trait ResultWriter {
    fn write_schema_header(&mut self, headers: Vec<String>);
    fn write_row(&mut self, values: Vec<String>);
    fn write_message(&mut self, message: &str);
}

/// Renders rows as a box-drawn table on stdout.
#[derive(Default)]
pub struct CliResultWriter {
    table: Option<Table>,
    headers: Vec<String>,
}

/// Collects rows in memory instead of printing them.
#[derive(Default)]
pub struct BufferedResultWriter {
    pub column_names: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub messages: Vec<String>,
}

impl CliResultWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_table(&mut self) {
        if self.table.is_none() {
            let mut table = Table::new();
            table.set_format(*format::consts::FORMAT_BOX_CHARS);

            if !self.headers.is_empty() {
                table.set_titles(Row::new(
                    self.headers
                        .iter()
                        .map(|h| Cell::new(&h.bold().to_string()))
                        .collect(),
                ));
            }

            self.table = Some(table);
        }
    }

    fn flush(&mut self) {
        if let Some(table) = self.table.take() {
            table.printstd();
            println!();
        }
    }
}

impl BufferedResultWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultWriter for CliResultWriter {
    fn write_schema_header(&mut self, headers: Vec<String>) {
        self.headers = headers;
        self.table = None; // Reset table to create new one with headers
        self.ensure_table();
    }

    fn write_row(&mut self, values: Vec<String>) {
        self.ensure_table();

        if let Some(table) = self.table.as_mut() {
            table.add_row(Row::new(values.iter().map(|v| Cell::new(v)).collect()));
        }
    }

    fn write_message(&mut self, message: &str) {
        // Flush any existing table before free-form output
        self.flush();
        println!("{}", message);
    }
}

impl ResultWriter for BufferedResultWriter {
    fn write_schema_header(&mut self, headers: Vec<String>) {
        self.column_names = headers;
    }

    fn write_row(&mut self, values: Vec<String>) {
        self.rows.push(values);
    }

    fn write_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

impl Drop for CliResultWriter {
    fn drop(&mut self) {
        // Print any remaining table
        self.flush();
    }
}

/// Writes one row per result record, applying the fixed display precisions:
/// totals to 3 decimal places, per-op averages to 6, memory to 2, and
/// ops/sec to the nearest integer. The records themselves stay unrounded.
pub fn report<W: ResultWriter>(results: &[BenchmarkResult], writer: &mut W) {
    writer.write_schema_header(REPORT_COLUMNS.iter().map(|c| c.to_string()).collect());

    for result in results {
        writer.write_row(vec![
            result.algorithm.to_string(),
            result.iterations.to_string(),
            format!("{:.3}", result.total_time_ms),
            format!("{:.6}", result.average_time_ms),
            format!("{:.0}", result.ops_per_second),
            format!("{:.2}", result.memory_delta_mb),
        ]);
    }
}
