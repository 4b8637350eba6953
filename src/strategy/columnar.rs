use polars::prelude::*;

use super::WindowStrategy;
use crate::common::exception::BenchError;

/// Polars-backed window. Advance appends a one-row series and then takes a
/// sub-range view from index 1, exercising a general-purpose analytical
/// structure at a single-element update granularity.
pub struct ColumnarSeries;

impl WindowStrategy for ColumnarSeries {
    type Repr = Series;

    fn name(&self) -> &'static str {
        "columnar"
    }

    fn create(&self, seed: &[i64]) -> Result<Series, BenchError> {
        Ok(Series::new("window", seed))
    }

    fn advance(&self, value: i64, mut state: Series) -> Result<Series, BenchError> {
        state.append(&Series::new("window", &[value]))?;
        let appended_len = state.len();
        Ok(state.slice(1, appended_len))
    }

    fn len(&self, state: &Series) -> usize {
        state.len()
    }

    fn snapshot(&self, state: &Series) -> Result<Vec<i64>, BenchError> {
        Ok(state.i64()?.into_no_null_iter().collect())
    }
}
