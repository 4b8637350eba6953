use super::WindowStrategy;
use crate::common::exception::BenchError;

/// Flat mutable buffer. Eviction is `remove(0)`, which shifts every
/// remaining element left, so each advance costs O(n) in the window size.
pub struct NaiveVec;

impl WindowStrategy for NaiveVec {
    type Repr = Vec<i64>;

    fn name(&self) -> &'static str {
        "naive"
    }

    fn create(&self, seed: &[i64]) -> Result<Vec<i64>, BenchError> {
        Ok(seed.to_vec())
    }

    fn advance(&self, value: i64, mut state: Vec<i64>) -> Result<Vec<i64>, BenchError> {
        state.push(value);
        state.remove(0);
        Ok(state)
    }

    fn len(&self, state: &Vec<i64>) -> usize {
        state.len()
    }

    fn snapshot(&self, state: &Vec<i64>) -> Result<Vec<i64>, BenchError> {
        Ok(state.clone())
    }
}
