use rpds::Queue;

use super::WindowStrategy;
use crate::common::exception::BenchError;

/// Structurally shared window. Each advance yields a new logical version
/// that reuses the previous version's nodes instead of copying the buffer.
pub struct PersistentQueue;

impl WindowStrategy for PersistentQueue {
    type Repr = Queue<i64>;

    fn name(&self) -> &'static str {
        "persistent"
    }

    fn create(&self, seed: &[i64]) -> Result<Queue<i64>, BenchError> {
        Ok(seed.iter().copied().collect())
    }

    fn advance(&self, value: i64, state: Queue<i64>) -> Result<Queue<i64>, BenchError> {
        // The enqueue runs first, so the dequeue target is never empty.
        state
            .enqueue(value)
            .dequeue()
            .ok_or(BenchError::EmptyWindow {
                strategy: "persistent",
            })
    }

    fn len(&self, state: &Queue<i64>) -> usize {
        state.len()
    }

    fn snapshot(&self, state: &Queue<i64>) -> Result<Vec<i64>, BenchError> {
        Ok(state.iter().copied().collect())
    }
}
