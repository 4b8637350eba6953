pub mod columnar;
pub mod naive;
pub mod persistent;

pub use columnar::ColumnarSeries;
pub use naive::NaiveVec;
pub use persistent::PersistentQueue;

use crate::common::exception::BenchError;

/// One append-plus-evict step over some window representation.
///
/// `create` builds the representation from a seed slice; `advance` appends
/// `value` at the tail and evicts the oldest head element, leaving the
/// length unchanged. A representation may be mutated in place or replaced
/// wholesale; callers only rely on the logical result. `len` and
/// `snapshot` expose the length property and a plain-vector
/// materialization, oldest element first.
pub trait WindowStrategy {
    type Repr;

    fn name(&self) -> &'static str;

    fn create(&self, seed: &[i64]) -> Result<Self::Repr, BenchError>;

    fn advance(&self, value: i64, state: Self::Repr) -> Result<Self::Repr, BenchError>;

    fn len(&self, state: &Self::Repr) -> usize;

    fn snapshot(&self, state: &Self::Repr) -> Result<Vec<i64>, BenchError>;
}
