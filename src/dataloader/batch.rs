use ndarray::{Array1, ArrayD};

/// One contiguous slice of the materialized dataset.
///
/// `data` stacks the sample arrays along a leading axis of length `s`,
/// `label` and `idx` each hold `s` values in the same order. Position `i`
/// in all three arrays describes the same original sample, and `idx[i]`
/// is that sample's position in the dataset before any shuffling.
/// Batches are built once by [`BatchGenerator`] and are not meant to be
/// mutated afterwards.
///
/// [`BatchGenerator`]: super::generator::BatchGenerator
#[derive(Debug, Clone)]
pub struct Batch<B> {
    pub data: ArrayD<B>,
    pub label: Array1<i64>,
    pub idx: Array1<usize>,
}

impl<B> Batch<B> {
    /// Number of samples in this batch.
    pub fn len(&self) -> usize {
        self.idx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.idx.is_empty()
    }
}
