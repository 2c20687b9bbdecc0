use ndarray::ArrayD;

use super::error::DataLoaderError;

/// One element of a dataset: a data array, its integer label, and its
/// position in the dataset.
#[derive(Debug, Clone)]
pub struct Sample<A> {
    pub data: ArrayD<A>,
    pub label: i64,
    pub idx: usize,
}

/// A finite, indexable collection of labeled samples.
///
/// `get` must be defined for every index in `0..len()`; like slice
/// indexing, implementations may panic on out-of-range access.
pub trait Dataset: Send + Sync {
    /// Element type of the sample data arrays.
    type Elem;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Sample<Self::Elem>;
}

/// A dataset held entirely in memory as parallel data and label vectors.
///
/// The sample at position `i` reports `idx == i`.
#[derive(Debug, Clone)]
pub struct InMemoryDataset<A> {
    data: Vec<ArrayD<A>>,
    labels: Vec<i64>,
}

impl<A> InMemoryDataset<A> {
    pub fn new(data: Vec<ArrayD<A>>, labels: Vec<i64>) -> Result<Self, DataLoaderError> {
        if data.len() != labels.len() {
            return Err(DataLoaderError::MismatchedLengths {
                data: data.len(),
                labels: labels.len(),
            });
        }
        if data.is_empty() {
            return Err(DataLoaderError::EmptyDataset);
        }

        Ok(Self { data, labels })
    }
}

impl<A: Clone + Send + Sync> Dataset for InMemoryDataset<A> {
    type Elem = A;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, index: usize) -> Sample<A> {
        Sample {
            data: self.data[index].clone(),
            label: self.labels[index],
            idx: index,
        }
    }
}
