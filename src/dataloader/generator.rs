use ndarray::{Array1, ArrayD, Axis, IxDyn, Slice};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::batch::Batch;
use super::config::BatchConfig;
use super::dataset::Dataset;
use super::error::DataLoaderError;
use super::transform::Transform;

/// Slices a dataset into fixed-size [`Batch`]es, optionally shuffled and
/// optionally transformed per sample.
///
/// All batches are materialized eagerly at construction; iteration only
/// replays them and cannot fail. Re-iterating yields the same batches in
/// the same order, there is no re-shuffle between passes. The last batch
/// is smaller than `batch_size` when the dataset size is not a multiple
/// of it, unless `drop_last` discards it.
#[derive(Debug)]
pub struct BatchGenerator<B> {
    batches: Vec<Batch<B>>,
    batch_size: usize,
    dataset_size: usize,
    shuffle_seed: Option<u64>,
}

impl<A: Clone + Default> BatchGenerator<A> {
    /// Builds batches holding the dataset's sample data unchanged.
    pub fn new<D>(dataset: &D, config: BatchConfig) -> Result<Self, DataLoaderError>
    where
        D: Dataset<Elem = A> + ?Sized,
    {
        Self::build(dataset, config, &|data: &ArrayD<A>| data.clone())
    }
}

impl<B: Clone + Default> BatchGenerator<B> {
    /// Builds batches with `transform` applied to every sample's data.
    ///
    /// The transform's output on the first sample fixes the shape and
    /// element type of the batch data arrays. A transform that later
    /// produces a different shape violates its contract and panics during
    /// construction. Labels and indices are carried over untransformed.
    pub fn with_transform<D, T>(
        dataset: &D,
        config: BatchConfig,
        transform: &T,
    ) -> Result<Self, DataLoaderError>
    where
        D: Dataset + ?Sized,
        T: Transform<D::Elem, Output = B> + ?Sized,
    {
        Self::build(dataset, config, transform)
    }

    fn build<D, T>(dataset: &D, config: BatchConfig, transform: &T) -> Result<Self, DataLoaderError>
    where
        D: Dataset + ?Sized,
        T: Transform<D::Elem, Output = B> + ?Sized,
    {
        let dataset_size = dataset.len();

        if dataset_size == 0 {
            return Err(DataLoaderError::EmptyDataset);
        }
        if config.batch_size > dataset_size {
            return Err(DataLoaderError::BatchSizeTooLarge {
                batch_size: config.batch_size,
                dataset_size,
            });
        }
        if config.batch_size < 1 {
            return Err(DataLoaderError::InvalidBatchSize(config.batch_size));
        }

        // Snapshot of the sample order. The dataset is only read through
        // this, so mutating it afterwards cannot affect built batches.
        let mut order: Vec<usize> = (0..dataset_size).collect();

        let shuffle_seed = if config.shuffle {
            let seed = config
                .shuffle_seed
                .unwrap_or_else(|| rand::thread_rng().gen());
            order.shuffle(&mut StdRng::seed_from_u64(seed));
            Some(seed)
        } else {
            None
        };

        debug!(
            dataset_size,
            batch_size = config.batch_size,
            ?shuffle_seed,
            "materializing dataset"
        );

        // The first sample fixes the data shape and element type for the
        // whole run, the transform's output shape is not known up front.
        let first = dataset.get(order[0]);
        let first_data = transform.apply(&first.data);
        let mut data_shape = Vec::with_capacity(first_data.ndim() + 1);
        data_shape.push(dataset_size);
        data_shape.extend_from_slice(first_data.shape());

        let mut data = ArrayD::<B>::default(IxDyn(&data_shape));
        let mut label = Array1::<i64>::zeros(dataset_size);
        let mut idx = Array1::<usize>::zeros(dataset_size);

        data.index_axis_mut(Axis(0), 0).assign(&first_data);
        label[0] = first.label;
        idx[0] = first.idx;

        for (slot, &position) in order.iter().enumerate().skip(1) {
            let sample = dataset.get(position);
            data.index_axis_mut(Axis(0), slot)
                .assign(&transform.apply(&sample.data));
            label[slot] = sample.label;
            idx[slot] = sample.idx;
        }

        let num_batches = (dataset_size + config.batch_size - 1) / config.batch_size;
        let mut batches = Vec::with_capacity(num_batches);
        let mut start = 0;
        while start < dataset_size {
            let end = usize::min(start + config.batch_size, dataset_size);
            if config.drop_last && end - start < config.batch_size {
                break;
            }
            batches.push(Batch {
                data: data.slice_axis(Axis(0), Slice::from(start..end)).to_owned(),
                label: label
                    .slice_axis(Axis(0), Slice::from(start..end))
                    .to_owned(),
                idx: idx.slice_axis(Axis(0), Slice::from(start..end)).to_owned(),
            });
            start = end;
        }

        debug!(num_batches = batches.len(), "batches built");

        Ok(Self {
            batches,
            batch_size: config.batch_size,
            dataset_size,
            shuffle_seed,
        })
    }
}

impl<B> BatchGenerator<B> {
    /// Number of batches generated per iteration.
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    pub fn get(&self, batch_number: usize) -> Option<&Batch<B>> {
        self.batches.get(batch_number)
    }

    pub fn batches(&self) -> &[Batch<B>] {
        &self.batches
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Batch<B>> {
        self.batches.iter()
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn dataset_size(&self) -> usize {
        self.dataset_size
    }

    /// The seed that drove the shuffle, `None` when the sample order was
    /// preserved. Passing it back via [`BatchConfig::shuffle_seed`]
    /// reproduces the permutation.
    pub fn shuffle_seed(&self) -> Option<u64> {
        self.shuffle_seed
    }
}

impl<'a, B> IntoIterator for &'a BatchGenerator<B> {
    type Item = &'a Batch<B>;
    type IntoIter = std::slice::Iter<'a, Batch<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.batches.iter()
    }
}

impl<B> IntoIterator for BatchGenerator<B> {
    type Item = Batch<B>;
    type IntoIter = std::vec::IntoIter<Batch<B>>;

    fn into_iter(self) -> Self::IntoIter {
        self.batches.into_iter()
    }
}
