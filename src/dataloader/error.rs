use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataLoaderError {
    // Generator construction errors
    #[error("No samples in the dataset")]
    EmptyDataset,

    #[error("Batch size {batch_size} exceeds the dataset size {dataset_size}")]
    BatchSizeTooLarge {
        batch_size: usize,
        dataset_size: usize,
    },

    #[error("Batch size must be at least 1, got {0}")]
    InvalidBatchSize(usize),

    // Dataset construction errors
    #[error("Data and label counts differ: {data} data samples, {labels} labels")]
    MismatchedLengths { data: usize, labels: usize },
}
