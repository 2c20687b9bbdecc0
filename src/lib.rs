//! Minibatch construction over labeled sample collections.
//!
//! A [`BatchGenerator`] snapshots a [`Dataset`], optionally shuffles it,
//! optionally runs a per-sample [`Transform`], and slices the result into
//! fixed-size [`Batch`]es of aligned data, label, and index arrays.

pub mod dataloader;

pub use dataloader::batch::Batch;
pub use dataloader::config::BatchConfig;
pub use dataloader::dataset::{Dataset, InMemoryDataset, Sample};
pub use dataloader::error::DataLoaderError;
pub use dataloader::generator::BatchGenerator;
pub use dataloader::info::print_batch_info;
pub use dataloader::transform::Transform;
