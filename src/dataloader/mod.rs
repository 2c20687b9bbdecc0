pub mod batch;
pub mod config;
pub mod dataset;
pub mod error;
pub mod generator;
pub mod info;
pub mod transform;
