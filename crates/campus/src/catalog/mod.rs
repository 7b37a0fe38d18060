//! The catalog store and its sample dataset.

pub mod sample;
pub mod seed;
pub mod store;

pub use sample::{SampleDataset, SAMPLE_DATASET};
pub use seed::{SeedError, SeedOutcome};
pub use store::CatalogStore;
