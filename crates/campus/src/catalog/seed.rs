//! Guarded seeding of the sample dataset.

use chrono::Utc;
use rusqlite::Connection;
use thiserror::Error;
use tracing::{info, info_span};

use super::sample::SampleDataset;
use crate::db::record_repo::insert_on;
use crate::db::seed_repo::{is_seeded_on, mark_seeded_on};
use crate::db::{Database, DatabaseError, Persist};
use crate::error::ValidationError;
use crate::model::{Entity, Record};

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to write sample data: {0}")]
    Database(#[from] DatabaseError),

    #[error("Sample record is invalid: {0}")]
    Validation(#[from] ValidationError),
}

/// What a seeding call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The dataset was written in full.
    Seeded { inserted: u64 },
    /// A marker for the dataset already existed; nothing was written.
    AlreadySeeded,
}

/// Seeds `data` under `dataset` unless that dataset is already marked.
///
/// All records and the marker are written in one transaction, so a failed
/// seed leaves neither partial data nor a marker behind.
pub fn seed_dataset(
    db: &Database,
    dataset: &str,
    data: &SampleDataset,
) -> Result<SeedOutcome, SeedError> {
    let _span = info_span!("catalog.seed", dataset).entered();

    validate_all(&data.schools)?;
    validate_all(&data.teachers)?;
    validate_all(&data.programs)?;
    validate_all(&data.activities)?;
    validate_all(&data.news)?;
    validate_all(&data.careers)?;

    db.with_transaction(|conn| {
        if is_seeded_on(conn, dataset)? {
            info!(dataset, "Sample data already present, skipping");
            return Ok(SeedOutcome::AlreadySeeded);
        }

        let mut inserted = 0;
        inserted += insert_all(conn, &data.schools)?;
        inserted += insert_all(conn, &data.teachers)?;
        inserted += insert_all(conn, &data.programs)?;
        inserted += insert_all(conn, &data.activities)?;
        inserted += insert_all(conn, &data.news)?;
        inserted += insert_all(conn, &data.careers)?;

        mark_seeded_on(conn, dataset, inserted, &Utc::now())?;
        info!(dataset, inserted, "Sample data seeded");
        Ok(SeedOutcome::Seeded { inserted })
    })
}

fn validate_all<T: Entity>(items: &[T]) -> Result<(), ValidationError> {
    items.iter().try_for_each(Entity::validate)
}

fn insert_all<T: Persist>(conn: &Connection, items: &[T]) -> Result<u64, DatabaseError> {
    for item in items {
        insert_on(conn, &Record::new(item.clone()))?;
    }
    Ok(items.len() as u64)
}
