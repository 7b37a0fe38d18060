//! Seed markers: which sample datasets were already loaded.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use super::tables::{get_timestamp, timestamp_value};
use super::{Database, DatabaseError};

/// A dataset that has been seeded into the store.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedMarker {
    pub dataset: String,
    pub record_count: u64,
    pub seeded_at: DateTime<Utc>,
}

pub(crate) fn is_seeded_on(conn: &Connection, dataset: &str) -> Result<bool, DatabaseError> {
    let count: u32 = conn.query_row(
        "SELECT COUNT(*) FROM _seed_markers WHERE dataset = ?1",
        params![dataset],
        |r| r.get(0),
    )?;
    Ok(count > 0)
}

pub(crate) fn mark_seeded_on(
    conn: &Connection,
    dataset: &str,
    record_count: u64,
    seeded_at: &DateTime<Utc>,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO _seed_markers (dataset, record_count, seeded_at) VALUES (?1, ?2, ?3)",
        params![dataset, record_count, timestamp_value(seeded_at)],
    )?;
    Ok(())
}

/// Finds the marker for a dataset, if it was seeded.
pub fn find(db: &Database, dataset: &str) -> Result<Option<SeedMarker>, DatabaseError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT dataset, record_count, seeded_at FROM _seed_markers WHERE dataset = ?1",
        )?;
        let mut rows = stmt.query_map(params![dataset], |row| {
            Ok(SeedMarker {
                dataset: row.get("dataset")?,
                record_count: row.get("record_count")?,
                seeded_at: get_timestamp(row, "seeded_at")?,
            })
        })?;
        match rows.next() {
            Some(Ok(marker)) => Ok(Some(marker)),
            Some(Err(e)) => Err(DatabaseError::Sqlite(e)),
            None => Ok(None),
        }
    })
}
