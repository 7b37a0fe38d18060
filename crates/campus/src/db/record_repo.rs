//! Insert and read operations shared by every catalog table. Rows are
//! never updated or deleted.

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

use super::tables::{conversion_error, get_timestamp, timestamp_value, Persist};
use super::{Database, DatabaseError};
use crate::model::{Record, RecordId};

fn record_from_row<T: Persist>(row: &Row<'_>) -> Result<Record<T>, rusqlite::Error> {
    let raw_id: String = row.get("id")?;
    let id = raw_id
        .parse::<RecordId>()
        .map_err(|e| conversion_error(row, "id", Box::new(e)))?;
    Ok(Record {
        id,
        created_at: get_timestamp(row, "created_at")?,
        fields: T::from_row(row)?,
    })
}

fn exists<T: Persist>(conn: &Connection, id: &RecordId) -> Result<bool, DatabaseError> {
    let count: u32 = conn.query_row(
        &format!("SELECT COUNT(*) FROM {} WHERE id = ?1", T::TABLE),
        params![id.to_string()],
        |r| r.get(0),
    )?;
    Ok(count > 0)
}

/// Inserts a record on an already locked connection.
///
/// Used directly by seeding so that many inserts share one transaction.
pub(crate) fn insert_on<T: Persist>(
    conn: &Connection,
    record: &Record<T>,
) -> Result<(), DatabaseError> {
    if exists::<T>(conn, &record.id)? {
        return Err(DatabaseError::DuplicateId {
            kind: T::KIND,
            id: record.id,
        });
    }

    let placeholders: Vec<String> = (1..=T::COLUMNS.len() + 2)
        .map(|i| format!("?{}", i))
        .collect();
    let sql = format!(
        "INSERT INTO {} (id, created_at, {}) VALUES ({})",
        T::TABLE,
        T::COLUMNS.join(", "),
        placeholders.join(", ")
    );

    let mut values = Vec::with_capacity(T::COLUMNS.len() + 2);
    values.push(Value::Text(record.id.to_string()));
    values.push(timestamp_value(&record.created_at));
    values.extend(record.fields.to_values()?);

    conn.execute(&sql, params_from_iter(values))?;
    Ok(())
}

/// Inserts a new record row.
pub fn insert<T: Persist>(db: &Database, record: &Record<T>) -> Result<(), DatabaseError> {
    db.with_conn(|conn| insert_on(conn, record))
}

/// Finds a record by its ID.
pub fn find_by_id<T: Persist>(
    db: &Database,
    id: &RecordId,
) -> Result<Option<Record<T>>, DatabaseError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(&format!("SELECT * FROM {} WHERE id = ?1", T::TABLE))?;
        let mut rows = stmt.query_map(params![id.to_string()], record_from_row::<T>)?;
        match rows.next() {
            Some(Ok(row)) => Ok(Some(row)),
            Some(Err(e)) => Err(DatabaseError::Sqlite(e)),
            None => Ok(None),
        }
    })
}

/// Lists every record of a table in insertion order.
pub fn list<T: Persist>(db: &Database) -> Result<Vec<Record<T>>, DatabaseError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(&format!("SELECT * FROM {} ORDER BY seq ASC", T::TABLE))?;
        let rows = stmt
            .query_map([], record_from_row::<T>)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    })
}

/// Counts the records in a table.
pub fn count<T: Persist>(db: &Database) -> Result<u64, DatabaseError> {
    db.with_conn(|conn| count_on::<T>(conn))
}

pub(crate) fn count_on<T: Persist>(conn: &Connection) -> Result<u64, DatabaseError> {
    let count: u64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", T::TABLE), [], |r| {
        r.get(0)
    })?;
    Ok(count)
}
