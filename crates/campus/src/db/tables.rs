//! Column mappings between catalog entities and their SQLite tables.
//!
//! Timestamps are stored as RFC 3339 text with nanosecond precision and
//! string lists as JSON arrays, so a record reads back exactly as written.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::{Type, Value};
use rusqlite::Row;
use serde::de::DeserializeOwned;

use super::DatabaseError;
use crate::model::{Activity, Career, Entity, NewsArticle, Program, School, Teacher};

/// An entity that has a table of its own.
pub trait Persist: Entity + Sized {
    /// Table name.
    const TABLE: &'static str;
    /// Entity columns, excluding `seq`, `id` and `created_at`.
    const COLUMNS: &'static [&'static str];

    /// Column values in `COLUMNS` order.
    fn to_values(&self) -> Result<Vec<Value>, DatabaseError>;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

pub(crate) fn timestamp_value(at: &DateTime<Utc>) -> Value {
    Value::Text(at.to_rfc3339_opts(SecondsFormat::Nanos, true))
}

pub(crate) fn get_timestamp(row: &Row<'_>, column: &str) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(column)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(row, column, Box::new(e)))
}

fn json_value<T: serde::Serialize>(value: &T) -> Result<Value, DatabaseError> {
    Ok(Value::Text(serde_json::to_string(value)?))
}

fn get_json<T: DeserializeOwned>(row: &Row<'_>, column: &str) -> rusqlite::Result<T> {
    let raw: String = row.get(column)?;
    serde_json::from_str(&raw).map_err(|e| conversion_error(row, column, Box::new(e)))
}

pub(crate) fn conversion_error(
    row: &Row<'_>,
    column: &str,
    source: Box<dyn std::error::Error + Send + Sync>,
) -> rusqlite::Error {
    let index = row.as_ref().column_index(column).unwrap_or(0);
    rusqlite::Error::FromSqlConversionFailure(index, Type::Text, source)
}

fn text(value: &str) -> Value {
    Value::Text(value.to_string())
}

fn optional_text(value: &Option<String>) -> Value {
    match value {
        Some(v) => Value::Text(v.clone()),
        None => Value::Null,
    }
}

impl Persist for School {
    const TABLE: &'static str = "schools";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "address",
        "phone",
        "email",
        "description",
        "logo_image",
        "established_year",
    ];

    fn to_values(&self) -> Result<Vec<Value>, DatabaseError> {
        Ok(vec![
            text(&self.name),
            text(&self.address),
            text(&self.phone),
            text(&self.email),
            text(&self.description),
            optional_text(&self.logo_image),
            Value::Integer(i64::from(self.established_year)),
        ])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            name: row.get("name")?,
            address: row.get("address")?,
            phone: row.get("phone")?,
            email: row.get("email")?,
            description: row.get("description")?,
            logo_image: row.get("logo_image")?,
            established_year: row.get("established_year")?,
        })
    }
}

impl Persist for Teacher {
    const TABLE: &'static str = "teachers";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "subject",
        "qualification",
        "experience_years",
        "bio",
        "email",
        "phone",
        "profile_image",
    ];

    fn to_values(&self) -> Result<Vec<Value>, DatabaseError> {
        Ok(vec![
            text(&self.name),
            text(&self.subject),
            text(&self.qualification),
            Value::Integer(i64::from(self.experience_years)),
            text(&self.bio),
            text(&self.email),
            text(&self.phone),
            optional_text(&self.profile_image),
        ])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            name: row.get("name")?,
            subject: row.get("subject")?,
            qualification: row.get("qualification")?,
            experience_years: row.get("experience_years")?,
            bio: row.get("bio")?,
            email: row.get("email")?,
            phone: row.get("phone")?,
            profile_image: row.get("profile_image")?,
        })
    }
}

impl Persist for Program {
    const TABLE: &'static str = "programs";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "description",
        "duration",
        "age_group",
        "fee",
        "curriculum",
        "image",
    ];

    fn to_values(&self) -> Result<Vec<Value>, DatabaseError> {
        Ok(vec![
            text(&self.name),
            text(&self.description),
            text(&self.duration),
            text(&self.age_group),
            Value::Real(self.fee),
            text(&self.curriculum),
            optional_text(&self.image),
        ])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            name: row.get("name")?,
            description: row.get("description")?,
            duration: row.get("duration")?,
            age_group: row.get("age_group")?,
            fee: row.get("fee")?,
            curriculum: row.get("curriculum")?,
            image: row.get("image")?,
        })
    }
}

impl Persist for Activity {
    const TABLE: &'static str = "activities";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "description",
        "category",
        "schedule",
        "location",
        "images",
    ];

    fn to_values(&self) -> Result<Vec<Value>, DatabaseError> {
        Ok(vec![
            text(&self.title),
            text(&self.description),
            text(&self.category),
            text(&self.schedule),
            text(&self.location),
            json_value(&self.images)?,
        ])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            title: row.get("title")?,
            description: row.get("description")?,
            category: row.get("category")?,
            schedule: row.get("schedule")?,
            location: row.get("location")?,
            images: get_json(row, "images")?,
        })
    }
}

impl Persist for NewsArticle {
    const TABLE: &'static str = "news_articles";
    const COLUMNS: &'static [&'static str] = &[
        "title",
        "content",
        "author",
        "published_at",
        "category",
        "images",
    ];

    fn to_values(&self) -> Result<Vec<Value>, DatabaseError> {
        Ok(vec![
            text(&self.title),
            text(&self.content),
            text(&self.author),
            timestamp_value(&self.published_at),
            text(&self.category),
            json_value(&self.images)?,
        ])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            title: row.get("title")?,
            content: row.get("content")?,
            author: row.get("author")?,
            published_at: get_timestamp(row, "published_at")?,
            category: row.get("category")?,
            images: get_json(row, "images")?,
        })
    }
}

impl Persist for Career {
    const TABLE: &'static str = "careers";
    const COLUMNS: &'static [&'static str] = &[
        "job_title",
        "department",
        "location",
        "job_type",
        "description",
        "requirements",
        "salary",
        "posted_at",
        "is_active",
    ];

    fn to_values(&self) -> Result<Vec<Value>, DatabaseError> {
        Ok(vec![
            text(&self.job_title),
            text(&self.department),
            text(&self.location),
            text(&self.job_type),
            text(&self.description),
            json_value(&self.requirements)?,
            text(&self.salary),
            timestamp_value(&self.posted_at),
            Value::Integer(i64::from(self.is_active)),
        ])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            job_title: row.get("job_title")?,
            department: row.get("department")?,
            location: row.get("location")?,
            job_type: row.get("job_type")?,
            description: row.get("description")?,
            requirements: get_json(row, "requirements")?,
            salary: row.get("salary")?,
            posted_at: get_timestamp(row, "posted_at")?,
            is_active: row.get("is_active")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_columns_match<T: Persist>(sample: T) {
        assert_eq!(
            sample.to_values().unwrap().len(),
            T::COLUMNS.len(),
            "{} column count mismatch",
            T::TABLE
        );
    }

    #[test]
    fn test_values_align_with_columns() {
        assert_columns_match(School::new("A", "B", 2000));
        assert_columns_match(Teacher::new("A", "B"));
        assert_columns_match(Program::new("A", "B", 1.0));
        assert_columns_match(Activity::new("A", "B"));
        assert_columns_match(NewsArticle::new("A", "B", Utc::now()));
        assert_columns_match(Career::new("A", "B"));
    }

    #[test]
    fn test_timestamp_value_keeps_nanoseconds() {
        let at = DateTime::parse_from_rfc3339("2025-12-02T10:11:12.123456789Z")
            .unwrap()
            .with_timezone(&Utc);
        match timestamp_value(&at) {
            Value::Text(s) => assert_eq!(s, "2025-12-02T10:11:12.123456789Z"),
            other => panic!("unexpected value {:?}", other),
        }
    }

    #[test]
    fn test_inactive_career_is_stored_as_zero() {
        let values = Career::new("Coach", "Part-time").deactivated().to_values().unwrap();
        assert_eq!(values.last(), Some(&Value::Integer(0)));
    }
}
