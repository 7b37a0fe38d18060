//! Catalog record types.
//!
//! Every entity is stored wrapped in a [`Record`], which carries the
//! identifier and creation timestamp assigned at insert time. Entities do
//! not reference each other.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

pub mod activity;
pub mod career;
pub mod news;
pub mod program;
pub mod school;
pub mod teacher;

pub use activity::Activity;
pub use career::Career;
pub use news::NewsArticle;
pub use program::Program;
pub use school::School;
pub use teacher::Teacher;

/// The six kinds of catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    School,
    Teacher,
    Program,
    Activity,
    NewsArticle,
    Career,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::School,
        EntityKind::Teacher,
        EntityKind::Program,
        EntityKind::Activity,
        EntityKind::NewsArticle,
        EntityKind::Career,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::School => "school",
            EntityKind::Teacher => "teacher",
            EntityKind::Program => "program",
            EntityKind::Activity => "activity",
            EntityKind::NewsArticle => "news_article",
            EntityKind::Career => "career",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier assigned to a record when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl From<Uuid> for RecordId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// A stored entity together with its identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record<T> {
    pub id: RecordId,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> Record<T> {
    /// Wraps `fields` with a fresh identifier and the current time.
    pub fn new(fields: T) -> Self {
        Self {
            id: RecordId::new(),
            created_at: Utc::now(),
            fields,
        }
    }

    pub fn into_fields(self) -> T {
        self.fields
    }
}

impl<T> Deref for Record<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.fields
    }
}

/// Behaviour shared by every catalog entity.
pub trait Entity: Clone + fmt::Debug {
    const KIND: EntityKind;

    /// Checks required fields before the record is written.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Text fields consulted by free-text search.
    fn search_fields(&self) -> Vec<&str>;
}

/// Fails with [`ValidationError::EmptyField`] when `value` is blank.
pub(crate) fn require(
    entity: EntityKind,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField { entity, field });
    }
    Ok(())
}
