//! Career (job opening) entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require, Entity, EntityKind};
use crate::error::ValidationError;

/// A job opening.
///
/// `location` is the free-text name of a school, not a reference to a
/// [`School`](super::School) record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub job_title: String,
    pub department: String,
    pub location: String,
    /// Full-time, Part-time or Contract by convention.
    pub job_type: String,
    pub description: String,
    /// Requirements in display order.
    pub requirements: Vec<String>,
    /// Salary range as displayed, e.g. "$45,000 - $60,000".
    pub salary: String,
    pub posted_at: DateTime<Utc>,
    /// Inactive openings are hidden from listings.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Career {
    /// Creates an active opening posted now.
    pub fn new(job_title: impl Into<String>, job_type: impl Into<String>) -> Self {
        Self {
            job_title: job_title.into(),
            department: String::new(),
            location: String::new(),
            job_type: job_type.into(),
            description: String::new(),
            requirements: Vec::new(),
            salary: String::new(),
            posted_at: Utc::now(),
            is_active: true,
        }
    }

    /// Returns the same opening marked inactive.
    pub fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }
}

impl Entity for Career {
    const KIND: EntityKind = EntityKind::Career;

    fn validate(&self) -> Result<(), ValidationError> {
        require(Self::KIND, "job_title", &self.job_title)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.job_title.as_str(), self.department.as_str(), self.location.as_str()]
    }
}
