//! Teacher entity.

use serde::{Deserialize, Serialize};

use super::{require, Entity, EntityKind};
use crate::error::ValidationError;

/// A teacher profile. Not linked to any school.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub name: String,
    pub subject: String,
    pub qualification: String,
    /// Years of teaching experience.
    pub experience_years: i32,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub profile_image: Option<String>,
}

impl Teacher {
    pub fn new(name: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            ..Default::default()
        }
    }
}

impl Entity for Teacher {
    const KIND: EntityKind = EntityKind::Teacher;

    fn validate(&self) -> Result<(), ValidationError> {
        require(Self::KIND, "name", &self.name)?;
        require(Self::KIND, "subject", &self.subject)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.subject.as_str()]
    }
}
