//! Activity entity.

use serde::{Deserialize, Serialize};

use super::{require, Entity, EntityKind};
use crate::error::ValidationError;

/// An extracurricular activity.
///
/// `category` is free text. The application offers Sports, Arts, Cultural
/// and Academic but any value is stored as given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub title: String,
    pub description: String,
    pub category: String,
    pub schedule: String,
    pub location: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Activity {
    pub fn new(title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            category: category.into(),
            ..Default::default()
        }
    }
}

impl Entity for Activity {
    const KIND: EntityKind = EntityKind::Activity;

    fn validate(&self) -> Result<(), ValidationError> {
        require(Self::KIND, "title", &self.title)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str(), self.location.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_is_stored_as_given() {
        let activity = Activity::new("Chess Club", "Board Games");
        assert!(activity.validate().is_ok());
        assert_eq!(activity.category, "Board Games");
    }

    #[test]
    fn test_activity_requires_title() {
        assert!(Activity::new("  ", "Sports").validate().is_err());
    }
}
