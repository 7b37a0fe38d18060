//! School entity.

use serde::{Deserialize, Serialize};

use super::{require, Entity, EntityKind};
use crate::error::ValidationError;

/// A school listed in the directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email address.
    pub email: String,
    /// Free-form description.
    pub description: String,
    /// Name of the bundled logo image, if any.
    pub logo_image: Option<String>,
    /// Year the school was established. Not range checked.
    pub established_year: i32,
}

impl School {
    pub fn new(name: impl Into<String>, address: impl Into<String>, established_year: i32) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            established_year,
            ..Default::default()
        }
    }
}

impl Entity for School {
    const KIND: EntityKind = EntityKind::School;

    fn validate(&self) -> Result<(), ValidationError> {
        require(Self::KIND, "name", &self.name)?;
        require(Self::KIND, "address", &self.address)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.address.as_str()]
    }
}
