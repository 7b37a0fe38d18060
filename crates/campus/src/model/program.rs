//! Program entity.

use serde::{Deserialize, Serialize};

use super::{require, Entity, EntityKind};
use crate::error::ValidationError;

/// An educational program offered by the schools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub name: String,
    pub description: String,
    /// Human readable duration, e.g. "6 Years".
    pub duration: String,
    /// Human readable age range, e.g. "Ages 6-12".
    pub age_group: String,
    /// Annual fee. Any finite value is accepted, including negatives.
    pub fee: f64,
    pub curriculum: String,
    pub image: Option<String>,
}

impl Program {
    pub fn new(name: impl Into<String>, age_group: impl Into<String>, fee: f64) -> Self {
        Self {
            name: name.into(),
            age_group: age_group.into(),
            fee,
            ..Default::default()
        }
    }
}

impl Entity for Program {
    const KIND: EntityKind = EntityKind::Program;

    fn validate(&self) -> Result<(), ValidationError> {
        require(Self::KIND, "name", &self.name)?;
        if !self.fee.is_finite() {
            return Err(ValidationError::InvalidNumber {
                field: "fee",
                value: self.fee.to_string(),
            });
        }
        Ok(())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str(), self.curriculum.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_fee_is_accepted() {
        assert!(Program::new("Scholarship Track", "Ages 14-18", -250.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_non_finite_fee_is_rejected() {
        for fee in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Program::new("Bursary", "Ages 6-12", fee)
                .validate()
                .unwrap_err();
            assert!(matches!(err, ValidationError::InvalidNumber { field: "fee", .. }));
        }
    }

    #[test]
    fn test_program_requires_name() {
        assert!(Program::new("", "Ages 6-12", 5000.0).validate().is_err());
    }
}
