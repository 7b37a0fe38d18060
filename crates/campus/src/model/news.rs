//! News article entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require, Entity, EntityKind};
use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub title: String,
    pub content: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
}

impl NewsArticle {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: String::new(),
            published_at,
            category: String::new(),
            images: Vec::new(),
        }
    }
}

impl Entity for NewsArticle {
    const KIND: EntityKind = EntityKind::NewsArticle;

    fn validate(&self) -> Result<(), ValidationError> {
        require(Self::KIND, "title", &self.title)?;
        require(Self::KIND, "content", &self.content)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.content.as_str(), self.author.as_str()]
    }
}
