//! Builder patterns for creating test data programmatically.

#![allow(dead_code)]

use std::path::Path;

use chrono::{DateTime, Utc};

use campus::config::{CatalogConfig, DatabaseConfig, LoggingConfig, SeedConfig};
use campus::{Career, NewsArticle};

/// Builder for `CatalogConfig` instances.
pub struct ConfigBuilder {
    config: CatalogConfig,
}

impl ConfigBuilder {
    /// In-memory database, seeding off.
    pub fn new() -> Self {
        Self {
            config: CatalogConfig {
                version: "1.0".to_string(),
                database: DatabaseConfig {
                    path: None,
                    in_memory: true,
                },
                seed: SeedConfig { on_startup: false },
                logging: LoggingConfig::default(),
                admin: None,
            },
        }
    }

    pub fn database_path(mut self, path: &Path) -> Self {
        self.config.database = DatabaseConfig {
            path: Some(path.to_string_lossy().into_owned()),
            in_memory: false,
        };
        self
    }

    pub fn seed_on_startup(mut self, on_startup: bool) -> Self {
        self.config.seed.on_startup = on_startup;
        self
    }

    pub fn build(self) -> CatalogConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `Career` openings.
pub struct CareerBuilder {
    career: Career,
}

impl CareerBuilder {
    pub fn new(job_title: &str) -> Self {
        Self {
            career: Career::new(job_title, "Full-time"),
        }
    }

    pub fn job_type(mut self, job_type: &str) -> Self {
        self.career.job_type = job_type.to_string();
        self
    }

    pub fn department(mut self, department: &str) -> Self {
        self.career.department = department.to_string();
        self
    }

    pub fn requirement(mut self, requirement: &str) -> Self {
        self.career.requirements.push(requirement.to_string());
        self
    }

    pub fn inactive(mut self) -> Self {
        self.career.is_active = false;
        self
    }

    pub fn build(self) -> Career {
        self.career
    }
}

/// Builder for `NewsArticle` entries.
pub struct NewsBuilder {
    article: NewsArticle,
}

impl NewsBuilder {
    pub fn new(title: &str, published_at: DateTime<Utc>) -> Self {
        Self {
            article: NewsArticle::new(title, format!("{} in detail.", title), published_at),
        }
    }

    pub fn category(mut self, category: &str) -> Self {
        self.article.category = category.to_string();
        self
    }

    pub fn image(mut self, image: &str) -> Self {
        self.article.images.push(image.to_string());
        self
    }

    pub fn build(self) -> NewsArticle {
        self.article
    }
}
