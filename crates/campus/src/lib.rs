pub mod auth;
pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod logging;
pub mod model;
pub mod query;
pub mod secrets;

pub use auth::{AuthError, Authenticator, Role, Session, StaticAuthenticator};
pub use catalog::{CatalogStore, SeedError, SeedOutcome};
pub use config::{load_config, CatalogConfig};
pub use db::{Database, DatabaseError};
pub use error::{CampusError, ConfigError, Result, ValidationError};
pub use model::{
    Activity, Career, Entity, EntityKind, NewsArticle, Program, Record, RecordId, School, Teacher,
};
pub use query::{CategoryFilter, Predicate};
pub use secrets::{SecretError, SecretSource};
