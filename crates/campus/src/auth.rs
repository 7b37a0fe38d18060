//! Administrator authentication.
//!
//! Callers depend on the [`Authenticator`] trait; [`StaticAuthenticator`]
//! is the configuration-backed implementation. Passwords are kept in
//! [`SecretString`] and never logged.

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::AdminConfig;
use crate::secrets::SecretError;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Username and password are required")]
    MissingCredentials,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Failed to load administrator password: {0}")]
    Secret(#[from] SecretError),
}

/// Access level granted to an administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full system access.
    SuperAdmin,
    /// School-specific management.
    #[default]
    SchoolAdmin,
}

/// A successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub role: Role,
    pub authenticated_at: DateTime<Utc>,
}

pub trait Authenticator {
    fn authenticate(&self, username: &str, password: &SecretString) -> Result<Session, AuthError>;
}

struct Account {
    username: String,
    password: SecretString,
    role: Role,
}

/// Checks credentials against a fixed list of accounts.
#[derive(Default)]
pub struct StaticAuthenticator {
    accounts: Vec<Account>,
}

impl StaticAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(
        mut self,
        username: impl Into<String>,
        password: SecretString,
        role: Role,
    ) -> Self {
        self.accounts.push(Account {
            username: username.into(),
            password,
            role,
        });
        self
    }

    /// Builds an authenticator holding the single configured administrator.
    pub fn from_config(config: &AdminConfig) -> Result<Self, AuthError> {
        let password = config.password.resolve()?;
        Ok(Self::new().with_account(config.username.clone(), password, config.role))
    }
}

impl Authenticator for StaticAuthenticator {
    fn authenticate(&self, username: &str, password: &SecretString) -> Result<Session, AuthError> {
        let username = username.trim();
        if username.is_empty() || password.expose_secret().is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let account = self.accounts.iter().find(|a| {
            a.username == username
                && constant_time_eq(
                    a.password.expose_secret().as_bytes(),
                    password.expose_secret().as_bytes(),
                )
        });

        match account {
            Some(account) => {
                info!(username, role = ?account.role, "Administrator signed in");
                Ok(Session {
                    username: account.username.clone(),
                    role: account.role,
                    authenticated_at: Utc::now(),
                })
            }
            None => {
                warn!(username, "Rejected administrator sign-in");
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}

/// Compares equal-length inputs in time independent of their contents.
/// Returns early on a length mismatch, so the password length is not hidden.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secrets::SecretSource;

    fn secret(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    fn authenticator() -> StaticAuthenticator {
        StaticAuthenticator::new()
            .with_account("principal", secret("correct horse"), Role::SuperAdmin)
            .with_account("office", secret("battery staple"), Role::SchoolAdmin)
    }

    #[test]
    fn test_valid_login_returns_role() {
        let session = authenticator()
            .authenticate("principal", &secret("correct horse"))
            .unwrap();
        assert_eq!(session.username, "principal");
        assert_eq!(session.role, Role::SuperAdmin);

        let session = authenticator()
            .authenticate(" office ", &secret("battery staple"))
            .unwrap();
        assert_eq!(session.role, Role::SchoolAdmin);
    }

    #[test]
    fn test_wrong_password_is_rejected() {
        let err = authenticator()
            .authenticate("principal", &secret("battery staple"))
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_blank_credentials_are_rejected_early() {
        let err = authenticator().authenticate("", &secret("x")).unwrap_err();
        assert!(matches!(err, AuthError::MissingCredentials));
        let err = authenticator().authenticate("principal", &secret("")).unwrap_err();
        assert!(matches!(err, AuthError::MissingCredentials));
    }

    #[test]
    fn test_authenticator_is_usable_as_trait_object() {
        let auth: Box<dyn Authenticator> = Box::new(authenticator());
        assert!(auth.authenticate("office", &secret("battery staple")).is_ok());
    }

    #[test]
    fn test_from_config_resolves_password() {
        let config = AdminConfig {
            username: "principal".into(),
            password: SecretSource {
                value: Some("from-config".into()),
                ..Default::default()
            },
            role: Role::SuperAdmin,
        };
        let auth = StaticAuthenticator::from_config(&config).unwrap();
        assert!(auth.authenticate("principal", &secret("from-config")).is_ok());
    }

    #[test]
    fn test_from_config_without_password_source_fails() {
        let config = AdminConfig {
            username: "principal".into(),
            password: SecretSource::default(),
            role: Role::SchoolAdmin,
        };
        assert!(matches!(
            StaticAuthenticator::from_config(&config),
            Err(AuthError::Secret(SecretError::NoSourceProvided))
        ));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"ab"));
    }
}
