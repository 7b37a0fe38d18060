//! Table-driven tests for configuration loading and validation.

mod common;

use campus::config::{load_config, load_config_from_str};
use campus::{Authenticator, CatalogStore, Role, StaticAuthenticator};
use secrecy::SecretString;

use common::{ConfigBuilder, TestHarness};

struct ConfigTestCase {
    name: &'static str,
    config_json: &'static str,
    should_succeed: bool,
    expected_error: Option<&'static str>,
}

const JSON_CONFIG_TESTS: &[ConfigTestCase] = &[
    ConfigTestCase {
        name: "valid_minimal",
        config_json: r#"{ "version": "1.0" }"#,
        should_succeed: true,
        expected_error: None,
    },
    ConfigTestCase {
        name: "valid_full",
        config_json: r#"{
            "version": "1.0",
            "database": { "path": "/srv/campus/catalog.db", "in_memory": false },
            "seed": { "on_startup": true },
            "logging": { "level": "debug", "json": true },
            "admin": {
                "username": "principal",
                "role": "school_admin",
                "password": { "file": "/run/secrets/campus_admin" }
            }
        }"#,
        should_succeed: true,
        expected_error: None,
    },
    ConfigTestCase {
        name: "missing_version",
        config_json: r#"{ "seed": { "on_startup": false } }"#,
        should_succeed: false,
        expected_error: Some("Schema validation failed"),
    },
    ConfigTestCase {
        name: "unsupported_version",
        config_json: r#"{ "version": "0.9" }"#,
        should_succeed: false,
        expected_error: Some("Unsupported config version"),
    },
    ConfigTestCase {
        name: "empty_database_path",
        config_json: r#"{ "version": "1.0", "database": { "path": "" } }"#,
        should_succeed: false,
        expected_error: Some("Schema validation failed"),
    },
    ConfigTestCase {
        name: "unknown_role",
        config_json: r#"{
            "version": "1.0",
            "admin": { "username": "x", "role": "janitor", "password": { "value": "y" } }
        }"#,
        should_succeed: false,
        expected_error: Some("Schema validation failed"),
    },
    ConfigTestCase {
        name: "admin_without_password",
        config_json: r#"{ "version": "1.0", "admin": { "username": "x" } }"#,
        should_succeed: false,
        expected_error: Some("Schema validation failed"),
    },
    ConfigTestCase {
        name: "seed_flag_wrong_type",
        config_json: r#"{ "version": "1.0", "seed": { "on_startup": "yes" } }"#,
        should_succeed: false,
        expected_error: Some("Schema validation failed"),
    },
];

#[test]
fn test_json_config_loading() {
    for case in JSON_CONFIG_TESTS {
        let result = load_config_from_str(case.config_json);

        if case.should_succeed {
            assert!(
                result.is_ok(),
                "Test '{}' should succeed but failed: {:?}",
                case.name,
                result.err()
            );
        } else {
            let err = match result {
                Ok(_) => panic!("Test '{}' should fail but succeeded", case.name),
                Err(e) => e.to_string(),
            };
            if let Some(expected) = case.expected_error {
                assert!(
                    err.contains(expected),
                    "Test '{}' error should contain '{}', got: {}",
                    case.name,
                    expected,
                    err
                );
            }
        }
    }
}

#[test]
fn test_config_file_round_trip_opens_store() {
    let harness = TestHarness::new();
    let written = ConfigBuilder::new()
        .database_path(&harness.db_path)
        .seed_on_startup(true)
        .build();
    let path = harness.write_config("campus.json", &written);

    let config = load_config(&path).unwrap();
    assert_eq!(
        config.database.resolve_path().as_deref(),
        Some(harness.db_path.as_path())
    );

    let store = CatalogStore::from_config(&config).unwrap();
    assert!(store.is_seeded().unwrap());
}

#[test]
fn test_admin_from_config_file() {
    let harness = TestHarness::new();
    let secret_path = harness.temp_path().join("admin_password");
    std::fs::write(&secret_path, "s3cret\n").unwrap();

    let json = format!(
        r#"{{
            "version": "1.0",
            "admin": {{
                "username": "principal",
                "role": "super_admin",
                "password": {{ "file": "{}" }}
            }}
        }}"#,
        secret_path.display()
    );
    let path = harness.write_config_str("campus.json", &json);

    let config = load_config(&path).unwrap();
    let admin = config.admin.expect("admin section");
    let auth = StaticAuthenticator::from_config(&admin).unwrap();

    let session = auth
        .authenticate("principal", &SecretString::from("s3cret".to_string()))
        .unwrap();
    assert_eq!(session.role, Role::SuperAdmin);
    assert!(auth
        .authenticate("principal", &SecretString::from("admin123".to_string()))
        .is_err());
}
