use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

use googletest::assert_that;
use googletest::prelude::{anything, eq, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.base_url.as_str(), eq(DEFAULT_BASE_URL));
    assert_that!(config.api.timeout_secs, eq(DEFAULT_TIMEOUT_SECS));
    assert_that!(config.logging.file.is_none(), eq(true));
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [api]
            base_url = "http://gym.example.net:9000"
            timeout_secs = 30

            [logging]
            level = "debug"
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("http://gym.example.net:9000"));
    assert_that!(config.api.timeout_secs, eq(30));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Debug));
}

#[test]
#[serial]
fn given_env_override_when_load_then_env_wins_over_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "[api]\nbase_url = \"http://from-toml:8000\"\n",
    )
    .unwrap();
    let _env = EnvGuard::set("GYM_API_BASE_URL", "http://from-env:8000");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url.as_str(), eq("http://from-env:8000"));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_dir_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("deep").join("gym-config");
    let _guard = EnvGuard::set("GYM_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(nested.exists(), eq(true));
}

// =========================================================================
// Validation Tests
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "api = not valid toml {").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result.is_err(), eq(true));
}

#[test]
#[serial]
fn given_absolute_log_file_when_validate_then_err() {
    // Given
    let _temp = setup_config_dir();
    let mut config = Config::load().unwrap();
    config.logging.file = Some("/var/log/gym.log".to_string());

    // When
    let result = config.validate();

    // Then
    assert_that!(result.is_err(), eq(true));
}

#[test]
#[serial]
fn given_relative_log_file_when_log_file_path_then_under_config_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let mut config = Config::load().unwrap();
    config.logging.file = Some("console.log".to_string());

    // When
    let path = config.log_file_path().unwrap();

    // Then
    assert_that!(path, eq(&Some(temp.path().join("console.log"))));
}
