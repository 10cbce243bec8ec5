//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

#[test]
fn default_config_path_contains_pixquery_config_toml() {
    if let Some(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(
            path_str.contains("pixquery") && path_str.ends_with("config.toml"),
            "Path should contain 'pixquery' and end with 'config.toml', got: {}",
            path_str
        );
    }
}

#[test]
fn default_log_path_ends_with_pixquery_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("pixquery.log"),
        "Default log path should end with 'pixquery.log', got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = env::temp_dir().join("pixquery_test_config.toml");

    let toml_content = r#"
small_screen_max_width = 600
zoom_scale = 2.0
initial_viewport_width = 1920
initial_viewport_height = 1080
"#;

    fs::write(&config_path, toml_content).expect("Failed to write test config");

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.small_screen_max_width, Some(600));
    assert_eq!(config.zoom_scale, Some(2.0));
    assert_eq!(config.initial_viewport_width, Some(1920));
    assert_eq!(config.initial_viewport_height, Some(1080));
    assert_eq!(config.log_file_path, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = env::temp_dir().join("pixquery_test_invalid.toml");
    fs::write(&config_path, "this is not valid TOML ][}{").expect("Failed to write config");

    let result = load_config_file(&config_path);

    match result {
        Err(ConfigError::ParseError { path, reason: _ }) => {
            assert_eq!(path, config_path);
        }
        _ => panic!("Expected ParseError, got {:?}", result),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"dark\"");
    assert!(result.is_err(), "Unknown keys should be rejected");
}

// ===== merge_config Tests =====

#[test]
fn merge_config_uses_defaults_when_none() {
    let resolved = merge_config(None).expect("defaults are valid");

    assert_eq!(resolved, ResolvedConfig::default());
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();

    assert_eq!(config.small_screen_max_width, 520);
    assert_eq!(config.zoom_scale, 1.4);
    assert_eq!(config.initial_viewport, ViewportSize::new(1280, 800));
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        small_screen_max_width: Some(0),
        zoom_scale: Some(1.8),
        initial_viewport_width: Some(700),
        initial_viewport_height: None,
        log_file_path: Some(PathBuf::from("/custom/path/app.log")),
    };

    let resolved = merge_config(Some(config_file)).expect("valid config");

    assert_eq!(resolved.small_screen_max_width, 0);
    assert_eq!(resolved.zoom_scale, 1.8);
    assert_eq!(resolved.initial_viewport, ViewportSize::new(700, 800));
    assert_eq!(resolved.log_file_path, PathBuf::from("/custom/path/app.log"));
}

#[test]
fn merge_config_rejects_non_positive_zoom() {
    let config_file = ConfigFile {
        zoom_scale: Some(0.0),
        ..ConfigFile::default()
    };

    let result = merge_config(Some(config_file));

    assert!(matches!(
        result,
        Err(ConfigError::InvalidValue {
            field: "zoom_scale",
            ..
        })
    ));
}

#[test]
fn merge_config_rejects_zero_viewport_width() {
    let config_file = ConfigFile {
        initial_viewport_width: Some(0),
        ..ConfigFile::default()
    };

    assert!(merge_config(Some(config_file)).is_err());
}

// ===== Environment Tests =====

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(pixquery_log)]
fn apply_env_overrides_respects_pixquery_log() {
    let _guard = EnvGuard::new(LOG_ENV_VAR);
    env::set_var(LOG_ENV_VAR, "/tmp/override.log");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.log_file_path, PathBuf::from("/tmp/override.log"));
}

#[test]
#[serial(pixquery_log)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new(LOG_ENV_VAR);

    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone());

    assert_eq!(result, base);
}

#[test]
#[serial(pixquery_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let temp_dir = env::temp_dir();
    let explicit_path = temp_dir.join("pixquery_explicit.toml");
    let env_path = temp_dir.join("pixquery_env.toml");

    fs::write(&explicit_path, "zoom_scale = 1.1").expect("Failed to write explicit config");
    fs::write(&env_path, "zoom_scale = 3.0").expect("Failed to write env config");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .expect("valid config")
        .expect("file exists");

    assert_eq!(
        config.zoom_scale,
        Some(1.1),
        "Should use explicit path, not PIXQUERY_CONFIG env var"
    );

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(pixquery_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let env_path = env::temp_dir().join("pixquery_env_only.toml");

    fs::write(&env_path, "small_screen_max_width = 480").expect("Failed to write env config");
    env::set_var(CONFIG_ENV_VAR, &env_path);

    let config = load_config_with_precedence(None)
        .expect("valid config")
        .expect("file exists");

    assert_eq!(config.small_screen_max_width, Some(480));

    fs::remove_file(env_path).ok();
}

#[test]
#[serial(pixquery_config)]
fn resolve_runs_full_chain() {
    let _guard = EnvGuard::new(CONFIG_ENV_VAR);
    let path = env::temp_dir().join("pixquery_resolve.toml");
    fs::write(&path, "initial_viewport_width = 2000").expect("Failed to write config");

    let resolved = resolve(Some(path.clone())).expect("valid config");

    assert_eq!(resolved.initial_viewport.width, 2000);
    assert_eq!(resolved.zoom_scale, 1.4);

    fs::remove_file(path).ok();
}
