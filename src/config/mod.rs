//! Configuration module.
//!
//! Settings come from an optional TOML file plus environment overrides;
//! everything has a default so a missing file is never an error.

pub mod loader;

pub use loader::{
    apply_env_overrides, default_config_path, default_log_path, load_config_file,
    load_config_with_precedence, merge_config, resolve, ConfigError, ConfigFile, ResolvedConfig,
    CONFIG_ENV_VAR, LOG_ENV_VAR,
};
