use std::path::Path;

// Declare the modules that make up this crate.
#[cfg(feature = "clap")]
pub mod cli;
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
#[cfg(feature = "clap")]
pub use cli::ConfigArgs;
pub use error::ConfigError;
pub use settings::{ApiSettings, Config, WindowSettings};

/// Configuration file used when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Prefix for environment overrides, e.g. `POOLRANK_API__PAGE_SIZE=500`.
pub const ENV_PREFIX: &str = "POOLRANK";

/// Loads the configuration, layering (lowest to highest priority) the built-in
/// defaults, the TOML file at `path` if it exists, and `POOLRANK_*` environment
/// variables. The result is validated before it is returned.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let defaults = Config::default();
    let builder = config::Config::builder()
        .set_default("api.endpoint", defaults.api.endpoint)?
        .set_default("api.page_size", i64::from(defaults.api.page_size))?
        .set_default(
            "api.request_timeout_secs",
            defaults.api.request_timeout_secs as i64,
        )?
        .set_default("window.start_date", defaults.window.start_date)?
        .set_default("window.end_date", defaults.window.end_date)?
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    tracing::debug!(path = %path.display(), "Configuration loaded.");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_config_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("poolrank-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = load_config_from(&temp_config_path("missing")).unwrap();
        let defaults = Config::default();
        assert_eq!(config.api.endpoint, defaults.api.endpoint);
        assert_eq!(config.window.start_date, defaults.window.start_date);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let path = temp_config_path("override");
        fs::write(
            &path,
            "[api]\npage_size = 250\n\n[window]\nstart_date = \"2022-02-01T00:00:00Z\"\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.api.page_size, 250);
        assert_eq!(config.window.start_date, "2022-02-01T00:00:00Z");
        // Untouched keys keep their defaults.
        assert_eq!(config.window.end_date, Config::default().window.end_date);
    }

    #[test]
    fn test_invalid_file_values_fail_validation() {
        let path = temp_config_path("invalid");
        fs::write(&path, "[api]\npage_size = 0\n").unwrap();

        let result = load_config_from(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}
