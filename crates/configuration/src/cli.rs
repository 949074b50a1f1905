use std::path::PathBuf;

/// Command-line options shared by every binary that loads a `Config`.
#[derive(Debug, Clone, clap::Args)]
pub struct ConfigArgs {
    /// Path to the TOML configuration file. Missing files fall back to defaults.
    #[arg(long, default_value = crate::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

impl ConfigArgs {
    pub fn load(&self) -> Result<crate::Config, crate::error::ConfigError> {
        crate::load_config_from(&self.config)
    }
}
