//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, IndicatorSettings, LoggingConfig};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// Environment variables prefixed `STOCKTA__` override file values
/// (e.g. `STOCKTA__SIGNALS__OVERBOUGHT=80`).
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("STOCKTA")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
