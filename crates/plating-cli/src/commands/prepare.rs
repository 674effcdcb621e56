use anyhow::{Context, Result};
use plating_core::{Config, ConfigLocator, ConfigReader, Error};
use std::path::PathBuf;

/// Configuration state for one invocation
#[derive(Debug)]
pub struct Prepared {
    pub config_path: PathBuf,
    pub config: Config,
    /// False when the file was missing and defaults are in use
    pub loaded: bool,
}

/// Locate and load the configuration file
///
/// A missing file is not an error: a warning is logged and the default
/// configuration is used. Anything else (unsupported platform, unreadable
/// or malformed file) is returned to the caller.
pub fn prepare(config_override: Option<PathBuf>) -> Result<Prepared> {
    let config_path = match config_override {
        Some(path) => path,
        None => ConfigLocator::detect().config_path()?,
    };

    match ConfigReader::from_file(&config_path) {
        Ok(config) => Ok(Prepared {
            config_path,
            config,
            loaded: true,
        }),
        Err(Error::NotFound(path)) => {
            tracing::warn!(
                "Configuration file {} not found, continuing with default configuration",
                path.display()
            );
            Ok(Prepared {
                config_path,
                config: Config::default(),
                loaded: false,
            })
        }
        Err(e) => Err(e).with_context(|| {
            format!("Failed to load configuration from {}", config_path.display())
        }),
    }
}
