use super::types::Config;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

pub struct ConfigReader;

impl ConfigReader {
    /// Read and parse a configuration file from the given path
    ///
    /// A missing file is reported as [`Error::NotFound`] so callers can fall
    /// back to defaults without swallowing other failures.
    pub fn from_file(path: &Path) -> Result<Config> {
        tracing::debug!("Reading configuration file from: {}", path.display());

        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)?;

        Self::validate(&config)?;

        tracing::debug!(
            "Parsed configuration with {} profiles and {} URL rules",
            config.browser.profiles.len(),
            config.urls.len()
        );

        Ok(config)
    }

    /// Parse a configuration from a JSON string
    pub fn from_str(content: &str) -> Result<Config> {
        let config: Config = serde_json::from_str(content)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Check invariants serde cannot express
    pub fn validate(config: &Config) -> Result<()> {
        if config.browser.profiles.is_empty() {
            return Err(Error::InvalidStructure(
                "browser.profiles must whitelist at least one profile".to_string(),
            ));
        }

        for (idx, rule) in config.urls.iter().enumerate() {
            if rule.profile.is_empty() {
                tracing::warn!("URL rule {} ({}) has no profile", idx, rule.pattern);
            }
        }

        Ok(())
    }
}
