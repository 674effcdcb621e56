use crate::{Error, Result};
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Locates the configuration file for the host platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLocator {
    /// `~/.chromiumplating/config.json`
    Unix,
    /// `%APPDATA%\ChromiumPlating\config.json`
    Windows,
    Unsupported,
}

impl ConfigLocator {
    /// Select the locator for the platform this binary was built for
    pub fn detect() -> Self {
        #[cfg(unix)]
        return ConfigLocator::Unix;

        #[cfg(windows)]
        return ConfigLocator::Windows;

        #[cfg(not(any(unix, windows)))]
        return ConfigLocator::Unsupported;
    }

    /// Get the configuration filename
    pub fn config_path(&self) -> Result<PathBuf> {
        let base = match self {
            // dirs::config_dir() is the roaming AppData folder on Windows
            ConfigLocator::Unix => dirs::home_dir(),
            ConfigLocator::Windows => dirs::config_dir(),
            ConfigLocator::Unsupported => None,
        }
        .ok_or_else(|| {
            Error::UnsupportedPlatform(
                "Unable to locate configuration file on this platform".to_string(),
            )
        })?;

        self.config_path_in(&base)
    }

    /// Join this platform's configuration path onto an explicit base directory
    pub fn config_path_in(&self, base: &Path) -> Result<PathBuf> {
        let dir = match self {
            ConfigLocator::Unix => ".chromiumplating",
            ConfigLocator::Windows => "ChromiumPlating",
            ConfigLocator::Unsupported => {
                return Err(Error::UnsupportedPlatform(
                    "Unable to locate configuration file on this platform".to_string(),
                ));
            }
        };

        Ok(base.join(dir).join(CONFIG_FILENAME))
    }
}
