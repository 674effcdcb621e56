use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Resolves the configured browser executable
pub struct BrowserFinder {
    filename: String,
}

impl BrowserFinder {
    /// Create a finder for the `browser.filename` configuration value
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }

    /// Find the browser binary
    ///
    /// Values containing a path separator are used as-is and must point at an
    /// executable file. Bare names are looked up on `PATH`.
    pub fn find(&self) -> Result<PathBuf> {
        if self.filename.trim().is_empty() {
            return Err(Error::Browser(
                "No browser executable configured. Set browser.filename in the configuration file."
                    .to_string(),
            ));
        }

        let path = Path::new(&self.filename);
        if path.components().count() > 1 || path.is_absolute() {
            return Self::validate_browser_path(path);
        }

        which::which(&self.filename).map_err(|e| {
            Error::Browser(format!(
                "Browser not found: {} ({})",
                self.filename, e
            ))
        })
    }

    /// Validate that a path exists and is executable
    fn validate_browser_path(path: &Path) -> Result<PathBuf> {
        if !path.is_file() {
            return Err(Error::Browser(format!(
                "Browser not found at: {}",
                path.display()
            )));
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = std::fs::metadata(path).map_err(Error::Io)?;
            if metadata.permissions().mode() & 0o111 == 0 {
                return Err(Error::Browser(format!(
                    "Browser binary not executable: {}",
                    path.display()
                )));
            }
        }

        Ok(path.to_path_buf())
    }
}
