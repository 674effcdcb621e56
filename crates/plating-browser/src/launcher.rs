use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Starts the browser with a profile selected
pub struct BrowserLauncher {
    executable: PathBuf,
}

impl BrowserLauncher {
    pub fn new(executable: PathBuf) -> Self {
        Self { executable }
    }

    /// Spawn the browser and return its pid
    ///
    /// The child is detached: nothing waits on it and its exit status is
    /// never collected.
    pub fn launch(&self, profile: &str, url: &str) -> Result<u32> {
        let args = Self::build_args(profile, url);
        tracing::debug!("Launching {} {:?}", self.executable.display(), args);

        let child = Command::new(&self.executable)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                Error::Browser(format!(
                    "Failed to launch {}: {}",
                    self.executable.display(),
                    e
                ))
            })?;

        Ok(child.id())
    }

    /// Build the browser argument vector
    ///
    /// Each value is its own argv entry and no shell is involved, so profile
    /// names and URLs need no quoting.
    pub fn build_args(profile: &str, url: &str) -> Vec<String> {
        vec![format!("--profile-directory={}", profile), url.to_string()]
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }
}
