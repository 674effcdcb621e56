use anyhow::Result;
use plating_browser::{BrowserFinder, BrowserLauncher};
use plating_core::Config;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Profile {0} is not whitelisted")]
    Unwhitelisted(String),
}

/// Outcome of dispatching a URL
#[derive(Debug)]
pub struct Dispatch {
    pub profile: String,
    pub executable: PathBuf,
    pub args: Vec<String>,
    /// Pid of the spawned browser, `None` for a dry run
    pub pid: Option<u32>,
}

impl Dispatch {
    /// Render the browser invocation as a single line
    pub fn command_line(&self) -> String {
        std::iter::once(self.executable.display().to_string())
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Resolve the profile for `url` and open it in the browser
///
/// The whitelist is checked before anything is spawned. With `dry_run` the
/// configured executable is reported without being looked up or started.
pub fn dispatch(config: &Config, url: &str, dry_run: bool) -> Result<Dispatch> {
    let profile = config.resolve_url_profile(url)?;

    if !config.profile_is_whitelisted(profile) {
        return Err(DispatchError::Unwhitelisted(profile.to_string()).into());
    }

    let args = BrowserLauncher::build_args(profile, url);

    if dry_run {
        return Ok(Dispatch {
            profile: profile.to_string(),
            executable: PathBuf::from(&config.browser.filename),
            args,
            pid: None,
        });
    }

    let executable = BrowserFinder::new(config.browser.filename.as_str()).find()?;
    let launcher = BrowserLauncher::new(executable);
    let pid = launcher.launch(profile, url)?;

    tracing::debug!("Opened {} in profile {} (pid {})", url, profile, pid);

    Ok(Dispatch {
        profile: profile.to_string(),
        executable: launcher.executable().to_path_buf(),
        args,
        pid: Some(pid),
    })
}
