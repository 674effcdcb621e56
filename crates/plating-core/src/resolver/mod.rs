mod pattern;

pub use pattern::UrlPattern;

use crate::config::Config;
use crate::{Error, Result};

impl Config {
    /// Resolve the profile for the specified URL
    ///
    /// Rules are evaluated in order and the first matching pattern wins.
    /// Patterns are compiled as they are reached, so an invalid pattern is
    /// only an error if no earlier rule matched. When nothing matches the
    /// fallback profile is returned.
    pub fn resolve_url_profile(&self, url: &str) -> Result<&str> {
        for (idx, rule) in self.urls.iter().enumerate() {
            let pattern = UrlPattern::parse(&rule.pattern)?;
            if pattern.matches(url) {
                tracing::debug!(
                    "URL rule {} ({}) matched, using profile {}",
                    idx,
                    rule.pattern,
                    rule.profile
                );
                return Ok(rule.profile.as_str());
            }
        }

        let fallback = self.fallback_profile()?;
        tracing::debug!("No URL rule matched, using fallback profile {}", fallback);
        Ok(fallback)
    }

    /// The first whitelisted profile
    pub fn fallback_profile(&self) -> Result<&str> {
        self.browser
            .profiles
            .first()
            .map(String::as_str)
            .ok_or_else(|| {
                Error::InvalidStructure(
                    "browser.profiles must whitelist at least one profile".to_string(),
                )
            })
    }
}
