use serde::{Deserialize, Serialize};

/// Profile whitelisted when the configuration names none
pub const DEFAULT_PROFILE: &str = "Default";

fn default_profiles() -> Vec<String> {
    vec![DEFAULT_PROFILE.to_string()]
}

/// Top-level configuration document
///
/// Every field is optional in the file; absent fields take the defaults
/// declared here. The order of `urls` is significant: the first rule whose
/// pattern matches a URL decides its profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub browser: BrowserConfig,
    #[serde(default)]
    pub urls: Vec<UrlRule>,
}

/// Browser section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Browser executable, either a path or a name looked up on `PATH`
    #[serde(default)]
    pub filename: String,
    /// Carried through from the file; resolution does not consult it
    #[serde(rename = "profileDirectory", default)]
    pub profile_directory: String,
    /// Whitelisted profiles. The first entry is the fallback profile.
    #[serde(default = "default_profiles")]
    pub profiles: Vec<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            filename: String::new(),
            profile_directory: String::new(),
            profiles: default_profiles(),
        }
    }
}

/// A single pattern => profile mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRule {
    #[serde(default)]
    pub pattern: String,
    #[serde(default)]
    pub profile: String,
}

impl UrlRule {
    pub fn new(pattern: impl Into<String>, profile: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            profile: profile.into(),
        }
    }
}

impl Config {
    /// Is the named profile whitelisted?
    ///
    /// Exact, case-sensitive comparison against `browser.profiles`.
    pub fn profile_is_whitelisted(&self, profile: &str) -> bool {
        self.browser.profiles.iter().any(|p| p == profile)
    }
}
