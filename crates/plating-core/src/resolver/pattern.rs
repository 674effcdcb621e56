use regex::Regex;

/// A compiled URL rule pattern
///
/// Matching is an unanchored search: the pattern may match anywhere in the
/// URL. Anchor with `^`/`$` in the pattern itself for full matches.
#[derive(Debug, Clone)]
pub struct UrlPattern(Regex);

impl UrlPattern {
    /// Compile a pattern string
    pub fn parse(pattern: &str) -> crate::Result<Self> {
        Regex::new(pattern).map(UrlPattern).map_err(|e| {
            crate::Error::InvalidPattern(format!("Invalid regex '{}': {}", pattern, e))
        })
    }

    /// Check if the pattern occurs anywhere in the URL
    pub fn matches(&self, url: &str) -> bool {
        self.0.is_match(url)
    }
}
