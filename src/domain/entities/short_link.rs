//! Short link key handling.
//!
//! A link's `short_link` column stores the full public key, e.g.
//! `jet.fuel/5ZvQv`. The redirect route only receives the trailing code, so the
//! key has to be rebuilt from the configured prefix before hitting the store.

use std::fmt;

/// The `<prefix>/<code>` key used to look up a link.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortLink(String);

impl ShortLink {
    /// Builds the key for `code` under `prefix`.
    ///
    /// Returns `None` when the code is empty or contains a `/`, since such a
    /// code can never match a stored key produced by this service.
    pub fn new(prefix: &str, code: &str) -> Option<Self> {
        if code.is_empty() || code.contains('/') {
            return None;
        }

        Some(Self(format!("{}/{}", prefix.trim_end_matches('/'), code)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_prefixed_key() {
        let key = ShortLink::new("jet.fuel", "5ZvQv").unwrap();

        assert_eq!(key.as_str(), "jet.fuel/5ZvQv");
        assert_eq!(key.to_string(), "jet.fuel/5ZvQv");
    }

    #[test]
    fn test_trailing_slash_in_prefix_is_ignored() {
        let key = ShortLink::new("jet.fuel/", "abc").unwrap();
        assert_eq!(key.as_str(), "jet.fuel/abc");
    }

    #[test]
    fn test_rejects_empty_or_nested_code() {
        assert!(ShortLink::new("jet.fuel", "").is_none());
        assert!(ShortLink::new("jet.fuel", "a/b").is_none());
    }
}
