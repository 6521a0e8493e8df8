//! Cache key builder for consistent key naming.

/// Builds namespaced cache keys of the form `{prefix}:{kind}:{id}`.
#[derive(Debug, Clone)]
pub struct CacheKeys {
    prefix: String,
}

impl CacheKeys {
    /// Create a new key builder with the given prefix.
    ///
    /// An empty prefix produces bare `{kind}:{id}` keys.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Key of an arbitrary kind.
    #[must_use]
    pub fn key(&self, kind: &str, id: &str) -> String {
        if self.prefix.is_empty() {
            format!("{}:{}", kind, id)
        } else {
            format!("{}:{}:{}", self.prefix, kind, id)
        }
    }

    /// Record key.
    #[must_use]
    pub fn record(&self, id: &str) -> String {
        self.key("record", id)
    }
}

impl Default for CacheKeys {
    fn default() -> Self {
        Self::new("cachet")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_keys() {
        let keys = CacheKeys::new("app");

        assert_eq!(keys.record("42"), "app:record:42");
        assert_eq!(keys.key("session", "abc"), "app:session:abc");
        assert_eq!(CacheKeys::default().record("1"), "cachet:record:1");
    }

    #[test]
    fn test_empty_prefix() {
        let keys = CacheKeys::new("");
        assert_eq!(keys.key("session", "42"), "session:42");
    }
}
