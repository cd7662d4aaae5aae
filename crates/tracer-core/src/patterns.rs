//! Named regular-expression filters.
//!
//! Two independent sets are built from configuration: exclusion patterns,
//! tested against the first line of a detected block, and highlight patterns,
//! tested against every line shown in the detail pane.

use regex::Regex;

use crate::error::{Error, Result};

/// A compiled set of named patterns.
///
/// Patterns are unanchored: a pattern matches when it matches anywhere in
/// the text.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<(String, Regex)>,
}

impl PatternSet {
    /// An empty set, which never matches.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile `name -> source` pairs.
    ///
    /// The first malformed pattern aborts compilation with an error naming
    /// its key.
    pub fn compile<I, K, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut patterns = Vec::new();
        for (name, source) in entries {
            let name = name.as_ref();
            let regex = Regex::new(source.as_ref())
                .map_err(|e| Error::invalid_pattern(name, e.to_string()))?;
            patterns.push((name.to_string(), regex));
        }
        Ok(Self { patterns })
    }

    pub fn matches_any(&self, text: &str) -> bool {
        self.patterns.iter().any(|(_, regex)| regex.is_match(text))
    }

    /// Names of every pattern matching `text`, in compilation order.
    pub fn matching_names(&self, text: &str) -> Vec<&str> {
        self.patterns
            .iter()
            .filter(|(_, regex)| regex.is_match(text))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_never_matches() {
        let set = PatternSet::empty();
        assert!(!set.matches_any("ERROR anything"));
        assert!(set.is_empty());
    }

    #[test]
    fn test_matches_anywhere_in_line() {
        let set = PatternSet::compile([("oracle", r"com\.oracle\.pgbu")]).unwrap();
        assert!(set.matches_any("  at com.oracle.pgbu.Foo.bar(Foo.java:12)\n"));
        assert!(!set.matches_any("  at com.example.Foo.bar(Foo.java:12)\n"));
    }

    #[test]
    fn test_any_of_several_patterns() {
        let set = PatternSet::compile([("health", "healthcheck"), ("abc", "^[abc]+$")]).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.matches_any("ERROR healthcheck failed"));
        assert!(set.matches_any("cab"));
        assert!(!set.matches_any("ERROR disk full"));
    }

    #[test]
    fn test_malformed_pattern_reports_key() {
        let err = PatternSet::compile([("good", "ok"), ("broken", "(unclosed")]).unwrap_err();
        match err {
            Error::InvalidPattern { key, .. } => assert_eq!(key, "broken"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_matching_names_lists_every_hit() {
        let set = PatternSet::compile([("a", "timeout"), ("b", "ERROR"), ("c", "disk")]).unwrap();
        assert_eq!(
            set.matching_names("ERROR timeout talking to db"),
            vec!["a", "b"]
        );
    }
}
