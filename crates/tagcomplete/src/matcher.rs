//! Suggestion matching against a suggestion authority.
//!
//! A candidate qualifies for a query when its lowercased form starts with the
//! lowercased query. There is no substring or fuzzy matching, and results
//! keep the authority's order.
//!
//! Matching is a linear scan per keystroke. Authorities are UI-sized lists,
//! so no index is built.

use tagcomplete_core::logging::targets;

/// Filters a suggestion authority against partial input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuggestionMatcher;

impl SuggestionMatcher {
    /// Create a matcher.
    pub fn new() -> Self {
        Self
    }

    /// Returns true if `candidate` starts with `query`, ignoring case.
    pub fn matches(&self, candidate: &str, query: &str) -> bool {
        candidate.to_lowercase().starts_with(&query.to_lowercase())
    }

    /// Find the candidates in `authority` that match `query`.
    ///
    /// Authority order is preserved. An empty query matches every
    /// candidate; the controller never asks for one.
    ///
    /// # Example
    ///
    /// ```
    /// use tagcomplete::matcher::SuggestionMatcher;
    ///
    /// let authority = ["Apple", "apply", "Banana", "app"].map(String::from);
    /// let found = SuggestionMatcher::new().find("ap", &authority);
    /// assert_eq!(found, ["Apple", "apply", "app"]);
    /// ```
    pub fn find(&self, query: &str, authority: &[String]) -> Vec<String> {
        let query_lower = query.to_lowercase();
        let found: Vec<String> = authority
            .iter()
            .filter(|candidate| candidate.to_lowercase().starts_with(&query_lower))
            .cloned()
            .collect();

        tracing::trace!(
            target: targets::MATCHER,
            query_len = query.chars().count(),
            authority_len = authority.len(),
            matches = found.len(),
            "matched suggestions"
        );
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authority(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_prefix_match_is_case_insensitive() {
        let items = authority(&["Apple", "apply", "Banana", "app"]);
        let found = SuggestionMatcher::new().find("ap", &items);
        assert_eq!(found, ["Apple", "apply", "app"]);

        let found = SuggestionMatcher::new().find("AP", &items);
        assert_eq!(found, ["Apple", "apply", "app"]);
    }

    #[test]
    fn test_substring_does_not_match() {
        let items = authority(&["pineapple", "grape"]);
        assert!(SuggestionMatcher::new().find("apple", &items).is_empty());
        assert!(SuggestionMatcher::new().find("ape", &items).is_empty());
    }

    #[test]
    fn test_authority_order_is_preserved() {
        let items = authority(&["beta", "alpha", "bravo", "bar"]);
        let found = SuggestionMatcher::new().find("b", &items);
        assert_eq!(found, ["beta", "bravo", "bar"]);
    }

    #[test]
    fn test_empty_authority() {
        assert!(SuggestionMatcher::new().find("a", &[]).is_empty());
    }

    #[test]
    fn test_duplicates_in_authority_are_kept() {
        let items = authority(&["rust", "Rust", "rust"]);
        assert_eq!(SuggestionMatcher::new().find("ru", &items).len(), 3);
    }

    #[test]
    fn test_query_longer_than_candidate() {
        let items = authority(&["ap"]);
        assert!(SuggestionMatcher::new().find("apple", &items).is_empty());
    }

    #[test]
    fn test_unicode_lowercasing() {
        let items = authority(&["Ärger", "arg", "Éclair"]);
        assert_eq!(SuggestionMatcher::new().find("är", &items), ["Ärger"]);
        assert_eq!(SuggestionMatcher::new().find("éC", &items), ["Éclair"]);
    }

    #[test]
    fn test_matches_predicate() {
        let matcher = SuggestionMatcher::new();
        assert!(matcher.matches("Apple", "aP"));
        assert!(matcher.matches("Apple", ""));
        assert!(!matcher.matches("Apple", "pp"));
    }
}
