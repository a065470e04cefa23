//! Name matching
//!
//! Builds the name filter used by directory and file searches.

use glob::{MatchOptions, Pattern};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Filter applied to entry names during a search.
#[derive(Debug, Clone)]
pub enum NameMatcher {
    /// Names containing the search text, i.e. the wildcard `*text*`.
    Contains(Pattern),
    /// Names equal to the search text.
    Exact(String),
}

impl NameMatcher {
    /// Builds a matcher for `search_text`. Wildcard characters in the text are
    /// matched literally.
    pub fn new(search_text: &str, exact: bool) -> Self {
        if exact {
            return NameMatcher::Exact(search_text.to_string());
        }
        let escaped = Pattern::escape(search_text);
        // Escaped text always compiles.
        match Pattern::new(&format!("*{}*", escaped)) {
            Ok(pattern) => NameMatcher::Contains(pattern),
            Err(_) => NameMatcher::Exact(search_text.to_string()),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        match self {
            NameMatcher::Contains(pattern) => pattern.matches_with(name, MATCH_OPTIONS),
            NameMatcher::Exact(text) => name == text,
        }
    }
}
