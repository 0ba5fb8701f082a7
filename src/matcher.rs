use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// How the search term is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// The term is a regular expression, so `.` or `(` keep their regex meaning
    #[default]
    Regex,
    /// The term is matched as plain text
    Literal,
}

/// Case-insensitive page text matcher
#[derive(Debug, Clone)]
pub struct TermMatcher {
    term: String,
    regex: Regex,
}

impl TermMatcher {
    pub fn new(term: &str, mode: MatchMode) -> Result<Self> {
        let pattern = match mode {
            MatchMode::Regex => term.to_string(),
            MatchMode::Literal => regex::escape(term),
        };
        let regex = RegexBuilder::new(&pattern).case_insensitive(true).build()?;

        Ok(Self {
            term: term.to_string(),
            regex,
        })
    }

    /// Term as the user typed it
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;

    #[test]
    fn test_case_insensitive() {
        let matcher = TermMatcher::new("invoice", MatchMode::Regex).unwrap();
        assert!(matcher.is_match("Monthly Invoice 2023"));
        assert!(matcher.is_match("INVOICE"));
        assert!(!matcher.is_match("receipt"));
    }

    #[test]
    fn test_regex_mode_keeps_metacharacters() {
        let matcher = TermMatcher::new("a.c", MatchMode::Regex).unwrap();
        assert!(matcher.is_match("xxabcxx"));
        assert!(matcher.is_match("a.c"));
    }

    #[test]
    fn test_literal_mode_escapes_metacharacters() {
        let matcher = TermMatcher::new("a.c", MatchMode::Literal).unwrap();
        assert!(!matcher.is_match("xxabcxx"));
        assert!(matcher.is_match("see A.C below"));

        let parens = TermMatcher::new("f(x)", MatchMode::Literal).unwrap();
        assert!(parens.is_match("where F(X) = 1"));
    }

    #[test]
    fn test_invalid_regex() {
        assert!(matches!(
            TermMatcher::new("(unclosed", MatchMode::Regex),
            Err(SearchError::InvalidPattern(_))
        ));
        assert!(TermMatcher::new("(unclosed", MatchMode::Literal).is_ok());
    }

    #[test]
    fn test_unicode_case_folding() {
        let matcher = TermMatcher::new("café", MatchMode::Literal).unwrap();
        assert!(matcher.is_match("Le CAFÉ du coin"));
    }

    #[test]
    fn test_empty_term_matches_anything() {
        let matcher = TermMatcher::new("", MatchMode::Regex).unwrap();
        assert!(matcher.is_match(""));
        assert!(matcher.is_match("any text"));
        assert_eq!(matcher.term(), "");
    }
}
