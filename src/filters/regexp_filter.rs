//! # Pattern filter.
//!
//! Matches when the example's description matches one of the configured
//! regular expressions. Patterns are compiled once at construction;
//! an invalid pattern surfaces as [`RunnerError::BadPattern`].

use regex::Regex;

use crate::error::RunnerError;
use crate::examples::Example;
use crate::filters::filter::{Filter, FilterMode};

/// Filter matching example descriptions against regular expressions.
pub struct RegexpFilter {
    mode: FilterMode,
    patterns: Vec<Regex>,
}

impl RegexpFilter {
    /// Compiles the given patterns into a filter.
    pub fn new<I, S>(mode: FilterMode, values: I) -> Result<Self, RunnerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        for value in values {
            let value = value.as_ref();
            let regex = Regex::new(value).map_err(|source| RunnerError::BadPattern {
                pattern: value.to_string(),
                source,
            })?;
            patterns.push(regex);
        }
        Ok(Self { mode, patterns })
    }
}

impl Filter for RegexpFilter {
    fn mode(&self) -> FilterMode {
        self.mode
    }

    fn matches(&self, example: &Example) -> bool {
        self.patterns
            .iter()
            .any(|p| p.is_match(example.description()))
    }

    fn name(&self) -> &'static str {
        "regexp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(description: &str) -> Example {
        Example::new(description.to_string(), "spec.rs:1", |_ctx| async { Ok(()) })
    }

    #[test]
    fn test_include_matches_any_pattern() {
        let filter = RegexpFilter::new(FilterMode::Include, ["^Array", "push$"]).unwrap();
        assert!(filter.admits(&example("Array#sort sorts")));
        assert!(filter.admits(&example("Vec supports push")));
        assert!(!filter.admits(&example("Hash#keys lists keys")));
    }

    #[test]
    fn test_exclude_rejects_matching_descriptions() {
        let filter = RegexpFilter::new(FilterMode::Exclude, ["slow"]).unwrap();
        assert!(!filter.admits(&example("a very slow spec")));
        assert!(filter.admits(&example("a fast spec")));
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let Err(err) = RegexpFilter::new(FilterMode::Include, ["("]) else {
            panic!("expected pattern error");
        };
        assert_eq!(err.as_label(), "runner_bad_pattern");
    }
}
