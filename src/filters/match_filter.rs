//! # Exact-description filter.
//!
//! Matches when the example's description equals one of the configured
//! values, character for character.

use crate::examples::Example;
use crate::filters::filter::{Filter, FilterMode};

/// Filter matching example descriptions exactly.
pub struct MatchFilter {
    mode: FilterMode,
    values: Vec<String>,
}

impl MatchFilter {
    /// Creates a filter over the given description strings.
    pub fn new<I, S>(mode: FilterMode, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            mode,
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

impl Filter for MatchFilter {
    fn mode(&self) -> FilterMode {
        self.mode
    }

    fn matches(&self, example: &Example) -> bool {
        self.values.iter().any(|v| v == example.description())
    }

    fn name(&self) -> &'static str {
        "match"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example(description: &str) -> Example {
        Example::new(description.to_string(), "spec.rs:1", |_ctx| async { Ok(()) })
    }

    #[test]
    fn test_include_admits_only_listed_descriptions() {
        let filter = MatchFilter::new(FilterMode::Include, ["a", "b"]);
        assert!(filter.admits(&example("a")));
        assert!(filter.admits(&example("b")));
        assert!(!filter.admits(&example("c")));
    }

    #[test]
    fn test_exclude_rejects_listed_descriptions() {
        let filter = MatchFilter::new(FilterMode::Exclude, ["a"]);
        assert!(!filter.admits(&example("a")));
        assert!(filter.admits(&example("b")));
    }
}
