//! # Tag filter.
//!
//! Matches against the example's assigned tags rather than its description:
//! any configured value present among the tags counts as a match.

use crate::examples::Example;
use crate::filters::filter::{Filter, FilterMode};

/// Filter matching example tags.
pub struct TagFilter {
    mode: FilterMode,
    values: Vec<String>,
}

impl TagFilter {
    /// Creates a filter over the given tag values.
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

impl Filter for TagFilter {
    fn mode(&self) -> FilterMode {
        self.mode
    }

    fn matches(&self, example: &Example) -> bool {
        self.values
            .iter()
            .any(|v| example.tags().iter().any(|tag| tag == v))
    }

    fn name(&self) -> &'static str {
        "tag"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(tags: &[&str]) -> Example {
        Example::new("x", "spec.rs:1", |_ctx| async { Ok(()) }).with_tags(tags.iter().copied())
    }

    #[test]
    fn test_include_admits_examples_carrying_a_listed_tag() {
        let filter = TagFilter::new(FilterMode::Include, ["fast"]);
        assert!(filter.admits(&tagged(&["fast", "core"])));
        assert!(!filter.admits(&tagged(&["slow"])));
        assert!(!filter.admits(&tagged(&[])));
    }

    #[test]
    fn test_exclude_rejects_examples_carrying_a_listed_tag() {
        let filter = TagFilter::new(FilterMode::Exclude, ["slow"]);
        assert!(!filter.admits(&tagged(&["slow"])));
        assert!(filter.admits(&tagged(&["fast"])));
    }
}
