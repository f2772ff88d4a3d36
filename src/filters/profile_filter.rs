//! # Profile filter.
//!
//! Matches against the example's declared profile memberships, with the same
//! any-of-the-values semantics as the tag filter.

use crate::examples::Example;
use crate::filters::filter::{Filter, FilterMode};

/// Filter matching example profile memberships.
pub struct ProfileFilter {
    mode: FilterMode,
    values: Vec<String>,
}

impl ProfileFilter {
    /// Creates a filter over the given profile names.
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

impl Filter for ProfileFilter {
    fn mode(&self) -> FilterMode {
        self.mode
    }

    fn matches(&self, example: &Example) -> bool {
        self.values
            .iter()
            .any(|v| example.profiles().iter().any(|profile| profile == v))
    }

    fn name(&self) -> &'static str {
        "profile"
    }
}
