//! # Core filter contract.
//!
//! A [`Filter`] is a pure predicate over an example's identity and metadata.
//! Each filter operates in one of two modes:
//! - [`FilterMode::Include`]: the example passes iff the filter matches it;
//! - [`FilterMode::Exclude`]: the example passes iff the filter does not.
//!
//! Within one filter, the configured values form a logical OR (matching any
//! listed value counts as a match). Composition across filters lives in
//! [`FilterSet`](crate::filters::FilterSet).

use crate::examples::Example;

/// Whether matching admits or rejects an example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Admit only matching examples.
    Include,
    /// Reject matching examples.
    Exclude,
}

/// Admit/reject predicate over example metadata.
///
/// Filters are pure: no side effects, and registration order never changes
/// the combined outcome.
pub trait Filter: Send + Sync + 'static {
    /// Include/exclude semantics of this filter.
    fn mode(&self) -> FilterMode;

    /// True when the example matches at least one configured value.
    fn matches(&self, example: &Example) -> bool;

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Whether the example passes this filter, given its mode.
    fn admits(&self, example: &Example) -> bool {
        match self.mode() {
            FilterMode::Include => self.matches(example),
            FilterMode::Exclude => !self.matches(example),
        }
    }
}
