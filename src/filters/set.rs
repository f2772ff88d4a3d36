//! # FilterSet: AND-composition of registered filters.
//!
//! [`FilterSet`] holds every registered filter and decides admission for one
//! candidate example:
//!
//! - an example must pass **every** registered filter (logical AND across
//!   filters, regardless of kind);
//! - each filter applies its own include/exclude semantics, with OR over its
//!   configured values;
//! - no filters registered ⇒ everything is admitted.
//!
//! Filters are pure predicates, so registration order never changes the
//! combined decision. In particular, an include list and an exclude list of
//! the same kind that both match an example compose to a rejection — the
//! exclude side fails the AND.

use crate::examples::Example;
use crate::filters::filter::Filter;

/// Ordered collection of admit/reject predicates.
#[derive(Default)]
pub struct FilterSet {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterSet {
    /// Creates an empty set (admits everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one filter.
    pub fn add(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    /// True when the example passes every registered filter.
    pub fn admits(&self, example: &Example) -> bool {
        self.filters.iter().all(|f| f.admits(example))
    }

    /// Number of registered filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// True if no filters are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
