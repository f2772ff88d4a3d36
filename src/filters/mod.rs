//! # Example selection filters.
//!
//! Filters decide which discovered examples run. Four kinds are provided,
//! each usable in include or exclude mode:
//!
//! | Kind              | Matches against          | Type                |
//! |-------------------|--------------------------|---------------------|
//! | exact description | `Example::description()` | [`MatchFilter`]     |
//! | pattern           | `Example::description()` | [`RegexpFilter`]    |
//! | tag               | `Example::tags()`        | [`TagFilter`]       |
//! | profile           | `Example::profiles()`    | [`ProfileFilter`]   |
//!
//! [`FilterSet`] composes them: AND across filters, OR within one filter's
//! value list, include/exclude per filter.

mod filter;
mod match_filter;
mod profile_filter;
mod regexp_filter;
mod set;
mod tag_filter;

pub use filter::{Filter, FilterMode};
pub use match_filter::MatchFilter;
pub use profile_filter::ProfileFilter;
pub use regexp_filter::RegexpFilter;
pub use set::FilterSet;
pub use tag_filter::TagFilter;
