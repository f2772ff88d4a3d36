//! # One runnable unit of specification.
//!
//! [`Example`] bundles a description, a source location, selection metadata
//! (tags, profiles) and a closure-backed body. The body is a
//! `Fn(ExampleCtx) -> Future`, producing a fresh future per execution so the
//! example itself stays immutable and cheap to share.
//!
//! An optional cleanup block runs after the body regardless of its result;
//! an exception raised there is recorded **in addition** to the body's.
//!
//! ## Example
//! ```rust
//! use ruspec::{Example, ExampleCtx};
//!
//! let ex = Example::new(
//!     "add returns the sum",
//!     "math_spec.rs:12",
//!     |ctx: ExampleCtx| async move { ctx.expect(1 + 1 == 2, "1 + 1 == 2").await },
//! )
//! .with_tags(["fast"]);
//!
//! assert_eq!(ex.description(), "add returns the sum");
//! assert_eq!(ex.tags(), ["fast".to_string()]);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::ExampleError;
use crate::examples::context::ExampleCtx;

/// Future produced by one execution of an example body or cleanup block.
pub type BoxBodyFuture = Pin<Box<dyn Future<Output = Result<(), ExampleError>> + Send>>;

/// Shared closure that creates a fresh body future per execution.
pub type BodyFn = Arc<dyn Fn(ExampleCtx) -> BoxBodyFuture + Send + Sync>;

fn body_fn<F, Fut>(f: F) -> BodyFn
where
    F: Fn(ExampleCtx) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ExampleError>> + Send + 'static,
{
    Arc::new(move |ctx| Box::pin(f(ctx)))
}

/// One discovered example: identity, metadata and runnable body.
///
/// Immutable once constructed; the `with_*` builders consume and return the
/// value, so metadata is settled before the example reaches the runner.
#[derive(Clone)]
pub struct Example {
    description: Arc<str>,
    location: Cow<'static, str>,
    tags: Vec<String>,
    profiles: Vec<String>,
    body: BodyFn,
    cleanup: Option<BodyFn>,
}

impl Example {
    /// Creates an example from a description, source location and body.
    pub fn new<F, Fut>(
        description: impl Into<Arc<str>>,
        location: impl Into<Cow<'static, str>>,
        body: F,
    ) -> Self
    where
        F: Fn(ExampleCtx) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), ExampleError>> + Send + 'static,
    {
        Self {
            description: description.into(),
            location: location.into(),
            tags: Vec::new(),
            profiles: Vec::new(),
            body: body_fn(body),
            cleanup: None,
        }
    }

    /// Returns the example with the given tags attached.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the example with the given profile memberships attached.
    pub fn with_profiles<I, S>(mut self, profiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profiles = profiles.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the example with a cleanup block.
    ///
    /// The cleanup runs after the body, even when the body raised; its own
    /// exception is recorded alongside the body's, not instead of it.
    pub fn with_cleanup<F, Fut>(mut self, cleanup: F) -> Self
    where
        F: Fn(ExampleCtx) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), ExampleError>> + Send + 'static,
    {
        self.cleanup = Some(body_fn(cleanup));
        self
    }

    /// Description string identifying the example.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Description as a shared handle (cheap to attach to events).
    pub(crate) fn description_arc(&self) -> Arc<str> {
        Arc::clone(&self.description)
    }

    /// Source location the example was declared at.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Tags assigned to the example.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Profiles the example declares membership of.
    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }

    /// Creates a fresh body future for one execution.
    pub(crate) fn spawn(&self, ctx: ExampleCtx) -> BoxBodyFuture {
        (self.body)(ctx)
    }

    /// Creates a fresh cleanup future, if a cleanup block is attached.
    pub(crate) fn spawn_cleanup(&self, ctx: ExampleCtx) -> Option<BoxBodyFuture> {
        self.cleanup.as_ref().map(|cleanup| cleanup(ctx))
    }
}

impl fmt::Debug for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Example")
            .field("description", &self.description)
            .field("location", &self.location)
            .field("tags", &self.tags)
            .field("profiles", &self.profiles)
            .field("cleanup", &self.cleanup.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_accessors() {
        let ex = Example::new("desc", "spec.rs:1", |_ctx| async { Ok(()) })
            .with_tags(["slow", "net"])
            .with_profiles(["core"]);
        assert_eq!(ex.description(), "desc");
        assert_eq!(ex.location(), "spec.rs:1");
        assert_eq!(ex.tags(), ["slow".to_string(), "net".to_string()]);
        assert_eq!(ex.profiles(), ["core".to_string()]);
    }

    #[test]
    fn test_cleanup_is_optional() {
        let plain = Example::new("a", "spec.rs:1", |_ctx| async { Ok(()) });
        let with_cleanup = Example::new("b", "spec.rs:2", |_ctx| async { Ok(()) })
            .with_cleanup(|_ctx| async { Ok(()) });
        assert!(format!("{plain:?}").contains("cleanup: false"));
        assert!(format!("{with_cleanup:?}").contains("cleanup: true"));
    }
}
