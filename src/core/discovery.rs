//! # Spec file discovery collaborator.
//!
//! Discovery turns a list of path/pattern specifications into an ordered
//! list of spec files. The expansion of one specification is behind the
//! [`SpecSource`] trait (full globbing stays an external concern); the
//! combination logic lives in [`files`]:
//!
//! - a plain specification **appends** its entries to the accumulated list;
//! - a specification with a leading `^` **removes** the entries of its
//!   remainder from what has been accumulated **so far** — processing is
//!   left-to-right and order-sensitive, so an exclusion never affects
//!   matches added after it.
//!
//! [`DirSource`] is the bundled filesystem implementation: a file expands
//! to itself, a directory to its `*_spec.rs` files (recursive, sorted).

use std::path::Path;

/// Expands one path/pattern specification into concrete entries.
pub trait SpecSource {
    /// Ordered entries for `pattern`; empty when nothing matches.
    fn entries(&self, pattern: &str) -> Vec<String>;
}

/// Folds a specification list into the final ordered file list.
///
/// # Example
/// ```
/// use ruspec::{files, SpecSource};
///
/// struct Fixed;
/// impl SpecSource for Fixed {
///     fn entries(&self, pattern: &str) -> Vec<String> {
///         match pattern {
///             "a" => vec!["x".into()],
///             "b" => vec!["y".into()],
///             _ => vec![],
///         }
///     }
/// }
///
/// assert_eq!(files(&Fixed, &["a".into(), "b".into()]), vec!["x", "y"]);
/// assert_eq!(files(&Fixed, &["a".into(), "b".into(), "^a".into()]), vec!["y"]);
/// ```
pub fn files<S: SpecSource + ?Sized>(source: &S, list: &[String]) -> Vec<String> {
    let mut accumulated: Vec<String> = Vec::new();
    for item in list {
        if let Some(rest) = item.strip_prefix('^') {
            let removed = source.entries(rest);
            accumulated.retain(|entry| !removed.contains(entry));
        } else {
            accumulated.extend(source.entries(item));
        }
    }
    accumulated
}

/// Filesystem-backed [`SpecSource`].
///
/// - a path naming a file expands to that file;
/// - a path naming a directory expands to every file under it (recursive)
///   whose name ends in `_spec.rs`, sorted;
/// - anything else expands to nothing.
#[derive(Debug, Default)]
pub struct DirSource;

impl DirSource {
    /// Creates the source.
    pub fn new() -> Self {
        Self
    }

    fn collect_specs(dir: &Path, found: &mut Vec<String>) {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("cannot read spec directory {dir:?}: {err}");
                return;
            }
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                Self::collect_specs(&path, found);
            } else if path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with("_spec.rs"))
            {
                found.push(path.to_string_lossy().into_owned());
            }
        }
    }
}

impl SpecSource for DirSource {
    fn entries(&self, pattern: &str) -> Vec<String> {
        let path = Path::new(pattern);
        if path.is_file() {
            return vec![pattern.to_string()];
        }
        if path.is_dir() {
            let mut found = Vec::new();
            Self::collect_specs(path, &mut found);
            found.sort();
            return found;
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FakeSource {
        map: HashMap<&'static str, Vec<&'static str>>,
    }

    impl FakeSource {
        fn new() -> Self {
            let mut map = HashMap::new();
            map.insert("a", vec!["x"]);
            map.insert("b", vec!["y"]);
            Self { map }
        }
    }

    impl SpecSource for FakeSource {
        fn entries(&self, pattern: &str) -> Vec<String> {
            self.map
                .get(pattern)
                .map(|v| v.iter().map(|s| s.to_string()).collect())
                .unwrap_or_default()
        }
    }

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plain_specs_accumulate_in_order() {
        let source = FakeSource::new();
        assert_eq!(files(&source, &list(&["a", "b"])), vec!["x", "y"]);
    }

    #[test]
    fn test_exclusion_strips_previously_accumulated_entries() {
        let source = FakeSource::new();
        assert_eq!(files(&source, &list(&["a", "b", "^a"])), vec!["y"]);
    }

    #[test]
    fn test_exclusion_before_the_match_removes_nothing() {
        let source = FakeSource::new();
        assert_eq!(files(&source, &list(&["^a", "a", "b"])), vec!["x", "y"]);
    }

    #[test]
    fn test_unknown_spec_expands_to_nothing() {
        let source = FakeSource::new();
        assert_eq!(files(&source, &list(&["nope"])), Vec::<String>::new());
    }

    #[test]
    fn test_dir_source_expands_file_to_itself() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("math_spec.rs");
        std::fs::write(&file, "").unwrap();

        let source = DirSource::new();
        let spec = file.to_string_lossy().into_owned();
        assert_eq!(source.entries(&spec), vec![spec.clone()]);
    }

    #[test]
    fn test_dir_source_collects_spec_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("b_spec.rs"), "").unwrap();
        std::fs::write(dir.path().join("nested/a_spec.rs"), "").unwrap();
        std::fs::write(dir.path().join("helper.rs"), "").unwrap();

        let source = DirSource::new();
        let found = source.entries(&dir.path().to_string_lossy());
        assert_eq!(found.len(), 2);
        assert!(found[0].ends_with("b_spec.rs") || found[0].ends_with("a_spec.rs"));
        let mut sorted = found.clone();
        sorted.sort();
        assert_eq!(found, sorted);
    }

    #[test]
    fn test_dir_source_missing_path_expands_to_nothing() {
        let source = DirSource::new();
        assert!(source.entries("/no/such/path").is_empty());
    }
}
