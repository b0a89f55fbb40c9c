//! Closed mapping from prefix token to icon set source.
//!
//! The registry is populated once during setup and only read afterwards.
//! Every prefix maps to exactly one source; there is no fallback between
//! sources, so an unregistered prefix fails instead of being skipped.

use std::fmt;

use crate::error::LoadError;
use crate::icon_set::IconSet;
use crate::source::IconSetSource;

/// Registry of icon set sources keyed by prefix.
///
/// Prefixes keep their registration order, which is the order reported in
/// [`LoadError::UnknownPrefix`].
#[derive(Default)]
pub struct IconSetRegistry {
    entries: Vec<(String, Box<dyn IconSetSource>)>,
}

impl IconSetRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source for a prefix.
    ///
    /// Registering an existing prefix replaces its source in place and
    /// returns `true`.
    pub fn register<S>(&mut self, prefix: impl Into<String>, source: S) -> bool
    where
        S: IconSetSource + 'static,
    {
        let prefix = prefix.into();
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == prefix) {
            entry.1 = Box::new(source);
            return true;
        }
        self.entries.push((prefix, Box::new(source)));
        false
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with_source<S>(mut self, prefix: impl Into<String>, source: S) -> Self
    where
        S: IconSetSource + 'static,
    {
        self.register(prefix, source);
        self
    }

    /// Load the icon set registered for `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::UnknownPrefix`] listing every registered prefix when
    /// `prefix` is not registered, or the source's own error.
    pub fn load(&self, prefix: &str) -> Result<IconSet, LoadError> {
        let source = self
            .source(prefix)
            .ok_or_else(|| LoadError::UnknownPrefix {
                prefix: prefix.to_owned(),
                available: self.prefixes().into_iter().map(str::to_owned).collect(),
            })?;
        source.load()
    }

    /// Source registered for `prefix`, if any.
    pub fn source(&self, prefix: &str) -> Option<&dyn IconSetSource> {
        self.entries
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, source)| source.as_ref())
    }

    /// Whether `prefix` is registered.
    pub fn contains(&self, prefix: &str) -> bool {
        self.source(prefix).is_some()
    }

    /// Registered prefixes in registration order.
    pub fn prefixes(&self) -> Vec<&str> {
        self.entries.iter().map(|(p, _)| p.as_str()).collect()
    }

    /// Iterate `(prefix, source)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn IconSetSource)> {
        self.entries
            .iter()
            .map(|(p, source)| (p.as_str(), source.as_ref()))
    }

    /// Number of registered prefixes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no prefix is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for IconSetRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(prefix, source)| (prefix, source.describe())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::icon_set::Glyph;
    use crate::source::{FsIconSetSource, StaticIconSetSource};

    assert_impl_all!(IconSetRegistry: Send, Sync);

    fn set_with(name: &str) -> StaticIconSetSource {
        StaticIconSetSource::new(IconSet::new().with_icon(name, Glyph::new("<g/>")))
    }

    #[test]
    fn test_load_registered_prefix() {
        let registry = IconSetRegistry::new().with_source("demo", set_with("star"));

        let set = registry.load("demo").unwrap();

        assert!(set.glyph("star").is_some());
    }

    #[test]
    fn test_unknown_prefix_lists_all_prefixes_in_order() {
        let registry = IconSetRegistry::new()
            .with_source("lucide", set_with("a"))
            .with_source("carbon", set_with("b"))
            .with_source("mdi", set_with("c"));

        let err = registry.load("fa").unwrap_err();

        match &err {
            LoadError::UnknownPrefix { prefix, available } => {
                assert_eq!(prefix, "fa");
                assert_eq!(available, &["lucide", "carbon", "mdi"]);
            }
            other => panic!("Expected UnknownPrefix, got {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "Unknown icon prefix \"fa\". Available: lucide, carbon, mdi"
        );
    }

    #[test]
    fn test_empty_prefix_is_unknown() {
        let registry = IconSetRegistry::new().with_source("demo", set_with("a"));
        assert!(matches!(
            registry.load(""),
            Err(LoadError::UnknownPrefix { .. })
        ));
    }

    #[test]
    fn test_register_replaces_in_place() {
        let mut registry = IconSetRegistry::new()
            .with_source("a", set_with("one"))
            .with_source("b", set_with("two"));

        let replaced = registry.register("a", set_with("three"));

        assert!(replaced);
        assert_eq!(registry.prefixes(), vec!["a", "b"]);
        let set = registry.load("a").unwrap();
        assert!(set.glyph("three").is_some());
        assert!(set.glyph("one").is_none());
    }

    #[test]
    fn test_register_new_prefix_returns_false() {
        let mut registry = IconSetRegistry::new();
        assert!(registry.is_empty());

        assert!(!registry.register("a", set_with("one")));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("a"));
        assert!(!registry.contains("b"));
    }

    #[test]
    fn test_source_error_propagates() {
        let registry =
            IconSetRegistry::new().with_source("gone", FsIconSetSource::new("/nonexistent/x.json"));

        assert!(matches!(registry.load("gone"), Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_debug_lists_sources() {
        let registry =
            IconSetRegistry::new().with_source("mdi", FsIconSetSource::new("/icons/mdi.json"));
        assert_eq!(format!("{registry:?}"), r#"{"mdi": "/icons/mdi.json"}"#);
    }
}
