//! Loader capabilities for individual icon sets.

use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::icon_set::IconSet;

/// Something that can produce one icon set on demand.
///
/// Loading must be synchronous and idempotent: two calls return equal sets
/// for the duration of a build.
pub trait IconSetSource: Send + Sync {
    /// Load the icon set.
    fn load(&self) -> Result<IconSet, LoadError>;

    /// Human-readable origin, e.g. the bundle file path.
    fn describe(&self) -> String;
}

/// Icon set read from an Iconify JSON file.
///
/// The file is read and parsed on every [`load`](IconSetSource::load) call.
#[derive(Clone, Debug)]
pub struct FsIconSetSource {
    path: PathBuf,
}

impl FsIconSetSource {
    /// Create a source for the given bundle file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Bundle file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IconSetSource for FsIconSetSource {
    fn load(&self) -> Result<IconSet, LoadError> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        let set = IconSet::from_json(&content).map_err(|source| LoadError::Parse {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(
            path = %self.path.display(),
            icons = set.icons.len(),
            "Loaded icon set"
        );
        Ok(set)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Icon set held in memory.
///
/// Useful for tests and for sets assembled programmatically.
#[derive(Clone, Debug, Default)]
pub struct StaticIconSetSource {
    set: IconSet,
}

impl StaticIconSetSource {
    /// Wrap an icon set.
    #[must_use]
    pub fn new(set: IconSet) -> Self {
        Self { set }
    }
}

impl From<IconSet> for StaticIconSetSource {
    fn from(set: IconSet) -> Self {
        Self::new(set)
    }
}

impl IconSetSource for StaticIconSetSource {
    fn load(&self) -> Result<IconSet, LoadError> {
        Ok(self.set.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} icons)", self.set.icons.len())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::icon_set::Glyph;

    #[test]
    fn test_fs_source_loads_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("icons.json");
        fs::write(
            &path,
            r#"{ "width": 16, "icons": { "dot": { "body": "<circle r=\"2\"/>" } } }"#,
        )
        .unwrap();

        let set = FsIconSetSource::new(&path).load().unwrap();

        assert_eq!(set.width, Some(16.0));
        assert_eq!(set.glyph("dot").unwrap().unwrap().body, "<circle r=\"2\"/>");
    }

    #[test]
    fn test_fs_source_is_idempotent() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("icons.json");
        fs::write(&path, r#"{ "icons": { "a": { "body": "<g/>" } } }"#).unwrap();
        let source = FsIconSetSource::new(&path);

        assert_eq!(source.load().unwrap(), source.load().unwrap());
    }

    #[test]
    fn test_fs_source_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.json");

        let err = FsIconSetSource::new(&path).load().unwrap_err();

        assert!(
            matches!(&err, LoadError::Io { path: p, .. } if p == &path),
            "Expected LoadError::Io, got {err:?}"
        );
    }

    #[test]
    fn test_fs_source_invalid_json() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("icons.json");
        fs::write(&path, "{ not json").unwrap();

        let err = FsIconSetSource::new(&path).load().unwrap_err();

        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains("icons.json"));
    }

    #[test]
    fn test_fs_source_describe_is_path() {
        let source = FsIconSetSource::new("/opt/icons/mdi.json");
        assert_eq!(source.describe(), "/opt/icons/mdi.json");
        assert_eq!(source.path(), Path::new("/opt/icons/mdi.json"));
    }

    #[test]
    fn test_static_source_returns_set() {
        let set = IconSet::new().with_icon("a", Glyph::new("<g/>"));
        let source = StaticIconSetSource::from(set.clone());

        assert_eq!(source.load().unwrap(), set);
        assert_eq!(source.describe(), "in-memory (1 icons)");
    }
}
