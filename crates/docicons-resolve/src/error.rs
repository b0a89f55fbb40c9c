//! Resolution errors.

use docicons_sets::LoadError;

/// Error returned when an icon identifier cannot be resolved.
///
/// Every variant is terminal for the resolution call; no placeholder icon is
/// substituted.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Identifier has no `:` separator.
    #[error("Invalid icon name \"{0}\". Expected \"prefix:name\" format.")]
    MalformedIdentifier(String),
    /// Prefix is known but the bundle has no such icon.
    #[error("Icon \"{name}\" not found in \"{prefix}\" icon set.")]
    IconNotFound {
        /// Requested icon name.
        name: String,
        /// Prefix of the searched bundle.
        prefix: String,
    },
    /// Bundle has a record for the icon but it is not a valid glyph.
    #[error("Icon \"{name}\" in \"{prefix}\" icon set is malformed: {source}")]
    MalformedGlyph {
        /// Requested icon name.
        name: String,
        /// Prefix of the searched bundle.
        prefix: String,
        /// Decoding failure.
        source: serde_json::Error,
    },
    /// Bundle could not be loaded (unknown prefix, unreadable or invalid file).
    #[error(transparent)]
    Load(#[from] LoadError),
}

impl ResolveError {
    /// Whether the prefix is not registered.
    pub fn is_unknown_prefix(&self) -> bool {
        matches!(self, Self::Load(LoadError::UnknownPrefix { .. }))
    }
}
