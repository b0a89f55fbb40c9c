//! Menu loading and resolution errors.

use std::path::PathBuf;

use docicons_resolve::ResolveError;

/// Menu error.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// Menu file could not be read.
    #[error("Failed to read menu {}: {source}", .path.display())]
    Io {
        /// Menu file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Menu file extension is neither YAML nor JSON.
    #[error("Unsupported menu format: {} (expected .yaml, .yml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// A link's icon could not be resolved.
    #[error("Menu link \"{label}\": {source}")]
    Icon {
        /// Label of the link carrying the icon.
        label: String,
        /// Resolution failure.
        source: ResolveError,
    },
}
