//! Icon set loading errors.

use std::path::PathBuf;

/// Error returned when an icon set cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Prefix is not registered.
    #[error("Unknown icon prefix \"{prefix}\". Available: {}", .available.join(", "))]
    UnknownPrefix {
        /// Requested prefix.
        prefix: String,
        /// Every registered prefix, in registration order.
        available: Vec<String>,
    },
    /// Bundle file could not be read.
    #[error("Failed to read icon set {}: {source}", .path.display())]
    Io {
        /// Bundle file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Bundle file is not a valid icon set document.
    #[error("Failed to parse icon set {}: {source}", .path.display())]
    Parse {
        /// Bundle file path.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_prefix_message_lists_available() {
        let err = LoadError::UnknownPrefix {
            prefix: "fa".to_owned(),
            available: vec!["lucide".to_owned(), "mdi".to_owned()],
        };
        assert_eq!(
            err.to_string(),
            "Unknown icon prefix \"fa\". Available: lucide, mdi"
        );
    }

    #[test]
    fn test_io_message_includes_path() {
        let err = LoadError::Io {
            path: PathBuf::from("/icons/mdi.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/icons/mdi.json"));
        assert!(msg.contains("missing"));
    }
}
