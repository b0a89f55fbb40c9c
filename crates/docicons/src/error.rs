//! CLI error types.

use docicons_config::ConfigError;
use docicons_menu::MenuError;
use docicons_resolve::ResolveError;
use docicons_sets::LoadError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("{0}")]
    Resolve(#[from] ResolveError),

    #[error("{0}")]
    Menu(#[from] MenuError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),
}
