//! Menu file parsing.

use std::path::Path;

use crate::error::MenuError;
use crate::menu::MenuItem;

/// Parse a menu from YAML.
pub fn parse_menu_yaml(content: &str) -> Result<Vec<MenuItem>, MenuError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Parse a menu from JSON.
pub fn parse_menu_json(content: &str) -> Result<Vec<MenuItem>, MenuError> {
    Ok(serde_json::from_str(content)?)
}

/// Load a menu file, choosing the format by extension.
///
/// `.yaml` and `.yml` are parsed as YAML, `.json` as JSON.
pub fn load_menu(path: &Path) -> Result<Vec<MenuItem>, MenuError> {
    let parse = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => parse_menu_yaml,
        Some("json") => parse_menu_json,
        _ => return Err(MenuError::UnsupportedFormat(path.to_path_buf())),
    };
    let content = std::fs::read_to_string(path).map_err(|source| MenuError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse(&content)?;
    tracing::debug!(path = %path.display(), items = items.len(), "Loaded menu");
    Ok(items)
}
