//! Configuration management for docicons.
//!
//! Parses `docicons.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Icon Sets
//!
//! The `[icons]` section picks a [`Preset`] package layout and the package
//! root it is resolved against. `[icons.sets]` adds prefixes or replaces
//! preset ones with explicit bundle files:
//!
//! ```toml
//! [icons]
//! preset = "mirror"
//! root = "node_modules"
//!
//! [icons.sets]
//! acme = "vendor/acme/icons.json"
//! ```
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `icons.root`
//! - `icons.sets.*`
//! - `menu.source`

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use docicons_sets::{FsIconSetSource, IconSetRegistry, Preset};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override icon package root.
    pub root: Option<PathBuf>,
    /// Override icon set preset.
    pub preset: Option<Preset>,
    /// Override menu definition file.
    pub menu_source: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docicons.toml";

/// Default icon package root, relative to the config directory.
const DEFAULT_ROOT: &str = "node_modules";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Icon set configuration (paths are relative strings from TOML).
    icons: IconsConfigRaw,
    /// Menu configuration (paths are relative strings from TOML).
    menu: MenuConfigRaw,

    /// Resolved icon set configuration (set after loading).
    #[serde(skip)]
    pub icons_resolved: IconsConfig,
    /// Resolved menu configuration (set after loading).
    #[serde(skip)]
    pub menu_resolved: MenuConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Raw icon set configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IconsConfigRaw {
    preset: Preset,
    root: Option<String>,
    sets: BTreeMap<String, String>,
}

/// Resolved icon set configuration with absolute paths.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IconsConfig {
    /// Package layout for the built-in prefixes.
    pub preset: Preset,
    /// Directory containing icon packages.
    pub root: PathBuf,
    /// Explicit bundle files by prefix, applied after the preset.
    pub sets: Vec<(String, PathBuf)>,
}

/// Raw menu configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MenuConfigRaw {
    source: Option<String>,
}

/// Resolved menu configuration.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MenuConfig {
    /// Menu definition file (YAML or JSON).
    pub source: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`icons.root`").
        field: String,
        /// Error message (e.g., "${`NPM_ROOT`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docicons.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Build the icon set registry: preset prefixes first, then explicit sets.
    #[must_use]
    pub fn build_registry(&self) -> IconSetRegistry {
        let icons = &self.icons_resolved;
        let mut registry = icons.preset.registry(&icons.root);
        for (prefix, path) in &icons.sets {
            if registry.register(prefix.as_str(), FsIconSetSource::new(path)) {
                tracing::info!(
                    prefix = %prefix,
                    path = %path.display(),
                    "Icon set overrides preset entry"
                );
            }
        }
        registry
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(root) = &settings.root {
            self.icons_resolved.root.clone_from(root);
        }
        if let Some(preset) = settings.preset {
            self.icons_resolved.preset = preset;
        }
        if let Some(menu_source) = &settings.menu_source {
            self.menu_resolved.source = Some(menu_source.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            icons_resolved: IconsConfig {
                preset: Preset::default(),
                root: base.join(DEFAULT_ROOT),
                sets: Vec::new(),
            },
            ..Self::default()
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        // Validate raw values before they are joined onto the config directory
        config.validate()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        tracing::debug!(
            path = %path.display(),
            preset = %config.icons_resolved.preset,
            sets = config.icons_resolved.sets.len(),
            "Loaded configuration"
        );

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_icons()?;
        self.validate_menu()?;
        Ok(())
    }

    /// Validate icon set configuration.
    fn validate_icons(&self) -> Result<(), ConfigError> {
        if let Some(root) = &self.icons.root {
            require_non_empty(root, "icons.root")?;
        }

        for (prefix, path) in &self.icons.sets {
            require_non_empty(prefix, "icons.sets prefix")?;
            if prefix.contains(':') {
                return Err(ConfigError::Validation(format!(
                    "icons.sets prefix \"{prefix}\" cannot contain ':'"
                )));
            }
            require_non_empty(path, &format!("icons.sets.{prefix}"))?;
        }

        Ok(())
    }

    /// Validate menu configuration.
    fn validate_menu(&self) -> Result<(), ConfigError> {
        if let Some(source) = &self.menu.source {
            require_non_empty(source, "menu.source")?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref root) = self.icons.root {
            self.icons.root = Some(expand::expand_env(root, "icons.root")?);
        }

        for (prefix, path) in &mut self.icons.sets {
            *path = expand::expand_env(path, &format!("icons.sets.{prefix}"))?;
        }

        if let Some(ref source) = self.menu.source {
            self.menu.source = Some(expand::expand_env(source, "menu.source")?);
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.icons_resolved = IconsConfig {
            preset: self.icons.preset,
            root: config_dir.join(self.icons.root.as_deref().unwrap_or(DEFAULT_ROOT)),
            sets: self
                .icons
                .sets
                .iter()
                .map(|(prefix, path)| (prefix.clone(), config_dir.join(path)))
                .collect(),
        };

        self.menu_resolved = MenuConfig {
            source: self.menu.source.as_ref().map(|s| config_dir.join(s)),
        };
    }
}
