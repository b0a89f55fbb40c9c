//! CLI command implementations.

pub(crate) mod menu;
pub(crate) mod resolve;
pub(crate) mod sets;

use std::path::PathBuf;

use clap::Args;
use docicons_config::{CliSettings, Config};
use docicons_sets::Preset;

use crate::error::CliError;

pub(crate) use menu::MenuArgs;
pub(crate) use resolve::ResolveArgs;
pub(crate) use sets::SetsArgs;

/// Configuration arguments shared by every command.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover docicons.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory containing icon packages (overrides config).
    #[arg(long, env = "DOCICONS_ROOT")]
    root: Option<PathBuf>,

    /// Icon package layout: iconify or mirror (overrides config).
    #[arg(long)]
    preset: Option<Preset>,

    /// Enable verbose output (bundle loads and resolution details).
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Load configuration with these arguments applied on top.
    pub(crate) fn load_config(&self, menu_source: Option<PathBuf>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            root: self.root.clone(),
            preset: self.preset,
            menu_source,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(
            config_path = ?config.config_path,
            preset = %config.icons_resolved.preset,
            root = %config.icons_resolved.root.display(),
            "Configuration loaded"
        );
        Ok(config)
    }
}
