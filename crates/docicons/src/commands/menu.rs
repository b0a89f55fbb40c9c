//! `docicons menu` command implementation.

use std::path::PathBuf;

use clap::Args;
use docicons_menu::{load_menu, resolve_menu};
use docicons_resolve::IconResolver;

use crate::commands::CommonArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the menu command.
#[derive(Args)]
pub(crate) struct MenuArgs {
    /// Menu definition file, YAML or JSON (default: `menu.source` from config).
    file: Option<PathBuf>,

    /// Write the resolved menu to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl MenuArgs {
    /// Execute the menu command.
    ///
    /// # Errors
    ///
    /// Returns an error if no menu file is configured, the file cannot be
    /// parsed, or any icon fails to resolve.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(self.file)?;
        let source = config.menu_resolved.source.as_deref().ok_or_else(|| {
            CliError::Validation(
                "No menu file given and no [menu] source set in config".to_owned(),
            )
        })?;

        let items = load_menu(source)?;
        let resolver = IconResolver::new(config.build_registry());
        let resolved = resolve_menu(&items, &resolver)?;
        let json = serde_json::to_string_pretty(&resolved)?;

        match self.output {
            Some(path) => {
                std::fs::write(&path, json)?;
                output.success(&format!(
                    "Wrote {} menu entries to {}",
                    resolved.len(),
                    path.display()
                ));
            }
            None => output.data(&json)?,
        }

        Ok(())
    }
}
