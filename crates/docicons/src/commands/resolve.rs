//! `docicons resolve` command implementation.

use clap::Args;
use docicons_resolve::IconResolver;

use crate::commands::CommonArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Icon identifiers in `prefix:name` form.
    #[arg(required = true, value_name = "ID")]
    ids: Vec<String>,

    /// Print a JSON array with dimensions and color mode instead of bare SVG.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// # Errors
    ///
    /// Returns an error on the first identifier that fails to resolve.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(None)?;
        let resolver = IconResolver::new(config.build_registry());

        if self.json {
            let icons = self
                .ids
                .iter()
                .map(|id| resolver.describe(id))
                .collect::<Result<Vec<_>, _>>()?;
            output.data(&serde_json::to_string_pretty(&icons)?)?;
        } else {
            for svg in resolver.resolve_all(&self.ids)? {
                output.data(&svg)?;
            }
        }

        Ok(())
    }
}
