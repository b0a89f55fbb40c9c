//! `docicons sets` command implementation.

use clap::Args;
use docicons_sets::IconSetRegistry;

use crate::commands::CommonArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sets command.
#[derive(Args)]
pub(crate) struct SetsArgs {
    /// Load each bundle and report its icon count.
    #[arg(long)]
    check: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl SetsArgs {
    /// Execute the sets command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, or with `--check` if any
    /// bundle fails to load.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(None)?;
        let registry = config.build_registry();

        output.highlight(&format!(
            "Preset: {} (root: {})",
            config.icons_resolved.preset,
            config.icons_resolved.root.display()
        ));

        for line in set_lines(&registry) {
            output.data(&line)?;
        }

        if self.check {
            for (prefix, source) in registry.iter() {
                let set = source.load()?;
                output.info(&format!("{prefix}: {} icons", set.icons.len()));
            }
            output.success(&format!("All {} icon sets loaded", registry.len()));
        }

        Ok(())
    }
}

/// One `prefix<TAB>source` line per registered set, in registration order.
fn set_lines(registry: &IconSetRegistry) -> Vec<String> {
    registry
        .iter()
        .map(|(prefix, source)| format!("{prefix}\t{}", source.describe()))
        .collect()
}

#[cfg(test)]
mod tests {
    use docicons_sets::{FsIconSetSource, IconSet, StaticIconSetSource};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_set_lines() {
        let registry = IconSetRegistry::new()
            .with_source("mdi", FsIconSetSource::new("/nm/mdi.json"))
            .with_source("local", StaticIconSetSource::new(IconSet::new()));

        assert_eq!(
            set_lines(&registry),
            vec![
                "mdi\t/nm/mdi.json".to_owned(),
                "local\tin-memory (0 icons)".to_owned()
            ]
        );
    }
}
