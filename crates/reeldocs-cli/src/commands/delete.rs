//! Implementation of the `reeldocs delete` command.

use tracing::instrument;

use reeldocs_core::prelude::{DeleteOptions, DeleteService, RegistryChange};

use crate::{cli::DeleteArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(version = %args.version))]
pub fn execute(args: DeleteArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let docs_dir = config.resolve_docs_dir(args.docs.docs_dir);
    let options = DeleteOptions {
        keep_if_missing: args.keep_if_missing,
    };

    let report = DeleteService::new(super::filesystem()).delete(&docs_dir, &args.version, options)?;

    if report.directory_removed {
        output.success(&format!(
            "Deleted directory: {}",
            report.version_dir.display()
        ))?;
    } else {
        output.warning(&format!(
            "Version directory not found: {}",
            report.version_dir.display()
        ))?;
    }

    match report.registry {
        RegistryChange::Removed => {
            output.success(&format!("Removed {} from versions.json", report.version))?
        }
        RegistryChange::NotListed => output.info(&format!(
            "{} not present in versions.json (no change)",
            report.version
        ))?,
        RegistryChange::NoRegistry => output.info("versions.json not found (no change)")?,
    }

    Ok(())
}
