//! Implementation of the `reeldocs add` command.

use std::sync::Arc;

use tracing::instrument;

use reeldocs_core::prelude::RegistryService;

use crate::{cli::AddArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(version = %args.version))]
pub fn execute(args: AddArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let docs_dir = config.resolve_docs_dir(args.docs.docs_dir);
    let fs = super::filesystem();

    let latest = RegistryService::new(Arc::clone(&fs)).update(&docs_dir, &args.version)?;
    output.success(&format!(
        "Updated {}",
        RegistryService::registry_path(&docs_dir).display()
    ))?;

    if let Some(path) = args.output_latest {
        fs.write_file(&path, &latest)?;
        output.info(&format!("Latest version written to: {}", path.display()))?;
    }

    output.data(&latest)?;
    Ok(())
}
