//! Implementation of the `reeldocs list` command.

use reeldocs_core::prelude::RegistryService;

use crate::{cli::ListArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let docs_dir = config.resolve_docs_dir(args.docs.docs_dir);
    let versions = RegistryService::new(super::filesystem())
        .load_soft(&RegistryService::registry_path(&docs_dir))
        .sort();

    if args.json {
        // JSON must stay parseable, so it bypasses quiet mode and the trailing
        // newline from the registry format is dropped.
        output.data(versions.to_json_pretty().trim_end())?;
        return Ok(());
    }

    for version in &versions {
        output.data(version)?;
    }
    Ok(())
}
