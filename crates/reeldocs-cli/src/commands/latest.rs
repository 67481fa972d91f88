//! Implementation of the `reeldocs latest` command.

use reeldocs_core::prelude::RegistryService;

use crate::{cli::DocsDirArgs, config::AppConfig, error::CliResult, output::OutputManager};

pub fn execute(args: DocsDirArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let docs_dir = config.resolve_docs_dir(args.docs_dir);
    let latest = RegistryService::new(super::filesystem()).latest(&docs_dir);
    output.data(&latest)?;
    Ok(())
}
