//! Implementation of the `reeldocs migrate` command.

use tracing::instrument;

use reeldocs_core::{application::services::VersionOutcome, prelude::MigrateService};

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all)]
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let docs_dir = config.resolve_docs_dir(None);
    let site = config.resolve_doc_config(None);

    output.header(&format!(
        "Migrating {} to the current page templates",
        docs_dir.display()
    ))?;

    let report = MigrateService::new(super::filesystem()).migrate(&docs_dir, &site)?;

    for (version, outcome) in &report.outcomes {
        match outcome {
            VersionOutcome::Regenerated { .. } => output.status(true, version)?,
            VersionOutcome::MissingSpec => {
                output.status(false, &format!("{version} (no openapi.json)"))?
            }
            VersionOutcome::InvalidVersion { reason } => {
                output.status(false, &format!("{version} ({reason})"))?
            }
        }
    }
    output.status(true, "landing page")?;

    let regenerated = report.regenerated().count();
    let skipped = report.skipped().count();
    output.print("")?;
    output.success(&format!(
        "Migrated {regenerated} version(s), skipped {skipped}, {} backup(s) created",
        report.backups_created()
    ))?;
    if !report.legacy_removed.is_empty() {
        output.info(&format!(
            "Removed {} legacy backup file(s)",
            report.legacy_removed.len()
        ))?;
    }
    if regenerated > 0 || report.landing_backed_up {
        output.info("Original pages kept as index.html.redoc")?;
    }

    Ok(())
}
