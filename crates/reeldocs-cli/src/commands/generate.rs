//! Implementation of the `reeldocs generate` command.
//!
//! Validates the version, checks `scripts.js`, optionally registers the
//! version, then writes the version page and refreshes the landing page.

use std::sync::Arc;

use tracing::{info, instrument};

use reeldocs_core::{
    domain::normalize_version,
    prelude::{DocsError, PageService, RegistryService},
};

use crate::{cli::GenerateArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(version = %args.version))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let version = normalize_version(&args.version).map_err(DocsError::from)?;
    let docs_dir = config.resolve_docs_dir(args.docs.docs_dir);
    let site = config.resolve_doc_config(args.title);
    let fs = super::filesystem();
    let pages = PageService::new(Arc::clone(&fs));

    pages.verify_script_hooks(&docs_dir)?;

    if args.register {
        let latest = RegistryService::new(fs).update(&docs_dir, version)?;
        info!(%latest, "Registry updated");
        output.info(&format!("Registered {version} (latest: {latest})"))?;
    }

    let page = pages.write_version_page(&docs_dir, version, &site)?;
    output.success(&format!("Wrote {}", page.display()))?;

    let landing = pages.ensure_landing_page(&docs_dir, &site)?;
    output.success(&format!("Wrote {}", landing.display()))?;

    Ok(())
}
