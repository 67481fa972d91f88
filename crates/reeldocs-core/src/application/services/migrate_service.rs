//! Migrate Service - regenerate every published page from the current
//! templates.
//!
//! Workflow:
//! 1. Check that the docs directory and its registry exist
//! 2. For each registered version (oldest first) that has an `openapi.json`,
//!    back up `index.html` once and rewrite it
//! 3. Back up and rewrite the landing page the same way
//! 4. Remove leftover `*.backup` files from older tooling
//!
//! Backups are write-once: an existing `index.html.redoc` is never replaced,
//! so running a migration twice keeps the very first page around.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        INDEX_FILE, OPENAPI_FILE,
        ports::Filesystem,
        services::{page_service::PageService, registry_service::RegistryService},
    },
    domain::{DocConfig, normalize_version},
    error::{DocsError, DocsResult},
};

/// Suffix appended to a page when it is set aside before regeneration.
pub const REDOC_BACKUP_SUFFIX: &str = ".redoc";
/// Suffix of backups left behind by earlier tooling.
pub const LEGACY_BACKUP_SUFFIX: &str = ".backup";

/// What happened to one registered version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionOutcome {
    /// The page was rewritten. `backed_up` is true when this run created the
    /// `.redoc` copy.
    Regenerated { backed_up: bool },
    /// The version has no `openapi.json`.
    MissingSpec,
    /// The registry entry cannot be used as a directory name.
    InvalidVersion { reason: String },
}

impl VersionOutcome {
    pub fn is_regenerated(&self) -> bool {
        matches!(self, Self::Regenerated { .. })
    }
}

/// Summary of a migration run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Per-version outcomes, in processing order.
    pub outcomes: Vec<(String, VersionOutcome)>,
    /// Whether this run created a backup of the landing page.
    pub landing_backed_up: bool,
    /// Legacy `*.backup` files that were deleted.
    pub legacy_removed: Vec<PathBuf>,
}

impl MigrationReport {
    pub fn regenerated(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_regenerated())
            .map(|(version, _)| version.as_str())
    }

    pub fn skipped(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| !outcome.is_regenerated())
            .map(|(version, _)| version.as_str())
    }

    /// Number of `.redoc` backups this run created, landing page included.
    pub fn backups_created(&self) -> usize {
        let versions = self
            .outcomes
            .iter()
            .filter(|(_, outcome)| matches!(outcome, VersionOutcome::Regenerated { backed_up: true }))
            .count();
        versions + usize::from(self.landing_backed_up)
    }
}

/// Service for bulk template migration.
pub struct MigrateService {
    fs: Arc<dyn Filesystem>,
    registry: RegistryService,
    pages: PageService,
}

impl MigrateService {
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self {
            registry: RegistryService::new(Arc::clone(&fs)),
            pages: PageService::new(Arc::clone(&fs)),
            fs,
        }
    }

    #[instrument(skip_all, fields(docs_dir = %docs_dir.display()))]
    pub fn migrate(&self, docs_dir: &Path, cfg: &DocConfig) -> DocsResult<MigrationReport> {
        if !self.fs.is_dir(docs_dir) {
            return Err(DocsError::MissingFile {
                path: docs_dir.to_path_buf(),
            });
        }
        let registry_path = RegistryService::registry_path(docs_dir);
        if !self.fs.exists(&registry_path) {
            return Err(DocsError::MissingFile {
                path: registry_path,
            });
        }

        let versions = self.registry.load_strict(&registry_path)?.sort_ascending();
        info!(count = versions.len(), "Migrating version pages");

        let mut report = MigrationReport::default();
        for version in &versions {
            let outcome = self.migrate_version(docs_dir, version, cfg)?;
            report.outcomes.push((version.clone(), outcome));
        }

        report.landing_backed_up = self.backup_once(&docs_dir.join(INDEX_FILE))?;
        self.pages.ensure_landing_page(docs_dir, cfg)?;

        for legacy in self.fs.find_files(docs_dir, LEGACY_BACKUP_SUFFIX)? {
            self.fs.remove_file(&legacy)?;
            debug!(path = %legacy.display(), "Removed legacy backup");
            report.legacy_removed.push(legacy);
        }

        info!(
            regenerated = report.regenerated().count(),
            skipped = report.skipped().count(),
            "Migration finished"
        );
        Ok(report)
    }

    fn migrate_version(
        &self,
        docs_dir: &Path,
        version: &str,
        cfg: &DocConfig,
    ) -> DocsResult<VersionOutcome> {
        let version = match normalize_version(version) {
            Ok(v) => v,
            Err(e) => {
                warn!(version, error = %e, "Skipping unusable registry entry");
                return Ok(VersionOutcome::InvalidVersion {
                    reason: e.to_string(),
                });
            }
        };

        let version_dir = docs_dir.join(version);
        if !self.fs.exists(&version_dir.join(OPENAPI_FILE)) {
            warn!(version, "No openapi.json, skipping");
            return Ok(VersionOutcome::MissingSpec);
        }

        let backed_up = self.backup_once(&version_dir.join(INDEX_FILE))?;
        self.pages.write_version_page(docs_dir, version, cfg)?;
        Ok(VersionOutcome::Regenerated { backed_up })
    }

    /// Copy `page` to `page.redoc` unless the page is absent or a backup is
    /// already there. Returns whether a copy was made.
    fn backup_once(&self, page: &Path) -> DocsResult<bool> {
        let mut backup = page.as_os_str().to_owned();
        backup.push(REDOC_BACKUP_SUFFIX);
        let backup = PathBuf::from(backup);

        if !self.fs.exists(page) || self.fs.exists(&backup) {
            return Ok(false);
        }
        self.fs.copy_file(page, &backup)?;
        debug!(path = %backup.display(), "Backed up page");
        Ok(true)
    }
}
