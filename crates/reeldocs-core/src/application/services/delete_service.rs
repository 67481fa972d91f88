//! Delete Service - unpublish a documentation version.
//!
//! Workflow:
//! 1. Check `docs_dir/<version>/` (directories only) and read `versions.json`
//! 2. Remove the version directory
//! 3. Drop the version from `versions.json`, rewriting it only if it changed.
//!    Other entries are written back with their JSON types untouched.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::{
    application::{ports::Filesystem, services::registry_service::RegistryService},
    domain::{entry_text, normalize_version},
    error::{DocsError, DocsResult},
};

/// Knobs for [`DeleteService::delete`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteOptions {
    /// Carry on when the version directory does not exist.
    pub keep_if_missing: bool,
}

/// What happened to `versions.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryChange {
    /// The version was listed and the file was rewritten.
    Removed,
    /// The version was not listed; the file was left untouched.
    NotListed,
    /// There is no `versions.json`.
    NoRegistry,
}

/// Outcome of a deletion, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReport {
    pub version: String,
    pub version_dir: PathBuf,
    pub directory_removed: bool,
    pub registry: RegistryChange,
}

/// Service for removing published versions.
pub struct DeleteService {
    fs: Arc<dyn Filesystem>,
    registry: RegistryService,
}

impl DeleteService {
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self {
            registry: RegistryService::new(Arc::clone(&fs)),
            fs,
        }
    }

    #[instrument(skip_all, fields(docs_dir = %docs_dir.display(), version = %version))]
    pub fn delete(
        &self,
        docs_dir: &Path,
        version: &str,
        options: DeleteOptions,
    ) -> DocsResult<DeleteReport> {
        let version = normalize_version(version)?;
        let version_dir = docs_dir.join(version);

        let dir_present = self.fs.exists(&version_dir);
        if dir_present && !self.fs.is_dir(&version_dir) {
            return Err(DocsError::InvalidPath {
                path: version_dir,
                reason: "refusing to delete non-directory path".into(),
            });
        }
        if !dir_present && !options.keep_if_missing {
            return Err(DocsError::MissingFile { path: version_dir });
        }

        // A corrupt registry must fail before anything is removed.
        let registry_path = RegistryService::registry_path(docs_dir);
        let entries = self.registry.load_entries(&registry_path)?;

        if dir_present {
            self.fs.remove_dir_all(&version_dir)?;
            info!(path = %version_dir.display(), "Deleted version directory");
        } else {
            warn!(path = %version_dir.display(), "Version directory not found");
        }

        let registry = match entries {
            Some(entries) => self.unregister(&registry_path, entries, version)?,
            None => RegistryChange::NoRegistry,
        };

        Ok(DeleteReport {
            version: version.to_owned(),
            version_dir,
            directory_removed: dir_present,
            registry,
        })
    }

    fn unregister(
        &self,
        path: &Path,
        entries: Vec<Value>,
        version: &str,
    ) -> DocsResult<RegistryChange> {
        let before = entries.len();
        let kept: Vec<Value> = entries
            .into_iter()
            .filter(|entry| entry_text(entry) != version)
            .collect();
        if kept.len() == before {
            return Ok(RegistryChange::NotListed);
        }

        self.registry.save_entries(path, &kept)?;
        info!(version, "Removed version from registry");
        Ok(RegistryChange::Removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::DomainError;

    #[test]
    fn refuses_to_delete_a_file() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(false);
        fs.expect_remove_dir_all().never();

        let svc = DeleteService::new(Arc::new(fs));
        let err = svc
            .delete(Path::new("docs"), "1.0.0", DeleteOptions::default())
            .unwrap_err();
        assert!(matches!(err, DocsError::InvalidPath { .. }));
    }

    #[test]
    fn missing_dir_without_flag_touches_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_read_to_string().never();
        fs.expect_write_file().never();

        let svc = DeleteService::new(Arc::new(fs));
        let err = svc
            .delete(Path::new("docs"), "9.9.9", DeleteOptions::default())
            .unwrap_err();
        assert_eq!(
            err,
            DocsError::MissingFile {
                path: PathBuf::from("docs/9.9.9")
            }
        );
    }

    #[test]
    fn unlisted_version_does_not_rewrite_registry() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("docs/3.0.0"))
            .return_const(false);
        fs.expect_exists()
            .withf(|p| p == Path::new("docs/versions.json"))
            .return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("[\"2.0.0\", \"1.0.0\"]".to_owned()));
        fs.expect_write_file().never();

        let svc = DeleteService::new(Arc::new(fs));
        let report = svc
            .delete(
                Path::new("docs"),
                "3.0.0",
                DeleteOptions {
                    keep_if_missing: true,
                },
            )
            .unwrap();
        assert!(!report.directory_removed);
        assert_eq!(report.registry, RegistryChange::NotListed);
    }

    #[test]
    fn version_is_trimmed_before_use() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .withf(|p| p == Path::new("docs/1.0.0"))
            .return_const(true);
        fs.expect_is_dir().return_const(true);
        fs.expect_remove_dir_all()
            .withf(|p| p == Path::new("docs/1.0.0"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_exists()
            .withf(|p| p == Path::new("docs/versions.json"))
            .return_const(false);

        let svc = DeleteService::new(Arc::new(fs));
        let report = svc
            .delete(Path::new("docs"), " 1.0.0\n", DeleteOptions::default())
            .unwrap();
        assert_eq!(report.version, "1.0.0");
        assert_eq!(report.registry, RegistryChange::NoRegistry);
    }

    fn deletable(registry: &'static str) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_is_dir().return_const(true);
        fs.expect_read_to_string()
            .returning(move |_| Ok(registry.to_owned()));
        fs
    }

    #[test]
    fn legacy_entries_keep_their_types() {
        let mut fs = deletable("[1, \"2.0.0\", 1.5]");
        fs.expect_remove_dir_all().times(1).returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, json| {
                path == Path::new("docs/versions.json") && json == "[\n  1,\n  1.5\n]\n"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let svc = DeleteService::new(Arc::new(fs));
        let report = svc
            .delete(Path::new("docs"), "2.0.0", DeleteOptions::default())
            .unwrap();
        assert_eq!(report.registry, RegistryChange::Removed);
    }

    #[test]
    fn null_entries_are_tolerated() {
        let mut fs = deletable("[null, \"2.0.0\"]");
        fs.expect_remove_dir_all().times(1).returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|_, json| json == "[\n  null\n]\n")
            .times(1)
            .returning(|_, _| Ok(()));

        let svc = DeleteService::new(Arc::new(fs));
        let report = svc
            .delete(Path::new("docs"), "2.0.0", DeleteOptions::default())
            .unwrap();
        assert_eq!(report.registry, RegistryChange::Removed);
    }

    #[test]
    fn numeric_entry_matches_its_text() {
        let mut fs = deletable("[1, \"2.0.0\"]");
        fs.expect_remove_dir_all().times(1).returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|_, json| json == "[\n  \"2.0.0\"\n]\n")
            .times(1)
            .returning(|_, _| Ok(()));

        let svc = DeleteService::new(Arc::new(fs));
        svc.delete(Path::new("docs"), "1", DeleteOptions::default())
            .unwrap();
    }

    #[test]
    fn corrupt_registry_leaves_directory_in_place() {
        let mut fs = deletable("{\"latest\": \"2.0.0\"}");
        fs.expect_remove_dir_all().never();
        fs.expect_write_file().never();

        let svc = DeleteService::new(Arc::new(fs));
        let err = svc
            .delete(Path::new("docs"), "2.0.0", DeleteOptions::default())
            .unwrap_err();
        assert!(matches!(err, DocsError::MalformedData { .. }));
    }

    #[test]
    fn traversal_is_rejected_up_front() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().never();
        fs.expect_remove_dir_all().never();

        let svc = DeleteService::new(Arc::new(fs));
        let err = svc
            .delete(Path::new("docs"), "..", DeleteOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            DocsError::Domain(DomainError::InvalidVersion { .. })
        ));
    }
}
