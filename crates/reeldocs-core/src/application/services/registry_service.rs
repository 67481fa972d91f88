//! Registry Service - load, mutate and persist `versions.json`.
//!
//! There are two loaders on purpose. [`RegistryService::load_strict`] treats
//! a corrupt registry as fatal and is used wherever the registry is about to
//! be rewritten. [`RegistryService::load_soft`] degrades to an empty list
//! with a warning and is used by read-only queries.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{REGISTRY_FILE, ports::Filesystem},
    domain::{DomainError, VersionList, version_list::json_kind},
    error::{DocsError, DocsResult},
};

/// Service for `versions.json` upkeep.
pub struct RegistryService {
    fs: Arc<dyn Filesystem>,
}

impl RegistryService {
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self { fs }
    }

    /// Location of the registry inside a docs directory.
    pub fn registry_path(docs_dir: &Path) -> PathBuf {
        docs_dir.join(REGISTRY_FILE)
    }

    /// Load the registry, failing on malformed content.
    ///
    /// A missing file is an empty list. A file that is not valid JSON, or
    /// whose top-level value is not an array of scalars, is
    /// [`DocsError::MalformedData`].
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load_strict(&self, path: &Path) -> DocsResult<VersionList> {
        if !self.fs.exists(path) {
            debug!("No registry found, starting empty");
            return Ok(VersionList::new());
        }

        let text = self.fs.read_to_string(path)?;
        let value: Value =
            serde_json::from_str(&text).map_err(|e| DocsError::malformed(path, e))?;
        let versions = VersionList::from_json(value).map_err(|e| DocsError::malformed(path, e))?;

        debug!(count = versions.len(), "Registry loaded");
        Ok(versions)
    }

    /// Load the registry, treating any failure as an empty list.
    pub fn load_soft(&self, path: &Path) -> VersionList {
        match self.load_strict(path) {
            Ok(versions) => versions,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable registry");
                VersionList::new()
            }
        }
    }

    /// Load the registry as raw JSON entries, keeping each entry's type.
    ///
    /// Used when entries are only filtered out, so legacy numbers and
    /// `null`s are written back exactly as found. `None` when there is no
    /// registry file.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load_entries(&self, path: &Path) -> DocsResult<Option<Vec<Value>>> {
        if !self.fs.exists(path) {
            return Ok(None);
        }

        let text = self.fs.read_to_string(path)?;
        match serde_json::from_str(&text).map_err(|e| DocsError::malformed(path, e))? {
            Value::Array(entries) => Ok(Some(entries)),
            other => Err(DocsError::malformed(
                path,
                DomainError::NotAList {
                    found: json_kind(&other),
                },
            )),
        }
    }

    /// Persist raw entries in the same layout as [`RegistryService::save`].
    pub fn save_entries(&self, path: &Path, entries: &[Value]) -> DocsResult<()> {
        let mut text =
            serde_json::to_string_pretty(entries).map_err(|e| DocsError::malformed(path, e))?;
        text.push('\n');
        self.fs.write_file(path, &text)?;
        debug!(count = entries.len(), "Registry saved");
        Ok(())
    }

    /// Persist the registry as indented JSON, replacing the whole file.
    #[instrument(skip_all, fields(path = %path.display(), count = versions.len()))]
    pub fn save(&self, path: &Path, versions: &VersionList) -> DocsResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.write_file(path, &versions.to_json_pretty())?;
        debug!("Registry saved");
        Ok(())
    }

    /// Register `version` in `docs_dir/versions.json`, keep the file sorted
    /// newest-first, and return the newest version afterwards.
    #[instrument(skip_all, fields(docs_dir = %docs_dir.display(), version = %version))]
    pub fn update(&self, docs_dir: &Path, version: &str) -> DocsResult<String> {
        let path = Self::registry_path(docs_dir);
        let before = self.load_strict(&path)?;

        if before.contains(version) {
            info!(version, "Version already registered");
        } else {
            info!(version, "Registering version");
        }

        let versions = before.add(version).sort();
        self.save(&path, &versions)?;

        Ok(versions.latest())
    }

    /// Newest registered version, or `unknown`.
    pub fn latest(&self, docs_dir: &Path) -> String {
        self.load_soft(&Self::registry_path(docs_dir)).latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;

    fn registry_reading(content: &'static str) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(move |_| Ok(content.to_owned()));
        fs
    }

    #[test]
    fn missing_registry_is_empty_without_reading() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_read_to_string().never();

        let svc = RegistryService::new(Arc::new(fs));
        assert!(svc.load_strict(Path::new("docs/versions.json")).unwrap().is_empty());
    }

    #[test]
    fn strict_rejects_invalid_json() {
        let svc = RegistryService::new(Arc::new(registry_reading("[\"1.0.0\",")));
        let err = svc.load_strict(Path::new("docs/versions.json")).unwrap_err();
        assert!(matches!(err, DocsError::MalformedData { .. }));
    }

    #[test]
    fn strict_rejects_non_list() {
        let svc = RegistryService::new(Arc::new(registry_reading("{\"latest\": \"1.0\"}")));
        let err = svc.load_strict(Path::new("docs/versions.json")).unwrap_err();
        match err {
            DocsError::MalformedData { reason, .. } => assert!(reason.contains("object")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn soft_degrades_to_empty() {
        let svc = RegistryService::new(Arc::new(registry_reading("not json")));
        assert!(svc.load_soft(Path::new("docs/versions.json")).is_empty());
    }

    #[test]
    fn save_creates_parent_and_writes_pretty_json() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .withf(|dir| dir == Path::new("out/docs"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, json| {
                path == Path::new("out/docs/versions.json") && json == "[\n  \"1.0.0\"\n]\n"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let svc = RegistryService::new(Arc::new(fs));
        let versions: VersionList = ["1.0.0"].into_iter().collect();
        svc.save(Path::new("out/docs/versions.json"), &versions)
            .unwrap();
    }

    #[test]
    fn update_adds_sorts_and_reports_latest() {
        let mut fs = registry_reading("[\"1.0.0\", \"1.10.0\"]");
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|_, json| json == "[\n  \"1.10.0\",\n  \"1.2.0\",\n  \"1.0.0\"\n]\n")
            .times(1)
            .returning(|_, _| Ok(()));

        let svc = RegistryService::new(Arc::new(fs));
        let latest = svc.update(Path::new("docs"), "1.2.0").unwrap();
        assert_eq!(latest, "1.10.0");
    }

    #[test]
    fn entries_keep_legacy_types() {
        let svc = RegistryService::new(Arc::new(registry_reading("[1, null, \"2.0.0\"]")));
        let entries = svc
            .load_entries(Path::new("docs/versions.json"))
            .unwrap()
            .unwrap();
        assert_eq!(entries, vec![Value::from(1), Value::Null, Value::from("2.0.0")]);
    }

    #[test]
    fn entries_reject_non_list() {
        let svc = RegistryService::new(Arc::new(registry_reading("\"1.0.0\"")));
        assert!(matches!(
            svc.load_entries(Path::new("docs/versions.json")),
            Err(DocsError::MalformedData { .. })
        ));
    }

    #[test]
    fn update_refuses_to_overwrite_corrupt_registry() {
        let mut fs = registry_reading("{oops");
        fs.expect_write_file().never();

        let svc = RegistryService::new(Arc::new(fs));
        assert!(svc.update(Path::new("docs"), "1.2.0").is_err());
    }
}
