//! Page Service - write rendered pages into the docs directory.
//!
//! Rendering itself lives in `domain::page`; this service only creates
//! directories and overwrites files.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, instrument};

use crate::{
    application::{INDEX_FILE, SCRIPTS_FILE, ports::Filesystem},
    domain::{
        DocConfig, missing_script_hooks, normalize_version, render_landing_page,
        render_version_page,
    },
    error::{DocsError, DocsResult},
};

/// Service for generated pages.
pub struct PageService {
    fs: Arc<dyn Filesystem>,
}

impl PageService {
    pub fn new(fs: Arc<dyn Filesystem>) -> Self {
        Self { fs }
    }

    /// Write `docs_dir/<version>/index.html`, overwriting any existing page.
    ///
    /// The version is trimmed and must be a single path component.
    #[instrument(skip_all, fields(docs_dir = %docs_dir.display(), version = %version))]
    pub fn write_version_page(
        &self,
        docs_dir: &Path,
        version: &str,
        cfg: &DocConfig,
    ) -> DocsResult<PathBuf> {
        let version = normalize_version(version)?;
        let version_dir = docs_dir.join(version);
        self.fs.create_dir_all(&version_dir)?;

        let index = version_dir.join(INDEX_FILE);
        self.fs
            .write_file(&index, &render_version_page(version, cfg))?;

        info!(path = %index.display(), "Version page written");
        Ok(index)
    }

    /// Write `docs_dir/index.html` from the current landing template.
    #[instrument(skip_all, fields(docs_dir = %docs_dir.display()))]
    pub fn ensure_landing_page(&self, docs_dir: &Path, cfg: &DocConfig) -> DocsResult<PathBuf> {
        self.fs.create_dir_all(docs_dir)?;

        let index = docs_dir.join(INDEX_FILE);
        self.fs.write_file(&index, &render_landing_page(cfg))?;

        info!(path = %index.display(), "Landing page written");
        Ok(index)
    }

    /// Make sure `docs_dir/scripts.js` defines every client-side hook the
    /// generated pages call.
    pub fn verify_script_hooks(&self, docs_dir: &Path) -> DocsResult<()> {
        let path = docs_dir.join(SCRIPTS_FILE);
        if !self.fs.exists(&path) {
            return Err(DocsError::MissingFile { path });
        }

        let scripts = self.fs.read_to_string(&path)?;
        let missing = missing_script_hooks(&scripts);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DocsError::MissingDependency { path, missing })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;

    #[test]
    fn version_page_goes_under_version_dir() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all()
            .withf(|dir| dir == Path::new("docs/1.2.0"))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, html| {
                path == Path::new("docs/1.2.0/index.html")
                    && html.contains("<title>ReelAPI v1 - 1.2.0</title>")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let svc = PageService::new(Arc::new(fs));
        let written = svc
            .write_version_page(Path::new("docs"), "1.2.0", &DocConfig::default())
            .unwrap();
        assert_eq!(written, PathBuf::from("docs/1.2.0/index.html"));
    }

    #[test]
    fn escaping_version_is_rejected() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let svc = PageService::new(Arc::new(fs));
        let err = svc
            .write_version_page(Path::new("docs"), "../etc", &DocConfig::default())
            .unwrap_err();
        assert!(matches!(err, DocsError::Domain(_)));
    }

    #[test]
    fn write_failure_propagates() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            Err(DocsError::Filesystem {
                path: path.to_path_buf(),
                reason: "read-only".into(),
            })
        });

        let svc = PageService::new(Arc::new(fs));
        let err = svc
            .ensure_landing_page(Path::new("docs"), &DocConfig::default())
            .unwrap_err();
        assert!(matches!(err, DocsError::Filesystem { .. }));
    }

    #[test]
    fn missing_scripts_file_is_not_found() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);

        let svc = PageService::new(Arc::new(fs));
        assert_eq!(
            svc.verify_script_hooks(Path::new("docs")),
            Err(DocsError::MissingFile {
                path: PathBuf::from("docs/scripts.js")
            })
        );
    }

    #[test]
    fn incomplete_scripts_lists_missing_hooks() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("function loadVersions(v) {}".to_owned()));

        let svc = PageService::new(Arc::new(fs));
        match svc.verify_script_hooks(Path::new("docs")) {
            Err(DocsError::MissingDependency { missing, .. }) => {
                assert_eq!(
                    missing,
                    vec!["function setupLandingPage", "function switchVersion"]
                );
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
