//! reeldocs Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the reeldocs
//! documentation-site toolkit, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          reeldocs-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (Registry, Page, Delete, Migrate)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │             (Filesystem)                │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     reeldocs-adapters (Infrastructure)  │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!
//!          Domain Layer (Pure Logic)
//!   VersionKey, VersionList, DocConfig, page templates
//! ```
//!
//! Everything under [`domain`] is pure: rendering a page or sorting a version
//! list never touches the disk. All effects go through
//! [`application::ports::Filesystem`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::{path::Path, sync::Arc};
//! use reeldocs_core::prelude::*;
//!
//! # fn demo(fs: Arc<dyn Filesystem>) -> DocsResult<()> {
//! let pages = PageService::new(fs);
//! pages.write_version_page(Path::new("docs"), "1.2.0", &DocConfig::default())?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DeleteOptions, DeleteReport, DeleteService, MigrationReport, MigrateService, PageService,
        RegistryChange, RegistryService, ports::Filesystem,
    };
    pub use crate::domain::{DocConfig, VersionKey, VersionList, version_key};
    pub use crate::error::{DocsError, DocsResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
