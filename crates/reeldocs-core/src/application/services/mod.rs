//! Application services - orchestrate use cases.
//!
//! Each service owns a shared handle to the filesystem port and exposes one
//! use case (or a small family of them) to the CLI.

pub mod delete_service;
pub mod migrate_service;
pub mod page_service;
pub mod registry_service;

pub use delete_service::{DeleteOptions, DeleteReport, DeleteService, RegistryChange};
pub use migrate_service::{MigrateService, MigrationReport, VersionOutcome};
pub use page_service::PageService;
pub use registry_service::RegistryService;
