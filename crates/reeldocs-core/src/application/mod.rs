//! Application layer for reeldocs.
//!
//! This layer contains:
//! - **Services**: use case orchestration (registry upkeep, page generation,
//!   version deletion, template migration)
//! - **Ports**: the `Filesystem` trait every effect goes through
//!
//! Services coordinate the domain layer but hold no rules of their own:
//! ordering lives in `domain::version`, markup in `domain::page`.

pub mod ports;
pub mod services;

pub use services::{
    DeleteOptions, DeleteReport, DeleteService, MigrationReport, MigrateService, PageService,
    RegistryChange, RegistryService,
};

pub use ports::Filesystem;

/// File name of the version registry inside the docs directory.
pub const REGISTRY_FILE: &str = "versions.json";
/// File name of every generated page.
pub const INDEX_FILE: &str = "index.html";
/// Shared client-side script the generated pages depend on.
pub const SCRIPTS_FILE: &str = "scripts.js";
/// Per-version OpenAPI document.
pub const OPENAPI_FILE: &str = "openapi.json";
