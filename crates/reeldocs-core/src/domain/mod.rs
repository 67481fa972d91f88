//! Domain layer: pure values and transformations.
//!
//! Nothing in here performs I/O. Services in [`crate::application`] load and
//! persist these values through the filesystem port.

pub mod doc_config;
pub mod error;
pub mod page;
pub mod version;
pub mod version_list;

pub use doc_config::DocConfig;
pub use error::DomainError;
pub use page::{
    REQUIRED_HOOKS, RenderContext, missing_script_hooks, render_landing_page, render_version_page,
};
pub use version::{VersionKey, normalize_version, version_key};
pub use version_list::{UNKNOWN_VERSION, VersionList, entry_text};
