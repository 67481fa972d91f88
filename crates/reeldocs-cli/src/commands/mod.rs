//! Command handlers, one module per subcommand.
//!
//! Each handler resolves flags against [`crate::config::AppConfig`], wires a
//! core service to the local filesystem, and reports through
//! [`crate::output::OutputManager`].

use std::sync::Arc;

use reeldocs_adapters::LocalFilesystem;
use reeldocs_core::application::ports::Filesystem;

pub mod add;
pub mod delete;
pub mod generate;
pub mod latest;
pub mod list;
pub mod migrate;

/// Filesystem port shared by the services of a single command.
fn filesystem() -> Arc<dyn Filesystem> {
    Arc::new(LocalFilesystem::new())
}
