//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world.
//! Adapters in `reeldocs-adapters` implement them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: called by application, implemented by infrastructure
//!   - `Filesystem`: file and directory operations under the docs directory

pub mod output;

pub use output::Filesystem;

#[cfg(test)]
pub use output::MockFilesystem;
