//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the resolved
//! [`DocConfig`] and paths.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site through the `resolve_*` helpers)
//! 2. Config file given with `--config`
//! 3. Built-in defaults (always present)
//!
//! ```toml
//! [docs]
//! dir = "public/docs"
//! title = "ReelAPI v2"
//! subtitle = "Cable Reel Control System API Reference"
//!
//! [output]
//! no_color = true
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use reeldocs_core::domain::DocConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Documentation site settings.
    pub docs: DocsConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    pub dir: PathBuf,
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("docs"),
            title: None,
            subtitle: None,
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`; without one
    /// the built-in defaults are returned.  A file that was asked for must
    /// exist and parse.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = config_file else {
            return Ok(Self::default());
        };

        config::Config::builder()
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(true),
            )
            .build()
            .with_context(|| format!("failed to read {}", path.display()))?
            .try_deserialize()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// `--docs-dir` if given, else `[docs] dir`.
    pub fn resolve_docs_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.unwrap_or_else(|| self.docs.dir.clone())
    }

    /// Page settings with `--title` taking precedence over `[docs] title`.
    pub fn resolve_doc_config(&self, title_flag: Option<String>) -> DocConfig {
        let mut cfg = DocConfig::default();
        if let Some(title) = title_flag.or_else(|| self.docs.title.clone()) {
            cfg.title = title;
        }
        if let Some(subtitle) = &self.docs.subtitle {
            cfg.subtitle = subtitle.clone();
        }
        cfg
    }
}
