use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "ReelAPI v1";
pub const DEFAULT_SUBTITLE: &str = "Cable Reel Control System API Reference";

/// Display settings threaded into page rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocConfig {
    /// Site title, e.g. `ReelAPI v1`.
    pub title: String,
    /// Tagline shown under the landing page heading.
    pub subtitle: String,
}

impl DocConfig {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            subtitle: DEFAULT_SUBTITLE.into(),
        }
    }
}
