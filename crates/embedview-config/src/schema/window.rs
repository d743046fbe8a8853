//! Host window configuration types.

use serde::{Deserialize, Serialize};

/// Host window appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title shown until the page reports its own.
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 200-8192).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 200-8192).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Embedview".into(),
            width: 1024,
            height: 768,
        }
    }
}
