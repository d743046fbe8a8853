//! Browser engine options.

use serde::{Deserialize, Serialize};

/// Options handed to the embedded engine when the surface is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Custom user agent string. `None` keeps the engine's own.
    pub user_agent: Option<String>,
    /// Whether to enable dev tools.
    pub devtools: bool,
    /// Whether the surface background should be transparent.
    pub transparent: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            user_agent: None,
            devtools: cfg!(debug_assertions),
            transparent: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_config_defaults() {
        let config = BrowserConfig::default();
        assert!(config.user_agent.is_none());
        assert_eq!(config.devtools, cfg!(debug_assertions));
        assert!(!config.transparent);
    }

    #[test]
    fn browser_config_user_agent_from_toml() {
        let config: BrowserConfig = toml::from_str(r#"user_agent = "Embedview/0.1""#).unwrap();
        assert_eq!(config.user_agent.as_deref(), Some("Embedview/0.1"));
    }
}
