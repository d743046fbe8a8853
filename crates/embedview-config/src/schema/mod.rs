//! Configuration schema types for an embedview session.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod browser;
mod logging;
mod session;
mod window;

pub use browser::*;
pub use logging::*;
pub use session::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for an embedview session.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    pub session: SessionSection,
    pub window: WindowConfig,
    pub browser: BrowserConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_toml_parses_every_section() {
        let toml_str = r#"
[session]
url = "https://example.com/page"

[session.query]
lang = "en"

[session.headers]
X-Client = "v1"

[window]
title = "Portal"

[browser]
devtools = true

[logging]
level = "DEBUG"
"#;
        let config: SessionConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.url, "https://example.com/page");
        assert_eq!(config.session.query["lang"], "en");
        assert_eq!(config.session.headers["X-Client"], "v1");
        assert_eq!(config.window.title, "Portal");
        assert!(config.browser.devtools);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config: SessionConfig = toml::from_str("").unwrap();
        assert!(config.session.url.is_empty());
        assert!(config.session.query.is_empty());
        assert_eq!(config.window.title, "Embedview");
        assert_eq!(config.logging.level, LogLevel::Info);
    }
}
