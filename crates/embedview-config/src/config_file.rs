//! The session file on disk.
//!
//! `ConfigFile` knows where the file lives, reads it into a `SessionConfig`,
//! and writes a commented template the first time the platform default is
//! used. Reading never validates: the host overlays command-line values
//! first and validates the merged result.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use embedview_common::ConfigError;
use tracing::{debug, info};

use crate::schema::SessionConfig;

const APP_DIR: &str = "embedview";
const FILE_NAME: &str = "config.toml";

/// Written on first run. Every setting is commented out so the defaults in
/// `schema` stay authoritative.
const TEMPLATE: &str = r##"# Embedview session
# Uncomment what you need; anything left out uses its default.

[session]
# url = "https://example.com/page"   # absolute; --url overrides it

[session.query]
# lang = "en"                        # merged into the URL's query

[session.headers]
# X-Client = "v1"                    # sent with the first request

[window]
# title = "Embedview"
# width = 1024                       # 200-8192
# height = 768                       # 200-8192

[browser]
# user_agent = "Embedview/0.1"
# devtools = false
# transparent = false

[logging]
# level = "INFO"                     # TRACE, DEBUG, INFO, WARNING, ERROR
"##;

/// Location of a session file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<platform config dir>/embedview/config.toml`, e.g.
    /// `~/.config/embedview/config.toml` on Linux.
    pub fn platform_default() -> Result<Self, ConfigError> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::ParseError("could not determine the platform config directory".into())
        })?;
        Ok(Self::at(dir.join(APP_DIR).join(FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the file. Missing sections and fields take their defaults.
    pub fn read(&self) -> Result<SessionConfig, ConfigError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ConfigError::FileNotFound(self.path.clone()));
            }
            Err(e) => {
                return Err(ConfigError::ParseError(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };

        let config = toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {e}", self.path.display())))?;
        debug!(path = %self.path.display(), "session config read");
        Ok(config)
    }

    /// Like `read`, but a missing file is replaced by the template and the
    /// defaults are returned.
    pub fn read_or_create(&self) -> Result<SessionConfig, ConfigError> {
        match self.read() {
            Err(ConfigError::FileNotFound(_)) => {
                self.write_template()?;
                Ok(SessionConfig::default())
            }
            other => other,
        }
    }

    fn write_template(&self) -> Result<(), ConfigError> {
        let write_error = |e: std::io::Error| {
            ConfigError::ParseError(format!(
                "failed to write template to {}: {e}",
                self.path.display()
            ))
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        std::fs::write(&self.path, TEMPLATE).map_err(write_error)?;
        info!("created session config template at {}", self.path.display());
        Ok(())
    }
}
