//! Embedview session configuration.
//!
//! Provides TOML-based configuration for a browsing session: the target URL,
//! query parameters, extra request headers, host window, browser options and
//! logging. All sections use defaults so partial configs work.
//!
//! ```rust,no_run
//! use embedview_config::{validation, ConfigFile};
//!
//! # fn main() -> Result<(), embedview_common::ConfigError> {
//! let mut config = ConfigFile::platform_default()?.read_or_create()?;
//! config.session.url = "https://example.com/page".into();
//! validation::validate(&config)?;
//! # Ok(())
//! # }
//! ```

pub mod config_file;
pub mod schema;
pub mod validation;

pub use config_file::ConfigFile;
pub use schema::SessionConfig;
