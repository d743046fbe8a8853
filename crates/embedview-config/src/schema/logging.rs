//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing_subscriber::EnvFilter` directive for the embedview crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "embedview=trace",
            LogLevel::Debug => "embedview=debug",
            LogLevel::Info => "embedview=info",
            LogLevel::Warning => "embedview=warn",
            LogLevel::Error => "embedview=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
