use std::path::PathBuf;

/// Failures a web-view session reports to its delegate.
///
/// These never surface as `Err` from the component's public API; the
/// presenter hands them to `WebViewDelegate::on_fail` exactly once per
/// occurrence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WebViewError {
    #[error("could not parse url")]
    InvalidUrl,

    #[error("http error: {0}")]
    HttpError(u16),

    #[error("invalid header: {0}")]
    InvalidHeader(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}
