//! Per-section validators.

use crate::schema::SessionConfig;

use super::helpers::{validate_header, validate_range};

/// An empty URL is allowed here: the host may supply it on the command line.
pub(crate) fn validate_session(errors: &mut Vec<String>, config: &SessionConfig) {
    let session = &config.session;
    if !session.url.is_empty() {
        if let Err(e) = url::Url::parse(&session.url) {
            errors.push(format!("session.url {:?} is not an absolute URL: {e}", session.url));
        }
    }

    for (name, value) in &session.headers {
        validate_header(errors, name, value);
    }

    for name in session.query.keys() {
        if name.is_empty() {
            errors.push("session.query: empty parameter name".to_string());
        }
    }
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &SessionConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 8192);
    validate_range(errors, "window.height", config.window.height, 200, 8192);
}

pub(crate) fn validate_browser(errors: &mut Vec<String>, config: &SessionConfig) {
    if let Some(ua) = &config.browser.user_agent {
        if ua.trim().is_empty() {
            errors.push("browser.user_agent is set but empty".to_string());
        }
    }
}
