//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod helpers;
mod sections;


use crate::schema::SessionConfig;
use embedview_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SessionConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_session(&mut errors, config);
    sections::validate_window(&mut errors, config);
    sections::validate_browser(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
