//! Configuration validation utilities.

use super::ConfigError;
use super::models::*;

/// Validate the entire configuration.
pub fn validate_config(config: &MemrankConfig) -> Result<(), ConfigError> {
    validate_logging_config(&config.logging)?;

    Ok(())
}

/// Validate logging configuration.
fn validate_logging_config(config: &LoggingConfig) -> Result<(), ConfigError> {
    if let Some(file) = &config.file {
        if file.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "Log file path cannot be empty".to_string(),
            ));
        }
        if file.file_name().is_none() {
            return Err(ConfigError::ValidationError(format!(
                "Log file path must name a file: {}",
                file.display()
            )));
        }
    }

    Ok(())
}
