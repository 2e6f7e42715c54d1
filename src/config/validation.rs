use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::config::models::{LoggingConfig, ServerConfig, ShowcaseConfig};

/// Validation result type alias
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation error types
#[derive(Debug, thiserror::Error, Clone)]
pub enum ValidationError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid field '{field}': {message}")]
    InvalidField { field: String, message: String },

    #[error("Invalid listen address '{address}': {reason}")]
    InvalidListenAddress { address: String, reason: String },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },
}

/// Server configuration validator
pub struct ServerConfigValidator;

impl ServerConfigValidator {
    /// Validate the entire server configuration, collecting every problem.
    pub fn validate(config: &ServerConfig) -> ValidationResult<()> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_listen_address(&config.listen_addr) {
            errors.push(e);
        }

        if let Err(e) = Self::validate_logging(&config.logging) {
            errors.push(e);
        }

        errors.extend(Self::validate_showcase(&config.showcase));

        if config.shutdown_timeout_secs == 0 {
            errors.push(ValidationError::InvalidField {
                field: "shutdown_timeout_secs".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::ValidationFailed {
                message: Self::format_multiple_errors(errors),
            })
        }
    }

    fn validate_listen_address(address: &str) -> ValidationResult<()> {
        if address.parse::<SocketAddr>().is_err() {
            return Err(ValidationError::InvalidListenAddress {
                address: address.to_string(),
                reason: "Must be in format 'IP:PORT' (e.g., '127.0.0.1:8000' or '0.0.0.0:8080')"
                    .to_string(),
            });
        }
        Ok(())
    }

    fn validate_logging(logging: &LoggingConfig) -> ValidationResult<()> {
        if logging.level.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "logging.level".to_string(),
            });
        }
        EnvFilter::try_new(&logging.level).map_err(|e| ValidationError::InvalidField {
            field: "logging.level".to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    fn validate_showcase(showcase: &ShowcaseConfig) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if showcase.framework.trim().is_empty() {
            errors.push(ValidationError::MissingField {
                field: "showcase.framework".to_string(),
            });
        }
        if showcase.framework_version.trim().is_empty() {
            errors.push(ValidationError::MissingField {
                field: "showcase.framework_version".to_string(),
            });
        }
        errors
    }

    fn format_multiple_errors(errors: Vec<ValidationError>) -> String {
        if errors.len() == 1 {
            return errors[0].to_string();
        }
        let mut message = format!("{} configuration errors:", errors.len());
        for (i, error) in errors.iter().enumerate() {
            message.push_str(&format!("\n  {}. {}", i + 1, error));
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_default_config() {
        assert!(ServerConfigValidator::validate(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn validate_rejects_bad_listen_address() {
        let config = ServerConfig::builder().listen_addr("localhost").build();
        let err = ServerConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("Invalid listen address 'localhost'"));
    }

    #[test]
    fn validate_rejects_unparsable_log_level() {
        let config = ServerConfig::builder().log_level("info,=[").build();
        let err = ServerConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn validate_aggregates_multiple_errors() {
        let config = ServerConfig::builder()
            .listen_addr("nope")
            .framework("", "")
            .shutdown_timeout_secs(0)
            .build();
        let err = ServerConfigValidator::validate(&config).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("4 configuration errors"), "{message}");
        assert!(message.contains("showcase.framework_version"));
        assert!(message.contains("shutdown_timeout_secs"));
    }
}
