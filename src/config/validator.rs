use axum::http::HeaderValue;
use thiserror::Error;

use crate::config::{CorsSettings, ServerSettings, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = Self::validate_server(&settings.server) {
            errors.extend(e);
        }

        if let Err(e) = Self::validate_cors(&settings.cors) {
            errors.extend(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_cors(cors: &CorsSettings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if cors.allow_origins.is_empty() {
            errors.push(ValidationError::MissingField("cors.allow_origins".to_string()));
        }

        for (idx, origin) in cors.allow_origins.iter().enumerate() {
            if origin == "*" {
                continue;
            }
            if !(origin.starts_with("http://") || origin.starts_with("https://"))
                || HeaderValue::from_str(origin).is_err()
            {
                errors.push(ValidationError::InvalidValue {
                    field: format!("cors.allow_origins[{}]", idx),
                    reason: format!("'{}' is not a valid origin", origin),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(ConfigValidator::validate(&Settings::default()).is_ok());
    }

    #[test]
    fn test_reports_every_problem() {
        let mut settings = Settings::default();
        settings.server.host = String::new();
        settings.server.port = 0;
        settings.cors.allow_origins = vec!["localhost:3000".to_string(), "http://ok.dev".to_string()];

        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[2].to_string().contains("cors.allow_origins[0]"));
    }

    #[test]
    fn test_empty_origin_list_is_rejected() {
        let mut settings = Settings::default();
        settings.cors.allow_origins.clear();
        let errors = ConfigValidator::validate(&settings).unwrap_err();
        assert!(matches!(&errors[0], ValidationError::MissingField(f) if f == "cors.allow_origins"));
    }
}
