use reqwest::Url;
use thiserror::Error;

use crate::config::Settings;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    /// Collects every problem instead of stopping at the first one.
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        Self::validate_base_url(&settings.api.base_url, &mut errors);

        if settings.api.entrypoint.trim().is_empty() {
            errors.push(ValidationError::MissingField("api.entrypoint".to_string()));
        }
        if settings.api.mason_mime.trim().is_empty() {
            errors.push(ValidationError::MissingField("api.mason_mime".to_string()));
        }
        if settings.api.json_mime.trim().is_empty() {
            errors.push(ValidationError::MissingField("api.json_mime".to_string()));
        }

        if settings.timeout_seconds == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "timeout_seconds".to_string(),
                reason: "Timeout must be greater than 0".to_string(),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_base_url(base_url: &str, errors: &mut Vec<ValidationError>) {
        if base_url.trim().is_empty() {
            errors.push(ValidationError::MissingField("api.base_url".to_string()));
            return;
        }

        match Url::parse(base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => errors.push(ValidationError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: format!("Unsupported scheme '{}'", url.scheme()),
            }),
            Err(e) => errors.push(ValidationError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
