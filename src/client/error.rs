//! Client error types

use thiserror::Error;

/// Errors returned by the reservation API client
#[derive(Debug, Error)]
pub enum ClientError {
    /// An href could not be turned into a request URL
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection or transport failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("{}", status_message(*status, message.as_deref()))]
    Status { status: u16, message: Option<String> },

    /// Body is not the expected document
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A control names a method that is not a valid HTTP method
    #[error("Invalid method '{method}' in control '{href}'")]
    InvalidMethod { method: String, href: String },

    /// A hypermedia control the operation relies on is absent
    #[error("Missing control '{rel}'")]
    MissingControl { rel: String },

    #[error("Not found: {what}")]
    NotFound { what: String },
}

fn status_message(status: u16, message: Option<&str>) -> String {
    match message {
        Some(message) => format!("Server returned {}: {}", status, message),
        None => format!("Server returned {}", status),
    }
}

impl ClientError {
    pub fn missing_control(rel: &str) -> Self {
        Self::MissingControl {
            rel: rel.to_string(),
        }
    }

    /// HTTP status of the failed response, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
