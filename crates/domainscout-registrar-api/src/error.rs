use thiserror::Error;

use crate::types::QuoteErrorKind;

/// Adapter error types
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("not_configured: {0}")]
    NotConfigured(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Request rejected: {0}")]
    RequestRejected(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AdapterError {
    /// Quote-level classification of this error
    pub fn kind(&self) -> QuoteErrorKind {
        match self {
            AdapterError::NotConfigured(_) | AdapterError::InvalidConfig(_) => {
                QuoteErrorKind::NotConfigured
            }
            AdapterError::NetworkError(_) => QuoteErrorKind::Network,
            AdapterError::AuthenticationFailed(_)
            | AdapterError::RequestRejected(_)
            | AdapterError::ApiError(_) => QuoteErrorKind::Upstream,
            AdapterError::InvalidResponse(_) => QuoteErrorKind::InvalidResponse,
            AdapterError::Internal(_) => QuoteErrorKind::Internal,
        }
    }

    /// Whether the same request may succeed when retried
    pub fn is_transient(&self) -> bool {
        matches!(self, AdapterError::NetworkError(_) | AdapterError::ApiError(_))
    }
}

pub type AdapterResult<T> = Result<T, AdapterError>;

// Conversion from serde_json errors
impl From<serde_json::Error> for AdapterError {
    fn from(err: serde_json::Error) -> Self {
        AdapterError::InvalidResponse(err.to_string())
    }
}

impl From<reqwest::Error> for AdapterError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AdapterError::InvalidResponse(err.to_string())
        } else if err.is_builder() {
            AdapterError::Internal(err.to_string())
        } else {
            AdapterError::NetworkError(err.to_string())
        }
    }
}

impl AdapterError {
    /// Classify a non-success HTTP status from a registrar API
    pub fn from_status(status: reqwest::StatusCode, context: &str) -> Self {
        match status.as_u16() {
            401 | 403 => AdapterError::AuthenticationFailed(format!(
                "{context}: credentials rejected ({status})"
            )),
            429 => AdapterError::ApiError(format!("{context}: rate limited")),
            500..=599 => AdapterError::ApiError(format!("{context}: upstream returned {status}")),
            _ => AdapterError::RequestRejected(format!("{context}: unexpected status {status}")),
        }
    }
}
