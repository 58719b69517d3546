use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Caller-supplied input was empty or unusable; the message is client-facing
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    InvalidDomain(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Suggestion generation failed: {0}")]
    SuggestionFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<domainscout_registrar_api::DomainNameError> for DomainError {
    fn from(err: domainscout_registrar_api::DomainNameError) -> Self {
        DomainError::InvalidDomain(err.to_string())
    }
}
