use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Domain constraint violated: {0}")]
    DomainConstraintViolation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GenError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
