use thiserror::Error;

pub type PurpleResult<T> = Result<T, PurpleError>;

/// Failures of the surfaces around the calculator. Evaluation itself is
/// total and never produces one of these.
#[derive(Error, Debug)]
pub enum PurpleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Profile error: {0}")]
    Profile(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<config::ConfigError> for PurpleError {
    fn from(err: config::ConfigError) -> Self {
        PurpleError::Config(err.to_string())
    }
}
