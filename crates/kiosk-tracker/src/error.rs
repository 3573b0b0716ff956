use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("unknown user id: {0}")]
    UserNotFound(String),
}
