use thiserror::Error;

/// Failures reported by a market session implementation
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid session request: {0}")]
    InvalidRequest(String),

    #[error("Session failed: {0}")]
    Failed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type SessionResult<T> = std::result::Result<T, SessionError>;
