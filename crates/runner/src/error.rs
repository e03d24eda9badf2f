//! Runner error types

use std::io;
use std::path::PathBuf;

use agora_core::{ScheduleError, TraderConfigError};
use agora_ports::SessionError;
use thiserror::Error;

/// Errors surfaced while orchestrating experiments
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Schedule construction failed: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("Trader configuration rejected: {0}")]
    TraderConfig(#[from] TraderConfigError),

    #[error("Failed to open sink file {path}: {source}")]
    SinkOpen { path: PathBuf, source: io::Error },

    #[error("Failed to flush sink file {path}: {source}")]
    SinkFlush { path: PathBuf, source: io::Error },

    #[error("Session failed for trial {trial_id}: {source}")]
    Session {
        trial_id: String,
        source: SessionError,
    },
}

/// Result type for runner operations
pub type RunnerResult<T> = std::result::Result<T, RunnerError>;
