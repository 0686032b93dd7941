use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CrmError {
    #[error("prospect data file not found: {0}")]
    DataFileMissing(PathBuf),

    #[error("overlay for '{company}' is corrupt: {reason}")]
    CorruptOverlay { company: String, reason: String },

    #[error("invalid status '{0}': expected one of new, cold, warm, hot")]
    InvalidStatus(String),

    #[error("invalid follow-up kind '{0}': expected one of call, email, meeting, site_visit")]
    InvalidFollowupKind(String),

    #[error("invalid follow-up timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("messenger tool '{0}' not found on PATH")]
    MessengerNotFound(String),

    #[error("failed to spawn '{program}': {reason}")]
    SpawnFailed { program: String, reason: String },

    #[error("'{program}' exited with {status}: {stderr}")]
    External {
        program: String,
        status: String,
        stderr: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CrmError>;
