use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by a logger to its immediate caller.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("invalid severity: {0:?}")]
    InvalidSeverity(String),

    #[error("invalid timestamp format: {0:?}")]
    InvalidDateFormat(String),

    #[error("log destination unavailable ({}): {reason}", path_display(.path))]
    SinkUnavailable {
        path: Option<PathBuf>,
        reason: String,
    },

    #[error("failed to write log entry: {0}")]
    Io(#[from] io::Error),
}

impl LogError {
    pub(crate) fn sink_unavailable(path: Option<PathBuf>, reason: impl Into<String>) -> Self {
        Self::SinkUnavailable {
            path,
            reason: reason.into(),
        }
    }
}

fn path_display(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "no directory".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, LogError>;
