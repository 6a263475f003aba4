use std::path::PathBuf;

use thiserror::Error;

/// Error taxonomy for a scoring session. Every variant is terminal for the
/// session that produced it; nothing here is retried.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to load `{path}`: {message}")]
    Load { path: PathBuf, message: String },

    #[error("no text columns found")]
    NoTextColumns,

    #[error("column `{name}` is not one of the detected text columns")]
    InvalidColumn { name: String },

    #[error("analyzer choice `{choice}` is not one of 1, 2, 3")]
    InvalidAnalyzer { choice: String },

    #[error("analysis failed: {message}")]
    Analysis { message: String },
}

impl ScanError {
    pub fn load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ScanError::Load {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn analysis(message: impl Into<String>) -> Self {
        ScanError::Analysis {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
