//! Error types for the sg-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// gives frontends one error interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Data format error in {record}: {reason}")]
    DataFormat { record: String, reason: String },

    #[error("Upstream fetch from {source_name} failed: {reason}")]
    UpstreamFetch { source_name: String, reason: String },

    #[error("Graph synthesis failed: {0}")]
    Synthesis(String),

    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sg-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<sg_source::SourceError> for AppError {
    fn from(err: sg_source::SourceError) -> Self {
        match err {
            sg_source::SourceError::DataFormat { record, reason } => {
                AppError::DataFormat { record, reason }
            }
            sg_source::SourceError::UpstreamFetch {
                source_name,
                reason,
            } => AppError::UpstreamFetch {
                source_name,
                reason,
            },
            sg_source::SourceError::Layout(e) => AppError::Synthesis(e.to_string()),
        }
    }
}

impl From<sg_core::SgError> for AppError {
    fn from(err: sg_core::SgError) -> Self {
        AppError::Synthesis(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
