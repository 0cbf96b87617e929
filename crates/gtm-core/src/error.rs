use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GtmError {
    #[error("Invalid payload")]
    InvalidPayload,

    #[error("invalid {field} '{value}'")]
    InvalidOption { field: &'static str, value: String },

    #[error("invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("config not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl GtmError {
    /// True for errors caused by the caller's request body rather than the
    /// environment.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            GtmError::InvalidPayload | GtmError::InvalidOption { .. } | GtmError::InvalidJson(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GtmError>;
