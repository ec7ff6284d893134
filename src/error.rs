//! Error types shared by the projection engine, chart adapter and loaders

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimulatorError>;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("render target is not attached")]
    TargetUnavailable,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl SimulatorError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
