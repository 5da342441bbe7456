//! Error types for Rolo.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RoloError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
