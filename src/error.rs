use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single classification call. The pipeline stays ready for the next call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("Failed to preprocess image: {0}")]
    Preprocess(String),

    #[error("Inference failed: {0}")]
    Inference(String),
}

/// Startup failures. These are logged and absorbed, never returned from a classification call.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to load model at '{path}': {reason}")]
    Model { path: PathBuf, reason: String },

    #[error("Failed to load catalog at '{path}': {reason}")]
    Catalog { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog document: {0}")]
    Json(#[from] serde_json::Error),
}
