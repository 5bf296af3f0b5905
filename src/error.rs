use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WsStegoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("File '{}' is not valid UTF-8 text", .0.display())]
    InvalidText(PathBuf),

    #[error("Unsupported bit assignment: {0}")]
    UnsupportedAssignment(String),
}

pub type Result<T> = std::result::Result<T, WsStegoError>;
