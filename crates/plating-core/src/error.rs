use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidStructure(String),

    #[error("Invalid URL pattern: {0}")]
    InvalidPattern(String),

    #[error("Platform not supported: {0}")]
    UnsupportedPlatform(String),
}

pub type Result<T> = std::result::Result<T, Error>;
