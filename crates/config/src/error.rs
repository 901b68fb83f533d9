#![forbid(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to extract config: {0}")]
    Extract(#[from] figment::Error),

    #[error("invalid path: {0}")]
    InvalidPath(PathBuf),
}
