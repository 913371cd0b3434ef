//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Separates decode and encode failures (both fatal at the process boundary) from
//! argument validation and resampling failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to open image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to save image {path:?}: {reason}")]
    Encode { path: PathBuf, reason: String },

    #[error("Unsupported output format for {path:?}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Image buffer error: {0}")]
    ImageBuffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    pub fn encode<E: std::fmt::Display>(path: impl Into<PathBuf>, e: E) -> Self {
        Error::Encode {
            path: path.into(),
            reason: e.to_string(),
        }
    }
}
