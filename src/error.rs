use std::path::PathBuf;

use thiserror::Error;

/// Viewer error type.
#[derive(Error, Debug)]
pub enum Error {
    /// File could not be decoded as an image
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Zero-sized image handed to the transform engine
    #[error("empty image: {width}x{height}")]
    EmptyImage { width: usize, height: usize },

    /// Transform parameter outside the usable domain
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for viewer operations
pub type Result<T> = std::result::Result<T, Error>;
