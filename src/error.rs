use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("No input supplied: pass an input directory with -i or a list of image files")]
    MissingInput,

    #[error("No output supplied: pass an output file with -of or an output directory with -od")]
    MissingOutput,

    #[error("Compression requires an API key from tinypng.com (-k)")]
    MissingApiKey,

    #[error("Invalid scale factor: {0}. Must be a finite number >= 0")]
    InvalidScale(f64),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walkdir error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Output directory {path:?} is not accessible: {source}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("empty input")]
    EmptyInput,

    #[error("Failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode {path:?}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Merged canvas is too large: {0}x{1}")]
    CanvasTooLarge(u64, u64),

    #[error("compress fail: {0}")]
    CompressSubmit(String),

    #[error("output fail: {0}")]
    CompressOutput(String),
}

impl MergeError {
    /// Errors caused by the command line rather than by the images or the filesystem.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            MergeError::MissingInput
                | MergeError::MissingOutput
                | MergeError::MissingApiKey
                | MergeError::InvalidScale(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MergeError>;
