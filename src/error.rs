use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Domain errors
// ---------------------------------------------------------------------------

/// Failures of the compress / extract operations.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// A required form field (file list, archive path or destination) is empty.
    #[error("no input files or destination given")]
    MissingInput,

    #[error("file not found: \"{}\"", .0.display())]
    NotFound(PathBuf),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Failures of the feet/inches to meters conversion.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    /// Empty, non-numeric or non-finite text.
    #[error("not a valid number")]
    Invalid,

    /// Zero or negative value.
    #[error("value must be greater than zero")]
    NotPositive,
}

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("unsupported image type: .{0} (expected jpg, jpeg or png)")]
    UnsupportedFormat(String),

    #[error("reading image: {0}")]
    Io(#[from] std::io::Error),

    #[error("decoding image: {0}")]
    Decode(#[from] image::ImageError),
}
