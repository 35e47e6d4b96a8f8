use thiserror::Error;

/// Library-level error type.
///
/// Layout construction and registry mutation report recoverable validation
/// failures; the barcode wrapper surfaces its collaborators' failures
/// unchanged.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("page size \"{0}\" is already registered")]
    DuplicateSize(String),

    #[error("barcode encoding error: {0}")]
    Barcode(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
