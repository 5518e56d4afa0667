//! Error types for slide and speaker-notes extraction.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while opening or traversing a presentation.
///
/// Every variant is reported to the user the same way (see
/// [`render_outcome`](crate::render_outcome)); the split only exists to
/// keep log output specific.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// The input path does not exist.
    #[error("Package not found at '{0}'")]
    PackageNotFound(String),

    /// The package is readable but is not a presentation.
    #[error("Unsupported or unrecognized file format: {0}")]
    UnsupportedFormat(String),

    /// The presentation structure is inconsistent.
    #[error("PPTX parsing error: {0}")]
    PptxParseError(String),

    /// A part referenced by the package is absent from the archive.
    #[error("Missing package part: {0}")]
    MissingPart(String),

    /// ZIP archive error.
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML parsing error in one of the package parts.
    #[error("XML parsing error: {0}")]
    XmlError(String),
}
