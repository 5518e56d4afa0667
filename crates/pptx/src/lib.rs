//! PPTX (Office Open XML) backend for slide and speaker-notes extraction.
//!
//! Parses .pptx files, which are ZIP archives of XML parts linked by
//! relationship files, into the object model of `slidenotes-core`.

pub mod package;
pub mod parser;

#[cfg(test)]
mod fixtures;

pub use package::{Package, Relationship};
pub use parser::PptxParser;

use slidenotes_core::{Error, Presentation, ReportFormatter, Result};
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// Open and parse a presentation file.
pub fn open(path: &Path) -> Result<Presentation> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::PackageNotFound(path.display().to_string()),
        _ => Error::IoError(e),
    })?;

    PptxParser::new().parse(BufReader::new(file))
}

/// Build the Markdown report for a presentation file.
///
/// No partial report is produced: any failure while opening or
/// traversing the file is returned as the error.
pub fn extract_report(path: &Path) -> Result<String> {
    let presentation = open(path)?;
    log::debug!(
        "Extracted {} slides from {}",
        presentation.slide_count(),
        path.display()
    );

    Ok(ReportFormatter::new().format(&path.display().to_string(), &presentation))
}
