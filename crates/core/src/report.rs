//! Markdown report output.
//!
//! Produces a fixed header followed by one section per slide:
//!
//! ```text
//! # PowerPoint Content Extraction
//! File: deck.pptx
//! Total slides: 1
//!
//! ## Slide 1
//! ### Slide Content:
//! - Welcome
//! ### Speaker Notes:
//! - [No notes slide]
//!
//! ```

use crate::collect::{collect_slide, NotesText};
use crate::error::Result;
use crate::types::Presentation;

/// Prefix of the single line printed when extraction fails.
pub const ERROR_PREFIX: &str = "Error extracting PowerPoint content: ";

const TITLE: &str = "# PowerPoint Content Extraction";
const CONTENT_HEADING: &str = "### Slide Content:";
const NOTES_HEADING: &str = "### Speaker Notes:";
const NO_TEXT_CONTENT: &str = "[No text content]";
const NO_NOTES: &str = "[No notes]";
const NO_NOTES_SLIDE: &str = "[No notes slide]";

/// Formatter for the Markdown extraction report.
#[derive(Debug, Clone, Default)]
pub struct ReportFormatter;

impl ReportFormatter {
    /// Create a new formatter.
    pub fn new() -> Self {
        Self
    }

    /// Report lines for a presentation read from `source`.
    pub fn lines(&self, source: &str, presentation: &Presentation) -> Vec<String> {
        let mut lines = vec![
            TITLE.to_string(),
            format!("File: {}", source),
            format!("Total slides: {}", presentation.slide_count()),
            String::new(),
        ];

        for (idx, slide) in presentation.slides.iter().enumerate() {
            let texts = collect_slide(slide);

            lines.push(format!("## Slide {}", idx + 1));

            lines.push(CONTENT_HEADING.to_string());
            push_bullets(&mut lines, &texts.content, NO_TEXT_CONTENT);

            lines.push(NOTES_HEADING.to_string());
            match &texts.notes {
                NotesText::Present(notes) => push_bullets(&mut lines, notes, NO_NOTES),
                NotesText::Missing => lines.push(bullet(NO_NOTES_SLIDE)),
            }

            lines.push(String::new());
        }

        lines
    }

    /// Format the full report as a single string.
    pub fn format(&self, source: &str, presentation: &Presentation) -> String {
        self.lines(source, presentation).join("\n")
    }
}

fn bullet(text: &str) -> String {
    format!("- {}", text)
}

fn push_bullets(lines: &mut Vec<String>, texts: &[String], placeholder: &str) {
    if texts.is_empty() {
        lines.push(bullet(placeholder));
    } else {
        lines.extend(texts.iter().map(|t| bullet(t)));
    }
}

/// Flatten an extraction result into printable text: the report itself,
/// or the one-line error message.
pub fn render_outcome(result: Result<String>) -> String {
    match result {
        Ok(report) => report,
        Err(e) => format!("{}{}", ERROR_PREFIX, e),
    }
}
