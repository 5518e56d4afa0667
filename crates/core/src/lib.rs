//! Core object model, text collection, and Markdown report formatting
//! for slide and speaker-notes extraction.

pub mod collect;
pub mod error;
pub mod report;
pub mod types;

pub use collect::{collect_slide, NotesText, SlideTexts};
pub use error::{Error, Result};
pub use report::{render_outcome, ReportFormatter};
pub use types::{NotesSlide, Presentation, Shape, ShapeKind, Slide};
