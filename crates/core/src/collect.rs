//! Text collection for a slide and its speaker notes.
//!
//! Slide content is the trimmed, non-blank text of each shape in order.
//! Notes text follows the same rule, minus any note that is exactly equal
//! to a piece of slide content (notes pages often echo the slide title).

use crate::types::{Shape, Slide};

/// Collected text of one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideTexts {
    /// Non-blank shape texts of the slide, in shape order.
    pub content: Vec<String>,

    /// Speaker notes state.
    pub notes: NotesText,
}

/// Speaker-notes text of one slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesText {
    /// The slide has no notes container.
    Missing,
    /// Notes texts remaining after removing echoes of slide content.
    /// May be empty.
    Present(Vec<String>),
}

/// Trimmed, non-blank text of each shape, in order.
pub fn shape_texts(shapes: &[Shape]) -> Vec<String> {
    shapes
        .iter()
        .filter_map(Shape::trimmed_text)
        .map(str::to_string)
        .collect()
}

/// Trimmed, non-blank notes texts not exactly equal to any slide text.
pub fn notes_texts(shapes: &[Shape], slide_texts: &[String]) -> Vec<String> {
    shapes
        .iter()
        .filter_map(Shape::trimmed_text)
        .filter(|text| {
            let echoed = slide_texts.iter().any(|s| s == text);
            if echoed {
                log::debug!("Dropping note that repeats slide content: {:?}", text);
            }
            !echoed
        })
        .map(str::to_string)
        .collect()
}

/// Collect slide content and notes text for a slide.
pub fn collect_slide(slide: &Slide) -> SlideTexts {
    let content = shape_texts(&slide.shapes);
    let notes = match &slide.notes {
        Some(notes) => NotesText::Present(notes_texts(&notes.shapes, &content)),
        None => NotesText::Missing,
    };

    SlideTexts { content, notes }
}
