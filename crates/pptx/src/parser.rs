//! PPTX file parser implementation.

use crate::package::{resolve_target, Package, REL_NOTES_SLIDE, REL_OFFICE_DOCUMENT, REL_SLIDE};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use slidenotes_core::{Error, NotesSlide, Presentation, Result, Shape, ShapeKind, Slide};
use std::io::{Read, Seek};

/// Part name used when the package root does not name its main document.
const DEFAULT_PRESENTATION_PART: &str = "ppt/presentation.xml";

/// Soft line break (`a:br`) within a paragraph; paragraphs are separated
/// by `\n`.
const LINE_BREAK: char = '\u{b}';

/// Parser for PPTX (Office Open XML) files.
pub struct PptxParser;

impl PptxParser {
    /// Create a new PPTX parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a PPTX file from a reader.
    pub fn parse<R: Read + Seek>(&self, reader: R) -> Result<Presentation> {
        let mut package = Package::open(reader)?;

        let main_part = self.presentation_part(&mut package)?;
        let slide_parts = self.get_slide_order(&mut package, &main_part)?;
        log::debug!("Found {} slides in {}", slide_parts.len(), main_part);

        let mut presentation = Presentation::new();
        for slide_part in &slide_parts {
            let slide = self.parse_slide(&mut package, slide_part)?;
            presentation.add_slide(slide);
        }

        Ok(presentation)
    }

    /// Locate the presentation part through the package root relationships.
    fn presentation_part<R: Read + Seek>(&self, package: &mut Package<R>) -> Result<String> {
        match package.related_part("", REL_OFFICE_DOCUMENT)? {
            Some(part) => Ok(part),
            None if package.has_part(DEFAULT_PRESENTATION_PART) => {
                log::warn!(
                    "Package root names no main document, falling back to {}",
                    DEFAULT_PRESENTATION_PART
                );
                Ok(DEFAULT_PRESENTATION_PART.to_string())
            }
            None => Err(Error::UnsupportedFormat(
                "package contains no presentation part".to_string(),
            )),
        }
    }

    /// Get the ordered list of slide part names from `p:sldIdLst`.
    fn get_slide_order<R: Read + Seek>(
        &self,
        package: &mut Package<R>,
        main_part: &str,
    ) -> Result<Vec<String>> {
        let content = package.read_part(main_part)?;
        let slide_ids = parse_slide_id_list(&content, main_part)?;
        let rels = package.relationships(main_part)?;

        slide_ids
            .iter()
            .map(|id| {
                rels.iter()
                    .find(|r| &r.id == id && !r.external && r.is_type(REL_SLIDE))
                    .map(|r| resolve_target(main_part, &r.target))
                    .ok_or_else(|| {
                        Error::PptxParseError(format!(
                            "slide id {} has no slide relationship in {}",
                            id, main_part
                        ))
                    })
            })
            .collect()
    }

    /// Parse a single slide and its notes container.
    fn parse_slide<R: Read + Seek>(
        &self,
        package: &mut Package<R>,
        slide_part: &str,
    ) -> Result<Slide> {
        let content = package.read_part(slide_part)?;
        let mut slide = Slide::new();
        for shape in parse_shapes(&content, slide_part)? {
            slide.add_shape(shape);
        }

        if let Some(notes_part) = package.related_part(slide_part, REL_NOTES_SLIDE)? {
            log::debug!("Slide {} has notes {}", slide_part, notes_part);
            let notes = package.read_part(&notes_part)?;
            slide = slide.with_notes(NotesSlide::from_shapes(parse_shapes(&notes, &notes_part)?));
        }

        Ok(slide)
    }
}

impl Default for PptxParser {
    fn default() -> Self {
        Self::new()
    }
}

fn xml_error<R>(reader: &Reader<R>, part: &str, e: quick_xml::Error) -> Error {
    Error::XmlError(format!(
        "{} at position {}: {}",
        part,
        reader.buffer_position(),
        e
    ))
}

/// Extract the `r:id` of each `p:sldId` in `p:sldIdLst`, in order.
fn parse_slide_id_list(xml: &str, part: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    let mut ids = Vec::new();
    let mut in_list = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.local_name().as_ref() == b"sldIdLst" => in_list = true,
            Ok(Event::End(ref e)) if e.local_name().as_ref() == b"sldIdLst" => in_list = false,
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e))
                if in_list && e.local_name().as_ref() == b"sldId" =>
            {
                if let Some(id) = relationship_id(e) {
                    ids.push(id);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_error(&reader, part, e)),
            _ => {}
        }
    }

    Ok(ids)
}

/// The namespaced `r:id` attribute of an element. The unprefixed `id`
/// attribute of `p:sldId` is a numeric slide id and is ignored.
fn relationship_id(e: &BytesStart) -> Option<String> {
    e.attributes().flatten().find_map(|attr| {
        let key = attr.key;
        if key.prefix().is_some() && key.local_name().as_ref() == b"id" {
            Some(String::from_utf8_lossy(&attr.value).into_owned())
        } else {
            None
        }
    })
}

/// Text being gathered from the `p:txBody` of one shape.
#[derive(Debug)]
struct TextFrame {
    kind: ShapeKind,
    text: String,
    paragraphs: usize,
    in_body: bool,
    in_run_text: bool,
}

impl TextFrame {
    fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            text: String::new(),
            paragraphs: 0,
            in_body: false,
            in_run_text: false,
        }
    }

    fn start_paragraph(&mut self) {
        if self.paragraphs > 0 {
            self.text.push('\n');
        }
        self.paragraphs += 1;
    }

    fn open(&mut self, name: &[u8]) {
        match name {
            b"txBody" => self.in_body = true,
            b"p" if self.in_body => self.start_paragraph(),
            b"br" if self.in_body => self.text.push(LINE_BREAK),
            b"t" if self.in_body => self.in_run_text = true,
            _ => {}
        }
    }

    fn empty(&mut self, name: &[u8]) {
        match name {
            b"p" if self.in_body => self.start_paragraph(),
            b"br" if self.in_body => self.text.push(LINE_BREAK),
            _ => {}
        }
    }

    fn close(&mut self, name: &[u8]) {
        match name {
            b"txBody" => self.in_body = false,
            b"t" => self.in_run_text = false,
            _ => {}
        }
    }

    fn finish(self) -> Shape {
        if self.kind.has_text_frame() {
            Shape {
                kind: self.kind,
                text: Some(self.text),
            }
        } else {
            Shape::without_text(self.kind)
        }
    }
}

/// Extract the top-level shapes of a slide or notes part.
///
/// Only direct children of `p:spTree` are shapes of the slide; shapes
/// nested in a group belong to the group.
fn parse_shapes(xml: &str, part: &str) -> Result<Vec<Shape>> {
    let mut reader = Reader::from_str(xml);
    let mut shapes = Vec::new();

    let mut depth = 0usize;
    // Depth of the shape tree's direct children, while inside it.
    let mut child_depth: Option<usize> = None;
    let mut current: Option<TextFrame> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                let name = e.local_name();
                let name = name.as_ref();

                if let Some(frame) = current.as_mut() {
                    frame.open(name);
                } else if child_depth == Some(depth) {
                    current = ShapeKind::from_local_name(name).map(TextFrame::new);
                } else if child_depth.is_none() && name == b"spTree" {
                    child_depth = Some(depth + 1);
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = e.local_name();
                let name = name.as_ref();

                if let Some(frame) = current.as_mut() {
                    frame.empty(name);
                } else if child_depth == Some(depth + 1) {
                    if let Some(kind) = ShapeKind::from_local_name(name) {
                        shapes.push(TextFrame::new(kind).finish());
                    }
                }
            }
            Ok(Event::Text(ref e)) => {
                if let Some(frame) = current.as_mut().filter(|f| f.in_run_text) {
                    let text = e.unescape().map_err(|err| xml_error(&reader, part, err))?;
                    frame.text.push_str(&text);
                }
            }
            Ok(Event::CData(ref e)) => {
                if let Some(frame) = current.as_mut().filter(|f| f.in_run_text) {
                    frame.text.push_str(&String::from_utf8_lossy(e));
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.local_name();
                let name = name.as_ref();

                if child_depth == Some(depth) && current.is_some() {
                    if let Some(frame) = current.take() {
                        shapes.push(frame.finish());
                    }
                } else if let Some(frame) = current.as_mut() {
                    frame.close(name);
                } else if child_depth == Some(depth + 1) && name == b"spTree" {
                    child_depth = None;
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(xml_error(&reader, part, e)),
            _ => {}
        }
    }

    Ok(shapes)
}
