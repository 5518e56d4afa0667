//! Object model for a presentation: slides, their shapes, and notes.

/// An opened presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Presentation {
    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

impl Presentation {
    /// Create an empty presentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a slide to the end of the presentation.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Total number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// A single slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slide {
    /// Top-level shapes in document order.
    pub shapes: Vec<Shape>,

    /// Notes container, if the slide has one.
    pub notes: Option<NotesSlide>,
}

impl Slide {
    /// Create a slide with no shapes and no notes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a shape to this slide.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Attach a notes container.
    pub fn with_notes(mut self, notes: NotesSlide) -> Self {
        self.notes = Some(notes);
        self
    }
}

/// Speaker-notes container for one slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesSlide {
    /// Shapes on the notes page in document order.
    pub shapes: Vec<Shape>,
}

impl NotesSlide {
    /// Create a notes container from its shapes.
    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }
}

/// The kind of a shape element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Auto shape or placeholder (`p:sp`).
    AutoShape,
    /// Picture (`p:pic`).
    Picture,
    /// Table, chart, or other graphic frame (`p:graphicFrame`).
    GraphicFrame,
    /// Group of shapes (`p:grpSp`).
    Group,
    /// Connector line (`p:cxnSp`).
    Connector,
    /// Ink or other content part (`p:contentPart`).
    ContentPart,
}

impl ShapeKind {
    /// Map a shape-tree element's local name to a shape kind.
    pub fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"sp" => Some(Self::AutoShape),
            b"pic" => Some(Self::Picture),
            b"graphicFrame" => Some(Self::GraphicFrame),
            b"grpSp" => Some(Self::Group),
            b"cxnSp" => Some(Self::Connector),
            b"contentPart" => Some(Self::ContentPart),
            _ => None,
        }
    }

    /// Whether shapes of this kind carry a text value.
    pub fn has_text_frame(&self) -> bool {
        matches!(self, Self::AutoShape)
    }
}

/// A shape, optionally carrying text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    /// Element kind.
    pub kind: ShapeKind,

    /// Text value. `None` for kinds without a text frame; may contain
    /// internal line breaks.
    pub text: Option<String>,
}

impl Shape {
    /// Create a text-bearing auto shape.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            kind: ShapeKind::AutoShape,
            text: Some(text.into()),
        }
    }

    /// Create a shape of a kind that carries no text.
    pub fn without_text(kind: ShapeKind) -> Self {
        Self { kind, text: None }
    }

    /// Text trimmed of surrounding whitespace, if present and non-blank.
    pub fn trimmed_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}
