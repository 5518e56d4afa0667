//! OPC package access: ZIP parts, relationships, and part-name resolution.

use quick_xml::events::Event;
use quick_xml::Reader;
use slidenotes_core::{Error, Result};
use std::io::{Read, Seek};
use zip::result::ZipError;
use zip::ZipArchive;

/// Relationship type suffix of the main document part.
pub const REL_OFFICE_DOCUMENT: &str = "/officeDocument";
/// Relationship type suffix of a slide part.
pub const REL_SLIDE: &str = "/slide";
/// Relationship type suffix of a notes slide part.
pub const REL_NOTES_SLIDE: &str = "/notesSlide";

/// A relationship entry from a `.rels` part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship ID (e.g. "rId2").
    pub id: String,
    /// Relationship type URI.
    pub rel_type: String,
    /// Target as written in the rels part.
    pub target: String,
    /// Whether the target lives outside the package.
    pub external: bool,
}

impl Relationship {
    /// Whether the relationship type URI ends with `suffix`.
    pub fn is_type(&self, suffix: &str) -> bool {
        self.rel_type.ends_with(suffix)
    }
}

/// A PPTX file opened as a ZIP package.
pub struct Package<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> Package<R> {
    /// Open a package from a seekable reader.
    pub fn open(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader).map_err(|e| match e {
            ZipError::Io(io) => Error::IoError(io),
            other => Error::ZipError(format!("File is not a zip file: {}", other)),
        })?;
        log::debug!("Opened package with {} entries", archive.len());
        Ok(Self { archive })
    }

    /// Whether a part with this name exists.
    pub fn has_part(&mut self, name: &str) -> bool {
        self.archive.by_name(name).is_ok()
    }

    /// Read a part as UTF-8 text.
    pub fn read_part(&mut self, name: &str) -> Result<String> {
        let mut file = self.archive.by_name(name).map_err(|e| match e {
            ZipError::FileNotFound => Error::MissingPart(name.to_string()),
            other => Error::ZipError(format!("Failed to open '{}': {}", name, other)),
        })?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", name, e)))?;

        log::debug!("Read part {} ({} bytes)", name, content.len());
        Ok(content)
    }

    /// Relationships whose source is `part`. An absent rels part means the
    /// part has no relationships.
    pub fn relationships(&mut self, part: &str) -> Result<Vec<Relationship>> {
        let rels_name = rels_part_name(part);
        if !self.has_part(&rels_name) {
            return Ok(Vec::new());
        }
        let content = self.read_part(&rels_name)?;
        parse_relationships(&content, &rels_name)
    }

    /// Resolve the first internal relationship of the given type to a part
    /// name.
    pub fn related_part(&mut self, part: &str, rel_suffix: &str) -> Result<Option<String>> {
        let rels = self.relationships(part)?;
        Ok(rels
            .iter()
            .find(|r| !r.external && r.is_type(rel_suffix))
            .map(|r| resolve_target(part, &r.target)))
    }
}

/// Parse the content of a `.rels` part.
pub fn parse_relationships(xml: &str, rels_name: &str) -> Result<Vec<Relationship>> {
    let mut rels = Vec::new();
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                if e.local_name().as_ref() == b"Relationship" =>
            {
                let mut rel = Relationship {
                    id: String::new(),
                    rel_type: String::new(),
                    target: String::new(),
                    external: false,
                };

                for attr in e.attributes().flatten() {
                    let value = attr
                        .unescape_value()
                        .map_err(|e| Error::XmlError(format!("{}: {}", rels_name, e)))?
                        .into_owned();
                    match attr.key.as_ref() {
                        b"Id" => rel.id = value,
                        b"Type" => rel.rel_type = value,
                        b"Target" => rel.target = value,
                        b"TargetMode" => rel.external = value == "External",
                        _ => {}
                    }
                }

                rels.push(rel);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlError(format!(
                    "{} at position {}: {}",
                    rels_name,
                    reader.buffer_position(),
                    e
                )));
            }
            _ => {}
        }
    }

    Ok(rels)
}

/// Name of the rels part for `part`: `ppt/slides/slide1.xml` maps to
/// `ppt/slides/_rels/slide1.xml.rels`, and the package root (`""`) maps to
/// `_rels/.rels`.
pub fn rels_part_name(part: &str) -> String {
    match part.rfind('/') {
        Some(pos) => format!("{}/_rels/{}.rels", &part[..pos], &part[pos + 1..]),
        None => format!("_rels/{}.rels", part),
    }
}

/// Resolve a relationship target against its source part.
///
/// Absolute targets (leading `/`) are taken from the package root, others
/// are relative to the source part's directory. `.` and `..` segments are
/// normalised away.
pub fn resolve_target(source_part: &str, target: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    let relative = match target.strip_prefix('/') {
        Some(absolute) => absolute,
        None => {
            if let Some(pos) = source_part.rfind('/') {
                segments.extend(source_part[..pos].split('/'));
            }
            target
        }
    };

    for segment in relative.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    segments.join("/")
}
