//! In-memory PPTX builders for tests.

use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::ZipWriter;

pub const NS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#;
const REL_BASE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// An auto shape with one run per paragraph.
pub fn text_shape(paragraphs: &[&str]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<a:p><a:r><a:rPr lang=\"en-US\"/><a:t>{}</a:t></a:r></a:p>", p))
        .collect();
    format!(
        "<p:sp><p:nvSpPr><p:cNvPr id=\"2\" name=\"Text\"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr>\
         <p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/>{}</p:txBody></p:sp>",
        body
    )
}

pub fn slide_xml(shapes: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <p:sld {}><p:cSld><p:spTree><p:nvGrpSpPr><p:cNvPr id=\"1\" name=\"\"/>\
         <p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr><p:grpSpPr/>{}</p:spTree></p:cSld></p:sld>",
        NS, shapes
    )
}

pub fn notes_xml(shapes: &str) -> String {
    slide_xml(shapes)
        .replace("<p:sld ", "<p:notes ")
        .replace("</p:sld>", "</p:notes>")
}

fn rels_xml(rels: &[(String, &str, String)]) -> String {
    let body: String = rels
        .iter()
        .map(|(id, kind, target)| {
            format!(
                "<Relationship Id=\"{}\" Type=\"{}/{}\" Target=\"{}\"/>",
                id, REL_BASE, kind, target
            )
        })
        .collect();
    format!(
        "<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">{}</Relationships>",
        body
    )
}

/// Package parts of a deck. Each slide is `(slide xml, optional notes xml)`.
/// Slides are listed in `p:sldIdLst` in the given order, but relationship
/// ids are assigned in reverse so the order can only come from the list.
pub fn pptx_parts(slides: &[(String, Option<String>)]) -> Vec<(String, String)> {
    let mut parts = vec![(
        "_rels/.rels".to_string(),
        rels_xml(&[(
            "rId1".to_string(),
            "officeDocument",
            "ppt/presentation.xml".to_string(),
        )]),
    )];

    let mut sld_ids = String::new();
    let mut pres_rels = vec![(
        "rId100".to_string(),
        "slideMaster",
        "slideMasters/slideMaster1.xml".to_string(),
    )];

    for (idx, (slide, notes)) in slides.iter().enumerate() {
        let number = idx + 1;
        let rel_id = format!("rId{}", slides.len() - idx + 1);
        sld_ids.push_str(&format!(
            "<p:sldId id=\"{}\" r:id=\"{}\"/>",
            255 + number,
            rel_id
        ));
        pres_rels.push((rel_id, "slide", format!("slides/slide{}.xml", number)));
        parts.push((format!("ppt/slides/slide{}.xml", number), slide.clone()));

        let mut slide_rels = vec![(
            "rId1".to_string(),
            "slideLayout",
            "../slideLayouts/slideLayout1.xml".to_string(),
        )];
        if let Some(notes) = notes {
            slide_rels.push((
                "rId2".to_string(),
                "notesSlide",
                format!("../notesSlides/notesSlide{}.xml", number),
            ));
            parts.push((
                format!("ppt/notesSlides/notesSlide{}.xml", number),
                notes.clone(),
            ));
        }
        parts.push((
            format!("ppt/slides/_rels/slide{}.xml.rels", number),
            rels_xml(&slide_rels),
        ));
    }

    parts.push((
        "ppt/presentation.xml".to_string(),
        format!(
            "<p:presentation {}><p:sldMasterIdLst><p:sldMasterId id=\"2147483648\" r:id=\"rId100\"/></p:sldMasterIdLst>\
             <p:sldIdLst>{}</p:sldIdLst><p:sldSz cx=\"9144000\" cy=\"6858000\"/></p:presentation>",
            NS, sld_ids
        ),
    ));
    parts.push((
        "ppt/_rels/presentation.xml.rels".to_string(),
        rels_xml(&pres_rels),
    ));

    parts
}

/// Write parts into a ZIP archive.
pub fn write_zip(parts: &[(String, String)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in parts {
        zip.start_file(name.as_str(), FileOptions::default()).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }
    zip.finish().unwrap().into_inner()
}

pub fn build_pptx(slides: &[(String, Option<String>)]) -> Vec<u8> {
    write_zip(&pptx_parts(slides))
}
