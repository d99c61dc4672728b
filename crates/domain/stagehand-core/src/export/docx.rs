//! Minimal WordprocessingML writer. Entries are stored uncompressed, in a fixed
//! order, with the zip epoch as their timestamp.

use std::io::{Cursor, Read, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipArchive, ZipWriter};

use super::ExportError;

const DOCUMENT_PART: &str = "word/document.xml";

const CONTENT_TYPES_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"</Types>"#
);

const PACKAGE_RELS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    r#"</Relationships>"#
);

const DOCUMENT_HEAD: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    r#"<w:body>"#
);

const DOCUMENT_TAIL: &str = r#"<w:sectPr/></w:body></w:document>"#;

/// Packs one paragraph per entry into a `.docx` container.
pub fn write_document(paragraphs: &[&str]) -> Result<Vec<u8>, ExportError> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .last_modified_time(DateTime::default());

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, body) in [
        ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
        ("_rels/.rels", PACKAGE_RELS_XML.to_string()),
        (DOCUMENT_PART, document_xml(paragraphs)),
    ] {
        zip.start_file(name, options)?;
        zip.write_all(body.as_bytes())?;
    }
    Ok(zip.finish()?.into_inner())
}

fn document_xml(paragraphs: &[&str]) -> String {
    let mut xml = String::from(DOCUMENT_HEAD);
    for p in paragraphs {
        let text = escape_xml(p);
        if text.is_empty() {
            xml.push_str("<w:p/>");
        } else {
            xml.push_str(r#"<w:p><w:r><w:t xml:space="preserve">"#);
            xml.push_str(&text);
            xml.push_str("</w:t></w:r></w:p>");
        }
    }
    xml.push_str(DOCUMENT_TAIL);
    xml
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if is_xml_char(c) => out.push(c),
            _ => {}
        }
    }
    out
}

// XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Reads the paragraph texts back out of a document produced by [`write_document`].
pub fn document_text(bytes: &[u8]) -> Result<Vec<String>, ExportError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;

    let body = xml
        .split_once("<w:body>")
        .map(|(_, rest)| rest)
        .unwrap_or_default();

    let mut paragraphs = Vec::new();
    let mut rest = body;
    while let Some(start) = rest.find("<w:p") {
        rest = &rest[start..];
        if let Some(after) = rest.strip_prefix("<w:p/>") {
            paragraphs.push(String::new());
            rest = after;
            continue;
        }
        let Some(end) = rest.find("</w:p>") else {
            break;
        };
        let para = &rest[..end];
        let text = para
            .split_once(r#"<w:t xml:space="preserve">"#)
            .and_then(|(_, t)| t.split_once("</w:t>"))
            .map(|(t, _)| unescape_xml(t))
            .unwrap_or_default();
        paragraphs.push(text);
        rest = &rest[end + "</w:p>".len()..];
    }
    Ok(paragraphs)
}

fn unescape_xml(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
