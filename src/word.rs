//! Word document page estimation.
//!
//! DOCX files are ZIP containers holding `word/document.xml`; the estimator
//! strips all markup from that part and applies the characters-per-page
//! rule. Legacy DOC is an opaque binary format for which no structural
//! parsing is attempted; the dispatcher always prices it by size.

use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use crate::schema::{EstimatorError, Heuristics, unit_pages};

/// Estimates pages for a DOCX file from its extracted text length.
pub fn estimate_docx_pages(
    bytes: &[u8],
    heuristics: &Heuristics,
) -> Result<usize, EstimatorError> {
    let chars = extract_text_length(bytes)?;
    Ok(unit_pages(chars, heuristics.chars_per_page))
}

/// Unicode character count of the document body, markup stripped.
///
/// Only `<w:t>` runs carry printable text in WordprocessingML; everything
/// else (styles, tables markup, section properties) is skipped.
fn extract_text_length(bytes: &[u8]) -> Result<usize, EstimatorError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| EstimatorError::Docx(format!("not a readable container: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| EstimatorError::Docx(format!("missing document part: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| EstimatorError::Docx(format!("unreadable document part: {e}")))?;

    let mut reader = Reader::from_str(&xml);
    let mut chars = 0usize;
    let mut depth_in_text = 0usize;
    loop {
        match reader
            .read_event()
            .map_err(|e| EstimatorError::Docx(format!("malformed document XML: {e}")))?
        {
            Event::Start(e) if e.local_name().as_ref() == b"t" => depth_in_text += 1,
            Event::End(e) if e.local_name().as_ref() == b"t" => {
                depth_in_text = depth_in_text.saturating_sub(1);
            }
            Event::Text(t) if depth_in_text > 0 => {
                let text = t
                    .unescape()
                    .map_err(|e| EstimatorError::Docx(format!("bad text escape: {e}")))?;
                chars += text.chars().count();
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(chars)
}
