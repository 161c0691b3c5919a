//! Presentation page estimation.
//!
//! A PPTX file is a ZIP archive carrying one XML part per slide under
//! `ppt/slides/`, so the slide count is just the number of entries named
//! `ppt/slides/slideN.xml`. Legacy PPT has no archive structure to
//! enumerate and is priced by size in the dispatcher.

use std::io::Cursor;

use zip::ZipArchive;

use crate::schema::EstimatorError;

/// Counts slides in a PPTX archive. A deck with no slide entries still
/// prints as one page.
pub fn count_pptx_slides(bytes: &[u8]) -> Result<usize, EstimatorError> {
    let archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| EstimatorError::Archive(format!("{e}")))?;

    let slides = archive
        .file_names()
        .filter(|name| is_slide_entry(name))
        .count();
    Ok(slides.max(1))
}

/// Matches `ppt/slides/slide<digits>.xml` exactly, so slide layouts,
/// masters and `_rels` entries are not counted.
fn is_slide_entry(name: &str) -> bool {
    let Some(rest) = name.strip_prefix("ppt/slides/slide") else {
        return false;
    };
    let Some(digits) = rest.strip_suffix(".xml") else {
        return false;
    };
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn pptx_with_entries(entries: &[&str]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = zip::ZipWriter::new(&mut cursor);
        for entry in entries {
            writer
                .start_file(*entry, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(b"<p:sld/>").unwrap();
        }
        writer.finish().unwrap();
        cursor.into_inner()
    }

    #[test]
    fn test_counts_slide_entries() {
        let entries: Vec<String> = (1..=12)
            .map(|n| format!("ppt/slides/slide{n}.xml"))
            .collect();
        let refs: Vec<&str> = entries.iter().map(String::as_str).collect();
        let pptx = pptx_with_entries(&refs);
        assert_eq!(count_pptx_slides(&pptx).unwrap(), 12);
    }

    #[test]
    fn test_non_slide_entries_ignored() {
        let pptx = pptx_with_entries(&[
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/slides/_rels/slide1.xml.rels",
            "ppt/slideLayouts/slideLayout1.xml",
            "ppt/slideMasters/slideMaster1.xml",
            "ppt/presentation.xml",
            "[Content_Types].xml",
        ]);
        assert_eq!(count_pptx_slides(&pptx).unwrap(), 2);
    }

    #[test]
    fn test_archive_without_slides_is_one_page() {
        let pptx = pptx_with_entries(&["ppt/presentation.xml"]);
        assert_eq!(count_pptx_slides(&pptx).unwrap(), 1);
    }

    #[test]
    fn test_not_an_archive_is_an_error() {
        assert!(count_pptx_slides(b"binary ppt, not a zip").is_err());
    }

    #[test]
    fn test_slide_entry_matcher() {
        assert!(is_slide_entry("ppt/slides/slide1.xml"));
        assert!(is_slide_entry("ppt/slides/slide42.xml"));
        assert!(!is_slide_entry("ppt/slides/slide.xml"));
        assert!(!is_slide_entry("ppt/slides/slide1a.xml"));
        assert!(!is_slide_entry("ppt/slideLayouts/slideLayout1.xml"));
    }
}
