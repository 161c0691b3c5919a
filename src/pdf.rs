//! PDF page counting without a rendering engine.
//!
//! Works directly on bytes: PDF structural keywords are ASCII, so the scan
//! is binary-safe without UTF-8 validation. Two structural strategies are
//! tried in order before the caller falls back to a size density estimate:
//!
//! 1. Count `/Type /Page` page-object markers (exact for uncompressed PDFs).
//! 2. Read the largest `/Count N` declaration from the page tree.
//!
//! Compressed object streams hide both markers, which is what the density
//! fallback exists for.

use crate::schema::EstimatorError;

/// Counts pages from the PDF structure.
///
/// Returns an error only when neither structural strategy applies; the
/// dispatcher then degrades to the size heuristic.
pub fn count_pages(bytes: &[u8]) -> Result<usize, EstimatorError> {
    let markers = count_page_markers(bytes);
    if markers > 0 {
        return Ok(markers);
    }
    if let Some(count) = find_tree_count(bytes) {
        return Ok(count);
    }
    Err(EstimatorError::Pdf(
        "no page markers or page-tree count found; file may be compressed or corrupted".into(),
    ))
}

/// Count occurrences of "/Type /Page" (also "/Type/Page"), rejecting
/// "/Type /Pages" so the page-tree container is not counted as a page.
fn count_page_markers(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i + 5 <= bytes.len() {
        if !matches_at(bytes, i, b"/Type") {
            i += 1;
            continue;
        }
        let mut j = i + 5;
        while j < bytes.len() && is_pdf_whitespace(bytes[j]) {
            j += 1;
        }
        if matches_at(bytes, j, b"/Page") && bytes.get(j + 5) != Some(&b's') {
            count += 1;
        }
        i += 5;
    }
    count
}

/// Largest plausible `/Count N` value in the document.
///
/// Subsection nodes of the page tree carry partial counts; the root holds
/// the total, so the maximum wins. Values of a million or more are treated
/// as garbage from a coincidental byte pattern.
fn find_tree_count(bytes: &[u8]) -> Option<usize> {
    let mut best: Option<usize> = None;
    let mut i = 0;
    while i + 6 <= bytes.len() {
        if !matches_at(bytes, i, b"/Count") {
            i += 1;
            continue;
        }
        let mut pos = i + 6;
        while pos < bytes.len() && is_pdf_whitespace(bytes[pos]) {
            pos += 1;
        }
        let mut num = 0usize;
        let mut found_digit = false;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() && num < 1_000_000 {
            found_digit = true;
            num = num * 10 + (bytes[pos] - b'0') as usize;
            pos += 1;
        }
        if found_digit && num > 0 && num < 1_000_000 && best.map_or(true, |b| num > b) {
            best = Some(num);
        }
        i += 6;
    }
    best
}

#[inline]
fn matches_at(bytes: &[u8], pos: usize, pattern: &[u8]) -> bool {
    bytes.len() >= pos + pattern.len() && &bytes[pos..pos + pattern.len()] == pattern
}

#[inline]
fn is_pdf_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n' | b'\0' | b'\x0c')
}
