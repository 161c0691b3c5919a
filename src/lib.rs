//! # Document Page Estimator
//!
//! Estimates how many printed pages an uploaded document will produce, so a
//! pricing layer can turn a file into a cost before anything is printed.
//!
//! The estimator receives a [`SourceFile`] (bytes, filename, declared size,
//! optional MIME type), detects the format from the filename extension and
//! routes to a format-specific estimator. Every estimator prefers ground
//! truth from the file's own structure and degrades to a bytes-per-page
//! density estimate when the structure cannot be read; failures are reported
//! through the [`ParseResult::error`] note, never as a returned error.
//!
//! ## Supported Formats
//!
//! - **PDF**: structural scan for page-object markers, then the page-tree
//!   `/Count`, then size density
//! - **Word** (`.docx` / legacy `.doc`): extracted text length at 3000
//!   characters per page; legacy DOC is always priced by size
//! - **Excel** (`.xlsx` / `.xls`): used rows across all sheets at 50 rows
//!   per page
//! - **PowerPoint** (`.pptx` / legacy `.ppt`): one page per slide entry in
//!   the archive; legacy PPT is always priced by size
//! - **Text / RTF**: lines or stripped character count
//!
//! Estimation holds no shared state: independent files may be estimated
//! concurrently without coordination, and the same buffer always yields the
//! same result.
//!
//! ## Example
//!
//! ```
//! use page_estimator::{SourceFile, estimate_pages};
//!
//! let file = SourceFile::new("notes.txt", b"one\ntwo\nthree");
//! let result = estimate_pages(&file);
//! assert_eq!(result.pages, 1);
//! assert_eq!(result.document_type, "Text File");
//! assert!(result.error.is_none());
//! ```

mod format;
mod pdf;
mod presentation;
mod schema;
mod spreadsheet;
mod text;
mod word;

pub use format::FormatKind;
pub use schema::{EstimatorError, Heuristics, ParseResult, SourceFile};

use schema::density_pages;

/// Estimates the page count of a file using the default heuristics.
///
/// Never fails: unreadable or unrecognized input degrades to a size-based
/// estimate with [`ParseResult::error`] set, and `pages` is always at
/// least 1.
pub fn estimate_pages(file: &SourceFile<'_>) -> ParseResult {
    estimate_pages_with(file, &Heuristics::default())
}

/// Estimates the page count of a file with caller-supplied density
/// heuristics.
pub fn estimate_pages_with(file: &SourceFile<'_>, heuristics: &Heuristics) -> ParseResult {
    let kind = FormatKind::detect(file);
    tracing::debug!(
        name = file.name,
        format = ?kind,
        declared_size = file.declared_size,
        "estimating page count"
    );

    match kind {
        FormatKind::Pdf => structural(
            kind,
            pdf::count_pages(file.bytes),
            file,
            heuristics.pdf_bytes_per_page,
        ),
        FormatKind::WordModern => structural(
            kind,
            word::estimate_docx_pages(file.bytes, heuristics),
            file,
            heuristics.word_bytes_per_page,
        ),
        FormatKind::WordLegacy => size_based(kind, file, heuristics.word_bytes_per_page),
        FormatKind::SpreadsheetModern | FormatKind::SpreadsheetLegacy => structural(
            kind,
            spreadsheet::estimate_workbook_pages(file.bytes, heuristics),
            file,
            heuristics.sheet_bytes_per_page,
        ),
        FormatKind::PresentationModern => structural(
            kind,
            presentation::count_pptx_slides(file.bytes),
            file,
            heuristics.slide_bytes_per_page,
        ),
        FormatKind::PresentationLegacy => size_based(kind, file, heuristics.slide_bytes_per_page),
        FormatKind::PlainText => structural(
            kind,
            text::estimate_text_pages(file.bytes, heuristics),
            file,
            heuristics.word_bytes_per_page,
        ),
        FormatKind::RichText => structural(
            kind,
            text::estimate_rtf_pages(file.bytes, heuristics),
            file,
            heuristics.word_bytes_per_page,
        ),
        FormatKind::Unknown => ParseResult {
            pages: density_pages(file.declared_size, heuristics.unknown_bytes_per_page),
            document_type: kind.label().to_string(),
            error: Some("Unknown format".into()),
        },
    }
}

/// Wraps a structural estimator outcome, degrading to the density fallback
/// on failure.
fn structural(
    kind: FormatKind,
    outcome: Result<usize, EstimatorError>,
    file: &SourceFile<'_>,
    bytes_per_page: u64,
) -> ParseResult {
    match outcome {
        Ok(pages) => ParseResult {
            pages: pages.max(1),
            document_type: kind.label().to_string(),
            error: None,
        },
        Err(e) => {
            tracing::warn!(
                name = file.name,
                format = ?kind,
                error = %e,
                "structural estimation failed, using size density fallback"
            );
            ParseResult {
                pages: density_pages(file.declared_size, bytes_per_page),
                document_type: kind.label().to_string(),
                error: Some(e.to_string()),
            }
        }
    }
}

/// Size-based estimate for legacy binary formats that are never parsed
/// structurally. The note marks the count as approximate, not failed.
fn size_based(kind: FormatKind, file: &SourceFile<'_>, bytes_per_page: u64) -> ParseResult {
    ParseResult {
        pages: density_pages(file.declared_size, bytes_per_page),
        document_type: kind.label().to_string(),
        error: Some("size-based estimate; legacy format is not parsed".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_at_least_one_for_any_input() {
        for name in [
            "a.pdf", "a.docx", "a.doc", "a.xlsx", "a.xls", "a.pptx", "a.ppt", "a.txt", "a.rtf",
            "a.bin",
        ] {
            let result = estimate_pages(&SourceFile::new(name, b""));
            assert!(result.pages >= 1, "{name} gave {} pages", result.pages);
        }
    }

    #[test]
    fn test_unknown_format() {
        let result = estimate_pages(&SourceFile::new("mystery.zzz", b"whatever"));
        assert_eq!(result.document_type, "Document");
        assert_eq!(result.error.as_deref(), Some("Unknown format"));
        assert_eq!(result.pages, 1);
    }

    #[test]
    fn test_unknown_format_density() {
        // 120_000 declared bytes at 50KB/page rounds up to 3
        let file = SourceFile::new("blob", b"").with_declared_size(120_000);
        assert_eq!(estimate_pages(&file).pages, 3);
    }

    #[test]
    fn test_pdf_marker_count() {
        let pdf = b"%PDF-1.4 << /Type /Page >> << /Type /Page >> << /Type /Pages >>";
        let result = estimate_pages(&SourceFile::new("doc.pdf", pdf));
        assert_eq!(result.pages, 2);
        assert_eq!(result.document_type, "PDF");
        assert!(result.error.is_none());
    }

    #[test]
    fn test_pdf_tree_count_fallback() {
        let pdf = b"%PDF-1.7 << /Type /Pages /Count 7 >>";
        let result = estimate_pages(&SourceFile::new("doc.pdf", pdf));
        assert_eq!(result.pages, 7);
        assert!(result.error.is_none());
    }

    #[test]
    fn test_pdf_density_fallback() {
        let file = SourceFile::new("doc.pdf", b"opaque").with_declared_size(125_000);
        let result = estimate_pages(&file);
        assert_eq!(result.pages, 3); // ceil(125_000 / 50_000)
        assert!(result.error.is_some());
    }

    #[test]
    fn test_legacy_doc_ignores_content() {
        let file = SourceFile::new("old.doc", b"any bytes at all").with_declared_size(60_000);
        let result = estimate_pages(&file);
        assert_eq!(result.document_type, "Word Document (Legacy)");
        assert_eq!(result.pages, 3); // ceil(60_000 / 25_000)
        assert!(result.error.is_some());
    }

    #[test]
    fn test_legacy_ppt_ignores_content() {
        let file = SourceFile::new("deck.ppt", b"binary").with_declared_size(400_000);
        let result = estimate_pages(&file);
        assert_eq!(result.document_type, "PowerPoint Presentation (Legacy)");
        assert_eq!(result.pages, 3); // ceil(400_000 / 150_000)
        assert!(result.error.is_some());
    }

    #[test]
    fn test_corrupt_workbook_degrades() {
        let file = SourceFile::new("sheet.xlsx", b"not a workbook").with_declared_size(45_000);
        let result = estimate_pages(&file);
        assert_eq!(result.document_type, "Excel Spreadsheet");
        assert_eq!(result.pages, 2); // ceil(45_000 / 30_000)
        assert!(result.error.is_some());
    }

    #[test]
    fn test_estimation_is_idempotent() {
        let bytes = b"%PDF-1.4 << /Type /Page >>";
        let file = SourceFile::new("doc.pdf", bytes);
        assert_eq!(estimate_pages(&file), estimate_pages(&file));
    }

    #[test]
    fn test_custom_heuristics() {
        let heuristics = Heuristics {
            lines_per_page: 10,
            ..Heuristics::default()
        };
        let text = vec!["line"; 25].join("\n");
        let file = SourceFile::new("notes.txt", text.as_bytes());
        assert_eq!(estimate_pages_with(&file, &heuristics).pages, 3);
        assert_eq!(estimate_pages(&file).pages, 1);
    }

    #[test]
    fn test_zero_valued_heuristics_do_not_panic() {
        // A config blob can legitimately carry zeros; estimation must still
        // return a usable count instead of dividing by zero.
        let heuristics: Heuristics = serde_json::from_str(r#"{"lines_per_page": 0}"#).unwrap();
        let file = SourceFile::new("notes.txt", b"one\ntwo");
        assert_eq!(estimate_pages_with(&file, &heuristics).pages, 2);

        let all_zero: Heuristics = serde_json::from_str(
            r#"{"chars_per_page": 0, "rows_per_page": 0, "lines_per_page": 0,
                "pdf_bytes_per_page": 0, "word_bytes_per_page": 0,
                "sheet_bytes_per_page": 0, "slide_bytes_per_page": 0,
                "unknown_bytes_per_page": 0}"#,
        )
        .unwrap();
        for name in ["a.pdf", "a.doc", "a.ppt", "a.txt", "a.rtf", "a.bin"] {
            let result = estimate_pages_with(&SourceFile::new(name, b"x\ny"), &all_zero);
            assert!(result.pages >= 1, "{name} gave {} pages", result.pages);
        }
    }

    #[test]
    fn test_result_serializes() {
        let result = estimate_pages(&SourceFile::new("notes.txt", b"hello"));
        let json = serde_json::to_string(&result).unwrap();
        let back: ParseResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
