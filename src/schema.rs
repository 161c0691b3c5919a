//! Data structures and types for page count estimation.
//!
//! This module defines the core types used throughout the page estimator,
//! including the input descriptor, the result record, the internal error
//! taxonomy, and the tunable density heuristics.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur inside an individual estimator.
///
/// Never returned by the public entry points: the dispatcher absorbs every
/// variant into a degraded [`ParseResult`] whose `error` field carries the
/// message. They exist so estimators can use `?` internally and so fallback
/// paths can log what actually went wrong.
#[derive(Debug, Error)]
pub enum EstimatorError {
    /// The PDF structure carried neither page markers nor a page-tree count.
    #[error("PDF structure parse failed: {0}")]
    Pdf(String),
    /// The DOCX container or its main document part could not be read.
    #[error("DOCX extraction failed: {0}")]
    Docx(String),
    /// The workbook container was corrupt or unreadable.
    #[error("workbook parse failed: {0}")]
    Workbook(String),
    /// The presentation archive could not be opened.
    #[error("archive read failed: {0}")]
    Archive(String),
    /// The file could not be decoded as text.
    #[error("text decode failed: {0}")]
    Text(String),
}

/// A file handed to the estimator: bytes, filename, declared size and an
/// optional declared MIME type.
///
/// The estimator borrows the buffer for the duration of one call and never
/// mutates it. The filename is used only for extension extraction; the MIME
/// type is a secondary dispatch signal consulted when the extension is
/// missing or unrecognized.
///
/// The declared size may differ from `bytes.len()` when the upload layer
/// reports a size of its own; density fallbacks use the declared size
/// because that is the figure the pricing layer sees.
#[derive(Debug, Clone, Copy)]
pub struct SourceFile<'a> {
    /// Raw file contents.
    pub bytes: &'a [u8],
    /// Filename as supplied by the upload, including extension.
    pub name: &'a str,
    /// Size in bytes as declared by the upload layer.
    pub declared_size: u64,
    /// Declared MIME type, if the upload layer provided one.
    pub mime_type: Option<&'a str>,
}

impl<'a> SourceFile<'a> {
    /// Creates a source file whose declared size is the buffer length.
    pub fn new(name: &'a str, bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            name,
            declared_size: bytes.len() as u64,
            mime_type: None,
        }
    }

    /// Overrides the declared size (e.g. from a Content-Length header).
    pub fn with_declared_size(mut self, size: u64) -> Self {
        self.declared_size = size;
        self
    }

    /// Attaches the MIME type declared by the upload layer.
    pub fn with_mime_type(mut self, mime: &'a str) -> Self {
        self.mime_type = Some(mime);
        self
    }
}

/// The result of a page count estimation.
///
/// This is the only output the caller ever sees. `pages` is always at least
/// 1, even for empty or unreadable input. `error` is set exactly when the
/// format-specific method could not be applied and the count is a byte-size
/// density estimate instead, or when the format was not recognized at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Estimated page count, always >= 1.
    pub pages: usize,
    /// Human-readable label for the detected document type, e.g.
    /// "Word Document" or "PDF".
    pub document_type: String,
    /// Diagnostic note set when the estimate is size-based rather than
    /// structural. `None` means the primary method succeeded.
    pub error: Option<String>,
}

/// Density constants used by the estimators.
///
/// These are empirical values carried over from the upload flow this crate
/// replaces; they are fields rather than literals so a deployment can
/// recalibrate them (e.g. from a JSON config blob) without touching
/// estimator logic. A zero value in any field is treated as a density of
/// one unit per page, so a bad config cannot make estimation panic.
///
/// # Examples
///
/// ```
/// use page_estimator::Heuristics;
///
/// let h = Heuristics {
///     rows_per_page: 40,
///     ..Heuristics::default()
/// };
/// assert_eq!(h.chars_per_page, 3000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Heuristics {
    /// Characters per standard printed page (DOCX, RTF).
    pub chars_per_page: usize,
    /// Spreadsheet rows per printed page.
    pub rows_per_page: usize,
    /// Plain-text lines per printed page.
    pub lines_per_page: usize,
    /// Bytes per page for PDFs whose structure could not be read.
    pub pdf_bytes_per_page: u64,
    /// Bytes per page for Word documents (compressed container density).
    pub word_bytes_per_page: u64,
    /// Bytes per page for unreadable workbooks.
    pub sheet_bytes_per_page: u64,
    /// Bytes per slide for presentations without an enumerable archive.
    pub slide_bytes_per_page: u64,
    /// Bytes per page for unrecognized formats.
    pub unknown_bytes_per_page: u64,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            chars_per_page: 3000,
            rows_per_page: 50,
            lines_per_page: 60,
            pdf_bytes_per_page: 50_000,
            word_bytes_per_page: 25_000,
            sheet_bytes_per_page: 30_000,
            slide_bytes_per_page: 150_000,
            unknown_bytes_per_page: 50_000,
        }
    }
}

/// Pages from a raw byte size at an assumed bytes-per-page density.
///
/// Rounds up and never returns 0, so a zero-byte file still prices as one
/// page. A zero density (possible through a deserialized [`Heuristics`])
/// is clamped to 1 byte per page rather than dividing by zero.
pub(crate) fn density_pages(size: u64, bytes_per_page: u64) -> usize {
    (size.div_ceil(bytes_per_page.max(1)) as usize).max(1)
}

/// Ceiling division of a unit count by a per-page capacity, minimum 1 page.
/// A zero capacity is clamped to 1 unit per page.
pub(crate) fn unit_pages(units: usize, per_page: usize) -> usize {
    units.div_ceil(per_page.max(1)).max(1)
}
