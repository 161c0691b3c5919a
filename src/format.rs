//! Format detection for uploaded files.
//!
//! Maps a filename extension (and, as a secondary signal, a declared MIME
//! type) to a closed [`FormatKind`]. The extension is authoritative when
//! both are present: it is deterministic and still works when the upload
//! layer omits the MIME type.

use crate::schema::SourceFile;

/// Closed enumeration of the document families the estimator understands.
///
/// Determined once per call and immutable for the lifetime of that call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Pdf,
    WordModern,
    WordLegacy,
    SpreadsheetModern,
    SpreadsheetLegacy,
    PresentationModern,
    PresentationLegacy,
    PlainText,
    RichText,
    Unknown,
}

impl FormatKind {
    /// Detects the format of a source file.
    ///
    /// Extension first; the declared MIME type is consulted only when the
    /// extension is absent or unrecognized.
    pub fn detect(file: &SourceFile<'_>) -> Self {
        let by_ext = extension(file.name)
            .map(|ext| Self::from_extension(&ext))
            .unwrap_or(Self::Unknown);
        if by_ext != Self::Unknown {
            return by_ext;
        }
        file.mime_type
            .map(Self::from_mime)
            .unwrap_or(Self::Unknown)
    }

    /// Maps a lowercase filename extension to a format.
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "pdf" => Self::Pdf,
            "docx" => Self::WordModern,
            "doc" => Self::WordLegacy,
            "xlsx" => Self::SpreadsheetModern,
            "xls" => Self::SpreadsheetLegacy,
            "pptx" => Self::PresentationModern,
            "ppt" => Self::PresentationLegacy,
            "txt" => Self::PlainText,
            "rtf" => Self::RichText,
            _ => Self::Unknown,
        }
    }

    /// Maps a declared MIME type to a format.
    pub fn from_mime(mime: &str) -> Self {
        match mime {
            "application/pdf" => Self::Pdf,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Self::WordModern
            }
            "application/msword" => Self::WordLegacy,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
                Self::SpreadsheetModern
            }
            "application/vnd.ms-excel" => Self::SpreadsheetLegacy,
            "application/vnd.openxmlformats-officedocument.presentationml.presentation" => {
                Self::PresentationModern
            }
            "application/vnd.ms-powerpoint" => Self::PresentationLegacy,
            "text/plain" => Self::PlainText,
            "application/rtf" | "text/rtf" => Self::RichText,
            _ => Self::Unknown,
        }
    }

    /// The document-type label reported to the pricing layer.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::WordModern => "Word Document",
            Self::WordLegacy => "Word Document (Legacy)",
            Self::SpreadsheetModern => "Excel Spreadsheet",
            Self::SpreadsheetLegacy => "Excel Spreadsheet (Legacy)",
            Self::PresentationModern => "PowerPoint Presentation",
            Self::PresentationLegacy => "PowerPoint Presentation (Legacy)",
            Self::PlainText => "Text File",
            Self::RichText => "Rich Text Document",
            Self::Unknown => "Document",
        }
    }
}

/// Lowercased substring after the last `.` of the filename, if any.
fn extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
