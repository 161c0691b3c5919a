//! Plain text and RTF page estimation.

use crate::schema::{EstimatorError, Heuristics, unit_pages};

/// Estimates pages for a plain text file from its line count.
pub fn estimate_text_pages(
    bytes: &[u8],
    heuristics: &Heuristics,
) -> Result<usize, EstimatorError> {
    let text = decode(bytes)?;
    let lines = text.split('\n').count();
    Ok(unit_pages(lines, heuristics.lines_per_page))
}

/// Estimates pages for an RTF file.
///
/// Control words and group braces are stripped to approximate the plain
/// text, then the same characters-per-page rule as Word documents applies.
pub fn estimate_rtf_pages(
    bytes: &[u8],
    heuristics: &Heuristics,
) -> Result<usize, EstimatorError> {
    let text = decode(bytes)?;
    let plain = strip_rtf(text);
    Ok(unit_pages(plain.chars().count(), heuristics.chars_per_page))
}

fn decode(bytes: &[u8]) -> Result<&str, EstimatorError> {
    std::str::from_utf8(bytes).map_err(|e| EstimatorError::Text(format!("{e}")))
}

/// Removes backslash control words (with optional numeric parameter and
/// delimiting space) and group braces, and unescapes `\\` and `\'`.
fn strip_rtf(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' | '}' => {}
            '\\' => match chars.peek().copied() {
                Some('\\') => {
                    chars.next();
                    out.push('\\');
                }
                Some('\'') => {
                    chars.next();
                    out.push('\'');
                }
                Some(ch) if ch.is_ascii_alphabetic() => {
                    while chars.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
                        chars.next();
                    }
                    if chars.peek() == Some(&'-') {
                        chars.next();
                    }
                    while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
                        chars.next();
                    }
                    // a single space after a control word is its delimiter,
                    // not document text
                    if chars.peek() == Some(&' ') {
                        chars.next();
                    }
                }
                Some(other) => {
                    chars.next();
                    out.push(other);
                }
                None => {}
            },
            _ => out.push(c),
        }
    }
    out
}
