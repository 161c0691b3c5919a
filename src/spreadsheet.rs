//! Spreadsheet page estimation.
//!
//! XLSX and XLS share one algorithm: enumerate every sheet's used cell
//! range, sum the row counts, and divide by the rows-per-page constant.
//! Calamine abstracts the two container formats behind a single reader.

use std::io::Cursor;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};

use crate::schema::{EstimatorError, Heuristics, unit_pages};

/// Estimates pages for a workbook from its total used row count.
///
/// Unreadable individual sheets contribute zero rows rather than failing
/// the whole estimate; only a workbook that cannot be opened at all is an
/// error.
pub fn estimate_workbook_pages(
    bytes: &[u8],
    heuristics: &Heuristics,
) -> Result<usize, EstimatorError> {
    let cursor = Cursor::new(bytes);
    let mut workbook = open_workbook_auto_from_rs(cursor)
        .map_err(|e| EstimatorError::Workbook(format!("{e}")))?;

    let mut total_rows = 0usize;
    for sheet_name in workbook.sheet_names().to_owned() {
        match workbook.worksheet_range(&sheet_name) {
            Ok(range) => total_rows += used_rows(&range),
            Err(e) => {
                tracing::warn!(sheet = %sheet_name, error = %e, "skipping unreadable sheet");
            }
        }
    }

    Ok(unit_pages(total_rows, heuristics.rows_per_page))
}

/// Row span of a sheet's used range: last row − first row + 1, 0 if empty.
fn used_rows(range: &Range<Data>) -> usize {
    match (range.start(), range.end()) {
        (Some((first, _)), Some((last, _))) => (last - first + 1) as usize,
        _ => 0,
    }
}
