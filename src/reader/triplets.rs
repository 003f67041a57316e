//! Per-entry parsing and structural validation.
//!
//! Each data line holds `row col value` with 1-based indices. Checks run in
//! a fixed order per triplet and abort the whole parse on the first
//! violation: row bound, column bound, view consistency. The number of data
//! lines must match the declared nonzero count exactly.

use std::io::BufRead;
use std::str::FromStr;

use crate::config::MatrixView;
use crate::error::MtxError;
use crate::reader::{header::Header, LineCursor};

/// Read `nnz_declared` triplets, translating indices to 0-based.
///
/// Error payloads report coordinates as they appear in the file (1-based).
pub(crate) fn parse_triplets<T, R>(
    cursor: &mut LineCursor<R>,
    header: &Header,
    view: MatrixView,
) -> Result<Vec<(usize, usize, T)>, MtxError>
where
    T: Copy + FromStr,
    R: BufRead,
{
    let n = header.n;
    let mut triplets: Vec<(usize, usize, T)> = Vec::with_capacity(header.nnz_declared);

    while triplets.len() < header.nnz_declared {
        let Some((line, text)) = next_entry_line(cursor)? else {
            return Err(MtxError::WrongNnz {
                declared: header.nnz_declared,
                found: triplets.len(),
            });
        };

        let mut fields = text.split_whitespace();
        let (Some(row_tok), Some(col_tok), Some(val_tok), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(MtxError::MalformedEntry {
                line,
                reason: "expected exactly three fields (row col value)".into(),
            });
        };

        let row: i64 = parse_field(row_tok, "row index", line)?;
        let col: i64 = parse_field(col_tok, "column index", line)?;
        let val: T = val_tok.parse().map_err(|_| MtxError::MalformedEntry {
            line,
            reason: format!("unparsable value {val_tok:?}"),
        })?;

        if row < 1 || row > n as i64 {
            return Err(MtxError::OutOfBoundRowIndex { index: row, n, line });
        }
        if col < 1 || col > n as i64 {
            return Err(MtxError::OutOfBoundColIndex { index: col, n, line });
        }
        let (row, col) = (row as usize, col as usize);
        match view {
            MatrixView::Upper if row > col => {
                return Err(MtxError::UpperViewButLowerFound { row, col, line });
            }
            MatrixView::Lower if row < col => {
                return Err(MtxError::LowerViewButUpperFound { row, col, line });
            }
            _ => {}
        }

        triplets.push((row - 1, col - 1, val));
    }

    // Trailing data beyond the declared count is a count mismatch too.
    let mut extra = 0usize;
    while next_entry_line(cursor)?.is_some() {
        extra += 1;
    }
    if extra > 0 {
        return Err(MtxError::WrongNnz {
            declared: header.nnz_declared,
            found: header.nnz_declared + extra,
        });
    }

    Ok(triplets)
}

/// Next non-blank, non-comment line, or `None` at EOF.
fn next_entry_line<R: BufRead>(
    cursor: &mut LineCursor<R>,
) -> Result<Option<(usize, String)>, MtxError> {
    cursor.next_data_line().map_err(|e| MtxError::MalformedEntry {
        line: cursor.line(),
        reason: format!("read error: {e}"),
    })
}

fn parse_field(tok: &str, what: &str, line: usize) -> Result<i64, MtxError> {
    tok.parse().map_err(|_| MtxError::MalformedEntry {
        line,
        reason: format!("unparsable {what} {tok:?}"),
    })
}
