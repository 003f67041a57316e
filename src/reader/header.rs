//! Matrix Market banner and size-line parsing.
//!
//! The banner must declare `matrix coordinate`; the dense `array` layout and
//! any other object/format combination are unsupported. The size line must
//! declare a square matrix with positive dimension and nonzero count.

use std::io::BufRead;

use crate::error::MtxError;
use crate::reader::LineCursor;

/// Declared dimensions of the coordinate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Matrix dimension (rows == columns).
    pub n: usize,
    /// Nonzero count declared on the size line.
    pub nnz_declared: usize,
}

/// Parse the banner line and the size line, advancing the cursor past both.
pub(crate) fn parse_header<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<Header, MtxError> {
    let banner = cursor
        .next_line()
        .map_err(|e| MtxError::MalformedHeader(format!("read error: {e}")))?
        .ok_or_else(|| MtxError::MalformedHeader("empty file".into()))?;

    let fields: Vec<&str> = banner.split_whitespace().collect();
    if fields.len() < 4 || !fields[0].eq_ignore_ascii_case("%%MatrixMarket") {
        return Err(MtxError::MalformedHeader(format!(
            "unrecognized banner: {banner:?}"
        )));
    }
    if !fields[1].eq_ignore_ascii_case("matrix") || !fields[2].eq_ignore_ascii_case("coordinate") {
        return Err(MtxError::MalformedHeader(format!(
            "unsupported layout: {} {}",
            fields[1], fields[2]
        )));
    }

    let (line, size) = cursor
        .next_data_line()
        .map_err(|e| MtxError::MalformedHeader(format!("read error: {e}")))?
        .ok_or_else(|| MtxError::MalformedHeader("missing size line".into()))?;

    let dims: Vec<i64> = size
        .split_whitespace()
        .map(|tok| tok.parse::<i64>())
        .collect::<Result<_, _>>()
        .map_err(|e| MtxError::MalformedHeader(format!("bad size line {line}: {e}")))?;
    let [nrows, ncols, nnz] = dims[..] else {
        return Err(MtxError::MalformedHeader(format!(
            "size line {line} must hold exactly three integers"
        )));
    };

    if nrows != ncols {
        return Err(MtxError::MalformedHeader(format!(
            "non-square matrix declared: {nrows} x {ncols}"
        )));
    }
    if nrows <= 0 || nnz <= 0 {
        return Err(MtxError::MalformedHeader(format!(
            "non-positive dimensions declared: n = {nrows}, nnz = {nnz}"
        )));
    }

    Ok(Header {
        n: nrows as usize,
        nnz_declared: nnz as usize,
    })
}
