//! Top-level reader entry points.
//!
//! `read_matrix` runs the whole pipeline on a file path: open, parse header,
//! parse and validate triplets, build canonical CSR. Every stage short-
//! circuits to a specific [`MtxError`] kind; on failure no partially
//! populated matrix is ever handed back.

pub mod header;
pub mod triplets;

pub use header::Header;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::config::{MatrixView, ReadFlags};
use crate::error::MtxError;
use crate::matrix::CsrMatrix;

/// Read a Matrix Market coordinate file into canonical CSR form.
///
/// `view` declares which triangle the file must contain and is enforced per
/// entry. `flags` carries the reserved pass-through switches; they do not
/// alter parsing or validation here.
pub fn read_matrix<T, P>(path: P, view: MatrixView, flags: ReadFlags) -> Result<CsrMatrix<T>, MtxError>
where
    T: num_traits::Float + FromStr,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| MtxError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    read_matrix_from(BufReader::new(file), view, flags)
}

/// Same pipeline over any buffered reader (in-memory input, sockets, tests).
pub fn read_matrix_from<T, R>(reader: R, view: MatrixView, flags: ReadFlags) -> Result<CsrMatrix<T>, MtxError>
where
    T: num_traits::Float + FromStr,
    R: BufRead,
{
    let _ = flags; // reserved for a wrapping layer, inert during the parse
    let mut cursor = LineCursor::new(reader);
    let header = header::parse_header(&mut cursor)?;
    let triplets = triplets::parse_triplets::<T, R>(&mut cursor, &header, view)?;
    CsrMatrix::from_triplets(header.n, &triplets)
}

/// Line-oriented scanner tracking 1-based physical line numbers for
/// diagnostics.
pub(crate) struct LineCursor<R> {
    inner: R,
    buf: String,
    line: usize,
}

impl<R: BufRead> LineCursor<R> {
    pub(crate) fn new(inner: R) -> Self {
        Self {
            inner,
            buf: String::new(),
            line: 0,
        }
    }

    /// Physical line number of the most recently returned line.
    pub(crate) fn line(&self) -> usize {
        self.line
    }

    /// Next physical line, trimmed; `None` at EOF.
    pub(crate) fn next_line(&mut self) -> std::io::Result<Option<&str>> {
        self.buf.clear();
        if self.inner.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        Ok(Some(self.buf.trim()))
    }

    /// Next line that is neither blank nor a `%` comment, together with its
    /// line number; `None` at EOF.
    pub(crate) fn next_data_line(&mut self) -> std::io::Result<Option<(usize, String)>> {
        loop {
            self.buf.clear();
            if self.inner.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            let text = self.buf.trim();
            if !text.is_empty() && !text.starts_with('%') {
                return Ok(Some((self.line, text.to_owned())));
            }
        }
    }
}
