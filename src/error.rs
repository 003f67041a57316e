use std::path::PathBuf;

use thiserror::Error;

// Unified error type for mtxread

#[derive(Error, Debug)]
pub enum MtxError {
    #[error("cannot open {}: {source}", path.display())]
    FileNotFound {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed header: {0}")]
    MalformedHeader(String),
    #[error("out-of-bounds row index {index} for {n}x{n} matrix (line {line})")]
    OutOfBoundRowIndex { index: i64, n: usize, line: usize },
    #[error("out-of-bounds column index {index} for {n}x{n} matrix (line {line})")]
    OutOfBoundColIndex { index: i64, n: usize, line: usize },
    #[error("upper view requested but lower-triangle entry ({row}, {col}) found (line {line})")]
    UpperViewButLowerFound { row: usize, col: usize, line: usize },
    #[error("lower view requested but upper-triangle entry ({row}, {col}) found (line {line})")]
    LowerViewButUpperFound { row: usize, col: usize, line: usize },
    #[error("declared {declared} nonzeros but file contains {found}")]
    WrongNnz { declared: usize, found: usize },
    #[error("unparsable entry on line {line}: {reason}")]
    MalformedEntry { line: usize, reason: String },
    #[error("duplicate coordinate ({row}, {col})")]
    DuplicateEntry { row: usize, col: usize },
}

impl MtxError {
    /// Stable integer status code for this error kind. Zero is reserved for
    /// success and is never returned here.
    pub fn code(&self) -> i32 {
        match self {
            MtxError::FileNotFound { .. } => 1,
            MtxError::MalformedHeader(_) => 2,
            MtxError::OutOfBoundRowIndex { .. } => 3,
            MtxError::OutOfBoundColIndex { .. } => 4,
            MtxError::UpperViewButLowerFound { .. } => 5,
            MtxError::LowerViewButUpperFound { .. } => 6,
            MtxError::WrongNnz { .. } => 7,
            MtxError::MalformedEntry { .. } => 8,
            MtxError::DuplicateEntry { .. } => 9,
        }
    }
}
