//! API options for the matrix reader.
//!
//! This module provides the `MatrixView` enum, which declares which triangle
//! of a symmetric matrix a coordinate file is expected to contain, and the
//! `ReadFlags` bitset carrying the reader's reserved configuration switches.
//! The view participates in per-entry validation; the flags are recorded and
//! passed through for a wrapping layer to interpret.

use bitflags::bitflags;

/// Declared triangular structure of the input file.
///
/// Under `Upper` every entry must satisfy `row <= col`; under `Lower` every
/// entry must satisfy `row >= col`; `Full` imposes no triangular constraint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatrixView {
    /// Both triangles may be present.
    Full,
    /// Upper triangle only (including the diagonal).
    Upper,
    /// Lower triangle only (including the diagonal).
    Lower,
}

bitflags! {
    /// Reserved reader switches.
    ///
    /// These correspond to the two trailing boolean options of the original
    /// call contract. They do not alter parsing or validation; a caller that
    /// post-processes the CSR (symmetric expansion, index rebasing) reads
    /// them back via [`ReadFlags::contains`].
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct ReadFlags: u32 {
        /// Request expansion of a triangular file into both triangles.
        const EXPAND_SYMMETRIC = 0b01;
        /// Request 1-based indices in the caller-facing output.
        const ONE_BASED_OUTPUT = 0b10;
    }
}
