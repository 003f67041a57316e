//! mtxread: validating Matrix Market coordinate reader over CSR
//!
//! This crate parses the coordinate (triplet) variant of the Matrix Market
//! text format and produces a canonical compressed sparse-row matrix:
//! 0-based indices, row-major order, strictly increasing columns within each
//! row. Malformed or structurally inconsistent input fails with a specific
//! error kind rather than yielding a partially populated matrix.

pub mod config;
pub mod error;
pub mod matrix;
pub mod reader;

// Re-exports for convenience
pub use config::*;
pub use error::*;
pub use matrix::*;
pub use reader::*;
