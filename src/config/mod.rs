//! Reader configuration: matrix view and reserved option flags.

pub mod options;
pub use options::{MatrixView, ReadFlags};
