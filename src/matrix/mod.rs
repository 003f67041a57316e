//! Matrix module: CSR storage and the sparse matrix trait.

pub mod csr;
pub use csr::{CsrMatrix, SparseMatrix};
