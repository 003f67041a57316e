// CSR storage produced by the reader, plus the SparseMatrix trait.

use faer::sparse::{
    SymbolicSparseRowMat, // owning symbolic CSR alias
    SparseRowMat,         // owning numeric CSR alias
};
use faer::traits::ComplexField;

use crate::error::MtxError;

/// A read-only sparse matrix supporting y = A * x.
pub trait SparseMatrix<T> {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
    /// Compute y = A * x.  `x.len() == ncols()`, `y.len() == nrows()`.
    fn spmv(&self, x: &[T], y: &mut [T]);
}

/// Square sparse matrix in compressed sparse-row form.
///
/// Canonical layout: `offsets` has length `n + 1` with `offsets[0] == 0` and
/// `offsets[n] == nnz`; within each row's slice `[offsets[r], offsets[r+1])`
/// the column indices are strictly increasing. All indices are 0-based.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix<T> {
    n: usize,
    offsets: Vec<usize>,
    columns: Vec<usize>,
    values: Vec<T>,
}

impl<T: Copy + num_traits::Zero> CsrMatrix<T> {
    /// Build canonical CSR from validated triplets with 0-based indices.
    ///
    /// The triplets may arrive in any order; rows with no entries are legal
    /// and end up with `offsets[r] == offsets[r + 1]`. A repeated (row, col)
    /// coordinate is a structural error: duplicates are rejected, never
    /// summed.
    pub fn from_triplets(n: usize, triplets: &[(usize, usize, T)]) -> Result<Self, MtxError> {
        let nnz = triplets.len();

        // Histogram pass: entries per row.
        let mut counts = vec![0usize; n];
        for &(row, _, _) in triplets {
            debug_assert!(row < n, "triplet row escaped validation");
            counts[row] += 1;
        }

        // Prefix-sum pass.
        let mut offsets = vec![0usize; n + 1];
        for r in 0..n {
            offsets[r + 1] = offsets[r] + counts[r];
        }

        // Scatter pass: per-row cursors, file order within each row.
        let mut cursor: Vec<usize> = offsets[..n].to_vec();
        let mut columns = vec![0usize; nnz];
        let mut values = vec![T::zero(); nnz];
        for &(row, col, val) in triplets {
            let k = cursor[row];
            columns[k] = col;
            values[k] = val;
            cursor[row] += 1;
        }

        // Canonicalize each row: stable sort by column, then reject any
        // repeated coordinate.
        for r in 0..n {
            let lo = offsets[r];
            let hi = offsets[r + 1];
            let mut row_entries: Vec<(usize, T)> = columns[lo..hi]
                .iter()
                .copied()
                .zip(values[lo..hi].iter().copied())
                .collect();
            row_entries.sort_by_key(|&(col, _)| col);
            for pair in row_entries.windows(2) {
                if pair[0].0 == pair[1].0 {
                    return Err(MtxError::DuplicateEntry { row: r, col: pair[0].0 });
                }
            }
            for (k, (col, val)) in row_entries.into_iter().enumerate() {
                columns[lo + k] = col;
                values[lo + k] = val;
            }
        }

        Ok(Self { n, offsets, columns, values })
    }
}

impl<T> CsrMatrix<T> {
    /// Matrix dimension (rows == columns).
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of stored nonzeros.
    pub fn nnz(&self) -> usize {
        self.columns.len()
    }

    /// Row offsets, length `n + 1`.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Column indices, length `nnz`, 0-based.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Stored values, length `nnz`.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Column indices and values of row `r`.
    pub fn row(&self, r: usize) -> (&[usize], &[T]) {
        let lo = self.offsets[r];
        let hi = self.offsets[r + 1];
        (&self.columns[lo..hi], &self.values[lo..hi])
    }

    /// Transfer ownership of the three raw arrays to the caller.
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>, Vec<T>) {
        (self.offsets, self.columns, self.values)
    }
}

impl<T: ComplexField + Copy> CsrMatrix<T> {
    /// Convert into a faer sparse row matrix for use with faer solvers.
    pub fn to_faer(&self) -> SparseRowMat<usize, T> {
        let symbolic = SymbolicSparseRowMat::new_checked(
            self.n,
            self.n,
            self.offsets.clone(),
            None, // optional row_nnz: Option<Vec<usize>>
            self.columns.clone(),
        );
        SparseRowMat::new(symbolic, self.values.clone())
    }
}

impl<T: Copy + num_traits::Float> SparseMatrix<T> for CsrMatrix<T> {
    fn nrows(&self) -> usize {
        self.n
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn spmv(&self, x: &[T], y: &mut [T]) {
        assert_eq!(x.len(), self.ncols());
        assert_eq!(y.len(), self.nrows());
        for r in 0..self.n {
            let mut sum = T::zero();
            for k in self.offsets[r]..self.offsets[r + 1] {
                sum = sum + self.values[k] * x[self.columns[k]];
            }
            y[r] = sum;
        }
    }
}
