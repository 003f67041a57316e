//! Tests for successful parses: canonical CSR layout, index translation,
//! empty rows, and agreement with a dense reference.
//!
//! Fixture files are written through `tempfile` and parsed via the public
//! `read_matrix` entry point; in-memory parses go through `read_matrix_from`.

use std::io::Cursor;
use std::io::Write;

use approx::assert_abs_diff_eq;
use mtxread::{read_matrix, read_matrix_from, CsrMatrix, MatrixView, ReadFlags, SparseMatrix};
use rand::seq::SliceRandom;
use rand::Rng;
use tempfile::NamedTempFile;

/// Write `content` to a fresh temporary file and return its handle.
fn write_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn basic_unsorted_matrix() {
    let file = write_temp_file(
        "%%MatrixMarket matrix coordinate real general\n\
         5 5 4\n\
         3 2 3.2\n\
         1 1 1.0\n\
         2 5 2.5\n\
         5 5 5.5\n",
    );
    let m: CsrMatrix<f64> = read_matrix(file.path(), MatrixView::Full, ReadFlags::empty()).unwrap();

    assert_eq!(m.n(), 5);
    assert_eq!(m.nnz(), 4);
    assert_eq!(m.offsets(), &[0, 1, 2, 3, 3, 4]);
    // Indices are translated from the file's 1-based convention.
    assert_eq!(m.columns(), &[0, 4, 1, 4]);
    assert_eq!(m.values(), &[1.0, 2.5, 3.2, 5.5]);
}

#[test]
fn empty_rows_present() {
    let file = write_temp_file(
        "%%MatrixMarket matrix coordinate real general\n\
         4 4 2\n\
         1 1 1.0\n\
         4 4 4.0\n",
    );
    let m: CsrMatrix<f64> = read_matrix(file.path(), MatrixView::Full, ReadFlags::empty()).unwrap();

    assert_eq!(m.offsets(), &[0, 1, 1, 1, 2]);
    assert_eq!(m.columns(), &[0, 3]);
    assert_eq!(m.values(), &[1.0, 4.0]);
    assert_eq!(m.row(2), (&[][..], &[][..]));
}

#[test]
fn sorted_output_from_out_of_order_input() {
    // Deliberately out-of-order data lines; output must be row-major with
    // strictly increasing columns inside each row.
    let file = write_temp_file(
        "%%MatrixMarket matrix coordinate real general\n\
         4 4 5\n\
         3 2 3.0\n\
         1 1 1.0\n\
         4 4 4.0\n\
         2 3 2.0\n\
         2 2 1.5\n",
    );
    let m: CsrMatrix<f64> = read_matrix(file.path(), MatrixView::Full, ReadFlags::empty()).unwrap();

    assert_eq!(m.offsets(), &[0, 1, 3, 4, 5]);
    assert_eq!(m.columns(), &[0, 1, 2, 1, 3]);
    for (got, want) in m.values().iter().zip([1.0, 1.5, 2.0, 3.0, 4.0]) {
        assert_abs_diff_eq!(*got, want);
    }
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let input = "%%MatrixMarket matrix coordinate real general\n\
                 % generated fixture\n\
                 \n\
                 3 3 2\n\
                 % data follows\n\
                 1 2 1.0\n\
                 \n\
                 3 3 2.0\n";
    let m: CsrMatrix<f64> =
        read_matrix_from(Cursor::new(input), MatrixView::Full, ReadFlags::empty()).unwrap();
    assert_eq!(m.offsets(), &[0, 1, 1, 2]);
    assert_eq!(m.columns(), &[1, 2]);
}

#[test]
fn triangular_views_accept_conforming_files() {
    let upper = "%%MatrixMarket matrix coordinate real general\n\
                 3 3 3\n\
                 1 1 1.0\n\
                 1 3 2.0\n\
                 2 2 3.0\n";
    let m: CsrMatrix<f64> =
        read_matrix_from(Cursor::new(upper), MatrixView::Upper, ReadFlags::empty()).unwrap();
    assert_eq!(m.nnz(), 3);

    let lower = "%%MatrixMarket matrix coordinate real general\n\
                 3 3 3\n\
                 1 1 1.0\n\
                 3 1 2.0\n\
                 2 2 3.0\n";
    let m: CsrMatrix<f64> =
        read_matrix_from(Cursor::new(lower), MatrixView::Lower, ReadFlags::empty()).unwrap();
    assert_eq!(m.nnz(), 3);
}

#[test]
fn reserved_flags_do_not_change_the_parse() {
    let input = "%%MatrixMarket matrix coordinate real general\n\
                 3 3 2\n\
                 2 1 1.0\n\
                 3 3 2.0\n";
    let plain: CsrMatrix<f64> =
        read_matrix_from(Cursor::new(input), MatrixView::Full, ReadFlags::empty()).unwrap();
    let flagged: CsrMatrix<f64> =
        read_matrix_from(Cursor::new(input), MatrixView::Full, ReadFlags::all()).unwrap();
    assert_eq!(plain, flagged);
}

#[test]
fn into_parts_hands_over_the_three_arrays() {
    let input = "%%MatrixMarket matrix coordinate real general\n\
                 2 2 2\n\
                 1 1 1.0\n\
                 2 2 2.0\n";
    let m: CsrMatrix<f64> =
        read_matrix_from(Cursor::new(input), MatrixView::Full, ReadFlags::empty()).unwrap();
    let (offsets, columns, values) = m.into_parts();
    assert_eq!(offsets, vec![0, 1, 2]);
    assert_eq!(columns, vec![0, 1]);
    assert_eq!(values, vec![1.0, 2.0]);
}

#[test]
fn generic_value_type_f32() {
    let input = "%%MatrixMarket matrix coordinate real general\n\
                 2 2 1\n\
                 1 2 0.5\n";
    let m: CsrMatrix<f32> =
        read_matrix_from(Cursor::new(input), MatrixView::Full, ReadFlags::empty()).unwrap();
    assert_eq!(m.values(), &[0.5f32]);
}

#[test]
fn faer_conversion_matches_dense_reference() {
    let file = write_temp_file(
        "%%MatrixMarket matrix coordinate real general\n\
         3 3 4\n\
         1 1 2.0\n\
         2 3 -1.0\n\
         3 1 4.0\n\
         3 3 1.5\n",
    );
    let m: CsrMatrix<f64> = read_matrix(file.path(), MatrixView::Full, ReadFlags::empty()).unwrap();
    let dense = m.to_faer().to_dense();

    let mut reference = vec![vec![0.0; 3]; 3];
    reference[0][0] = 2.0;
    reference[1][2] = -1.0;
    reference[2][0] = 4.0;
    reference[2][2] = 1.5;
    for i in 0..3 {
        for j in 0..3 {
            assert_abs_diff_eq!(dense[(i, j)], reference[i][j]);
        }
    }
}

/// Generate a random n×n coordinate file with `nnz` distinct coordinates,
/// returning the text and the equivalent dense matrix.
fn random_coordinate_file(n: usize, nnz: usize) -> (String, Vec<Vec<f64>>) {
    let mut rng = rand::thread_rng();
    let mut coords: Vec<(usize, usize)> = (0..n * n).map(|k| (k / n, k % n)).collect();
    coords.shuffle(&mut rng);
    coords.truncate(nnz);

    let mut dense = vec![vec![0.0; n]; n];
    let mut text = format!("%%MatrixMarket matrix coordinate real general\n{n} {n} {nnz}\n");
    for &(i, j) in &coords {
        let v: f64 = rng.r#gen::<f64>() - 0.5;
        dense[i][j] = v;
        text.push_str(&format!("{} {} {}\n", i + 1, j + 1, v));
    }
    (text, dense)
}

#[test]
fn randomized_structure_invariants_and_spmv() {
    let (n, nnz) = (20, 60);
    let (text, dense) = random_coordinate_file(n, nnz);
    let m: CsrMatrix<f64> =
        read_matrix_from(Cursor::new(text), MatrixView::Full, ReadFlags::empty()).unwrap();

    assert_eq!(m.offsets().len(), n + 1);
    assert_eq!(m.offsets()[0], 0);
    assert_eq!(m.offsets()[n], nnz);
    for r in 0..n {
        assert!(m.offsets()[r] <= m.offsets()[r + 1]);
        let (cols, _) = m.row(r);
        for pair in cols.windows(2) {
            assert!(pair[0] < pair[1], "columns not strictly increasing in row {r}");
        }
    }

    let mut rng = rand::thread_rng();
    let x: Vec<f64> = (0..n).map(|_| rng.r#gen()).collect();
    let mut y = vec![0.0; n];
    m.spmv(&x, &mut y);
    for i in 0..n {
        let want: f64 = (0..n).map(|j| dense[i][j] * x[j]).sum();
        assert_abs_diff_eq!(y[i], want, epsilon = 1e-12);
    }
}
