//! Gaussian elimination with partial pivoting.
//!
//! Transforms an owned (A, b) pair into an upper-triangular system, then back
//! substitutes to produce the solution in the storage that held b. Within one
//! pivot step the reductions of the rows below the pivot are independent and
//! can run in parallel; the pivot steps themselves are strictly ordered, since
//! each pivot search reads values committed by the previous reduction.

use crate::error::GaussError;
use ndarray::{Array1, Array2, ArrayViewMut1, Axis, Zip, s};
use std::time::{Duration, Instant};

/// Pivot magnitudes at or below this value mark the system as degenerate.
pub const DEFAULT_TOLERANCE: f64 = 1.0e-6;

/// Elimination engine configuration.
#[derive(Debug, Clone)]
pub struct GaussConfig {
    /// A pivot whose magnitude is at or below this value fails the solve
    pub tolerance: f64,
    /// Reduce the rows below each pivot with rayon
    pub parallel: bool,
}

impl Default for GaussConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            parallel: false,
        }
    }
}

/// Result of a successful solve.
#[derive(Debug)]
pub struct GaussSolution {
    /// Solution vector, produced in the storage that held the driving vector
    pub x: Array1<f64>,
    /// Engine time: pivot search, elimination, and back substitution only
    pub elapsed: Duration,
    /// Number of row exchanges performed during elimination
    pub row_swaps: usize,
}

/// Solve Ax = b by Gaussian elimination with partial pivoting.
///
/// Takes ownership of both buffers: the coefficient matrix is consumed by the
/// reduction, and the driving vector's storage is returned, rewritten, as
/// [`GaussSolution::x`]. On failure both buffers are dropped; a partially
/// eliminated system is not meaningful and must not be reused.
///
/// # Panics
///
/// Panics if `a` is not square or `b`'s length does not match its dimension.
/// The loader and generator uphold both invariants.
pub fn gauss_solve(
    mut a: Array2<f64>,
    mut b: Array1<f64>,
    config: &GaussConfig,
) -> Result<GaussSolution, GaussError> {
    assert_eq!(a.nrows(), a.ncols(), "coefficient matrix must be square");
    assert_eq!(
        a.nrows(),
        b.len(),
        "driving vector length must match the matrix dimension"
    );

    let start = Instant::now();
    let row_swaps = elimination(&mut a, &mut b, config)?;
    back_substitution(&a, &mut b, config.tolerance)?;
    let elapsed = start.elapsed();

    log::debug!(
        "solved {n}x{n} system in {elapsed:?} with {row_swaps} row exchanges",
        n = b.len()
    );

    Ok(GaussSolution {
        x: b,
        elapsed,
        row_swaps,
    })
}

/// Forward elimination. Returns the number of row exchanges.
fn elimination(
    a: &mut Array2<f64>,
    b: &mut Array1<f64>,
    config: &GaussConfig,
) -> Result<usize, GaussError> {
    let n = b.len();
    let mut row_swaps = 0;

    for i in 0..n {
        // Find the row with the largest |a[j][i]|, j = i, ..., n - 1. The
        // strict comparison keeps the smallest row index on ties.
        let mut k = i;
        let mut max = a[[i, i]].abs();
        for j in (i + 1)..n {
            let candidate = a[[j, i]].abs();
            if candidate > max {
                k = j;
                max = candidate;
            }
        }

        if max <= config.tolerance {
            return Err(GaussError::DegenerateSystem { pivot: i });
        }

        // Exchange row i and row k, if necessary.
        if k != i {
            let (row_i, row_k) = a.multi_slice_mut((s![i, ..], s![k, ..]));
            Zip::from(row_i).and(row_k).for_each(std::mem::swap);
            b.swap(i, k);
            row_swaps += 1;
            log::trace!("pivot {i}: exchanged rows {i} and {k}");
        }

        reduce_below(a, b, i, config.parallel);
    }

    Ok(row_swaps)
}

/// Subtract a multiple of the pivot row from every row below it, zeroing the
/// pivot column. The update spans the full row, columns left of the pivot
/// included.
fn reduce_below(a: &mut Array2<f64>, b: &mut Array1<f64>, i: usize, parallel: bool) {
    let pivot = a[[i, i]];
    let b_i = b[i];

    let (upper, mut below) = a.view_mut().split_at(Axis(0), i + 1);
    let pivot_row = upper.row(i);
    let (_, mut b_below) = b.view_mut().split_at(Axis(0), i + 1);

    let reduce = |mut row: ArrayViewMut1<f64>, b_j: &mut f64| {
        let m = row[i] / pivot;
        Zip::from(&mut row)
            .and(&pivot_row)
            .for_each(|value, &p| *value -= m * p);
        *b_j -= m * b_i;
    };

    if parallel {
        Zip::from(below.rows_mut())
            .and(&mut b_below)
            .par_for_each(&reduce);
    } else {
        Zip::from(below.rows_mut())
            .and(&mut b_below)
            .for_each(&reduce);
    }
}

/// Back substitution over the upper-triangular system, writing the solution
/// into `b` from the last index down.
///
/// The diagonal check repeats the one performed when the entry was chosen as
/// a pivot; row and column identity are fixed once a pivot step commits, so
/// it cannot fire on a system the forward pass accepted.
fn back_substitution(
    a: &Array2<f64>,
    b: &mut Array1<f64>,
    tolerance: f64,
) -> Result<(), GaussError> {
    let n = b.len();

    for i in (0..n).rev() {
        let diagonal = a[[i, i]];
        if diagonal.abs() <= tolerance {
            return Err(GaussError::DegenerateSystem { pivot: i });
        }

        let mut sum = b[i];
        for j in (i + 1)..n {
            sum -= a[[i, j]] * b[j];
        }
        b[i] = sum / diagonal;
    }

    Ok(())
}
