//! Dense linear system solver using Gaussian elimination with partial pivoting.
//!
//! This crate solves Ax = b for a dense NxN coefficient matrix A and driving
//! vector b. Forward elimination selects the largest-magnitude candidate pivot
//! in each column (partial pivoting), exchanges rows as needed, and reduces
//! every row below the pivot; back substitution then resolves the unknowns
//! from the resulting upper-triangular system.
//!
//! # Features
//!
//! - **Elimination Engine**: [`gauss_solve`] consumes the system buffers and
//!   returns the solution together with the engine-only solve time
//! - **System Definitions**: [`LinearSystem`] reads and writes the flat text
//!   format used by the `solve_system` and `create_system` programs
//! - **Parallel Reduction**: row reduction below each pivot can run under
//!   rayon via [`GaussConfig::parallel`]
//!
//! # Example
//!
//! ```
//! use gauss_solver::{GaussConfig, gauss_solve};
//! use ndarray::array;
//!
//! // The zero in the top-left corner forces a row exchange.
//! let a = array![[0.0, 1.0], [1.0, 0.0]];
//! let b = array![2.0, 3.0];
//!
//! let solution = gauss_solve(a, b, &GaussConfig::default()).unwrap();
//! assert!((solution.x[0] - 3.0).abs() < 1e-12);
//! assert!((solution.x[1] - 2.0).abs() < 1e-12);
//! assert_eq!(solution.row_swaps, 1);
//! ```

pub mod error;
pub mod solver;
pub mod system;

// Re-export main types
pub use error::{GaussError, LoadError};
pub use solver::{DEFAULT_TOLERANCE, GaussConfig, GaussSolution, gauss_solve};
pub use system::LinearSystem;
