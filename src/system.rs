//! Dense linear systems and the flat text definition format.
//!
//! A system definition is whitespace separated: the dimension N first, then
//! for each equation its N coefficients followed by the driving value. The
//! layout of the whitespace does not matter, and anything after the required
//! N * (N + 1) values is ignored.

use crate::error::LoadError;
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

/// A dense NxN coefficient matrix with its driving vector.
#[derive(Debug, Clone)]
pub struct LinearSystem {
    /// Coefficient matrix
    pub a: Array2<f64>,
    /// Driving (right-hand side) vector
    pub b: Array1<f64>,
}

impl LinearSystem {
    /// Create a system from its parts.
    ///
    /// # Panics
    ///
    /// Panics if `a` is not square or `b`'s length does not match.
    pub fn new(a: Array2<f64>, b: Array1<f64>) -> Self {
        assert_eq!(a.nrows(), a.ncols(), "coefficient matrix must be square");
        assert_eq!(
            a.nrows(),
            b.len(),
            "driving vector length must match the matrix dimension"
        );
        Self { a, b }
    }

    /// Dimension N of the system.
    pub fn dim(&self) -> usize {
        self.b.len()
    }

    /// Parse a system definition from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoadError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        let mut tokens = text.split_ascii_whitespace();

        let size_token = tokens.next().ok_or(LoadError::MissingSize)?;
        let n: usize = size_token.parse().map_err(|_| LoadError::InvalidSize {
            value: size_token.to_string(),
        })?;
        if n == 0 {
            return Err(LoadError::EmptySystem);
        }

        let expected = n * (n + 1);
        let mut a = Array2::zeros((n, n));
        let mut b = Array1::zeros(n);
        let mut found = 0;

        for i in 0..n {
            for j in 0..=n {
                let token = tokens.next().ok_or(LoadError::Truncated { expected, found })?;
                let value: f64 = token.parse().map_err(|_| LoadError::InvalidValue {
                    value: token.to_string(),
                    position: found + 1,
                })?;
                if j < n {
                    a[[i, j]] = value;
                } else {
                    b[i] = value;
                }
                found += 1;
            }
        }

        Ok(Self { a, b })
    }

    /// Read a system definition file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let file = File::open(path.as_ref())?;
        let system = Self::from_reader(BufReader::new(file))?;
        log::debug!(
            "loaded {n}x{n} system from {path}",
            n = system.dim(),
            path = path.as_ref().display()
        );
        Ok(system)
    }

    /// Write the system in the definition format: the dimension on the first
    /// line, then one value per line.
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let n = self.dim();
        writeln!(writer, "{n}")?;
        for i in 0..n {
            for j in 0..n {
                writeln!(writer, "{:>18.15}", self.a[[i, j]])?;
            }
            writeln!(writer, "{:>18.15}", self.b[i])?;
        }
        Ok(())
    }

    /// Create a random system with every entry uniform in [-1.0, 1.0).
    ///
    /// `Some(seed)` makes the output reproducible.
    pub fn random(n: usize, seed: Option<u64>) -> Self {
        assert!(n >= 1, "system must have at least one equation");

        let mut rng: StdRng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => {
                let mut thread_rng = rand::rng();
                StdRng::from_rng(&mut thread_rng)
            }
        };

        let a = Array2::from_shape_fn((n, n), |_| rng.random_range(-1.0..1.0));
        let b = Array1::from_shape_fn(n, |_| rng.random_range(-1.0..1.0));
        Self { a, b }
    }
}
