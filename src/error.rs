//! Error types for the elimination engine and the system definition loader.

use thiserror::Error;

/// Errors raised by the elimination engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GaussError {
    /// The chosen pivot's magnitude is at or below the configured tolerance:
    /// the matrix is singular, or ill-conditioned enough that elimination is
    /// numerically unreliable. No solution is produced and both system
    /// buffers are consumed, so the caller must reload before retrying.
    #[error("system is degenerate and does not have a unique solution (pivot {pivot})")]
    DegenerateSystem {
        /// Index of the pivot that failed the magnitude check
        pivot: usize,
    },
}

/// Errors raised while reading a system definition.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O failure.
    #[error("I/O error reading system definition")]
    Io(#[from] std::io::Error),

    /// The input does not start with a system size.
    #[error("missing system size header")]
    MissingSize,

    /// The leading size token is not a valid dimension.
    #[error("invalid system size {value:?}")]
    InvalidSize {
        /// The offending token
        value: String,
    },

    /// The declared size is zero.
    #[error("system must have at least one equation")]
    EmptySystem,

    /// A coefficient or driving value failed to parse.
    #[error("invalid numeric value {value:?} (value {position} of the system)")]
    InvalidValue {
        /// The offending token
        value: String,
        /// 1-based position among the system's values
        position: usize,
    },

    /// The input ended before all values were read.
    #[error("unexpected end of input: expected {expected} values, found {found}")]
    Truncated {
        /// Number of values the declared size requires
        expected: usize,
        /// Number of values actually present
        found: usize,
    },
}
