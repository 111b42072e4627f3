//! Errors coming from the environment of the solver.
//!
//! An unsatisfiable formula is a regular [`SATSolution`](crate::SATSolution),
//! never an [`Error`].

use thiserror::Error;

/// Result type alias for fallible operations of this crate
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not valid DIMACS
    #[error("parse error: {0}")]
    Parse(String),

    /// The input is valid DIMACS, but not a CNF instance
    #[error("only CNF formulae are supported")]
    UnsupportedInstance,
}
