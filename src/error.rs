//! Crate-level error types
//!
//! Three layers, one enum each:
//!
//! - [`SolveError`]: raised by an operator when its linear system cannot be solved
//! - [`EvolverError`]: raised by an evolver step (precondition or propagated solve failure)
//! - [`ModelError`]: raised by the finite-difference driver over a whole time grid

use thiserror::Error;

use crate::operator::Time;

/// Failure of [`LinearOperator::solve_for`](crate::operator::LinearOperator::solve_for)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// Zero (or numerically zero) pivot met while factorizing
    #[error("singular system: zero pivot at row {row}")]
    Singular { row: usize },

    /// Right-hand side does not match the operator size
    #[error("dimension mismatch: operator has size {expected}, right-hand side has {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Any other numerical breakdown reported by the operator
    #[error("numerical breakdown: {0}")]
    Breakdown(String),
}

/// Failure of a single evolver step
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvolverError {
    /// `step` called before any `set_step`
    #[error("time step not configured: call set_step before step")]
    NotConfigured,

    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Failure of a finite-difference model run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("invalid time grid: {0}")]
    InvalidGrid(String),

    #[error("step {step} at t = {time} failed: {source}")]
    Step {
        step: usize,
        time: Time,
        #[source]
        source: EvolverError,
    },

    /// NaN or infinity appeared in the state
    #[error(
        "non-finite value in state after step {step} (t = {time}). \
         Check operator coefficients and boundary handling."
    )]
    NonFinite { step: usize, time: Time },
}
