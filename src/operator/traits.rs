//! Linear operator traits and types
//!
//! This module defines the core API every pluggable spatial operator implements:
//! - `OperatorTraits`: type-level lookup (state type, time-dependence tier)
//! - `LinearOperator`: apply, solve, and the `scale` / `add_identity` algebra
//! - `TimeDependentOperator`: time update, only for the time-dependent tier

use crate::error::SolveError;
use crate::operator::dependence::TimeDependence;
use crate::operator::identity::Identity;

/// Time coordinate (and time step) used throughout the crate
pub type Time = f64;

/// State vector type an operator acts on
pub type StateOf<Op> = <Op as OperatorTraits>::State;

// =================================================================================================
// Operator trait lookup
// =================================================================================================

/// Type-level description of an operator
///
/// # Responsibility
/// Maps an operator type to:
/// - the state vector type it acts on (`State`)
/// - its static time-dependence tier (`Dependence`), either
///   [`TimeConstant`](crate::operator::TimeConstant) or
///   [`TimeDependent`](crate::operator::TimeDependent)
///
/// No runtime state: one implementation per operator type.
///
/// # Capability check
///
/// The bound `Dependence: TimeDependence<Self>` is only satisfied by `TimeDependent` when the
/// operator also implements [`TimeDependentOperator`]. Declaring a time-dependent operator
/// without `set_time` is rejected by the compiler:
///
/// ```compile_fail
/// use fdm_rs::operator::{OperatorTraits, TimeDependent};
///
/// struct Frozen;
///
/// impl OperatorTraits for Frozen {
///     type State = Vec<f64>;
///     type Dependence = TimeDependent; // Frozen has no set_time
/// }
/// ```
pub trait OperatorTraits: Sized {
    /// State vector the operator acts on
    type State;

    /// Time-dependence tier
    type Dependence: TimeDependence<Self>;
}

/// Whether `Op` belongs to the time-dependent tier
///
/// Resolved at compile time.
pub const fn is_time_dependent<Op: OperatorTraits>() -> bool {
    <Op::Dependence as TimeDependence<Op>>::IS_TIME_DEPENDENT
}

// =================================================================================================
// Linear Operator Trait
// =================================================================================================

/// Capability contract for linear spatial operators
///
/// # Responsibility
/// Provides everything an evolver needs to build and apply a one-step propagator,
/// without exposing the operator's representation (tridiagonal, banded, matrix-free, ...).
///
/// # Linearity
/// Evolvers built on this trait are only correct when `apply_to` is linear.
///
/// # Algebra
/// `scale` and `add_identity` must be closed: `Identity + c·D` is again an operator of the
/// same type and shape. Evolvers build the Crank-Nicolson halves from them:
///
/// ```text
/// explicit = I − (dt/2)·D = D.scale(-dt/2).add_identity(&I)
/// implicit = I + (dt/2)·D = D.scale( dt/2).add_identity(&I)
/// ```
pub trait LinearOperator: OperatorTraits + Clone {
    /// Apply the operator: returns `D·state`
    ///
    /// Pure: no side effect on the operator.
    fn apply_to(&self, state: &Self::State) -> Self::State;

    /// Solve the linear system represented by the operator
    ///
    /// Returns `x` such that `self.apply_to(x) == rhs`.
    ///
    /// # Errors
    /// [`SolveError`] when the system is singular, mis-sized, or the algorithm breaks down.
    fn solve_for(&self, rhs: &Self::State) -> Result<Self::State, SolveError>;

    /// Scalar multiplication: returns `factor·D`
    fn scale(&self, factor: f64) -> Self;

    /// Addition of the identity element: returns `I + D`
    fn add_identity(self, identity: &Identity<Self::State>) -> Self;
}

/// Time update for operators whose coefficients depend on time
///
/// Only required by operators declaring `Dependence = TimeDependent`.
pub trait TimeDependentOperator {
    /// Move the operator's coefficients to evaluation time `t`
    fn set_time(&mut self, t: Time);
}

// =================================================================================================
// Tests
// =================================================================================================
