//! Crank-Nicolson evolver
//!
//! # Mathematical Background
//!
//! For the linear semi-discrete problem
//!
//! ```text
//! du/dt + D u = 0
//! ```
//!
//! the Crank-Nicolson scheme (theta-scheme with theta = 1/2) treats `D` half explicitly and
//! half implicitly:
//!
//! ```text
//! (I + dt/2·D) u_{n+1} = (I − dt/2·D) u_n
//! ```
//!
//! Evaluating the operator at the midpoint of the interval cancels the first-order error
//! term of both explicit and implicit Euler.
//!
//! # Characteristics
//!
//! - **Order**: second-order accurate in time (error ~ O(dt²))
//! - **Stability**: unconditionally stable when `−D` is negative-semidefinite
//! - **Complexity**: 1 operator application + 1 linear solve per step
//! - **Memory**: `D` plus two cached halves
//!
//! # Time-dependent operators
//!
//! For operators in the [`TimeDependent`](crate::operator::TimeDependent) tier, every step
//! moves `D` to the step time and rebuilds both halves. For
//! [`TimeConstant`](crate::operator::TimeConstant) operators that code path is compiled out
//! and the halves built by `set_step` are reused as is.

use log::{debug, trace, warn};

use crate::error::EvolverError;
use crate::evolver::traits::Evolver;
use crate::operator::{Identity, LinearOperator, Time, TimeDependence, is_time_dependent};

// =================================================================================================
// Cached halves
// =================================================================================================

/// `I − (dt/2)·D` and `I + (dt/2)·D` for one step size
#[derive(Debug, Clone)]
struct Halves<Op> {
    dt: Time,
    explicit_part: Op,
    implicit_part: Op,
}

impl<Op: LinearOperator> Halves<Op> {
    fn build(operator: &Op, dt: Time) -> Self {
        let identity = Identity::new();
        let half_step = dt / 2.0;

        Self {
            dt,
            explicit_part: operator.scale(-half_step).add_identity(&identity),
            implicit_part: operator.scale(half_step).add_identity(&identity),
        }
    }

    fn rebuild(&mut self, operator: &Op) {
        *self = Self::build(operator, self.dt);
    }
}

// =================================================================================================
// Crank-Nicolson Evolver
// =================================================================================================

/// Crank-Nicolson time evolver
///
/// Owns the spatial operator `D` and the two halves derived from it. The halves exist only
/// once [`set_step`](Self::set_step) has been called.
///
/// # Algorithm
///
/// For each call to [`step`](Self::step)`(u, t)`:
///
/// 1. time-dependent `D` only: `D.set_time(t)`, rebuild both halves
/// 2. `u ← implicit.solve_for(explicit.apply_to(u))`
///
/// # Example
///
/// ```rust
/// use fdm_rs::error::SolveError;
/// use fdm_rs::evolver::CrankNicolson;
/// use fdm_rs::operator::{Identity, LinearOperator, OperatorTraits, TimeConstant};
///
/// /// D·x = c·x
/// #[derive(Debug, Clone)]
/// struct Multiply(f64);
///
/// impl OperatorTraits for Multiply {
///     type State = Vec<f64>;
///     type Dependence = TimeConstant;
/// }
///
/// impl LinearOperator for Multiply {
///     fn apply_to(&self, state: &Vec<f64>) -> Vec<f64> {
///         state.iter().map(|x| self.0 * x).collect()
///     }
///     fn solve_for(&self, rhs: &Vec<f64>) -> Result<Vec<f64>, SolveError> {
///         Ok(rhs.iter().map(|b| b / self.0).collect())
///     }
///     fn scale(&self, factor: f64) -> Self {
///         Multiply(factor * self.0)
///     }
///     fn add_identity(self, _identity: &Identity<Vec<f64>>) -> Self {
///         Multiply(self.0 + 1.0)
///     }
/// }
///
/// # fn main() -> Result<(), fdm_rs::error::EvolverError> {
/// let mut evolver = CrankNicolson::new(Multiply(2.0));
/// evolver.set_step(1.0);
///
/// let mut state = vec![1.0];
/// evolver.step(&mut state, 0.0)?;
/// assert_eq!(state, vec![0.0]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CrankNicolson<Op> {
    operator: Op,
    halves: Option<Halves<Op>>,
}

impl<Op: LinearOperator> CrankNicolson<Op> {
    /// Create an evolver around `operator`; the step size is unset
    pub fn new(operator: Op) -> Self {
        Self { operator, halves: None }
    }

    /// Set the time step and rebuild both halves from the current operator
    pub fn set_step(&mut self, dt: Time) {
        debug!(
            "Crank-Nicolson: dt = {dt} (time-dependent operator: {})",
            is_time_dependent::<Op>()
        );
        self.halves = Some(Halves::build(&self.operator, dt));
    }

    /// Advance `state` by one step, evaluating the operator at `t`
    ///
    /// On error the state must be considered invalid.
    ///
    /// # Errors
    /// - [`EvolverError::NotConfigured`] before the first `set_step`
    /// - [`EvolverError::Solve`] when the implicit solve fails
    pub fn step(&mut self, state: &mut Op::State, t: Time) -> Result<(), EvolverError> {
        let halves = self.halves.as_mut().ok_or(EvolverError::NotConfigured)?;

        <Op::Dependence as TimeDependence<Op>>::update(&mut self.operator, t, |operator| {
            trace!("Crank-Nicolson: refreshing halves at t = {t}");
            halves.rebuild(operator);
        });

        let rhs = halves.explicit_part.apply_to(state);
        *state = halves
            .implicit_part
            .solve_for(&rhs)
            .inspect_err(|e| warn!("Crank-Nicolson: implicit solve failed at t = {t}: {e}"))?;

        Ok(())
    }

    /// Spatial operator `D`
    pub fn operator(&self) -> &Op {
        &self.operator
    }

    /// Configured time step, `None` before `set_step`
    pub fn step_size(&self) -> Option<Time> {
        self.halves.as_ref().map(|h| h.dt)
    }

    /// `I − (dt/2)·D`, `None` before `set_step`
    pub fn explicit_part(&self) -> Option<&Op> {
        self.halves.as_ref().map(|h| &h.explicit_part)
    }

    /// `I + (dt/2)·D`, `None` before `set_step`
    pub fn implicit_part(&self) -> Option<&Op> {
        self.halves.as_ref().map(|h| &h.implicit_part)
    }
}

impl<Op: LinearOperator> Evolver for CrankNicolson<Op> {
    type Operator = Op;

    fn new(operator: Op) -> Self {
        CrankNicolson::new(operator)
    }

    fn set_step(&mut self, dt: Time) {
        CrankNicolson::set_step(self, dt)
    }

    fn step(&mut self, state: &mut Op::State, t: Time) -> Result<(), EvolverError> {
        CrankNicolson::step(self, state, t)
    }

    fn name(&self) -> &'static str {
        "Crank-Nicolson"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
