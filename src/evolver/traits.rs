//! Evolver traits and time-grid configuration
//!
//! # Design Philosophy
//!
//! - `Evolver` is the seam between a time scheme and whatever drives it
//! - `TimeGrid` says WHERE in time the drive happens (start, end, number of steps)
//!
//! A driver (see [`FiniteDifferenceModel`](crate::evolver::FiniteDifferenceModel)) only
//! talks to an evolver through this trait.

use crate::error::{EvolverError, ModelError};
use crate::operator::{LinearOperator, StateOf, Time};

// =================================================================================================
// Evolver Trait
// =================================================================================================

/// One-step time scheme built around a linear operator
///
/// # Protocol
///
/// 1. `new(operator)`: the evolver takes ownership of the operator
/// 2. `set_step(dt)`: once per resolution change, before the first step
/// 3. `step(state, t)`: once per grid time point, mutating `state` in place
pub trait Evolver {
    /// Operator the scheme is built around
    type Operator: LinearOperator;

    /// Take ownership of `operator`; the step size stays unset
    fn new(operator: Self::Operator) -> Self
    where
        Self: Sized;

    /// Configure the time step
    fn set_step(&mut self, dt: Time);

    /// Advance `state` by one time step, evaluating the operator at time `t`
    ///
    /// # Errors
    /// - [`EvolverError::NotConfigured`] when `set_step` was never called
    /// - [`EvolverError::Solve`] when the operator's linear solve fails
    fn step(&mut self, state: &mut StateOf<Self::Operator>, t: Time) -> Result<(), EvolverError>;

    /// Name of the scheme (used for logging)
    fn name(&self) -> &'static str;
}

// =================================================================================================
// Time Grid
// =================================================================================================

/// Uniform time grid driven by a finite-difference model
///
/// `start > end` describes a backward (rollback) run, `start < end` a forward one. The step
/// size is always positive.
///
/// # Examples
///
/// ```rust
/// use fdm_rs::evolver::TimeGrid;
///
/// let grid = TimeGrid::new(1.0, 0.0, 4);
/// assert!(grid.validate().is_ok());
/// assert!(grid.is_backward());
/// assert_eq!(grid.step_size(), 0.25);
/// assert_eq!(grid.time_at(1), 0.75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    /// First time point
    pub start: Time,

    /// Last time point
    pub end: Time,

    /// Number of steps between `start` and `end`
    pub steps: usize,
}

impl TimeGrid {
    /// Create a grid from `start` to `end` in `steps` steps
    pub fn new(start: Time, end: Time, steps: usize) -> Self {
        Self { start, end, steps }
    }

    /// Forward grid from `t = 0` to `total_time`
    pub fn forward(total_time: Time, steps: usize) -> Self {
        Self::new(0.0, total_time, steps)
    }

    /// Backward grid from `maturity` down to `t = 0`
    pub fn backward(maturity: Time, steps: usize) -> Self {
        Self::new(maturity, 0.0, steps)
    }

    /// Validate that the grid is usable
    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ModelError::InvalidGrid(format!(
                "time bounds must be finite, got [{}, {}]",
                self.start, self.end
            )));
        }
        if self.start == self.end {
            return Err(ModelError::InvalidGrid(format!(
                "start and end coincide at t = {}",
                self.start
            )));
        }
        if self.steps == 0 {
            return Err(ModelError::InvalidGrid(
                "number of steps must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// `true` when time decreases along the grid
    pub fn is_backward(&self) -> bool {
        self.end < self.start
    }

    /// Positive step size `|end - start| / steps`
    pub fn step_size(&self) -> Time {
        (self.end - self.start).abs() / self.steps as f64
    }

    /// Time of grid point `index` (0 = start, `steps` = end)
    ///
    /// Computed from the index rather than accumulated, so the last point is exactly `end`.
    pub fn time_at(&self, index: usize) -> Time {
        if index >= self.steps {
            return self.end;
        }
        self.start + (self.end - self.start) * (index as f64 / self.steps as f64)
    }
}
