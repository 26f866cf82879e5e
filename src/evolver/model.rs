//! Finite-difference model
//!
//! The driving side of an evolver: owns the evolver, configures its step size from a
//! [`TimeGrid`], and calls `step` once per grid interval, in grid order.
//!
//! # Time convention
//!
//! For the interval `[t_i, t_{i+1}]` (in the direction of travel):
//! - the evolver steps with the operator evaluated at `t_i`
//! - the step condition is applied at `t_{i+1}`, the time the state now sits at

use log::{debug, warn};

use crate::error::ModelError;
use crate::evolver::condition::{NullCondition, StepCondition};
use crate::evolver::traits::{Evolver, TimeGrid};
use crate::operator::{StateOf, StateVector, Time};

/// Drives an [`Evolver`] over a uniform time grid
///
/// # Example
///
/// ```rust,ignore
/// use fdm_rs::evolver::{CrankNicolson, FiniteDifferenceModel};
///
/// let mut model = FiniteDifferenceModel::<CrankNicolson<_>>::new(heat_operator);
///
/// // forward: u(0) → u(1)
/// model.evolve(&mut state, 0.0, 1.0, 100)?;
///
/// // backward: V(T) → V(0)
/// model.rollback(&mut values, maturity, 0.0, 200)?;
/// ```
#[derive(Debug, Clone)]
pub struct FiniteDifferenceModel<E> {
    evolver: E,
}

impl<E: Evolver> FiniteDifferenceModel<E> {
    /// Build the evolver around `operator`
    pub fn new(operator: E::Operator) -> Self {
        Self { evolver: E::new(operator) }
    }

    /// Drive an already constructed evolver
    pub fn from_evolver(evolver: E) -> Self {
        Self { evolver }
    }

    pub fn evolver(&self) -> &E {
        &self.evolver
    }

    pub fn evolver_mut(&mut self) -> &mut E {
        &mut self.evolver
    }

    pub fn into_evolver(self) -> E {
        self.evolver
    }
}

impl<E> FiniteDifferenceModel<E>
where
    E: Evolver,
    StateOf<E::Operator>: StateVector,
{
    /// Evolve `state` forward in time, from `from` to `to` (`from < to`)
    pub fn evolve(
        &mut self,
        state: &mut StateOf<E::Operator>,
        from: Time,
        to: Time,
        steps: usize,
    ) -> Result<(), ModelError> {
        if to < from {
            return Err(ModelError::InvalidGrid(format!(
                "forward evolution needs from < to, got {from} -> {to}"
            )));
        }
        self.run(state, &TimeGrid::new(from, to, steps))
    }

    /// Roll `state` back in time, from `from` to `to` (`from > to`)
    pub fn rollback(
        &mut self,
        state: &mut StateOf<E::Operator>,
        from: Time,
        to: Time,
        steps: usize,
    ) -> Result<(), ModelError> {
        if to > from {
            return Err(ModelError::InvalidGrid(format!(
                "rollback needs from > to, got {from} -> {to}"
            )));
        }
        self.run(state, &TimeGrid::new(from, to, steps))
    }

    /// Drive `state` over `grid` without step condition
    pub fn run(
        &mut self,
        state: &mut StateOf<E::Operator>,
        grid: &TimeGrid,
    ) -> Result<(), ModelError> {
        self.run_with(state, grid, &mut NullCondition)
    }

    /// Drive `state` over `grid`, applying `condition` after every step
    ///
    /// # Errors
    /// - [`ModelError::InvalidGrid`]: grid rejected by [`TimeGrid::validate`]
    /// - [`ModelError::Step`]: the evolver failed; the state is no longer meaningful
    /// - [`ModelError::NonFinite`]: NaN or infinity appeared in the state
    pub fn run_with<C>(
        &mut self,
        state: &mut StateOf<E::Operator>,
        grid: &TimeGrid,
        condition: &mut C,
    ) -> Result<(), ModelError>
    where
        C: StepCondition<StateOf<E::Operator>>,
    {
        // ====== Setup ======

        grid.validate()?;

        let dt = grid.step_size();
        self.evolver.set_step(dt);

        debug!(
            "{}: {} steps of dt = {dt} from t = {} to t = {} ({} points)",
            self.evolver.name(),
            grid.steps,
            grid.start,
            grid.end,
            state.len()
        );

        // ====== Time stepping ======

        for step in 0..grid.steps {
            let now = grid.time_at(step);
            let next = grid.time_at(step + 1);

            self.evolver.step(state, now).map_err(|source| {
                warn!("{}: step {} at t = {now} failed", self.evolver.name(), step + 1);
                ModelError::Step { step: step + 1, time: now, source }
            })?;

            condition.apply_to(state, next);

            // Catch breakdown where it happens rather than at the end of the run
            if !state.is_finite() {
                warn!("{}: non-finite state after step {}", self.evolver.name(), step + 1);
                return Err(ModelError::NonFinite { step: step + 1, time: next });
            }
        }

        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
