//! Step conditions
//!
//! A step condition is applied to the state after every evolver step, at the time the
//! step lands on. Typical uses: clamping to an obstacle, early-exercise constraints,
//! resetting boundary values.

use crate::operator::Time;

/// Constraint applied to the state after each step
pub trait StepCondition<A> {
    /// Apply the condition to `state` at time `t`
    fn apply_to(&mut self, state: &mut A, t: Time);
}

/// Condition that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCondition;

impl<A> StepCondition<A> for NullCondition {
    fn apply_to(&mut self, _state: &mut A, _t: Time) {}
}

impl<A, F> StepCondition<A> for F
where
    F: FnMut(&mut A, Time),
{
    fn apply_to(&mut self, state: &mut A, t: Time) {
        self(state, t)
    }
}
