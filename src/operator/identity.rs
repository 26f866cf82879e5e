//! Identity element of the operator algebra

use std::fmt;
use std::marker::PhantomData;

/// Identity operator on state vectors of type `A`
///
/// Neutral element for the combinations `I ± c·D` built by evolvers through
/// [`LinearOperator::add_identity`](crate::operator::LinearOperator::add_identity).
/// Zero-sized and stateless: the only information it carries is the state type.
pub struct Identity<A> {
    _state: PhantomData<fn() -> A>,
}

impl<A> Identity<A> {
    pub const fn new() -> Self {
        Self { _state: PhantomData }
    }
}

impl<A: Clone> Identity<A> {
    /// Returns a copy of `state`
    pub fn apply_to(&self, state: &A) -> A {
        state.clone()
    }

    /// Returns a copy of `rhs`: `I·x = b` has the solution `x = b`
    pub fn solve_for(&self, rhs: &A) -> A {
        rhs.clone()
    }
}

// Manual impls: derives would require `A` to implement the traits too

impl<A> Clone for Identity<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Identity<A> {}

impl<A> Default for Identity<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> PartialEq for Identity<A> {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl<A> Eq for Identity<A> {}

impl<A> fmt::Debug for Identity<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity<{}>", std::any::type_name::<A>())
    }
}
