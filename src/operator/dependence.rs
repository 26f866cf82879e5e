//! Time-dependence tiers
//!
//! Every operator belongs to exactly one of two tiers, declared through
//! [`OperatorTraits::Dependence`](crate::operator::OperatorTraits::Dependence):
//!
//! - [`TimeConstant`]: coefficients never change, no `set_time` required
//! - [`TimeDependent`]: coefficients change with time, `set_time` required
//!
//! The set of tiers is closed (sealed trait). Evolvers dispatch on the tier through
//! [`TimeDependence::update`], which monomorphizes to an empty body for time-constant
//! operators.

use crate::operator::traits::{Time, TimeDependentOperator};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::TimeConstant {}
    impl Sealed for super::TimeDependent {}
}

/// Marker for operators whose coefficients do not depend on time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TimeConstant;

/// Marker for operators whose coefficients depend on time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TimeDependent;

/// Tier-specific behaviour for operator type `Op`
///
/// Implemented by [`TimeConstant`] for every `Op`, and by [`TimeDependent`] only for operators
/// implementing [`TimeDependentOperator`].
pub trait TimeDependence<Op>: sealed::Sealed {
    /// `true` for the time-dependent tier
    const IS_TIME_DEPENDENT: bool;

    /// Bring `operator` to time `t`, then hand it to `rebuild`
    ///
    /// The time-constant tier neither touches the operator nor calls `rebuild`.
    fn update<F>(operator: &mut Op, t: Time, rebuild: F)
    where
        F: FnOnce(&Op);
}

impl<Op> TimeDependence<Op> for TimeConstant {
    const IS_TIME_DEPENDENT: bool = false;

    #[inline(always)]
    fn update<F>(_operator: &mut Op, _t: Time, _rebuild: F)
    where
        F: FnOnce(&Op),
    {
    }
}

impl<Op: TimeDependentOperator> TimeDependence<Op> for TimeDependent {
    const IS_TIME_DEPENDENT: bool = true;

    #[inline]
    fn update<F>(operator: &mut Op, t: Time, rebuild: F)
    where
        F: FnOnce(&Op),
    {
        operator.set_time(t);
        rebuild(operator);
    }
}
