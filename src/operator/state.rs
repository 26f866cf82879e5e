//! State vector introspection
//!
//! Evolvers never look inside a state vector. Drivers do, to catch numerical breakdown
//! (NaN / Inf) as early as possible.

use nalgebra::DVector;

/// Minimal view on a discretized state vector
pub trait StateVector {
    /// Number of grid values
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` when no value is NaN or infinite
    fn is_finite(&self) -> bool;
}

impl StateVector for Vec<f64> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|x| x.is_finite())
    }
}

impl StateVector for DVector<f64> {
    fn len(&self) -> usize {
        self.nrows()
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|x| x.is_finite())
    }
}
