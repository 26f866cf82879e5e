//! Mock operators for testing
//!
//! Finite-difference operators with known spectra, so that evolver results can be
//! compared against exact solutions.

#![allow(dead_code)]

use fdm_rs::error::SolveError;
use fdm_rs::operator::{
    Identity, LinearOperator, OperatorTraits, Time, TimeConstant, TimeDependent,
    TimeDependentOperator,
};
use nalgebra::DVector;

// =================================================================================================
// Tridiagonal operator
// =================================================================================================

/// Tridiagonal operator on `DVector<f64>`
///
/// Row `i` reads `lower[i-1]·x[i-1] + diagonal[i]·x[i] + upper[i]·x[i+1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalOperator {
    pub lower: Vec<f64>,
    pub diagonal: Vec<f64>,
    pub upper: Vec<f64>,
}

impl TridiagonalOperator {
    pub fn new(lower: Vec<f64>, diagonal: Vec<f64>, upper: Vec<f64>) -> Self {
        assert_eq!(lower.len() + 1, diagonal.len(), "lower band has wrong length");
        assert_eq!(upper.len() + 1, diagonal.len(), "upper band has wrong length");
        Self { lower, diagonal, upper }
    }

    /// Negative discrete Laplacian `−κ·∂xx` on `points` interior nodes of `[0, 1]`
    ///
    /// Homogeneous Dirichlet boundaries. Symmetric positive definite, eigenvalues
    /// `(4κ/h²)·sin²(mπh/2)` with `h = 1 / (points + 1)`.
    pub fn heat(points: usize, diffusivity: f64) -> Self {
        let h = 1.0 / (points as f64 + 1.0);
        let off = -diffusivity / (h * h);
        Self::new(
            vec![off; points - 1],
            vec![-2.0 * off; points],
            vec![off; points - 1],
        )
    }

    pub fn size(&self) -> usize {
        self.diagonal.len()
    }
}

impl OperatorTraits for TridiagonalOperator {
    type State = DVector<f64>;
    type Dependence = TimeConstant;
}

impl LinearOperator for TridiagonalOperator {
    fn apply_to(&self, state: &DVector<f64>) -> DVector<f64> {
        let n = self.size();
        assert_eq!(state.len(), n, "state size does not match operator");

        DVector::from_fn(n, |i, _| {
            let mut value = self.diagonal[i] * state[i];
            if i > 0 {
                value += self.lower[i - 1] * state[i - 1];
            }
            if i + 1 < n {
                value += self.upper[i] * state[i + 1];
            }
            value
        })
    }

    /// Thomas algorithm
    fn solve_for(&self, rhs: &DVector<f64>) -> Result<DVector<f64>, SolveError> {
        let n = self.size();
        if rhs.len() != n {
            return Err(SolveError::DimensionMismatch { expected: n, found: rhs.len() });
        }

        let mut c = vec![0.0; n];
        let mut d = vec![0.0; n];

        let mut pivot = self.diagonal[0];
        if pivot.abs() < f64::EPSILON {
            return Err(SolveError::Singular { row: 0 });
        }
        if n > 1 {
            c[0] = self.upper[0] / pivot;
        }
        d[0] = rhs[0] / pivot;

        for i in 1..n {
            pivot = self.diagonal[i] - self.lower[i - 1] * c[i - 1];
            if pivot.abs() < f64::EPSILON {
                return Err(SolveError::Singular { row: i });
            }
            if i + 1 < n {
                c[i] = self.upper[i] / pivot;
            }
            d[i] = (rhs[i] - self.lower[i - 1] * d[i - 1]) / pivot;
        }

        for i in (0..n - 1).rev() {
            d[i] -= c[i] * d[i + 1];
        }

        Ok(DVector::from_vec(d))
    }

    fn scale(&self, factor: f64) -> Self {
        Self {
            lower: scaled(&self.lower, factor),
            diagonal: scaled(&self.diagonal, factor),
            upper: scaled(&self.upper, factor),
        }
    }

    fn add_identity(mut self, _identity: &Identity<DVector<f64>>) -> Self {
        self.diagonal.iter_mut().for_each(|d| *d += 1.0);
        self
    }
}

fn scaled(band: &[f64], factor: f64) -> Vec<f64> {
    band.iter().map(|v| factor * v).collect()
}

// =================================================================================================
// Time-dependent heat operator
// =================================================================================================

/// `−κ(t)·∂xx` with a time-varying diffusivity
#[derive(Debug, Clone)]
pub struct TimeDependentHeat {
    /// `−∂xx` (unit diffusivity)
    pub laplacian: TridiagonalOperator,
    pub diffusivity: fn(Time) -> f64,
    pub current: TridiagonalOperator,
    pub time: Time,
}

impl TimeDependentHeat {
    pub fn new(points: usize, diffusivity: fn(Time) -> f64) -> Self {
        let laplacian = TridiagonalOperator::heat(points, 1.0);
        let current = laplacian.scale(diffusivity(0.0));
        Self { laplacian, diffusivity, current, time: 0.0 }
    }
}

impl OperatorTraits for TimeDependentHeat {
    type State = DVector<f64>;
    type Dependence = TimeDependent;
}

impl TimeDependentOperator for TimeDependentHeat {
    fn set_time(&mut self, t: Time) {
        self.time = t;
        self.current = self.laplacian.scale((self.diffusivity)(t));
    }
}

impl LinearOperator for TimeDependentHeat {
    fn apply_to(&self, state: &DVector<f64>) -> DVector<f64> {
        self.current.apply_to(state)
    }

    fn solve_for(&self, rhs: &DVector<f64>) -> Result<DVector<f64>, SolveError> {
        self.current.solve_for(rhs)
    }

    fn scale(&self, factor: f64) -> Self {
        Self { current: self.current.scale(factor), ..self.clone() }
    }

    fn add_identity(self, identity: &Identity<DVector<f64>>) -> Self {
        Self { current: self.current.clone().add_identity(identity), ..self }
    }
}

// =================================================================================================
// Scalar operators
// =================================================================================================

/// `D·x = c·x` on vectors of any size
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarOperator {
    pub coefficient: f64,
}

impl ScalarOperator {
    pub fn new(coefficient: f64) -> Self {
        Self { coefficient }
    }

    /// `D = 0`: applies to zero, solves as the identity
    pub fn zero() -> Self {
        Self::new(0.0)
    }
}

impl OperatorTraits for ScalarOperator {
    type State = DVector<f64>;
    type Dependence = TimeConstant;
}

impl LinearOperator for ScalarOperator {
    fn apply_to(&self, state: &DVector<f64>) -> DVector<f64> {
        state * self.coefficient
    }

    fn solve_for(&self, rhs: &DVector<f64>) -> Result<DVector<f64>, SolveError> {
        if self.coefficient == 0.0 {
            // zero operator: the system is x = b
            return Ok(rhs.clone());
        }
        Ok(rhs / self.coefficient)
    }

    fn scale(&self, factor: f64) -> Self {
        Self::new(factor * self.coefficient)
    }

    fn add_identity(self, _identity: &Identity<DVector<f64>>) -> Self {
        Self::new(self.coefficient + 1.0)
    }
}

// =================================================================================================
// Tests for Mock Operators
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thomas_solves_heat_system() {
        let op = TridiagonalOperator::heat(9, 0.3).scale(0.01).add_identity(&Identity::new());
        let x = DVector::from_fn(9, |i, _| (i as f64 + 1.0).sin());

        let b = op.apply_to(&x);
        let solved = op.solve_for(&b).unwrap();

        assert!((solved - x).amax() < 1e-12);
    }

    #[test]
    fn test_thomas_single_point() {
        let op = TridiagonalOperator::new(vec![], vec![4.0], vec![]);
        let solved = op.solve_for(&DVector::from_vec(vec![2.0])).unwrap();
        assert_eq!(solved[0], 0.5);
    }

    #[test]
    fn test_thomas_reports_mismatch() {
        let op = TridiagonalOperator::heat(4, 1.0);
        let err = op.solve_for(&DVector::zeros(3)).unwrap_err();
        assert_eq!(err, SolveError::DimensionMismatch { expected: 4, found: 3 });
    }
}
