//! Helper functions for integration tests

#![allow(dead_code)]

use nalgebra::DVector;
use std::f64::consts::PI;

/// Grid points `x_i = i·h`, `i = 1..=points`, `h = 1 / (points + 1)`
pub fn interior_grid(points: usize) -> DVector<f64> {
    let h = 1.0 / (points as f64 + 1.0);
    DVector::from_fn(points, |i, _| (i as f64 + 1.0) * h)
}

/// `sin(mπx)` sampled on the interior grid
pub fn sine_mode(points: usize, mode: usize) -> DVector<f64> {
    interior_grid(points).map(|x| (mode as f64 * PI * x).sin())
}

/// Eigenvalue of the discrete `−∂xx` (unit diffusivity) for `sin(mπx)`
pub fn discrete_eigenvalue(points: usize, mode: usize) -> f64 {
    let h = 1.0 / (points as f64 + 1.0);
    let s = (mode as f64 * PI * h / 2.0).sin();
    4.0 * s * s / (h * h)
}

/// Root-mean-square difference between two states
pub fn rms_error(actual: &DVector<f64>, expected: &DVector<f64>) -> f64 {
    assert_eq!(actual.len(), expected.len(), "dimension mismatch");
    (actual - expected).norm() / (actual.len() as f64).sqrt()
}

/// Ratios `errors[i] / errors[i + 1]`
pub fn convergence_ratios(errors: &[f64]) -> Vec<f64> {
    errors.windows(2).map(|pair| pair[0] / pair[1]).collect()
}

/// Assert that two states agree within `tolerance` (max norm)
pub fn assert_states_close(
    actual: &DVector<f64>,
    expected: &DVector<f64>,
    tolerance: f64,
    message: &str,
) {
    assert_eq!(actual.len(), expected.len(), "{}: dimension mismatch", message);

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff < tolerance,
            "{}: element {} differs by {} (tolerance {})",
            message, i, diff, tolerance
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convergence_ratios() {
        let ratios = convergence_ratios(&[16.0, 4.0, 1.0]);
        assert_eq!(ratios, vec![4.0, 4.0]);
    }

    #[test]
    fn test_fundamental_eigenvalue_approaches_pi_squared() {
        let lambda = discrete_eigenvalue(999, 1);
        assert!((lambda - PI * PI).abs() < 1e-4);
    }
}
