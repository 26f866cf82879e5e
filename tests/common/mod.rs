//! Common utilities for integration tests

pub mod operators;
pub mod test_helpers;

// Re-export commonly used items
#[allow(unused_imports)]
pub use operators::{ScalarOperator, TimeDependentHeat, TridiagonalOperator};
#[allow(unused_imports)]
pub use test_helpers::{
    assert_states_close,
    convergence_ratios,
    discrete_eigenvalue,
    interior_grid,
    rms_error,
    sine_mode,
};
