//! fdm-rs: Crank-Nicolson time evolution for linear parabolic problems
//!
//! Advances the discretized state of a linear parabolic PDE by one time step with the
//! Crank-Nicolson (implicit midpoint) scheme: second order in time and unconditionally
//! stable for diffusive operators.
//!
//! # Architecture
//!
//! fdm-rs is built on two core principles:
//!
//! 1. **Separation of Operators and Schemes**
//!    - Operators define the spatial discretization (what evolves)
//!    - Evolvers define the time scheme (how it evolves)
//!    - The crate knows nothing about grids, boundaries or matrix storage
//!
//! 2. **Compile-time Time Dependence**
//!    - Each operator type declares a tier: `TimeConstant` or `TimeDependent`
//!    - Time-constant operators pay nothing for time-dependence handling
//!    - A time-dependent operator without `set_time` does not compile
//!
//! # Quick Start
//!
//! ```rust
//! use fdm_rs::error::SolveError;
//! use fdm_rs::evolver::{CrankNicolson, FiniteDifferenceModel};
//! use fdm_rs::operator::{Identity, LinearOperator, OperatorTraits, TimeConstant};
//! use nalgebra::DVector;
//!
//! /// Pointwise decay D·u = k·u
//! #[derive(Debug, Clone)]
//! struct Decay {
//!     k: f64,
//!     diagonal: f64,
//! }
//!
//! impl OperatorTraits for Decay {
//!     type State = DVector<f64>;
//!     type Dependence = TimeConstant;
//! }
//!
//! impl LinearOperator for Decay {
//!     fn apply_to(&self, state: &DVector<f64>) -> DVector<f64> {
//!         state * (self.diagonal + self.k)
//!     }
//!     fn solve_for(&self, rhs: &DVector<f64>) -> Result<DVector<f64>, SolveError> {
//!         Ok(rhs / (self.diagonal + self.k))
//!     }
//!     fn scale(&self, factor: f64) -> Self {
//!         Decay { k: factor * self.k, diagonal: factor * self.diagonal }
//!     }
//!     fn add_identity(self, _identity: &Identity<DVector<f64>>) -> Self {
//!         Decay { diagonal: self.diagonal + 1.0, ..self }
//!     }
//! }
//!
//! # fn main() -> Result<(), fdm_rs::error::ModelError> {
//! // 1. Build the model around the operator
//! let mut model = FiniteDifferenceModel::<CrankNicolson<Decay>>::new(Decay { k: 0.5, diagonal: 0.0 });
//!
//! // 2. Evolve from t = 0 to t = 1 in 100 steps
//! let mut state = DVector::from_element(10, 1.0);
//! model.evolve(&mut state, 0.0, 1.0, 100)?;
//!
//! // 3. u(1) ≈ exp(−0.5)
//! assert!((state[0] - (-0.5f64).exp()).abs() < 1e-5);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`operator`]: capability contract, identity element, tier lookup
//! - [`evolver`]: Crank-Nicolson evolver and the finite-difference driver
//! - [`error`]: error types

pub mod error;
pub mod evolver;
pub mod operator;
