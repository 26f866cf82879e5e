//! Linear spatial operators
//!
//! This module defines what a pluggable spatial operator must provide so that an evolver can
//! turn it into a one-step propagator, without knowing how the operator is stored, built,
//! or inverted.
//!
//! # Core Concepts
//!
//! - **Linear Operator** (`LinearOperator`): apply, solve, scale, add identity
//! - **Identity** (`Identity`): neutral element of the algebra `I ± c·D`
//! - **Operator Traits** (`OperatorTraits`): state type + time-dependence tier, per type
//! - **Tiers** (`TimeConstant`, `TimeDependent`): resolved at compile time
//!
//! # Architecture
//!
//! Operators are **separate from evolvers**:
//! - The operator provides the **spatial discretization** (and its linear solver)
//! - The evolver provides the **time scheme**
//!
//! # Implementing an Operator
//!
//! ```rust
//! use fdm_rs::error::SolveError;
//! use fdm_rs::operator::{Identity, LinearOperator, OperatorTraits, TimeConstant};
//!
//! /// D·x = k·x on a single value
//! #[derive(Debug, Clone)]
//! struct Rate {
//!     k: f64,
//!     diagonal: f64,
//! }
//!
//! impl OperatorTraits for Rate {
//!     type State = Vec<f64>;
//!     type Dependence = TimeConstant;
//! }
//!
//! impl LinearOperator for Rate {
//!     fn apply_to(&self, state: &Vec<f64>) -> Vec<f64> {
//!         state.iter().map(|x| (self.diagonal + self.k) * x).collect()
//!     }
//!
//!     fn solve_for(&self, rhs: &Vec<f64>) -> Result<Vec<f64>, SolveError> {
//!         let pivot = self.diagonal + self.k;
//!         if pivot == 0.0 {
//!             return Err(SolveError::Singular { row: 0 });
//!         }
//!         Ok(rhs.iter().map(|b| b / pivot).collect())
//!     }
//!
//!     fn scale(&self, factor: f64) -> Self {
//!         Self { k: factor * self.k, diagonal: factor * self.diagonal }
//!     }
//!
//!     fn add_identity(self, _identity: &Identity<Vec<f64>>) -> Self {
//!         Self { diagonal: self.diagonal + 1.0, ..self }
//!     }
//! }
//!
//! let implicit = Rate { k: 2.0, diagonal: 0.0 }.scale(0.5).add_identity(&Identity::new());
//! assert_eq!(implicit.apply_to(&vec![1.0]), vec![2.0]);
//! ```
//!
//! Time-dependent operators declare `type Dependence = TimeDependent;` and implement
//! [`TimeDependentOperator`].

pub mod dependence;
pub mod identity;
pub mod state;
pub mod traits;

pub use dependence::{TimeConstant, TimeDependence, TimeDependent};
pub use identity::Identity;
pub use state::StateVector;
pub use traits::{
    LinearOperator,
    OperatorTraits,
    StateOf,
    Time,
    TimeDependentOperator,
    is_time_dependent,
};
