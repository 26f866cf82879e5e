//! Time schemes
//!
//! Concrete implementations of the [`Evolver`](crate::evolver::Evolver) trait.
//!
//! # Available Methods
//!
//! - **[`CrankNicolson`]**: implicit midpoint (theta = 1/2)
//!   - Order: second-order O(dt²)
//!   - Cost: 1 operator application + 1 linear solve per step
//!   - Stability: unconditional for diffusive operators

pub mod crank_nicolson;

pub use crank_nicolson::CrankNicolson;
