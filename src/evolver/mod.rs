//! Time evolution
//!
//! This module turns a linear spatial operator into a one-step propagator and drives it
//! over a time grid.
//!
//! # Core Concepts
//!
//! ## The Architecture (operator vs scheme vs driver)
//!
//! 1. **Operator** ([`LinearOperator`](crate::operator::LinearOperator)) - WHAT evolves
//!    - Spatial discretization and its linear solver
//!
//! 2. **Evolver** ([`Evolver`] trait) - HOW one step is taken
//!    - Builds and caches the propagator from the operator
//!    - Advances the state by one `dt`
//!
//! 3. **Model** ([`FiniteDifferenceModel`]) - WHEN steps are taken
//!    - Owns the evolver, walks a [`TimeGrid`] forward or backward
//!    - Applies an optional [`StepCondition`] after each step
//!
//! # Module Organization
//!
//! - **`traits`**: `Evolver` trait, `TimeGrid` configuration
//! - **`methods`**: concrete schemes (`CrankNicolson`)
//! - **`model`**: `FiniteDifferenceModel` driver
//! - **`condition`**: `StepCondition` hook
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌──────────────────┐
//! │ Linear Operator  │  (D, owned by the evolver)
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │ Crank-Nicolson   │  explicit = I − dt/2·D
//! │ evolver          │  implicit = I + dt/2·D
//! └────────┬─────────┘
//!          │ set_step(dt), step(u, t)
//! ┌────────▼─────────┐
//! │ Finite-Difference│  ← TimeGrid (start, end, steps)
//! │ Model            │  ← StepCondition (after each step)
//! └──────────────────┘
//! ```
//!
//! # Error Handling
//!
//! Evolver steps return [`EvolverError`](crate::error::EvolverError); the model wraps them
//! in [`ModelError`](crate::error::ModelError) with the failing step and time. Nothing is
//! retried.

pub mod condition;
pub mod methods;
pub mod model;
pub mod traits;

pub use condition::{NullCondition, StepCondition};
pub use methods::CrankNicolson;
pub use model::FiniteDifferenceModel;
pub use traits::{Evolver, TimeGrid};
