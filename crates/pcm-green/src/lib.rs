//! # PCM Green's Functions
//!
//! Green's functions for Polarizable Continuum Model solvers: the vacuum, a uniform
//! dielectric, an ionic liquid and an anisotropic liquid, each paired at run time with a
//! strategy for its derivatives (closed-form, forward-mode automatic differentiation of
//! first or second order, or finite differences).
//!
//! ## Architectural Philosophy
//!
//! - **[`core`]: The Foundation.** Differentiable scalars, kernel formulas written once
//!   generically over them, and the derivative strategies.
//!
//! - **[`dispatch`]: Run-Time Selection.** Two integer ids, validated against the
//!   compile-time kernel and strategy lists, select one monomorphized `Green<K, S>`
//!   through a constant table. Solvers then work with the strategy-erased
//!   [`GreensFunction`](dispatch::handle::GreensFunction) handle.
//!
//! - **[`workflows`]: The Public API.** Builds a handle from a TOML description.
//!
//! Geometry, cavity generation and boundary element assembly are the caller's concern.

pub mod core;
pub mod dispatch;
pub mod workflows;

#[cfg(test)]
mod testing;
