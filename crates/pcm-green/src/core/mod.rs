//! # Core Module
//!
//! Stateless numerical building blocks: the differentiable scalar types, the kernel
//! family and the strategies that obtain kernel derivatives.
//!
//! ## Architecture
//!
//! - **Scalars** ([`scalar`]) - `f64`, first-order duals and hyper-duals behind one trait
//! - **Parameters** ([`params`]) - Physical constants a kernel is built from
//! - **Points** ([`point`]) - Positions and surface normals at which kernels are evaluated
//! - **Kernels** ([`kernels`]) - Green's functions written once, generically over the scalar
//! - **Derivatives** ([`derivatives`]) - Analytic, automatic and finite-difference strategies

pub mod derivatives;
pub mod kernels;
pub mod params;
pub mod point;
pub mod scalar;
