//! # Workflows Module
//!
//! High-level entry points that take a Green's function from its description to a
//! ready-to-evaluate handle.
//!
//! ## Architecture
//!
//! - **Build Workflow** ([`build`]) - Configuration in memory or on disk to a boxed
//!   [`GreensFunction`](crate::dispatch::handle::GreensFunction)

pub mod build;
