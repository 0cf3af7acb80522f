//! # Kernel Family
//!
//! Concrete Green's functions of the continuum environment. Every kernel provides its
//! formula once, generically over [`DiffScalar`], so the same expression is evaluated as
//! a plain value or propagated through forward-mode automatic differentiation. Kernels
//! also carry their hand-derived closed-form derivatives, used by the analytic strategy
//! and as the reference the automatic strategies are checked against.
//!
//! All kernels depend on the source and probe only through `source - probe`, hence
//! `∇_s G = -∇_p G`.
//!
//! ## Degenerate input
//!
//! Every formula divides by a power of the source-probe separation. Evaluating at
//! coincident points is undefined: the result is infinite or NaN and no check is made.
//! Avoiding coincident points is the caller's responsibility.

mod anisotropic;
mod ionic;
mod uniform;
mod vacuum;

pub use anisotropic::AnisotropicLiquid;
pub use ionic::IonicLiquid;
pub use uniform::UniformDielectric;
pub use vacuum::Vacuum;

use super::params::{KernelParameters, ParameterError};
use super::scalar::DiffScalar;
use crate::dispatch::typeset::{KernelSet, Member};
use nalgebra::Vector3;
use std::fmt::Debug;

pub trait Kernel: Member<KernelSet> + Debug + Clone + Send + Sync + 'static {
    /// Canonical name, as used in configuration files.
    const NAME: &'static str;

    /// Builds the kernel, validating the parameters it depends on.
    fn from_parameters(parameters: &KernelParameters) -> Result<Self, ParameterError>;

    /// The kernel value `G(source, probe)` for any differentiable scalar.
    fn evaluate<T: DiffScalar>(&self, source: &[T; 3], probe: &[T; 3]) -> T;

    /// Closed-form `∇_p G`.
    fn gradient_probe(&self, source: &Vector3<f64>, probe: &Vector3<f64>) -> Vector3<f64>;

    /// Closed-form `∇_s G`.
    fn gradient_source(&self, source: &Vector3<f64>, probe: &Vector3<f64>) -> Vector3<f64> {
        -self.gradient_probe(source, probe)
    }

    /// Closed-form `∇_p G · n_p`.
    fn derivative_probe(
        &self,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        normal.dot(&self.gradient_probe(source, probe))
    }

    /// Closed-form `∇_s G · n_s`.
    fn derivative_source(
        &self,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        normal.dot(&self.gradient_source(source, probe))
    }

    /// Closed-form mixed second derivative `n_sᵀ ∇_s ∇_p G n_p`.
    fn hessian(
        &self,
        source_normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe_normal: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64;
}
