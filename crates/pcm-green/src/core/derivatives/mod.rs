//! # Derivative Strategies
//!
//! A strategy decides how the derivatives of a [`Kernel`] are obtained. The kernel value
//! is always evaluated through the kernel's generic formula; the strategies differ in how
//! they obtain derivatives:
//!
//! - [`Analytic`] - the kernel's hand-derived closed forms.
//! - [`Directional`] - forward-mode AD with one tangent seeded along the normal.
//! - [`Gradient`] - forward-mode AD with three tangents, yielding full gradients.
//! - [`Hessian`] - second-order forward-mode AD (hyper-dual numbers), yielding the mixed
//!   source/probe second derivative.
//! - [`Stencil`] - five-point central finite differences of the kernel value.
//!
//! Gradients and hessians are optional capabilities; a strategy that does not provide
//! them returns `None`.

mod analytic;
mod automatic;
mod stencil;

pub use analytic::Analytic;
pub use automatic::{Directional, Gradient, Hessian};
pub use stencil::{STENCIL_STEP, Stencil};

use super::kernels::Kernel;
use super::point::to_array;
use crate::dispatch::typeset::{Member, StrategySet};
use nalgebra::Vector3;
use std::fmt::Debug;

pub trait DerivativeStrategy:
    Member<StrategySet> + Debug + Default + Copy + Send + Sync + 'static
{
    /// Canonical name, as used in configuration files.
    const NAME: &'static str;

    fn function<K: Kernel>(kernel: &K, source: &Vector3<f64>, probe: &Vector3<f64>) -> f64 {
        kernel.evaluate(&to_array(source), &to_array(probe))
    }

    fn derivative_source<K: Kernel>(
        kernel: &K,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64;

    fn derivative_probe<K: Kernel>(
        kernel: &K,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64;

    fn gradient_source<K: Kernel>(
        _kernel: &K,
        _source: &Vector3<f64>,
        _probe: &Vector3<f64>,
    ) -> Option<Vector3<f64>> {
        None
    }

    fn gradient_probe<K: Kernel>(
        _kernel: &K,
        _source: &Vector3<f64>,
        _probe: &Vector3<f64>,
    ) -> Option<Vector3<f64>> {
        None
    }

    fn hessian<K: Kernel>(
        _kernel: &K,
        _source_normal: &Vector3<f64>,
        _source: &Vector3<f64>,
        _probe_normal: &Vector3<f64>,
        _probe: &Vector3<f64>,
    ) -> Option<f64> {
        None
    }
}
