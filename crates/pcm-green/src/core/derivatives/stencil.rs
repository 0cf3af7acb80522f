use super::DerivativeStrategy;
use crate::core::kernels::Kernel;
use nalgebra::Vector3;

/// Step length (bohr) of the finite-difference stencil.
pub const STENCIL_STEP: f64 = 1.0e-4;

/// Five-point central finite differences of the kernel value along the normal.
///
/// Only as accurate as the stencil allows, roughly `1e-5` relative; it serves kernels
/// or configurations for which no exact derivative is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stencil;

#[inline]
fn five_point<F>(f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let h = STENCIL_STEP;
    (f(-2.0 * h) - 8.0 * f(-h) + 8.0 * f(h) - f(2.0 * h)) / (12.0 * h)
}

impl DerivativeStrategy for Stencil {
    const NAME: &'static str = "stencil";

    fn derivative_source<K: Kernel>(
        kernel: &K,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        five_point(|t| Self::function(kernel, &(source + normal * t), probe))
    }

    fn derivative_probe<K: Kernel>(
        kernel: &K,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        five_point(|t| Self::function(kernel, source, &(probe + normal * t)))
    }
}
