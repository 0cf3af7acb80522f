use super::DerivativeStrategy;
use crate::core::kernels::Kernel;
use nalgebra::Vector3;

/// Derivatives from the closed-form expressions each kernel provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Analytic;

impl DerivativeStrategy for Analytic {
    const NAME: &'static str = "analytic";

    #[inline]
    fn derivative_source<K: Kernel>(
        kernel: &K,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        kernel.derivative_source(normal, source, probe)
    }

    #[inline]
    fn derivative_probe<K: Kernel>(
        kernel: &K,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        kernel.derivative_probe(normal, source, probe)
    }

    fn gradient_source<K: Kernel>(
        kernel: &K,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> Option<Vector3<f64>> {
        Some(kernel.gradient_source(source, probe))
    }

    fn gradient_probe<K: Kernel>(
        kernel: &K,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> Option<Vector3<f64>> {
        Some(kernel.gradient_probe(source, probe))
    }

    fn hessian<K: Kernel>(
        kernel: &K,
        source_normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe_normal: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> Option<f64> {
        Some(kernel.hessian(source_normal, source, probe_normal, probe))
    }
}
