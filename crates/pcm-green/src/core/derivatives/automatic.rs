use super::DerivativeStrategy;
use crate::core::kernels::Kernel;
use crate::core::scalar::{DiffScalar, Dual, HyperDual};
use nalgebra::Vector3;

#[inline]
fn constant<T: DiffScalar>(point: &Vector3<f64>) -> [T; 3] {
    [
        T::constant(point.x),
        T::constant(point.y),
        T::constant(point.z),
    ]
}

#[inline]
fn along(point: &Vector3<f64>, direction: &Vector3<f64>) -> [Dual<1>; 3] {
    std::array::from_fn(|i| Dual::new(point[i], [direction[i]]))
}

#[inline]
fn axes(point: &Vector3<f64>) -> [Dual<3>; 3] {
    std::array::from_fn(|i| Dual::variable(point[i], i))
}

/// First-order forward-mode AD seeded along the requested normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Directional;

impl DerivativeStrategy for Directional {
    const NAME: &'static str = "directional";

    fn derivative_source<K: Kernel>(
        kernel: &K,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        kernel.evaluate(&along(source, normal), &constant(probe)).eps[0]
    }

    fn derivative_probe<K: Kernel>(
        kernel: &K,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        kernel.evaluate(&constant(source), &along(probe, normal)).eps[0]
    }
}

/// First-order forward-mode AD over the three coordinates of one point at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gradient;

impl DerivativeStrategy for Gradient {
    const NAME: &'static str = "gradient";

    fn derivative_source<K: Kernel>(
        kernel: &K,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        let gradient = kernel.evaluate(&axes(source), &constant(probe)).eps;
        normal.dot(&Vector3::from(gradient))
    }

    fn derivative_probe<K: Kernel>(
        kernel: &K,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        let gradient = kernel.evaluate(&constant(source), &axes(probe)).eps;
        normal.dot(&Vector3::from(gradient))
    }

    fn gradient_source<K: Kernel>(
        kernel: &K,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> Option<Vector3<f64>> {
        let gradient = kernel.evaluate(&axes(source), &constant(probe)).eps;
        Some(Vector3::from(gradient))
    }

    fn gradient_probe<K: Kernel>(
        kernel: &K,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> Option<Vector3<f64>> {
        let gradient = kernel.evaluate(&constant(source), &axes(probe)).eps;
        Some(Vector3::from(gradient))
    }
}

/// Second-order forward-mode AD with hyper-dual numbers.
///
/// The source is seeded along its normal on `ε₁`, the probe along its normal on `ε₂`;
/// a single evaluation then carries both directional derivatives and the mixed
/// second derivative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hessian;

impl Hessian {
    fn propagate<K: Kernel>(
        kernel: &K,
        source_normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe_normal: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> HyperDual {
        let s: [HyperDual; 3] =
            std::array::from_fn(|i| HyperDual::new(source[i], source_normal[i], 0.0, 0.0));
        let p: [HyperDual; 3] =
            std::array::from_fn(|i| HyperDual::new(probe[i], 0.0, probe_normal[i], 0.0));
        kernel.evaluate(&s, &p)
    }
}

impl DerivativeStrategy for Hessian {
    const NAME: &'static str = "hessian";

    fn derivative_source<K: Kernel>(
        kernel: &K,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        Self::propagate(kernel, normal, source, &Vector3::zeros(), probe).e1
    }

    fn derivative_probe<K: Kernel>(
        kernel: &K,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        Self::propagate(kernel, &Vector3::zeros(), source, normal, probe).e2
    }

    fn hessian<K: Kernel>(
        kernel: &K,
        source_normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe_normal: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> Option<f64> {
        Some(Self::propagate(kernel, source_normal, source, probe_normal, probe).e12)
    }
}
