use super::Kernel;
use crate::core::params::{KernelParameters, ParameterError};
use crate::core::scalar::{DiffScalar, norm3, sub3};
use nalgebra::Vector3;

/// Coulomb kernel in vacuum, `G = 1/r`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vacuum;

impl Kernel for Vacuum {
    const NAME: &'static str = "vacuum";

    fn from_parameters(_parameters: &KernelParameters) -> Result<Self, ParameterError> {
        Ok(Self)
    }

    #[inline]
    fn evaluate<T: DiffScalar>(&self, source: &[T; 3], probe: &[T; 3]) -> T {
        norm3(&sub3(source, probe)).recip()
    }

    #[inline]
    fn gradient_probe(&self, source: &Vector3<f64>, probe: &Vector3<f64>) -> Vector3<f64> {
        let d = source - probe;
        d / d.norm().powi(3)
    }

    #[inline]
    fn derivative_probe(
        &self,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        let d = source - probe;
        d.dot(normal) / d.norm().powi(3)
    }

    #[inline]
    fn derivative_source(
        &self,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        let d = source - probe;
        -d.dot(normal) / d.norm().powi(3)
    }

    fn hessian(
        &self,
        source_normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe_normal: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        let d = source - probe;
        let r = d.norm();
        source_normal.dot(probe_normal) / r.powi(3)
            - 3.0 * d.dot(source_normal) * d.dot(probe_normal) / r.powi(5)
    }
}
