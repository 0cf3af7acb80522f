use super::{Kernel, Vacuum};
use crate::core::params::{KernelParameters, ParameterError};
use crate::core::scalar::{DiffScalar, norm3, sub3};
use nalgebra::Vector3;

/// Coulomb kernel screened by a uniform dielectric, `G = 1/(ε r)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformDielectric {
    permittivity: f64,
}

impl UniformDielectric {
    pub fn new(permittivity: f64) -> Result<Self, ParameterError> {
        Self::from_parameters(&KernelParameters::uniform(permittivity))
    }

    pub fn permittivity(&self) -> f64 {
        self.permittivity
    }
}

impl Kernel for UniformDielectric {
    const NAME: &'static str = "uniform-dielectric";

    fn from_parameters(parameters: &KernelParameters) -> Result<Self, ParameterError> {
        Ok(Self {
            permittivity: parameters.checked_permittivity()?,
        })
    }

    #[inline]
    fn evaluate<T: DiffScalar>(&self, source: &[T; 3], probe: &[T; 3]) -> T {
        (norm3(&sub3(source, probe)) * self.permittivity).recip()
    }

    #[inline]
    fn gradient_probe(&self, source: &Vector3<f64>, probe: &Vector3<f64>) -> Vector3<f64> {
        Vacuum.gradient_probe(source, probe) / self.permittivity
    }

    #[inline]
    fn derivative_probe(
        &self,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        Vacuum.derivative_probe(normal, source, probe) / self.permittivity
    }

    #[inline]
    fn derivative_source(
        &self,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        Vacuum.derivative_source(normal, source, probe) / self.permittivity
    }

    fn hessian(
        &self,
        source_normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe_normal: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        Vacuum.hessian(source_normal, source, probe_normal, probe) / self.permittivity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn value_is_scaled_by_permittivity() {
        let kernel = UniformDielectric::new(78.39).unwrap();
        let value = kernel.evaluate(&[1.0, 0.0, 0.0], &[-1.0, 0.0, 0.0]);
        assert_relative_eq!(value, 1.0 / (2.0 * 78.39));
    }

    #[test]
    fn rejects_non_positive_permittivity() {
        assert_eq!(
            UniformDielectric::new(0.0),
            Err(ParameterError::Permittivity(0.0))
        );
        assert_eq!(
            UniformDielectric::new(-4.0),
            Err(ParameterError::Permittivity(-4.0))
        );
    }

    #[test]
    fn unit_permittivity_reproduces_vacuum() {
        let kernel = UniformDielectric::new(1.0).unwrap();
        let source = Vector3::new(0.3, -0.2, 0.9);
        let probe = Vector3::new(-0.5, 0.4, 0.1);
        let n_s = Vector3::new(1.0, 2.0, 2.0) / 3.0;
        let n_p = Vector3::new(0.0, 0.6, 0.8);
        assert_eq!(
            kernel.evaluate(&[0.3, -0.2, 0.9], &[-0.5, 0.4, 0.1]),
            Vacuum.evaluate(&[0.3, -0.2, 0.9], &[-0.5, 0.4, 0.1])
        );
        assert_eq!(
            kernel.derivative_probe(&n_p, &source, &probe),
            Vacuum.derivative_probe(&n_p, &source, &probe)
        );
        assert_eq!(
            kernel.hessian(&n_s, &source, &n_p, &probe),
            Vacuum.hessian(&n_s, &source, &n_p, &probe)
        );
    }
}
