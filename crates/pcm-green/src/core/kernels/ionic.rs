use super::Kernel;
use crate::core::params::{KernelParameters, ParameterError};
use crate::core::scalar::{DiffScalar, norm3, sub3};
use nalgebra::Vector3;

/// Screened Coulomb kernel of an ionic liquid (linearized Poisson-Boltzmann),
/// `G = exp(-κr) / (ε r)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IonicLiquid {
    permittivity: f64,
    kappa: f64,
}

impl IonicLiquid {
    pub fn new(permittivity: f64, kappa: f64) -> Result<Self, ParameterError> {
        Self::from_parameters(&KernelParameters::ionic(permittivity, kappa))
    }

    pub fn permittivity(&self) -> f64 {
        self.permittivity
    }

    pub fn kappa(&self) -> f64 {
        self.kappa
    }

    // (1 + κr) exp(-κr) / (ε r³), the radial part shared by all first derivatives
    #[inline]
    fn radial_factor(&self, r: f64) -> f64 {
        (1.0 + self.kappa * r) * (-self.kappa * r).exp() / (self.permittivity * r.powi(3))
    }
}

impl Kernel for IonicLiquid {
    const NAME: &'static str = "ionic-liquid";

    fn from_parameters(parameters: &KernelParameters) -> Result<Self, ParameterError> {
        Ok(Self {
            permittivity: parameters.checked_permittivity()?,
            kappa: parameters.checked_kappa()?,
        })
    }

    #[inline]
    fn evaluate<T: DiffScalar>(&self, source: &[T; 3], probe: &[T; 3]) -> T {
        let r = norm3(&sub3(source, probe));
        (r * -self.kappa).exp() / (r * self.permittivity)
    }

    #[inline]
    fn gradient_probe(&self, source: &Vector3<f64>, probe: &Vector3<f64>) -> Vector3<f64> {
        let d = source - probe;
        d * self.radial_factor(d.norm())
    }

    #[inline]
    fn derivative_probe(
        &self,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        let d = source - probe;
        d.dot(normal) * self.radial_factor(d.norm())
    }

    #[inline]
    fn derivative_source(
        &self,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        let d = source - probe;
        -d.dot(normal) * self.radial_factor(d.norm())
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
        let screening = (-self.kappa * r).exp();
        let projections = d.dot(source_normal) * d.dot(probe_normal);
        source_normal.dot(probe_normal) * self.radial_factor(r)
            - self.kappa.powi(2) * projections * screening / (self.permittivity * r.powi(3))
            - 3.0 * projections * (1.0 + self.kappa * r) * screening
                / (self.permittivity * r.powi(5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kernels::UniformDielectric;
    use crate::testing::{ionic_reference, random_samples};
    use approx::assert_relative_eq;

    const EPSILON: f64 = 60.0;
    const KAPPA: f64 = 5.0;

    #[test]
    fn closed_form_matches_reference_formulas() {
        let kernel = IonicLiquid::new(EPSILON, KAPPA).unwrap();
        for sample in random_samples(11, 8) {
            let reference = ionic_reference(
                EPSILON,
                KAPPA,
                &sample.source_normal,
                &sample.source,
                &sample.probe_normal,
                &sample.probe,
            );
            let value = kernel.evaluate(&sample.source_array(), &sample.probe_array());
            assert_relative_eq!(value, reference[0], max_relative = 1e-12);
            assert_relative_eq!(
                kernel.derivative_probe(&sample.probe_normal, &sample.source, &sample.probe),
                reference[1],
                max_relative = 1e-12
            );
            assert_relative_eq!(
                kernel.derivative_source(&sample.source_normal, &sample.source, &sample.probe),
                reference[2],
                max_relative = 1e-12
            );
            assert_relative_eq!(
                kernel.hessian(
                    &sample.source_normal,
                    &sample.source,
                    &sample.probe_normal,
                    &sample.probe
                ),
                reference[3],
                epsilon = 1e-12 * sample.hessian_scale(EPSILON, KAPPA),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn gradient_projects_onto_directional_derivative() {
        let kernel = IonicLiquid::new(EPSILON, KAPPA).unwrap();
        for sample in random_samples(12, 5) {
            let gradient = kernel.gradient_probe(&sample.source, &sample.probe);
            assert_relative_eq!(
                gradient.dot(&sample.probe_normal),
                kernel.derivative_probe(&sample.probe_normal, &sample.source, &sample.probe),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn zero_kappa_reduces_to_uniform_dielectric() {
        let ionic = IonicLiquid::new(EPSILON, 0.0).unwrap();
        let uniform = UniformDielectric::new(EPSILON).unwrap();
        for sample in random_samples(13, 5) {
            assert_relative_eq!(
                ionic.evaluate(&sample.source_array(), &sample.probe_array()),
                uniform.evaluate(&sample.source_array(), &sample.probe_array()),
                max_relative = 1e-14
            );
            assert_relative_eq!(
                ionic.derivative_probe(&sample.probe_normal, &sample.source, &sample.probe),
                uniform.derivative_probe(&sample.probe_normal, &sample.source, &sample.probe),
                max_relative = 1e-13
            );
        }
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert_eq!(
            IonicLiquid::new(-60.0, KAPPA),
            Err(ParameterError::Permittivity(-60.0))
        );
        assert_eq!(
            IonicLiquid::new(EPSILON, -1.0),
            Err(ParameterError::Kappa(-1.0))
        );
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let kernel = IonicLiquid::new(EPSILON, KAPPA).unwrap();
        let sample = &random_samples(14, 1)[0];
        let first = kernel.evaluate(&sample.source_array(), &sample.probe_array());
        let second = kernel.evaluate(&sample.source_array(), &sample.probe_array());
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
