use super::Kernel;
use crate::core::params::{KernelParameters, ParameterError};
use crate::core::scalar::{DiffScalar, dot3, sub3};
use nalgebra::{Matrix3, Rotation3, Vector3};

/// Coulomb kernel of a homogeneous anisotropic dielectric,
/// `G = 1 / (sqrt(det ε) sqrt(dᵀ ε⁻¹ d))` with `d = source - probe`.
///
/// The permittivity tensor is `ε = R diag(ε₁, ε₂, ε₃) Rᵀ`, `R` being the rotation given by
/// the Euler angles (roll, pitch, yaw; degrees) of the principal axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnisotropicLiquid {
    epsilon: Matrix3<f64>,
    epsilon_inv: Matrix3<f64>,
    // 1 / sqrt(det ε)
    prefactor: f64,
}

impl AnisotropicLiquid {
    pub fn new(permittivities: [f64; 3], euler_angles: [f64; 3]) -> Result<Self, ParameterError> {
        Self::from_parameters(&KernelParameters::anisotropic(permittivities, euler_angles))
    }

    pub fn permittivity_tensor(&self) -> &Matrix3<f64> {
        &self.epsilon
    }

    pub fn inverse_permittivity_tensor(&self) -> &Matrix3<f64> {
        &self.epsilon_inv
    }

    // (ε⁻¹ d, dᵀ ε⁻¹ d)
    #[inline]
    fn metric(&self, source: &Vector3<f64>, probe: &Vector3<f64>) -> (Vector3<f64>, f64) {
        let d = source - probe;
        let a_d = self.epsilon_inv * d;
        let q = d.dot(&a_d);
        (a_d, q)
    }
}

impl Kernel for AnisotropicLiquid {
    const NAME: &'static str = "anisotropic-liquid";

    fn from_parameters(parameters: &KernelParameters) -> Result<Self, ParameterError> {
        let anisotropy = parameters.checked_anisotropy()?;
        let [roll, pitch, yaw] = anisotropy.euler_angles.map(f64::to_radians);
        let rotation = Rotation3::from_euler_angles(roll, pitch, yaw);
        let r = rotation.matrix();

        let diagonal = Vector3::from(anisotropy.permittivities);
        let epsilon = r * Matrix3::from_diagonal(&diagonal) * r.transpose();
        let epsilon_inv = r * Matrix3::from_diagonal(&diagonal.map(f64::recip)) * r.transpose();
        let determinant: f64 = anisotropy.permittivities.iter().product();

        Ok(Self {
            epsilon,
            epsilon_inv,
            prefactor: determinant.sqrt().recip(),
        })
    }

    #[inline]
    fn evaluate<T: DiffScalar>(&self, source: &[T; 3], probe: &[T; 3]) -> T {
        let d = sub3(source, probe);
        let a = &self.epsilon_inv;
        let a_d: [T; 3] = std::array::from_fn(|i| {
            d[0] * a[(i, 0)] + d[1] * a[(i, 1)] + d[2] * a[(i, 2)]
        });
        dot3(&d, &a_d).sqrt().recip() * self.prefactor
    }

    #[inline]
    fn gradient_probe(&self, source: &Vector3<f64>, probe: &Vector3<f64>) -> Vector3<f64> {
        let (a_d, q) = self.metric(source, probe);
        a_d * (self.prefactor / q.powf(1.5))
    }

    #[inline]
    fn derivative_probe(
        &self,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        let (a_d, q) = self.metric(source, probe);
        self.prefactor * normal.dot(&a_d) / q.powf(1.5)
    }

    #[inline]
    fn derivative_source(
        &self,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        let (a_d, q) = self.metric(source, probe);
        -self.prefactor * normal.dot(&a_d) / q.powf(1.5)
    }

    fn hessian(
        &self,
        source_normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe_normal: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        let (a_d, q) = self.metric(source, probe);
        let coupling = source_normal.dot(&(self.epsilon_inv * probe_normal));
        self.prefactor
            * (coupling / q.powf(1.5)
                - 3.0 * source_normal.dot(&a_d) * probe_normal.dot(&a_d) / q.powf(2.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kernels::UniformDielectric;
    use crate::testing::random_samples;
    use approx::assert_relative_eq;

    #[test]
    fn tensor_and_inverse_multiply_to_identity() {
        let kernel = AnisotropicLiquid::new([2.0, 7.5, 40.0], [15.0, -30.0, 110.0]).unwrap();
        let product = kernel.permittivity_tensor() * kernel.inverse_permittivity_tensor();
        assert_relative_eq!(product, Matrix3::identity(), epsilon = 1e-12);
    }

    #[test]
    fn rotation_preserves_trace_and_symmetry() {
        let kernel = AnisotropicLiquid::new([2.0, 7.5, 40.0], [15.0, -30.0, 110.0]).unwrap();
        let epsilon = kernel.permittivity_tensor();
        assert_relative_eq!(epsilon.trace(), 49.5, max_relative = 1e-14);
        assert_relative_eq!(*epsilon, epsilon.transpose(), epsilon = 1e-12);
    }

    #[test]
    fn isotropic_tensor_reduces_to_uniform_dielectric() {
        let anisotropic = AnisotropicLiquid::new([78.39; 3], [20.0, 45.0, -60.0]).unwrap();
        let uniform = UniformDielectric::new(78.39).unwrap();
        for sample in random_samples(21, 6) {
            assert_relative_eq!(
                anisotropic.evaluate(&sample.source_array(), &sample.probe_array()),
                uniform.evaluate(&sample.source_array(), &sample.probe_array()),
                max_relative = 1e-12
            );
            assert_relative_eq!(
                anisotropic.derivative_probe(&sample.probe_normal, &sample.source, &sample.probe),
                uniform.derivative_probe(&sample.probe_normal, &sample.source, &sample.probe),
                max_relative = 1e-12
            );
            assert_relative_eq!(
                anisotropic.derivative_source(
                    &sample.source_normal,
                    &sample.source,
                    &sample.probe
                ),
                uniform.derivative_source(&sample.source_normal, &sample.source, &sample.probe),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn value_along_principal_axis_uses_axis_permittivity() {
        // d along x with ε = diag(ε₁, ε₂, ε₃): G = 1 / (sqrt(ε₁ε₂ε₃) |d| / sqrt(ε₁))
        let kernel = AnisotropicLiquid::new([4.0, 9.0, 16.0], [0.0; 3]).unwrap();
        let value = kernel.evaluate(&[2.0, 0.0, 0.0], &[0.0, 0.0, 0.0]);
        assert_relative_eq!(value, 2.0 / (24.0 * 2.0), max_relative = 1e-14);
    }

    #[test]
    fn rejects_missing_or_invalid_anisotropy() {
        assert_eq!(
            AnisotropicLiquid::from_parameters(&KernelParameters::uniform(2.0)),
            Err(ParameterError::MissingAnisotropy)
        );
        assert_eq!(
            AnisotropicLiquid::new([1.0, -3.0, 2.0], [0.0; 3]),
            Err(ParameterError::AnisotropicPermittivity {
                axis: 1,
                value: -3.0
            })
        );
    }
}
