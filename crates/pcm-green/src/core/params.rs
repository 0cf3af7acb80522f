use serde::Deserialize;
use thiserror::Error;

/// Diagonal permittivities and orientation of an anisotropic dielectric.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Anisotropy {
    /// Permittivity along each principal axis of the dielectric.
    pub permittivities: [f64; 3],
    /// Roll, pitch and yaw (degrees) rotating the principal axes into the lab frame.
    #[serde(default)]
    pub euler_angles: [f64; 3],
}

/// Physical constants from which a Green's function is built.
///
/// Each kernel reads only the fields it needs and validates them when it is
/// constructed; unused fields are ignored.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct KernelParameters {
    /// Static relative permittivity ε of the medium.
    #[serde(default = "default_permittivity")]
    pub permittivity: f64,
    /// Inverse Debye length κ of the ionic medium, in inverse bohr.
    #[serde(default)]
    pub kappa: f64,
    #[serde(default)]
    pub anisotropy: Option<Anisotropy>,
}

fn default_permittivity() -> f64 {
    1.0
}

impl Default for KernelParameters {
    fn default() -> Self {
        Self::vacuum()
    }
}

impl KernelParameters {
    pub fn vacuum() -> Self {
        Self {
            permittivity: default_permittivity(),
            kappa: 0.0,
            anisotropy: None,
        }
    }

    pub fn uniform(permittivity: f64) -> Self {
        Self {
            permittivity,
            ..Self::vacuum()
        }
    }

    pub fn ionic(permittivity: f64, kappa: f64) -> Self {
        Self {
            permittivity,
            kappa,
            anisotropy: None,
        }
    }

    pub fn anisotropic(permittivities: [f64; 3], euler_angles: [f64; 3]) -> Self {
        Self {
            anisotropy: Some(Anisotropy {
                permittivities,
                euler_angles,
            }),
            ..Self::vacuum()
        }
    }

    pub(crate) fn checked_permittivity(&self) -> Result<f64, ParameterError> {
        if self.permittivity.is_finite() && self.permittivity > 0.0 {
            Ok(self.permittivity)
        } else {
            Err(ParameterError::Permittivity(self.permittivity))
        }
    }

    pub(crate) fn checked_kappa(&self) -> Result<f64, ParameterError> {
        if self.kappa.is_finite() && self.kappa >= 0.0 {
            Ok(self.kappa)
        } else {
            Err(ParameterError::Kappa(self.kappa))
        }
    }

    pub(crate) fn checked_anisotropy(&self) -> Result<Anisotropy, ParameterError> {
        let anisotropy = self.anisotropy.ok_or(ParameterError::MissingAnisotropy)?;
        for (axis, &value) in anisotropy.permittivities.iter().enumerate() {
            if !(value.is_finite() && value > 0.0) {
                return Err(ParameterError::AnisotropicPermittivity { axis, value });
            }
        }
        for (axis, &value) in anisotropy.euler_angles.iter().enumerate() {
            if !value.is_finite() {
                return Err(ParameterError::EulerAngle { axis, value });
            }
        }
        Ok(anisotropy)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Permittivity must be finite and positive, got {0}")]
    Permittivity(f64),
    #[error("Inverse Debye length must be finite and non-negative, got {0}")]
    Kappa(f64),
    #[error("Anisotropic kernel requires an 'anisotropy' parameter block")]
    MissingAnisotropy,
    #[error("Permittivity along axis {axis} must be finite and positive, got {value}")]
    AnisotropicPermittivity { axis: usize, value: f64 },
    #[error("Euler angle {axis} must be finite, got {value}")]
    EulerAngle { axis: usize, value: f64 },
}
