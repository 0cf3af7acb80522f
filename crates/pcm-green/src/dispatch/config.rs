use std::path::Path;
use std::str::FromStr;

use phf::{Map, phf_map};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use super::error::{GreenError, SelectorAxis};
use super::typeset::{KernelSet, StrategySet};
use crate::core::derivatives::{
    Analytic, DerivativeStrategy, Directional, Gradient, Hessian, Stencil,
};
use crate::core::kernels::{AnisotropicLiquid, IonicLiquid, UniformDielectric, Vacuum};
use crate::core::params::KernelParameters;

static KERNEL_IDS: Map<&'static str, usize> = phf_map! {
    "vacuum" => KernelSet::position_of::<Vacuum>(),
    "uniform-dielectric" => KernelSet::position_of::<UniformDielectric>(),
    "uniform" => KernelSet::position_of::<UniformDielectric>(),
    "ionic-liquid" => KernelSet::position_of::<IonicLiquid>(),
    "ionic" => KernelSet::position_of::<IonicLiquid>(),
    "anisotropic-liquid" => KernelSet::position_of::<AnisotropicLiquid>(),
    "anisotropic" => KernelSet::position_of::<AnisotropicLiquid>(),
};

static STRATEGY_IDS: Map<&'static str, usize> = phf_map! {
    "analytic" => StrategySet::position_of::<Analytic>(),
    "directional" => StrategySet::position_of::<Directional>(),
    "derivative" => StrategySet::position_of::<Directional>(),
    "ad-directional" => StrategySet::position_of::<Directional>(),
    "gradient" => StrategySet::position_of::<Gradient>(),
    "ad-gradient" => StrategySet::position_of::<Gradient>(),
    "hessian" => StrategySet::position_of::<Hessian>(),
    "ad-hessian" => StrategySet::position_of::<Hessian>(),
    "stencil" => StrategySet::position_of::<Stencil>(),
    "numerical" => StrategySet::position_of::<Stencil>(),
};

fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| match c {
            '_' | ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Looks up the id of a kernel family by name or alias, ignoring case.
pub fn kernel_id(name: &str) -> Result<usize, GreenError> {
    KERNEL_IDS
        .get(normalize(name).as_str())
        .copied()
        .ok_or_else(|| GreenError::UnknownName {
            axis: SelectorAxis::Family,
            name: name.to_string(),
        })
}

/// Looks up the id of a derivative strategy by name or alias, ignoring case.
pub fn strategy_id(name: &str) -> Result<usize, GreenError> {
    STRATEGY_IDS
        .get(normalize(name).as_str())
        .copied()
        .ok_or_else(|| GreenError::UnknownName {
            axis: SelectorAxis::Strategy,
            name: name.to_string(),
        })
}

fn default_derivative() -> String {
    Directional::NAME.to_string()
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SelectionConfig {
    pub kernel: String,
    #[serde(default = "default_derivative")]
    pub derivative: String,
}

/// A Green's function described by name, as read from a TOML file.
///
/// ```toml
/// [green]
/// kernel = "ionic-liquid"
/// derivative = "hessian"
///
/// [parameters]
/// permittivity = 60.0
/// kappa = 5.0
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GreenConfig {
    pub green: SelectionConfig,
    #[serde(default)]
    pub parameters: KernelParameters,
}

impl GreenConfig {
    #[instrument(level = "debug", skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let config = Self::from_toml_str(&content).map_err(|e| ConfigLoadError::Toml {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        debug!(
            kernel = %config.green.kernel,
            derivative = %config.green.derivative,
            "Loaded Green's function configuration."
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The `(family_id, strategy_id)` pair named by this configuration.
    pub fn selection(&self) -> Result<(usize, usize), GreenError> {
        Ok((
            kernel_id(&self.green.kernel)?,
            strategy_id(&self.green.derivative)?,
        ))
    }
}

impl FromStr for GreenConfig {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_toml_str(s)
    }
}

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}
