use std::fmt::Debug;
use std::marker::PhantomData;

use nalgebra::Vector3;

use super::error::GreenError;
use super::typeset::{KernelSet, Member, StrategySet};
use crate::core::derivatives::DerivativeStrategy;
use crate::core::kernels::Kernel;
use crate::core::params::{KernelParameters, ParameterError};
use crate::core::point::EvaluationPoint;

/// Value and directional derivatives of a kernel for one source/probe pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KernelValues {
    pub value: f64,
    /// `∇_s G · n_s`.
    pub derivative_source: f64,
    /// `∇_p G · n_p`.
    pub derivative_probe: f64,
}

/// A Green's function with its kernel and derivative strategy fixed at construction.
///
/// This is the strategy-erased view solvers work with; the concrete pair behind it is
/// chosen at run time by the selector.
pub trait GreensFunction: Debug + Send + Sync {
    /// Position of the kernel in [`KernelSet`].
    fn family_id(&self) -> usize;

    /// Position of the strategy in [`StrategySet`].
    fn strategy_id(&self) -> usize;

    fn kernel_name(&self) -> &'static str;

    fn strategy_name(&self) -> &'static str;

    fn function(&self, source: &Vector3<f64>, probe: &Vector3<f64>) -> f64;

    fn derivative_source(
        &self,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64;

    fn derivative_probe(
        &self,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64;

    fn gradient_source(
        &self,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> Result<Vector3<f64>, GreenError>;

    fn gradient_probe(
        &self,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> Result<Vector3<f64>, GreenError>;

    fn hessian(
        &self,
        source_normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe_normal: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> Result<f64, GreenError>;

    /// Evaluates the value and both normal derivatives; both points must carry a normal.
    fn evaluate(
        &self,
        source: &EvaluationPoint,
        probe: &EvaluationPoint,
    ) -> Result<KernelValues, GreenError> {
        let source_normal = source
            .normal
            .ok_or(GreenError::MissingNormal { point: "source" })?;
        let probe_normal = probe
            .normal
            .ok_or(GreenError::MissingNormal { point: "probe" })?;
        let (s, p) = (&source.position, &probe.position);
        Ok(KernelValues {
            value: self.function(s, p),
            derivative_source: self.derivative_source(&source_normal, s, p),
            derivative_probe: self.derivative_probe(&probe_normal, s, p),
        })
    }
}

/// A boxed, strategy-erased Green's function.
pub type GreenHandle = Box<dyn GreensFunction>;

/// A kernel paired with a derivative strategy.
#[derive(Debug, Clone)]
pub struct Green<K, S> {
    kernel: K,
    strategy: PhantomData<S>,
}

impl<K: Kernel, S: DerivativeStrategy> Green<K, S> {
    pub fn new(kernel: K) -> Self {
        Self {
            kernel,
            strategy: PhantomData,
        }
    }

    pub fn from_parameters(parameters: &KernelParameters) -> Result<Self, ParameterError> {
        K::from_parameters(parameters).map(Self::new)
    }

    pub fn kernel(&self) -> &K {
        &self.kernel
    }

    fn unsupported(operation: &'static str) -> GreenError {
        GreenError::Unsupported {
            operation,
            strategy: S::NAME,
        }
    }
}

impl<K: Kernel, S: DerivativeStrategy> GreensFunction for Green<K, S> {
    fn family_id(&self) -> usize {
        <K as Member<KernelSet>>::POSITION
    }

    fn strategy_id(&self) -> usize {
        <S as Member<StrategySet>>::POSITION
    }

    fn kernel_name(&self) -> &'static str {
        K::NAME
    }

    fn strategy_name(&self) -> &'static str {
        S::NAME
    }

    #[inline]
    fn function(&self, source: &Vector3<f64>, probe: &Vector3<f64>) -> f64 {
        S::function(&self.kernel, source, probe)
    }

    #[inline]
    fn derivative_source(
        &self,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        S::derivative_source(&self.kernel, normal, source, probe)
    }

    #[inline]
    fn derivative_probe(
        &self,
        normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> f64 {
        S::derivative_probe(&self.kernel, normal, source, probe)
    }

    fn gradient_source(
        &self,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> Result<Vector3<f64>, GreenError> {
        S::gradient_source(&self.kernel, source, probe)
            .ok_or_else(|| Self::unsupported("gradient_source"))
    }

    fn gradient_probe(
        &self,
        source: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> Result<Vector3<f64>, GreenError> {
        S::gradient_probe(&self.kernel, source, probe)
            .ok_or_else(|| Self::unsupported("gradient_probe"))
    }

    fn hessian(
        &self,
        source_normal: &Vector3<f64>,
        source: &Vector3<f64>,
        probe_normal: &Vector3<f64>,
        probe: &Vector3<f64>,
    ) -> Result<f64, GreenError> {
        S::hessian(&self.kernel, source_normal, source, probe_normal, probe)
            .ok_or_else(|| Self::unsupported("hessian"))
    }
}
