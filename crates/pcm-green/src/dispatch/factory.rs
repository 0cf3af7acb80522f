use super::handle::{Green, GreenHandle};
use crate::core::derivatives::{Analytic, DerivativeStrategy};
use crate::core::kernels::Kernel;
use crate::core::params::{KernelParameters, ParameterError};

/// Builds a product from a kernel type and a derivative strategy chosen by the selector.
///
/// Factories are stateless from the selector's point of view; `create` takes `&self`
/// and a factory can be reused across any number of selections.
pub trait GreenFactory {
    type Output;

    fn create<K: Kernel, S: DerivativeStrategy>(
        &self,
        parameters: &KernelParameters,
    ) -> Result<Self::Output, ParameterError>;
}

/// Builds a product from a kernel type alone, for one-dimensional selection.
pub trait FamilyFactory {
    type Output;

    fn create_kernel<K: Kernel>(
        &self,
        parameters: &KernelParameters,
    ) -> Result<Self::Output, ParameterError>;
}

/// Produces boxed [`GreensFunction`](super::handle::GreensFunction) handles.
///
/// One-dimensional selection binds the analytic strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandleFactory;

impl GreenFactory for HandleFactory {
    type Output = GreenHandle;

    fn create<K: Kernel, S: DerivativeStrategy>(
        &self,
        parameters: &KernelParameters,
    ) -> Result<GreenHandle, ParameterError> {
        Ok(Box::new(Green::<K, S>::from_parameters(parameters)?))
    }
}

impl FamilyFactory for HandleFactory {
    type Output = GreenHandle;

    fn create_kernel<K: Kernel>(
        &self,
        parameters: &KernelParameters,
    ) -> Result<GreenHandle, ParameterError> {
        self.create::<K, Analytic>(parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::derivatives::Hessian;
    use crate::core::kernels::{AnisotropicLiquid, UniformDielectric};
    use crate::dispatch::handle::GreensFunction;

    #[test]
    fn handle_factory_builds_the_requested_pair() {
        let handle = HandleFactory
            .create::<UniformDielectric, Hessian>(&KernelParameters::uniform(4.0))
            .unwrap();
        assert_eq!(handle.kernel_name(), UniformDielectric::NAME);
        assert_eq!(handle.strategy_name(), Hessian::NAME);
    }

    #[test]
    fn family_creation_binds_analytic_derivatives() {
        let handle = HandleFactory
            .create_kernel::<UniformDielectric>(&KernelParameters::uniform(4.0))
            .unwrap();
        assert_eq!(handle.strategy_name(), Analytic::NAME);
    }

    #[test]
    fn invalid_parameters_are_reported() {
        let error = HandleFactory
            .create::<AnisotropicLiquid, Analytic>(&KernelParameters::vacuum())
            .unwrap_err();
        assert_eq!(error, ParameterError::MissingAnisotropy);
    }
}
