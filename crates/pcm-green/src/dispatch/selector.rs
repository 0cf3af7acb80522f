use std::marker::PhantomData;

use tracing::{debug, instrument, warn};

use super::error::{GreenError, SelectionError, SelectorAxis};
use super::factory::{FamilyFactory, GreenFactory};
use super::typeset::{KernelSet, StrategySet};
use crate::core::derivatives::{Analytic, Directional, Gradient, Hessian, Stencil};
use crate::core::kernels::{AnisotropicLiquid, IonicLiquid, UniformDielectric, Vacuum};
use crate::core::params::{KernelParameters, ParameterError};

type Constructor<F> =
    fn(&F, &KernelParameters) -> Result<<F as GreenFactory>::Output, ParameterError>;

type FamilyConstructor<F> =
    fn(&F, &KernelParameters) -> Result<<F as FamilyFactory>::Output, ParameterError>;

// Rows follow `StrategySet` declaration order.
macro_rules! strategy_row {
    ($factory:ident, $kernel:ty) => {
        [
            <$factory as GreenFactory>::create::<$kernel, Analytic> as Constructor<$factory>,
            <$factory as GreenFactory>::create::<$kernel, Directional>,
            <$factory as GreenFactory>::create::<$kernel, Gradient>,
            <$factory as GreenFactory>::create::<$kernel, Hessian>,
            <$factory as GreenFactory>::create::<$kernel, Stencil>,
        ]
    };
}

struct Registry<F>(PhantomData<F>);

impl<F: GreenFactory> Registry<F> {
    // Rows follow `KernelSet` declaration order.
    const TABLE: [[Constructor<F>; StrategySet::LEN]; KernelSet::LEN] = [
        strategy_row!(F, Vacuum),
        strategy_row!(F, UniformDielectric),
        strategy_row!(F, IonicLiquid),
        strategy_row!(F, AnisotropicLiquid),
    ];
}

struct FamilyRegistry<F>(PhantomData<F>);

impl<F: FamilyFactory> FamilyRegistry<F> {
    const TABLE: [FamilyConstructor<F>; KernelSet::LEN] = [
        <F as FamilyFactory>::create_kernel::<Vacuum> as FamilyConstructor<F>,
        <F as FamilyFactory>::create_kernel::<UniformDielectric>,
        <F as FamilyFactory>::create_kernel::<IonicLiquid>,
        <F as FamilyFactory>::create_kernel::<AnisotropicLiquid>,
    ];
}

fn rejected(axis: SelectorAxis, id: usize, len: usize) -> GreenError {
    warn!(%axis, id, len, "Rejected selector id.");
    SelectionError::InvalidSelectorId { axis, id, len }.into()
}

/// Builds the product of `factory` for the kernel at `family_id` in [`KernelSet`] and the
/// strategy at `strategy_id` in [`StrategySet`].
///
/// The family id is validated before the strategy id. Lookup is a single index into a
/// constant table; no state is shared between calls.
#[instrument(level = "debug", skip(parameters, factory))]
pub fn resolve<F: GreenFactory>(
    family_id: usize,
    strategy_id: usize,
    parameters: &KernelParameters,
    factory: &F,
) -> Result<F::Output, GreenError> {
    let table = Registry::<F>::TABLE;
    let row = table
        .get(family_id)
        .ok_or_else(|| rejected(SelectorAxis::Family, family_id, KernelSet::LEN))?;
    let constructor = row
        .get(strategy_id)
        .ok_or_else(|| rejected(SelectorAxis::Strategy, strategy_id, StrategySet::LEN))?;

    let product = constructor(factory, parameters)?;
    debug!(
        kernel = KernelSet::NAMES[family_id],
        strategy = StrategySet::NAMES[strategy_id],
        "Resolved Green's function."
    );
    Ok(product)
}

/// One-dimensional form of [`resolve`], selecting only the kernel family.
#[instrument(level = "debug", skip(parameters, factory))]
pub fn resolve_family<F: FamilyFactory>(
    family_id: usize,
    parameters: &KernelParameters,
    factory: &F,
) -> Result<F::Output, GreenError> {
    let table = FamilyRegistry::<F>::TABLE;
    let constructor = table
        .get(family_id)
        .ok_or_else(|| rejected(SelectorAxis::Family, family_id, KernelSet::LEN))?;

    let product = constructor(factory, parameters)?;
    debug!(kernel = KernelSet::NAMES[family_id], "Resolved kernel family.");
    Ok(product)
}
