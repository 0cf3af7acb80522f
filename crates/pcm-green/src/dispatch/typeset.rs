//! Ordered, compile-time-fixed type lists.
//!
//! [`type_set!`] assigns each listed type its zero-based position within the list as the
//! associated constant [`Member::POSITION`]. The selector relies on this order: the id a
//! caller passes for a family or strategy is the position of the type in its set.

use crate::core::derivatives::{
    Analytic, DerivativeStrategy, Directional, Gradient, Hessian, Stencil,
};
use crate::core::kernels::{AnisotropicLiquid, IonicLiquid, Kernel, UniformDielectric, Vacuum};

/// Membership of a type in the type set `Set`.
pub trait Member<Set> {
    /// Zero-based index of the type in declaration order.
    const POSITION: usize;
}

macro_rules! type_set {
    (@position $set:ident; $index:expr;) => {};
    (@position $set:ident; $index:expr; $head:ident $(, $tail:ident)*) => {
        impl Member<$set> for $head {
            const POSITION: usize = $index;
        }
        type_set!(@position $set; $index + 1; $($tail),*);
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $set:ident: $named:ident { $($member:ident),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        $vis struct $set;

        impl $set {
            /// Number of types in the set.
            pub const LEN: usize = [$(stringify!($member)),+].len();

            /// Canonical names, indexed by position.
            pub const NAMES: [&'static str; $set::LEN] = [$(<$member as $named>::NAME),+];

            pub const fn position_of<T: Member<$set>>() -> usize {
                T::POSITION
            }

            pub fn name(position: usize) -> Option<&'static str> {
                Self::NAMES.get(position).copied()
            }
        }

        type_set!(@position $set; 0usize; $($member),+);
    };
}

type_set! {
    /// Kernel families, in selection order.
    pub struct KernelSet: Kernel {
        Vacuum,
        UniformDielectric,
        IonicLiquid,
        AnisotropicLiquid,
    }
}

type_set! {
    /// Derivative strategies, in selection order.
    pub struct StrategySet: DerivativeStrategy {
        Analytic,
        Directional,
        Gradient,
        Hessian,
        Stencil,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_positions_follow_declaration_order() {
        assert_eq!(KernelSet::LEN, 4);
        assert_eq!(KernelSet::position_of::<Vacuum>(), 0);
        assert_eq!(KernelSet::position_of::<UniformDielectric>(), 1);
        assert_eq!(KernelSet::position_of::<IonicLiquid>(), 2);
        assert_eq!(KernelSet::position_of::<AnisotropicLiquid>(), 3);
    }

    #[test]
    fn strategy_positions_follow_declaration_order() {
        assert_eq!(StrategySet::LEN, 5);
        assert_eq!(StrategySet::position_of::<Analytic>(), 0);
        assert_eq!(StrategySet::position_of::<Directional>(), 1);
        assert_eq!(StrategySet::position_of::<Gradient>(), 2);
        assert_eq!(StrategySet::position_of::<Hessian>(), 3);
        assert_eq!(StrategySet::position_of::<Stencil>(), 4);
    }

    #[test]
    fn names_are_indexed_by_position() {
        assert_eq!(
            KernelSet::NAMES[KernelSet::position_of::<IonicLiquid>()],
            IonicLiquid::NAME
        );
        assert_eq!(KernelSet::name(0), Some("vacuum"));
        assert_eq!(StrategySet::name(3), Some(Hessian::NAME));
        assert_eq!(StrategySet::name(StrategySet::LEN), None);
    }

    #[test]
    fn names_are_unique_within_each_set() {
        for (i, a) in KernelSet::NAMES.iter().enumerate() {
            assert!(!KernelSet::NAMES[i + 1..].contains(a));
        }
        for (i, a) in StrategySet::NAMES.iter().enumerate() {
            assert!(!StrategySet::NAMES[i + 1..].contains(a));
        }
    }
}
