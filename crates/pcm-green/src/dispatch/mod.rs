//! # Dispatch Module
//!
//! Maps a run-time choice of kernel family and derivative strategy onto one of the
//! statically specialized `Green<K, S>` instantiations.
//!
//! ## Architecture
//!
//! - **Type Sets** ([`typeset`]) - Ordered kernel and strategy lists; a type's id is its position
//! - **Selector** ([`selector`]) - Constant table of constructors indexed by the two ids
//! - **Factories** ([`factory`]) - What the selector builds once the types are known
//! - **Handles** ([`handle`]) - The strategy-erased [`GreensFunction`](handle::GreensFunction) trait
//! - **Configuration** ([`config`]) - Names and parameters read from TOML
//! - **Error Handling** ([`error`]) - Selection and evaluation failures

pub mod config;
pub mod error;
pub mod factory;
pub mod handle;
pub mod selector;
pub mod typeset;
