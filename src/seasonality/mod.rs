//! Seasonal decomposition.
//!
//! - [`Decomposer`]: the narrow interface the normalizer depends on
//! - [`STL`]: Seasonal-Trend decomposition using LOESS

mod decomposer;
mod loess;
mod stl;

pub use decomposer::{Decomposer, Decomposition, DecompositionConfig, StlDecomposer};
pub use stl::STL;
