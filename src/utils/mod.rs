//! Utility functions shared by the decomposition and normalization stages.

pub mod interpolate;
pub mod stats;

pub use interpolate::interpolate_linear;
pub use stats::{argmin, mean, median, variance};
