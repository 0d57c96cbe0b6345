//! The decomposition seam: configuration, result type and the [`Decomposer`] trait.

use super::stl::STL;
use crate::error::{ProfileError, Result};
use crate::utils::variance;

/// Additive split of a series: `observed = trend + seasonal + residual`.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    /// Trend component.
    pub trend: Vec<f64>,
    /// Seasonal component.
    pub seasonal: Vec<f64>,
    /// Residual component.
    pub residual: Vec<f64>,
    /// Robustness weights of the final fit, when the decomposer is robust.
    pub robustness_weights: Option<Vec<f64>>,
}

impl Decomposition {
    /// Build a decomposition from trend and seasonal terms of `observed`.
    ///
    /// The residual is whatever the two components leave unexplained.
    pub fn from_components(observed: &[f64], trend: Vec<f64>, seasonal: Vec<f64>) -> Self {
        let residual = observed
            .iter()
            .zip(trend.iter())
            .zip(seasonal.iter())
            .map(|((y, t), s)| y - t - s)
            .collect();
        Self {
            trend,
            seasonal,
            residual,
            robustness_weights: None,
        }
    }

    pub fn len(&self) -> usize {
        self.trend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
    }

    /// `trend + seasonal + residual` at every index.
    pub fn reconstruct(&self) -> Vec<f64> {
        self.trend
            .iter()
            .zip(self.seasonal.iter())
            .zip(self.residual.iter())
            .map(|((t, s), r)| t + s + r)
            .collect()
    }

    /// Get the seasonal strength (0 to 1).
    /// Values close to 1 indicate strong seasonality.
    pub fn seasonal_strength(&self) -> f64 {
        strength(&self.seasonal, &self.residual)
    }

    /// Get the trend strength (0 to 1).
    /// Values close to 1 indicate strong trend.
    pub fn trend_strength(&self) -> f64 {
        strength(&self.trend, &self.residual)
    }

    /// Fail unless all three components have `expected` values.
    pub(crate) fn check_len(&self, expected: usize) -> Result<()> {
        for got in [self.trend.len(), self.seasonal.len(), self.residual.len()] {
            if got != expected {
                return Err(ProfileError::DimensionMismatch { expected, got });
            }
        }
        Ok(())
    }
}

fn strength(component: &[f64], residual: &[f64]) -> f64 {
    let var_residual = variance(residual);
    let combined: Vec<f64> = component
        .iter()
        .zip(residual.iter())
        .map(|(c, r)| c + r)
        .collect();
    let var_combined = variance(&combined);

    if var_combined < 1e-10 {
        return 0.0;
    }
    (1.0 - var_residual / var_combined).clamp(0.0, 1.0)
}

/// Parameters handed to a [`Decomposer`].
///
/// Values are fixed at construction; there are no setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecompositionConfig {
    seasonal_window: usize,
    period: usize,
    trend_window: usize,
    robust: bool,
    seasonal_degree: usize,
}

impl DecompositionConfig {
    /// Daily birth counts: weekly seasonal smoother, yearly period, two-year
    /// trend smoother, robust fitting, locally constant seasonal fit.
    pub const fn births() -> Self {
        Self {
            seasonal_window: 7,
            period: 365,
            trend_window: 2 * 365 + 1,
            robust: true,
            seasonal_degree: 0,
        }
    }

    pub const fn new(
        seasonal_window: usize,
        period: usize,
        trend_window: usize,
        robust: bool,
        seasonal_degree: usize,
    ) -> Self {
        Self {
            seasonal_window,
            period,
            trend_window,
            robust,
            seasonal_degree,
        }
    }

    pub fn seasonal_window(&self) -> usize {
        self.seasonal_window
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn trend_window(&self) -> usize {
        self.trend_window
    }

    pub fn robust(&self) -> bool {
        self.robust
    }

    pub fn seasonal_degree(&self) -> usize {
        self.seasonal_degree
    }

    /// Check the parameters against a series of `len` values.
    pub fn validate(&self, len: usize) -> Result<()> {
        check_period(self.period)?;
        check_window("seasonal window", self.seasonal_window)?;
        check_window("trend window", self.trend_window)?;
        check_exceeds_period("trend window", self.trend_window, self.period)?;
        check_degree("seasonal degree", self.seasonal_degree)?;
        check_length(len, self.period, &[self.seasonal_window, self.trend_window])
    }
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        Self::births()
    }
}

pub(crate) fn check_period(period: usize) -> Result<()> {
    if period < 2 {
        return Err(ProfileError::InvalidParameter(format!(
            "period must be at least 2, got {period}"
        )));
    }
    Ok(())
}

pub(crate) fn check_window(name: &str, window: usize) -> Result<()> {
    if window < 3 || window % 2 == 0 {
        return Err(ProfileError::InvalidParameter(format!(
            "{name} must be an odd integer >= 3, got {window}"
        )));
    }
    Ok(())
}

pub(crate) fn check_exceeds_period(name: &str, window: usize, period: usize) -> Result<()> {
    if window <= period {
        return Err(ProfileError::InvalidParameter(format!(
            "{name} must be larger than the period {period}, got {window}"
        )));
    }
    Ok(())
}

pub(crate) fn check_degree(name: &str, degree: usize) -> Result<()> {
    if degree > 1 {
        return Err(ProfileError::InvalidParameter(format!(
            "{name} must be 0 or 1, got {degree}"
        )));
    }
    Ok(())
}

/// The series must hold two full periods and be longer than every window.
pub(crate) fn check_length(len: usize, period: usize, windows: &[usize]) -> Result<()> {
    let needed = windows
        .iter()
        .map(|w| w + 1)
        .chain(std::iter::once(2 * period))
        .max()
        .unwrap_or(0);
    if len < needed {
        return Err(ProfileError::InsufficientData { needed, got: len });
    }
    Ok(())
}

/// Splits a regularly sampled series into trend, seasonal and residual terms.
pub trait Decomposer {
    /// Decompose `series`. Components have the same length and order as the input.
    fn decompose(&self, series: &[f64], config: &DecompositionConfig) -> Result<Decomposition>;
}

impl<F> Decomposer for F
where
    F: Fn(&[f64], &DecompositionConfig) -> Result<Decomposition>,
{
    fn decompose(&self, series: &[f64], config: &DecompositionConfig) -> Result<Decomposition> {
        self(series, config)
    }
}

/// [`Decomposer`] backed by [`STL`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StlDecomposer;

impl Decomposer for StlDecomposer {
    fn decompose(&self, series: &[f64], config: &DecompositionConfig) -> Result<Decomposition> {
        STL::from_config(config).decompose(series)
    }
}
