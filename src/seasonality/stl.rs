//! STL (Seasonal-Trend decomposition using LOESS) implementation.
//!
//! STL decomposes a time series into three components:
//! - Trend: The underlying long-term pattern
//! - Seasonal: The repeating seasonal pattern
//! - Residual: What is left after removing trend and seasonal
//!
//! Each inner pass smooths the cycle-subseries of the detrended data,
//! removes their low-frequency content, then smooths the deseasonalized data
//! into the trend. Robust fitting adds outer passes that down-weight points
//! with large residuals using bisquare weights (Cleveland et al., 1990).

use super::decomposer::{
    check_degree, check_exceeds_period, check_length, check_period, check_window, Decomposition,
    DecompositionConfig,
};
use super::loess::{loess_point, loess_smooth, moving_average};
use crate::error::{ProfileError, Result};
use crate::utils::median;

/// STL decomposition configuration and algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct STL {
    /// Seasonal period.
    period: usize,
    /// Seasonal LOESS window (ns).
    seasonal_smoothness: usize,
    /// Trend LOESS window (nt).
    trend_smoothness: usize,
    /// Low-pass LOESS window (nl).
    low_pass_smoothness: usize,
    seasonal_degree: usize,
    trend_degree: usize,
    low_pass_degree: usize,
    /// Number of inner iterations.
    inner_iterations: usize,
    /// Number of outer (robustness) iterations.
    outer_iterations: usize,
    /// Use robust fitting.
    robust: bool,
}

impl STL {
    /// Create a new STL decomposer with the given seasonal period.
    ///
    /// Defaults: seasonal window 7, trend window from Cleveland et al. (1990),
    /// low-pass window the smallest odd integer above the period, degree 1
    /// throughout, five inner passes and no robustness passes.
    pub fn new(period: usize) -> Self {
        let ns = 7;
        Self {
            period,
            seasonal_smoothness: ns,
            trend_smoothness: default_trend_window(period, ns),
            low_pass_smoothness: next_odd(period + 1),
            seasonal_degree: 1,
            trend_degree: 1,
            low_pass_degree: 1,
            inner_iterations: 5,
            outer_iterations: 0,
            robust: false,
        }
    }

    /// Build the decomposer described by a [`DecompositionConfig`].
    pub fn from_config(config: &DecompositionConfig) -> Self {
        let stl = Self::new(config.period())
            .with_seasonal_smoothness(config.seasonal_window())
            .with_trend_smoothness(config.trend_window())
            .with_seasonal_degree(config.seasonal_degree());
        if config.robust() {
            stl.robust()
        } else {
            stl
        }
    }

    /// Set the seasonal LOESS window (ns). Must be odd and at least 3.
    pub fn with_seasonal_smoothness(mut self, ns: usize) -> Self {
        self.seasonal_smoothness = ns;
        self
    }

    /// Set the trend LOESS window (nt). Must be odd and larger than the period.
    pub fn with_trend_smoothness(mut self, nt: usize) -> Self {
        self.trend_smoothness = nt;
        self
    }

    /// Set the low-pass LOESS window (nl). Must be odd and larger than the period.
    pub fn with_low_pass_smoothness(mut self, nl: usize) -> Self {
        self.low_pass_smoothness = nl;
        self
    }

    /// Degree of the seasonal LOESS: 0 (locally constant) or 1 (locally linear).
    pub fn with_seasonal_degree(mut self, degree: usize) -> Self {
        self.seasonal_degree = degree;
        self
    }

    pub fn with_trend_degree(mut self, degree: usize) -> Self {
        self.trend_degree = degree;
        self
    }

    pub fn with_low_pass_degree(mut self, degree: usize) -> Self {
        self.low_pass_degree = degree;
        self
    }

    /// Enable robust fitting with default iterations.
    pub fn robust(mut self) -> Self {
        self.robust = true;
        self.inner_iterations = 2;
        self.outer_iterations = 15;
        self
    }

    /// Set number of outer (robustness) iterations.
    pub fn with_outer_iterations(mut self, n: usize) -> Self {
        self.outer_iterations = n;
        self.robust = n > 0;
        self
    }

    /// Set number of inner iterations.
    pub fn with_inner_iterations(mut self, n: usize) -> Self {
        self.inner_iterations = n;
        self
    }

    pub fn period(&self) -> usize {
        self.period
    }

    pub fn is_robust(&self) -> bool {
        self.robust
    }

    /// Check the parameters against a series of `len` values.
    pub fn validate(&self, len: usize) -> Result<()> {
        check_period(self.period)?;
        check_window("seasonal window", self.seasonal_smoothness)?;
        check_window("trend window", self.trend_smoothness)?;
        check_window("low-pass window", self.low_pass_smoothness)?;
        check_exceeds_period("trend window", self.trend_smoothness, self.period)?;
        check_exceeds_period("low-pass window", self.low_pass_smoothness, self.period)?;
        check_degree("seasonal degree", self.seasonal_degree)?;
        check_degree("trend degree", self.trend_degree)?;
        check_degree("low-pass degree", self.low_pass_degree)?;
        if self.inner_iterations == 0 {
            return Err(ProfileError::InvalidParameter(
                "inner iterations must be at least 1".to_string(),
            ));
        }
        check_length(
            len,
            self.period,
            &[self.seasonal_smoothness, self.trend_smoothness],
        )
    }

    /// Decompose the time series.
    pub fn decompose(&self, series: &[f64]) -> Result<Decomposition> {
        let n = series.len();
        self.validate(n)?;
        if let Some(row) = series.iter().position(|v| !v.is_finite()) {
            return Err(ProfileError::InvalidObservation {
                row,
                reason: "value is not finite".to_string(),
            });
        }

        let mut seasonal = vec![0.0; n];
        let mut trend = vec![0.0; n];
        let mut weights: Option<Vec<f64>> = None;

        let outer_iters = if self.robust { self.outer_iterations } else { 0 };
        for pass in 0..=outer_iters {
            self.inner_loop(series, weights.as_deref(), &mut seasonal, &mut trend);

            if pass < outer_iters {
                weights = Some(robustness_weights(series, &seasonal, &trend));
            }
        }

        tracing::debug!(
            n,
            period = self.period,
            outer_iterations = outer_iters,
            "stl decomposition finished"
        );

        let mut result = Decomposition::from_components(series, trend, seasonal);
        if self.robust {
            result.robustness_weights = Some(weights.unwrap_or_else(|| vec![1.0; n]));
        }
        Ok(result)
    }

    /// One set of inner passes, updating `seasonal` and `trend` in place.
    fn inner_loop(
        &self,
        series: &[f64],
        weights: Option<&[f64]>,
        seasonal: &mut [f64],
        trend: &mut Vec<f64>,
    ) {
        let n = series.len();
        let period = self.period;

        for _ in 0..self.inner_iterations {
            // Step 1: Detrending
            let detrended: Vec<f64> = series.iter().zip(trend.iter()).map(|(y, t)| y - t).collect();

            // Step 2: Cycle-subseries smoothing, extended one period each side
            let cycle = self.smooth_cycle_subseries(&detrended, weights);

            // Step 3: Low-pass filter of smoothed cycle-subseries
            let low_pass = self.low_pass_filter(&cycle);

            // Step 4: Detrending of smoothed cycle-subseries
            for i in 0..n {
                seasonal[i] = cycle[period + i] - low_pass[i];
            }

            // Step 5: Deseasonalizing
            let deseasonalized: Vec<f64> = series
                .iter()
                .zip(seasonal.iter())
                .map(|(y, s)| y - s)
                .collect();

            // Step 6: Trend smoothing
            *trend = loess_smooth(
                &deseasonalized,
                self.trend_smoothness,
                self.trend_degree,
                weights,
            );
        }
    }

    /// Smooth each cycle-subseries and extrapolate it one step at both ends.
    ///
    /// The result has `n + 2 * period` values: position `i + period` lines up
    /// with input index `i`.
    fn smooth_cycle_subseries(&self, detrended: &[f64], weights: Option<&[f64]>) -> Vec<f64> {
        let n = detrended.len();
        let period = self.period;
        let ns = self.seasonal_smoothness;
        let mut result = vec![0.0; n + 2 * period];

        for cycle_pos in 0..period.min(n) {
            let values: Vec<f64> = detrended.iter().skip(cycle_pos).step_by(period).copied().collect();
            let sub_weights: Option<Vec<f64>> =
                weights.map(|w| w.iter().skip(cycle_pos).step_by(period).copied().collect());
            let sub_weights = sub_weights.as_deref();
            let k = values.len();

            let smoothed = loess_smooth(&values, ns, self.seasonal_degree, sub_weights);

            let before = loess_point(
                &values,
                ns,
                self.seasonal_degree,
                -1.0,
                0,
                ns.min(k) - 1,
                sub_weights,
            )
            .unwrap_or(smoothed[0]);
            let after = loess_point(
                &values,
                ns,
                self.seasonal_degree,
                k as f64,
                k.saturating_sub(ns),
                k - 1,
                sub_weights,
            )
            .unwrap_or(smoothed[k - 1]);

            result[cycle_pos] = before;
            for (m, &v) in smoothed.iter().enumerate() {
                result[(m + 1) * period + cycle_pos] = v;
            }
            result[(k + 1) * period + cycle_pos] = after;
        }

        result
    }

    /// Low-pass filter: MA(period), MA(period), MA(3), then LOESS.
    ///
    /// Takes the extended cycle series and returns `n` values.
    fn low_pass_filter(&self, cycle: &[f64]) -> Vec<f64> {
        let ma1 = moving_average(cycle, self.period);
        let ma2 = moving_average(&ma1, self.period);
        let ma3 = moving_average(&ma2, 3);
        loess_smooth(&ma3, self.low_pass_smoothness, self.low_pass_degree, None)
    }
}

impl Default for STL {
    fn default() -> Self {
        Self::from_config(&DecompositionConfig::births())
    }
}

/// Bisquare weights scaled by six times the median absolute residual.
fn robustness_weights(series: &[f64], seasonal: &[f64], trend: &[f64]) -> Vec<f64> {
    let abs_residual: Vec<f64> = series
        .iter()
        .zip(seasonal.iter())
        .zip(trend.iter())
        .map(|((y, s), t)| (y - s - t).abs())
        .collect();

    let h = 6.0 * median(&abs_residual);
    let h9 = 0.999 * h;
    let h1 = 0.001 * h;

    abs_residual
        .iter()
        .map(|&r| {
            if r <= h1 {
                1.0
            } else if r <= h9 {
                (1.0 - (r / h).powi(2)).powi(2)
            } else {
                0.0
            }
        })
        .collect()
}

fn next_odd(n: usize) -> usize {
    if n % 2 == 0 {
        n + 1
    } else {
        n
    }
}

fn default_trend_window(period: usize, seasonal: usize) -> usize {
    let nt = (1.5 * period as f64 / (1.0 - 1.5 / seasonal as f64)).ceil() as usize;
    next_odd(nt)
}
