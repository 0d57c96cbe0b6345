//! Trend normalization of daily birth counts into a calendar-day profile.
//!
//! The pipeline runs in five stages:
//! 1. drop February 29 ([`filter_leap_days`])
//! 2. decompose the remaining counts ([`Decomposer`])
//! 3. turn the trend into scale factors ([`normalized_trend`])
//! 4. fill February 29 back in by date interpolation ([`reinsert_leap_days`])
//! 5. pool corrected counts by calendar day ([`aggregate_by_calendar_day`])

mod aggregate;
mod leap_day;
mod trend;

pub use aggregate::{aggregate_by_calendar_day, corrected_counts};
pub use leap_day::{filter_leap_days, reinsert_leap_days};
pub use trend::normalized_trend;

use crate::core::{BirthSeries, BirthdayProfile, Observation};
use crate::error::Result;
use crate::seasonality::{Decomposer, Decomposition, DecompositionConfig, StlDecomposer};
use chrono::NaiveDate;

/// Intermediate results of one normalization run.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationDetails {
    /// Dates that went into the decomposition (February 29 removed).
    pub decomposed_dates: Vec<NaiveDate>,
    /// Decomposition of the counts on `decomposed_dates`.
    pub decomposition: Decomposition,
    /// Scale factor for every input date, February 29 included.
    pub norm_trend: Vec<f64>,
    /// The resulting calendar-day profile.
    pub profile: BirthdayProfile,
}

/// Turns a daily birth series into a trend-corrected calendar-day profile.
///
/// The decomposition parameters are fixed to
/// [`DecompositionConfig::births`]; only the decomposer itself can be swapped.
#[derive(Debug, Clone)]
pub struct TrendNormalizer<D = StlDecomposer> {
    decomposer: D,
    config: DecompositionConfig,
}

impl TrendNormalizer<StlDecomposer> {
    /// Normalizer backed by robust STL.
    pub fn new() -> Self {
        Self::with_decomposer(StlDecomposer)
    }
}

impl Default for TrendNormalizer<StlDecomposer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Decomposer> TrendNormalizer<D> {
    /// Normalizer backed by a custom decomposer.
    pub fn with_decomposer(decomposer: D) -> Self {
        Self {
            decomposer,
            config: DecompositionConfig::births(),
        }
    }

    pub fn config(&self) -> &DecompositionConfig {
        &self.config
    }

    /// Compute the calendar-day profile of `series`.
    pub fn normalize(&self, series: &BirthSeries) -> Result<BirthdayProfile> {
        self.normalize_detailed(series).map(|details| details.profile)
    }

    /// Compute the profile and keep the intermediate results.
    pub fn normalize_detailed(&self, series: &BirthSeries) -> Result<NormalizationDetails> {
        let observations = series.observations();
        let filtered = filter_leap_days(observations);
        tracing::debug!(
            observations = observations.len(),
            leap_days = observations.len() - filtered.len(),
            "filtered leap days"
        );

        let counts: Vec<f64> = filtered.iter().map(Observation::count).collect();
        self.config.validate(counts.len())?;
        let decomposition = self.decomposer.decompose(&counts, &self.config)?;
        decomposition.check_len(counts.len())?;

        let factors = normalized_trend(&decomposition.trend)?;
        let decomposed_dates: Vec<NaiveDate> = filtered.iter().map(Observation::date).collect();
        let norm_trend = reinsert_leap_days(observations, &decomposed_dates, &factors)?;

        let profile = aggregate_by_calendar_day(observations, &norm_trend)?;
        tracing::debug!(
            days = profile.len(),
            seasonal_strength = decomposition.seasonal_strength(),
            trend_strength = decomposition.trend_strength(),
            "built birthday profile"
        );

        Ok(NormalizationDetails {
            decomposed_dates,
            decomposition,
            norm_trend,
            profile,
        })
    }
}

/// Calendar-day profile of `series` using robust STL.
pub fn normalize_births(series: &BirthSeries) -> Result<BirthdayProfile> {
    TrendNormalizer::new().normalize(series)
}
