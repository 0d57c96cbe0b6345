//! Pooling trend-corrected counts by calendar day.

use crate::core::{BirthdayProfile, CalendarDay, DayFraction, Observation};
use crate::error::{ProfileError, Result};
use std::collections::BTreeMap;

/// `norm_trend(t) * count(t)` for each observation.
pub fn corrected_counts(observations: &[Observation], norm_trend: &[f64]) -> Result<Vec<f64>> {
    if observations.len() != norm_trend.len() {
        return Err(ProfileError::DimensionMismatch {
            expected: observations.len(),
            got: norm_trend.len(),
        });
    }
    Ok(observations
        .iter()
        .zip(norm_trend.iter())
        .map(|(o, f)| f * o.count())
        .collect())
}

/// Sum corrected counts per calendar day and divide by the grand total.
///
/// One record per calendar day present in `observations`, in calendar
/// order. A zero or non-finite total is an error.
pub fn aggregate_by_calendar_day(
    observations: &[Observation],
    norm_trend: &[f64],
) -> Result<BirthdayProfile> {
    let corrected = corrected_counts(observations, norm_trend)?;

    let mut buckets: BTreeMap<CalendarDay, f64> = BTreeMap::new();
    for (o, c) in observations.iter().zip(corrected.iter()) {
        *buckets.entry(CalendarDay::from_date(&o.date())).or_insert(0.0) += c;
    }

    let total: f64 = buckets.values().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(ProfileError::ZeroTotal);
    }

    let records = buckets
        .into_iter()
        .map(|(birth_day, sum)| DayFraction {
            birth_day,
            frac_people: sum / total,
        })
        .collect();

    Ok(BirthdayProfile::from_records(records))
}
