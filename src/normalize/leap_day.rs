//! Removing February 29 before decomposition and filling it back afterwards.
//!
//! The decomposition assumes a fixed 365-day period, so leap days are taken
//! out of the series and their values are interpolated on the date axis from
//! the neighbouring days.

use crate::core::Observation;
use crate::error::{ProfileError, Result};
use crate::utils::interpolate_linear;
use chrono::{Datelike, NaiveDate};

/// Observations without February 29, in their original order.
pub fn filter_leap_days(observations: &[Observation]) -> Vec<Observation> {
    observations
        .iter()
        .filter(|o| !o.is_leap_day())
        .copied()
        .collect()
}

/// Spread values known on `known_dates` over every date of `full`.
///
/// Dates present in `known_dates` keep their value. Any other date is linearly
/// interpolated between the nearest known dates on either side, weighted by
/// the number of days. A date before the first or after the last known date
/// takes the nearest known value.
///
/// `known_dates` must be ascending.
pub fn reinsert_leap_days(
    full: &[Observation],
    known_dates: &[NaiveDate],
    known_values: &[f64],
) -> Result<Vec<f64>> {
    if known_dates.len() != known_values.len() {
        return Err(ProfileError::DimensionMismatch {
            expected: known_dates.len(),
            got: known_values.len(),
        });
    }
    if known_dates.is_empty() {
        return Err(ProfileError::EmptyData);
    }

    let xs: Vec<f64> = known_dates.iter().map(day_number).collect();
    let mut filled = 0usize;
    let values = full
        .iter()
        .map(|o| {
            let x = day_number(&o.date());
            if xs.binary_search_by(|v| v.total_cmp(&x)).is_err() {
                filled += 1;
            }
            interpolate_linear(&xs, known_values, x).ok_or(ProfileError::EmptyData)
        })
        .collect::<Result<Vec<f64>>>()?;

    tracing::debug!(filled, total = values.len(), "reinserted missing dates");
    Ok(values)
}

fn day_number(date: &NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}
