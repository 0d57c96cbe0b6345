//! Property-based tests for the normalization stages.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated daily counts and trend factors.

use birth_profile::core::{BirthSeries, Observation};
use birth_profile::normalize::{
    aggregate_by_calendar_day, filter_leap_days, normalized_trend, reinsert_leap_days,
    TrendNormalizer,
};
use birth_profile::seasonality::{Decomposition, DecompositionConfig};
use birth_profile::Result;
use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

/// Consecutive daily observations starting at `first`.
fn make_observations(first: NaiveDate, counts: &[f64]) -> Vec<Observation> {
    counts
        .iter()
        .enumerate()
        .map(|(i, &c)| Observation::new(first + Duration::days(i as i64), c).unwrap())
        .collect()
}

/// Strategy for a start date between 2000 and 2030.
fn start_date_strategy() -> impl Strategy<Value = NaiveDate> {
    let base = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    (0i64..11_000).prop_map(move |offset| base + Duration::days(offset))
}

/// Strategy for birth counts, strictly positive so totals never vanish.
fn counts_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0..1000.0_f64, min_len..max_len)
}

/// Decomposer with a smooth positive trend, fast enough for many cases.
fn moving_mean(series: &[f64], _: &DecompositionConfig) -> Result<Decomposition> {
    let n = series.len();
    let trend = (0..n)
        .map(|i| {
            let lo = i.saturating_sub(30);
            let hi = (i + 31).min(n);
            series[lo..hi].iter().sum::<f64>() / (hi - lo) as f64
        })
        .collect();
    Ok(Decomposition::from_components(series, trend, vec![0.0; n]))
}

// =============================================================================
// Property: Fractions form a distribution over the observed calendar days
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn fractions_sum_to_one(
        first in start_date_strategy(),
        counts in counts_strategy(1, 800),
        scale in 0.1..1.0_f64
    ) {
        let observations = make_observations(first, &counts);
        let factors: Vec<f64> = (0..counts.len())
            .map(|i| scale + (1.0 - scale) * ((i % 7) as f64 / 7.0))
            .collect();
        let profile = aggregate_by_calendar_day(&observations, &factors).unwrap();

        prop_assert!((profile.total() - 1.0).abs() < 1e-9);
        prop_assert!(profile.iter().all(|r| r.frac_people >= 0.0));
    }

    #[test]
    fn one_record_per_distinct_calendar_day(
        first in start_date_strategy(),
        counts in counts_strategy(1, 800)
    ) {
        let observations = make_observations(first, &counts);
        let profile = aggregate_by_calendar_day(&observations, &vec![1.0; counts.len()]).unwrap();

        let mut days: Vec<String> = observations
            .iter()
            .map(|o| o.date().format("%m-%d").to_string())
            .collect();
        days.sort();
        days.dedup();
        let emitted: Vec<String> = profile.days().iter().map(|d| d.to_string()).collect();
        prop_assert_eq!(emitted, days);
    }

    #[test]
    fn leap_filter_removes_exactly_leap_days(
        first in start_date_strategy(),
        counts in counts_strategy(1, 1500)
    ) {
        let observations = make_observations(first, &counts);
        let leap_days = observations.iter().filter(|o| o.is_leap_day()).count();
        let filtered = filter_leap_days(&observations);

        prop_assert_eq!(filtered.len(), observations.len() - leap_days);
        prop_assert!(filtered.windows(2).all(|w| w[0].date() < w[1].date()));
    }

    #[test]
    fn reinsertion_stays_within_neighbour_bounds(
        first in start_date_strategy(),
        counts in counts_strategy(2, 1500)
    ) {
        let observations = make_observations(first, &counts);
        let filtered = filter_leap_days(&observations);
        prop_assume!(!filtered.is_empty());

        let dates: Vec<NaiveDate> = filtered.iter().map(|o| o.date()).collect();
        let values: Vec<f64> = filtered.iter().map(|o| o.count()).collect();
        let full = reinsert_leap_days(&observations, &dates, &values).unwrap();

        prop_assert_eq!(full.len(), observations.len());
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        for (o, v) in observations.iter().zip(full.iter()) {
            prop_assert!(*v >= lo && *v <= hi);
            if !o.is_leap_day() {
                prop_assert_eq!(*v, o.count());
            }
        }
    }

    #[test]
    fn normalized_trend_lies_in_unit_interval(trend in prop::collection::vec(0.5..5000.0_f64, 1..500)) {
        let norm = normalized_trend(&trend).unwrap();
        prop_assert!(norm.iter().all(|&v| v > 0.0 && v <= 1.0));
        prop_assert!(norm.iter().any(|&v| v == 1.0));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10))]

    #[test]
    fn pipeline_emits_a_distribution(
        first in start_date_strategy(),
        counts in counts_strategy(736, 1200)
    ) {
        let series = BirthSeries::new(make_observations(first, &counts)).unwrap();
        let details = TrendNormalizer::with_decomposer(moving_mean)
            .normalize_detailed(&series)
            .unwrap();

        prop_assert_eq!(details.norm_trend.len(), series.len());
        prop_assert!((details.profile.total() - 1.0).abs() < 1e-9);
    }
}
