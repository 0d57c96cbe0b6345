//! Daily birth observations and the validated series built from them.

use crate::error::{ProfileError, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Number of births recorded on one date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    date: NaiveDate,
    count: f64,
}

impl Observation {
    /// Create an observation. The count must be finite and non-negative.
    pub fn new(date: NaiveDate, count: f64) -> Result<Self> {
        if !count.is_finite() || count < 0.0 {
            return Err(ProfileError::InvalidCount { date, value: count });
        }
        Ok(Self { date, count })
    }

    /// Parse an observation from the textual fields of one input row.
    ///
    /// The date is `YYYY-MM-DD`; a `YYYY-MM-DD HH:MM:SS` timestamp is accepted
    /// and truncated to its date. `row` is only used in error reports.
    pub fn parse(row: usize, date: &str, count: &str) -> Result<Self> {
        let invalid = |reason: String| ProfileError::InvalidObservation { row, reason };

        let date = date.trim();
        if date.is_empty() {
            return Err(invalid("missing date".to_string()));
        }
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .or_else(|_| {
                NaiveDateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date())
            })
            .map_err(|_| invalid(format!("malformed date {date:?}")))?;

        let count = count.trim();
        if count.is_empty() {
            return Err(invalid("missing count".to_string()));
        }
        let count: f64 = count
            .parse()
            .map_err(|_| invalid(format!("malformed count {count:?}")))?;

        Observation::new(date, count).map_err(|e| invalid(e.to_string()))
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn count(&self) -> f64 {
        self.count
    }

    /// Whether this observation falls on February 29.
    pub fn is_leap_day(&self) -> bool {
        self.date.month() == 2 && self.date.day() == 29
    }
}

/// A run of missing dates between two consecutive observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateGap {
    /// Last observed date before the gap.
    pub after: NaiveDate,
    /// First observed date after the gap.
    pub before: NaiveDate,
}

impl DateGap {
    /// Number of dates missing inside the gap.
    pub fn missing_days(&self) -> i64 {
        (self.before - self.after).num_days() - 1
    }
}

/// Date-sorted daily birth counts without duplicate dates.
#[derive(Debug, Clone, PartialEq)]
pub struct BirthSeries {
    observations: Vec<Observation>,
}

impl BirthSeries {
    /// Build a series, sorting by date.
    ///
    /// Fails on empty input and on duplicate dates. Missing dates are
    /// accepted and reported through [`BirthSeries::gaps`].
    pub fn new(mut observations: Vec<Observation>) -> Result<Self> {
        if observations.is_empty() {
            return Err(ProfileError::EmptyData);
        }

        observations.sort_by_key(|o| o.date);
        if let Some(dup) = observations.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(ProfileError::DuplicateDate(dup[0].date));
        }

        let series = Self { observations };
        let gaps = series.gaps();
        if !gaps.is_empty() {
            tracing::warn!(
                gaps = gaps.len(),
                missing_days = gaps.iter().map(DateGap::missing_days).sum::<i64>(),
                "birth series is not contiguous"
            );
        }
        Ok(series)
    }

    /// Build a series from `(date, count)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (NaiveDate, f64)>,
    {
        let observations = pairs
            .into_iter()
            .map(|(date, count)| Observation::new(date, count))
            .collect::<Result<Vec<_>>>()?;
        Self::new(observations)
    }

    /// Build a series from textual `(date, count)` rows.
    ///
    /// Errors name the zero-based position of the offending row.
    pub fn parse_rows<I, D, C>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (D, C)>,
        D: AsRef<str>,
        C: AsRef<str>,
    {
        let observations = rows
            .into_iter()
            .enumerate()
            .map(|(row, (date, count))| Observation::parse(row, date.as_ref(), count.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(observations)
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.observations.iter().map(|o| o.date).collect()
    }

    pub fn counts(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.count).collect()
    }

    pub fn first_date(&self) -> NaiveDate {
        self.observations[0].date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.observations[self.observations.len() - 1].date
    }

    /// Number of February 29 observations.
    pub fn leap_day_count(&self) -> usize {
        self.observations.iter().filter(|o| o.is_leap_day()).count()
    }

    /// Runs of missing dates between consecutive observations.
    pub fn gaps(&self) -> Vec<DateGap> {
        self.observations
            .windows(2)
            .filter(|w| (w[1].date - w[0].date).num_days() > 1)
            .map(|w| DateGap {
                after: w[0].date,
                before: w[1].date,
            })
            .collect()
    }
}
