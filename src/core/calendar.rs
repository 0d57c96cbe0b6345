//! Year-independent calendar-day buckets.

use crate::error::ProfileError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// Reference leap year used to validate and enumerate month-day pairs.
const REFERENCE_LEAP_YEAR: i32 = 2000;

/// A day of the year ignoring the year, e.g. `03-14`.
///
/// Ordering is calendar order, so `02-29` sorts between `02-28` and `03-01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDay {
    month: u32,
    day: u32,
}

impl CalendarDay {
    /// February 29.
    pub const LEAP_DAY: CalendarDay = CalendarDay { month: 2, day: 29 };

    /// Create a bucket from a month (1-12) and a day of month.
    ///
    /// Returns `None` for combinations that never occur, such as `04-31`.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(REFERENCE_LEAP_YEAR, month, day).map(|_| Self { month, day })
    }

    /// Bucket of a concrete date.
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn is_leap_day(&self) -> bool {
        *self == Self::LEAP_DAY
    }

    /// Position within a leap year, 1 for `01-01` through 366 for `12-31`.
    pub fn ordinal(&self) -> u32 {
        NaiveDate::from_ymd_opt(REFERENCE_LEAP_YEAR, self.month, self.day)
            .map(|d| d.ordinal())
            .unwrap_or(0)
    }

    /// All 366 buckets in calendar order.
    pub fn all() -> impl Iterator<Item = CalendarDay> {
        (1..=12).flat_map(|month| (1..=31).filter_map(move |day| CalendarDay::new(month, day)))
    }
}

impl fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

impl FromStr for CalendarDay {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ProfileError::InvalidParameter(format!("invalid calendar day: {s:?}"));
        let (month, day) = s.trim().split_once('-').ok_or_else(invalid)?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;
        CalendarDay::new(month, day).ok_or_else(invalid)
    }
}
