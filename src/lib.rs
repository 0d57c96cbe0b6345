//! # birth-profile
//!
//! Calendar-day birth profiles corrected for long-term trend.
//!
//! A multi-year series of daily birth counts is decomposed with STL
//! (Seasonal-Trend decomposition using LOESS). The trend component rescales
//! every raw count to the level of the lowest-trend period, and the corrected
//! counts are pooled by calendar day (`MM-DD`) into fractions that sum to one.
//!
//! ```no_run
//! use birth_profile::prelude::*;
//! use chrono::{Duration, NaiveDate};
//!
//! let start = NaiveDate::from_ymd_opt(2013, 1, 1).unwrap();
//! let observations: Vec<Observation> = (0..1095)
//!     .map(|i| Observation::new(start + Duration::days(i), 100.0).unwrap())
//!     .collect();
//! let series = BirthSeries::new(observations).unwrap();
//!
//! let profile = normalize_births(&series).unwrap();
//! for record in profile.iter().take(3) {
//!     println!("{} {:.6}", record.birth_day, record.frac_people);
//! }
//! ```

#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod error;
pub mod normalize;
pub mod seasonality;
pub mod utils;

pub use error::{ErrorKind, ProfileError, Result};

pub mod prelude {
    pub use crate::core::{BirthSeries, BirthdayProfile, CalendarDay, DayFraction, Observation};
    pub use crate::error::{ErrorKind, ProfileError, Result};
    pub use crate::normalize::{normalize_births, NormalizationDetails, TrendNormalizer};
    pub use crate::seasonality::{Decomposer, Decomposition, DecompositionConfig, STL};
}
