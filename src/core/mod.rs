//! Core data structures: observations, calendar-day buckets and profiles.

mod calendar;
mod observation;
mod profile;

pub use calendar::CalendarDay;
pub use observation::{BirthSeries, DateGap, Observation};
pub use profile::{BirthdayProfile, DayFraction};
