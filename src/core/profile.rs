//! Calendar-day profile produced by trend normalization.

use super::calendar::CalendarDay;

/// Share of trend-corrected births falling on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayFraction {
    /// Calendar day, displayed as `MM-DD`.
    pub birth_day: CalendarDay,
    /// Fraction of all corrected births, non-negative.
    pub frac_people: f64,
}

/// Fractions per calendar day, sorted in calendar order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BirthdayProfile {
    records: Vec<DayFraction>,
}

impl BirthdayProfile {
    /// Create a profile from records. Records are sorted by calendar day.
    pub fn from_records(mut records: Vec<DayFraction>) -> Self {
        records.sort_by_key(|r| r.birth_day);
        Self { records }
    }

    pub fn records(&self) -> &[DayFraction] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayFraction> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fraction for a calendar day, if that day was observed.
    pub fn get(&self, day: CalendarDay) -> Option<f64> {
        self.records
            .binary_search_by_key(&day, |r| r.birth_day)
            .ok()
            .map(|i| self.records[i].frac_people)
    }

    /// Calendar days in output order.
    pub fn days(&self) -> Vec<CalendarDay> {
        self.records.iter().map(|r| r.birth_day).collect()
    }

    /// Fractions in output order.
    pub fn fractions(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.frac_people).collect()
    }

    /// Sum of all fractions; 1.0 up to rounding for a computed profile.
    pub fn total(&self) -> f64 {
        self.records.iter().map(|r| r.frac_people).sum()
    }

    /// Day with the largest fraction. Ties resolve to the earliest day.
    pub fn peak(&self) -> Option<DayFraction> {
        self.records.iter().copied().reduce(|best, r| {
            if r.frac_people > best.frac_people {
                r
            } else {
                best
            }
        })
    }

    /// Day with the smallest fraction. Ties resolve to the earliest day.
    pub fn trough(&self) -> Option<DayFraction> {
        self.records.iter().copied().reduce(|best, r| {
            if r.frac_people < best.frac_people {
                r
            } else {
                best
            }
        })
    }
}

impl<'a> IntoIterator for &'a BirthdayProfile {
    type Item = &'a DayFraction;
    type IntoIter = std::slice::Iter<'a, DayFraction>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(month: u32, day: u32, frac: f64) -> DayFraction {
        DayFraction {
            birth_day: CalendarDay::new(month, day).unwrap(),
            frac_people: frac,
        }
    }

    #[test]
    fn records_are_sorted_by_calendar_day() {
        let profile = BirthdayProfile::from_records(vec![
            record(3, 1, 0.2),
            record(2, 29, 0.1),
            record(1, 15, 0.3),
            record(2, 28, 0.4),
        ]);

        let days: Vec<String> = profile.days().iter().map(|d| d.to_string()).collect();
        assert_eq!(days, vec!["01-15", "02-28", "02-29", "03-01"]);
    }

    #[test]
    fn lookup_and_summary() {
        let profile = BirthdayProfile::from_records(vec![
            record(1, 1, 0.25),
            record(1, 2, 0.5),
            record(1, 3, 0.25),
        ]);

        assert_eq!(profile.len(), 3);
        assert_eq!(profile.get(CalendarDay::new(1, 2).unwrap()), Some(0.5));
        assert_eq!(profile.get(CalendarDay::new(1, 4).unwrap()), None);
        assert!((profile.total() - 1.0).abs() < 1e-12);
        assert_eq!(profile.peak().unwrap().birth_day.to_string(), "01-02");
        assert_eq!(profile.trough().unwrap().birth_day.to_string(), "01-01");
        assert_eq!(profile.into_iter().count(), 3);
    }

    #[test]
    fn empty_profile() {
        let profile = BirthdayProfile::default();
        assert!(profile.is_empty());
        assert!(profile.peak().is_none());
        assert_eq!(profile.total(), 0.0);
    }
}
