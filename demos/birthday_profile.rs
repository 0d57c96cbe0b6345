//! Trend-normalized birthday profile example.
//!
//! Run with: cargo run --example birthday_profile

use birth_profile::prelude::*;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

fn main() {
    println!("=== Birthday Profile Example ===\n");

    println!("Daily birth counts are decomposed with robust STL. Each count is");
    println!("scaled by min(trend) / trend(t) and the corrected counts are pooled");
    println!("by calendar day into fractions that sum to one.\n");

    // Five years of synthetic births: rising trend, late-summer peak,
    // fewer births on weekends and around the new year.
    let first = NaiveDate::from_ymd_opt(2014, 1, 1).unwrap();
    let days = 5 * 365 + 1;
    let observations: Vec<Observation> = (0..days)
        .map(|i| {
            let date = first + Duration::days(i);
            let trend = 320.0 + 0.03 * i as f64;
            let yearly =
                18.0 * (2.0 * std::f64::consts::PI * (date.ordinal() as f64 - 160.0) / 365.0).sin();
            let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
            let holiday = date.month() == 1 && date.day() == 1;
            let mut count = trend + yearly;
            if weekend {
                count *= 0.8;
            }
            if holiday {
                count *= 0.6;
            }
            Observation::new(date, count.round()).unwrap()
        })
        .collect();

    let series = BirthSeries::new(observations).unwrap();
    println!(
        "Generated: {} observations from {} to {} ({} leap day)\n",
        series.len(),
        series.first_date(),
        series.last_date(),
        series.leap_day_count()
    );

    // 1. Decomposition diagnostics
    println!("--- Decomposition ---");
    let details = TrendNormalizer::new().normalize_detailed(&series).unwrap();
    let decomposition = &details.decomposition;
    let trend_min = decomposition.trend.iter().copied().fold(f64::INFINITY, f64::min);
    let trend_max = decomposition.trend.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    println!("  Trend range:       {:.1} .. {:.1}", trend_min, trend_max);
    println!("  Seasonal strength: {:.3}", decomposition.seasonal_strength());
    println!("  Trend strength:    {:.3}", decomposition.trend_strength());

    // 2. Profile summary
    println!("\n--- Profile ---");
    let profile = &details.profile;
    println!("  Calendar days: {}", profile.len());
    println!("  Total:         {:.12}", profile.total());
    if let Some(peak) = profile.peak() {
        println!("  Peak:          {} ({:.6})", peak.birth_day, peak.frac_people);
    }
    if let Some(trough) = profile.trough() {
        println!("  Trough:        {} ({:.6})", trough.birth_day, trough.frac_people);
    }
    if let Some(leap) = profile.get(CalendarDay::LEAP_DAY) {
        println!("  02-29:         {:.6}", leap);
    }

    // 3. First rows
    println!("\n--- First ten rows ---");
    println!("  birth_day  frac_people");
    for record in profile.iter().take(10) {
        println!("  {}      {:.6}", record.birth_day, record.frac_people);
    }

    // 4. Error handling
    println!("\n--- Short input ---");
    let short = BirthSeries::new(series.observations()[..100].to_vec()).unwrap();
    match normalize_births(&short) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  {:?} error: {}", e.kind(), e),
    }
}
