//! Trend normalization: `min(trend) / trend(t)`.

use crate::error::{ProfileError, Result};

/// Scale factors that bring every point down to the lowest trend level.
///
/// Each output lies in (0, 1] and equals exactly 1.0 where the trend is
/// minimal. Every trend value must be finite and strictly positive.
pub fn normalized_trend(trend: &[f64]) -> Result<Vec<f64>> {
    if trend.is_empty() {
        return Err(ProfileError::EmptyData);
    }
    if let Some((index, &value)) = trend
        .iter()
        .enumerate()
        .find(|(_, t)| !t.is_finite() || **t <= 0.0)
    {
        return Err(ProfileError::NonPositiveTrend { index, value });
    }

    let min = trend.iter().copied().fold(f64::INFINITY, f64::min);
    Ok(trend.iter().map(|t| min / t).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn minimum_maps_to_exactly_one() {
        let trend = [120.0, 100.0, 150.0, 133.3];
        let norm = normalized_trend(&trend).unwrap();

        assert_eq!(norm[1], 1.0);
        assert_relative_eq!(norm[0], 100.0 / 120.0, epsilon = 1e-15);
        assert_relative_eq!(norm[2], 2.0 / 3.0, epsilon = 1e-15);
        assert!(norm.iter().all(|&v| v > 0.0 && v <= 1.0));
    }

    #[test]
    fn constant_trend_is_all_ones() {
        let norm = normalized_trend(&[42.0; 5]).unwrap();
        assert_eq!(norm, vec![1.0; 5]);
    }

    #[test]
    fn non_positive_trend_is_rejected() {
        let err = normalized_trend(&[3.0, 0.0, 2.0]).unwrap_err();
        assert_eq!(err, ProfileError::NonPositiveTrend { index: 1, value: 0.0 });
        assert!(err.is_data());

        let err = normalized_trend(&[3.0, 2.0, -1.0]).unwrap_err();
        assert_eq!(err, ProfileError::NonPositiveTrend { index: 2, value: -1.0 });

        assert!(normalized_trend(&[1.0, f64::NAN]).is_err());
        assert_eq!(normalized_trend(&[]).unwrap_err(), ProfileError::EmptyData);
    }
}
