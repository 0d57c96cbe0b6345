//! LOESS building blocks for STL.
//!
//! Positions are the integer indices `0..n` of the input. A fit at `xs` uses
//! the points `left..=right` with tricube distance weights, optionally scaled
//! by robustness weights, and a local polynomial of degree 0 or 1.

/// Local fit at position `xs` over `y[left..=right]`.
///
/// `span` is the nominal window length; when it exceeds `y.len()` the
/// bandwidth is widened by half the excess. Returns `None` when every weight
/// in the window is zero.
pub(crate) fn loess_point(
    y: &[f64],
    span: usize,
    degree: usize,
    xs: f64,
    left: usize,
    right: usize,
    robustness: Option<&[f64]>,
) -> Option<f64> {
    let n = y.len();
    let range = n as f64 - 1.0;
    let mut h = (xs - left as f64).max(right as f64 - xs);
    if span > n {
        h += ((span - n) / 2) as f64;
    }
    let h9 = 0.999 * h;
    let h1 = 0.001 * h;

    let mut weights = vec![0.0; right - left + 1];
    let mut total = 0.0;
    for (k, j) in (left..=right).enumerate() {
        let r = (j as f64 - xs).abs();
        if r <= h9 {
            let mut w = if r <= h1 {
                1.0
            } else {
                (1.0 - (r / h).powi(3)).powi(3)
            };
            if let Some(rw) = robustness {
                w *= rw[j];
            }
            weights[k] = w;
            total += w;
        }
    }

    if total <= 0.0 {
        return None;
    }
    for w in weights.iter_mut() {
        *w /= total;
    }

    if h > 0.0 && degree > 0 {
        let center: f64 = (left..=right)
            .zip(weights.iter())
            .map(|(j, w)| w * j as f64)
            .sum();
        let spread: f64 = (left..=right)
            .zip(weights.iter())
            .map(|(j, w)| w * (j as f64 - center).powi(2))
            .sum();
        if spread.sqrt() > 0.001 * range {
            let slope = (xs - center) / spread;
            for (j, w) in (left..=right).zip(weights.iter_mut()) {
                *w *= slope * (j as f64 - center) + 1.0;
            }
        }
    }

    Some(
        (left..=right)
            .zip(weights.iter())
            .map(|(j, w)| w * y[j])
            .sum(),
    )
}

/// Smooth every point of `y` with a LOESS window of `span` points.
///
/// Points where the local fit is undefined keep their input value.
pub(crate) fn loess_smooth(
    y: &[f64],
    span: usize,
    degree: usize,
    robustness: Option<&[f64]>,
) -> Vec<f64> {
    let n = y.len();
    if n < 2 {
        return y.to_vec();
    }

    let mut out = vec![0.0; n];
    if span >= n {
        for i in 0..n {
            out[i] = loess_point(y, span, degree, i as f64, 0, n - 1, robustness).unwrap_or(y[i]);
        }
        return out;
    }

    let half = (span + 1) / 2;
    let mut left = 0;
    let mut right = span - 1;
    for i in 0..n {
        if i + 1 > half && right != n - 1 {
            left += 1;
            right += 1;
        }
        out[i] = loess_point(y, span, degree, i as f64, left, right, robustness).unwrap_or(y[i]);
    }
    out
}

/// Moving average: output `i` is the mean of `x[i..i + window]`.
///
/// The output has `x.len() - window + 1` values.
pub(crate) fn moving_average(x: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || x.len() < window {
        return Vec::new();
    }
    let len = window as f64;
    let mut out = Vec::with_capacity(x.len() - window + 1);
    let mut sum: f64 = x[..window].iter().sum();
    out.push(sum / len);
    for i in window..x.len() {
        sum += x[i] - x[i - window];
        out.push(sum / len);
    }
    out
}
