//! Linear interpolation over a sorted numeric axis.

/// Linearly interpolate `ys` (sampled at ascending `xs`) at position `x`.
///
/// Outside the sampled range the nearest end value is carried, matching the
/// usual forward/backward fill at series boundaries. Returns `None` if there
/// are no samples or the slices differ in length.
pub fn interpolate_linear(xs: &[f64], ys: &[f64], x: f64) -> Option<f64> {
    if xs.is_empty() || xs.len() != ys.len() {
        return None;
    }

    let last = xs.len() - 1;
    if x <= xs[0] {
        return Some(ys[0]);
    }
    if x >= xs[last] {
        return Some(ys[last]);
    }

    // xs[hi - 1] < x <= xs[hi]
    let hi = xs.partition_point(|&v| v < x);
    if xs[hi] == x {
        return Some(ys[hi]);
    }
    let lo = hi - 1;
    let t = (x - xs[lo]) / (xs[hi] - xs[lo]);
    Some(ys[lo] + t * (ys[hi] - ys[lo]))
}
