#![forbid(unsafe_code)]

/// Linear-interpolation quantile over an ascending-sorted sample (the
/// R-7 method): position `(n-1)*q`, interpolated between the two nearest
/// order statistics. A single-element sample returns that element; an
/// empty sample returns 0.
pub(crate) fn quantile(sorted: &[f64], q: f64) -> f64 {
    let Some(last) = sorted.last() else {
        return 0.0;
    };
    let pos = (sorted.len() - 1) as f64 * q;
    let base = pos.floor() as usize;
    let rest = pos - base as f64;
    match sorted.get(base + 1) {
        Some(next) => sorted[base] + rest * (next - sorted[base]),
        None => *last,
    }
}

/// Piecewise 0-100 score of a transition's average duration against the
/// pooled quantile thresholds. Requires `q75 <= q90`.
pub(crate) fn bottleneck_score(avg: f64, q75: f64, q90: f64) -> f64 {
    let raw = if avg > q90 {
        if q90 > 0.0 {
            90.0 + ((avg - q90) / q90) * 10.0
        } else {
            // every sample in the pool was zero
            100.0
        }
    } else if avg > q75 {
        // reachable only when q90 > q75, so the division is safe
        75.0 + ((avg - q75) / (q90 - q75)) * 15.0
    } else if q75 > 0.0 {
        (avg / q75) * 75.0
    } else {
        0.0
    };
    raw.clamp(0.0, 100.0)
}
