//! Exponential smoothing and ratio helpers

/// Smoothing factor for a span: `2 / (span + 1)`
pub fn ema_alpha(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// One step of the recursive EMA
pub fn ema_from_previous(value: f64, previous: f64, span: usize) -> f64 {
    let alpha = ema_alpha(span);
    alpha * value + (1.0 - alpha) * previous
}

/// EMA over the whole series without bias adjustment.
///
/// The first value seeds the series, so the output has the same length as
/// the input.
pub fn ema_series(values: &[f64], span: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut previous: Option<f64> = None;
    for &value in values {
        let next = match previous {
            Some(prev) => ema_from_previous(value, prev, span),
            None => value,
        };
        out.push(next);
        previous = Some(next);
    }
    out
}

/// EMA over a series with gaps.
///
/// Output is `None` until the first defined input. Gaps repeat the last
/// smoothed value and the recursion resumes on the next defined input.
pub fn ema_series_sparse(values: &[Option<f64>], span: usize) -> Vec<Option<f64>> {
    let mut previous: Option<f64> = None;
    values
        .iter()
        .map(|value| {
            previous = match (*value, previous) {
                (Some(v), Some(prev)) => Some(ema_from_previous(v, prev, span)),
                (Some(v), None) => Some(v),
                (None, prev) => prev,
            };
            previous
        })
        .collect()
}

/// `100 * numerator / denominator`, undefined for a zero denominator
pub fn percentage(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        return None;
    }
    Some(100.0 * numerator / denominator)
}
