// =============================================================================
// Exponentially Weighted Moving Average — shared smoothing primitive
// =============================================================================
//
// Both indicators are defined in terms of this single recurrence:
//
//   avg[0] = x[0]
//   avg[i] = alpha * x[i] + (1 - alpha) * avg[i-1]
//
// RSI smooths its gain/loss streams with alpha = 1/period; the MACD EMAs use
// the span-based factor alpha = 2/(span+1). The seed is always the first
// sample itself.

/// Smooth `values` with factor `alpha`, seeding with the first element.
///
/// Returns one output per input; an empty input yields an empty vec. Neither
/// `alpha` nor the values are validated.
pub fn ewma(values: &[f64], alpha: f64) -> Vec<f64> {
    let mut avg = match values.first() {
        Some(&first) => first,
        None => return Vec::new(),
    };

    let mut out = Vec::with_capacity(values.len());
    out.push(avg);

    for &x in &values[1..] {
        avg = alpha * x + (1.0 - alpha) * avg;
        out.push(avg);
    }

    out
}

/// Span-based smoothing factor `2 / (span + 1)`.
pub fn span_alpha(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}
