// =============================================================================
// Relative Strength Index (RSI) — EWM-smoothed gains vs. losses
// =============================================================================
//
// Step 1 — delta[i] = price[i] - price[i-1]
// Step 2 — gain = max(delta, 0), loss = max(-delta, 0)
// Step 3 — smooth both streams with ewma(alpha = 1/period)
// Step 4 — RS = avg_gain / avg_loss, RSI = 100 - 100 / (1 + RS)
//
// When avg_loss is zero and avg_gain is positive, RS is +inf under IEEE
// division and the formula evaluates to exactly 100; no clamp is applied.
// When both averages are zero there is no defined value and the function
// returns None rather than letting the NaN escape.

use super::ewma::ewma;

/// Final RSI over `prices`, rounded to 2 decimal places.
///
/// Returns `None` when fewer than two prices are available (no deltas exist)
/// or when the series never moved at all (both smoothed averages zero).
pub fn calculate_rsi(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < 2 {
        return None;
    }

    let alpha = 1.0 / period as f64;

    let mut gains = Vec::with_capacity(prices.len() - 1);
    let mut losses = Vec::with_capacity(prices.len() - 1);
    for w in prices.windows(2) {
        let delta = w[1] - w[0];
        gains.push(delta.max(0.0));
        losses.push((-delta).max(0.0));
    }

    let avg_gain = *ewma(&gains, alpha).last()?;
    let avg_loss = *ewma(&losses, alpha).last()?;

    // 0/0: a perfectly flat series has no relative strength.
    if avg_gain == 0.0 && avg_loss == 0.0 {
        return None;
    }

    let rs = avg_gain / avg_loss; // +inf when avg_loss == 0
    let rsi = 100.0 - 100.0 / (1.0 + rs);

    Some((rsi * 100.0).round() / 100.0)
}
