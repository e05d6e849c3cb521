// =============================================================================
// MACD — Moving Average Convergence/Divergence vs. its signal line
// =============================================================================
//
//   macd_line[i] = EMA(price, fast)[i] - EMA(price, slow)[i]
//   signal_line  = EMA(macd_line, signal)
//   macd_diff    = macd_line.last - signal_line.last
//
// All three EMAs use the span-based factor 2/(span+1) and the shared
// seed-with-first-value recurrence. The MACD line is built over the full
// series, not just the tail.

use super::ewma::{ewma, span_alpha};

/// Final MACD-minus-signal difference, rounded to 4 decimal places.
///
/// Returns `None` when fewer than two prices are available (no meaningful EMA
/// transition exists). A constant series yields `Some(0.0)`: every EMA
/// collapses to the constant price.
pub fn macd_diff(prices: &[f64], fast: usize, slow: usize, signal: usize) -> Option<f64> {
    if prices.len() < 2 {
        return None;
    }

    let ema_fast = ewma(prices, span_alpha(fast));
    let ema_slow = ewma(prices, span_alpha(slow));

    let macd_line: Vec<f64> = ema_fast
        .iter()
        .zip(ema_slow.iter())
        .map(|(f, s)| f - s)
        .collect();

    let signal_line = ewma(&macd_line, span_alpha(signal));

    let diff = macd_line.last()? - signal_line.last()?;
    Some((diff * 10_000.0).round() / 10_000.0)
}
