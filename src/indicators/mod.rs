// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the per-coin indicators. Every
// public entry point returns `Option<f64>` so callers are forced to handle
// insufficient-data and numerical-edge-case scenarios; absence is always
// `None`, never a sentinel value.

pub mod ewma;
pub mod macd;
pub mod rsi;

use crate::types::{IndicatorSummary, PricePoint};

/// RSI look-back period.
pub const RSI_PERIOD: usize = 14;
/// MACD fast EMA span.
pub const MACD_FAST: usize = 12;
/// MACD slow EMA span.
pub const MACD_SLOW: usize = 26;
/// MACD signal EMA span.
pub const MACD_SIGNAL: usize = 9;

/// Compute both indicators over an hourly price series with the default
/// windows.
///
/// The series is consumed as-is. Never fails: a series that is too short or
/// degenerate produces `None` fields instead.
pub fn compute(series: &[PricePoint]) -> IndicatorSummary {
    let prices: Vec<f64> = series.iter().map(|p| p.price).collect();

    IndicatorSummary {
        rsi: rsi::calculate_rsi(&prices, RSI_PERIOD),
        macd_diff: macd::macd_diff(&prices, MACD_FAST, MACD_SLOW, MACD_SIGNAL),
    }
}
