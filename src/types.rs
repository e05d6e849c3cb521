// =============================================================================
// Shared types used across the trend scanner
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One (timestamp, price) observation from the hourly history feed.
///
/// Series arrive oldest-first with non-decreasing timestamps and are consumed
/// exactly as received: no reordering, no deduplication, no validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// Current market snapshot for a single coin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinSnapshot {
    pub id: String,
    pub price: f64,
    /// 24h price change in percent. 0.0 when the source omits it.
    #[serde(default)]
    pub change_24h: f64,
    /// 24h traded volume in the quote currency. 0.0 when the source omits it.
    #[serde(default)]
    pub volume_24h: f64,
}

/// Final smoothed indicator values for one coin.
///
/// `None` means "insufficient data" and is distinct from a computed value of
/// exactly zero. The `Option` is carried all the way to the message formatter;
/// nothing in the core ever substitutes a sentinel value for absence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSummary {
    /// Relative Strength Index in [0, 100], rounded to 2 decimal places.
    pub rsi: Option<f64>,
    /// MACD line minus signal line, rounded to 4 decimal places.
    pub macd_diff: Option<f64>,
}

/// The per-coin unit handed to the notifier: snapshot, indicators and the
/// moment the report was generated. Created fresh per coin per run and
/// discarded after delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinReport {
    pub snapshot: CoinSnapshot,
    pub indicators: IndicatorSummary,
    pub generated_at: DateTime<Utc>,
}
