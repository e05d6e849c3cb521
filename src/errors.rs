// =============================================================================
// Error taxonomy — no failure is fatal to the run
// =============================================================================
//
// Policy per error kind:
//   DiscoveryError     => treated as "zero coins", the run ends gracefully
//   MarketDataError    => that coin is skipped, the batch continues
//   HistoryDataError   => that coin is skipped, the batch continues
//   NotificationError  => logged only, the report still counts
//
// All four wrap the same `FetchFailure` cause so log output stays uniform.

use thiserror::Error;

/// Low-level reasons an HTTP call to an external service can fail.
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// Request never produced a response (connect, timeout, TLS).
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The body could not be parsed into the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for FetchFailure {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

/// The trending discovery call failed.
#[derive(Debug, Error)]
#[error("trending discovery failed: {cause}")]
pub struct DiscoveryError {
    #[source]
    pub cause: FetchFailure,
}

/// Market snapshot fetch failed for one coin.
#[derive(Debug, Error)]
#[error("market snapshot fetch failed for '{id}': {cause}")]
pub struct MarketDataError {
    pub id: String,
    #[source]
    pub cause: FetchFailure,
}

/// Hourly price history fetch failed for one coin.
///
/// An empty series is not an error; this type covers transport and parse
/// failures only.
#[derive(Debug, Error)]
#[error("hourly history fetch failed for '{id}': {cause}")]
pub struct HistoryDataError {
    pub id: String,
    #[source]
    pub cause: FetchFailure,
}

/// Alert delivery failed.
#[derive(Debug, Error)]
#[error("notification delivery failed: {cause}")]
pub struct NotificationError {
    #[source]
    pub cause: FetchFailure,
}

// =============================================================================
// Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_coin_errors_carry_the_coin_id() {
        let err = HistoryDataError {
            id: "bitcoin".to_string(),
            cause: FetchFailure::Status {
                status: 429,
                body: "rate limited".to_string(),
            },
        };
        let msg = err.to_string();
        assert!(msg.contains("bitcoin"), "message was: {msg}");
        assert!(msg.contains("429"), "message was: {msg}");
    }

    #[test]
    fn fetch_failure_display_is_stable() {
        let t = FetchFailure::Transport("connection refused".to_string());
        assert_eq!(t.to_string(), "transport error: connection refused");

        let m = FetchFailure::Malformed("expected array".to_string());
        assert_eq!(m.to_string(), "malformed response: expected array");
    }
}
