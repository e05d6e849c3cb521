// =============================================================================
// Trending Scan — fetch, analyze, notify, one coin at a time
// =============================================================================
//
// The run is strictly sequential: each coin is fully processed (snapshot and
// history fetch, indicator computation, alert delivery) before the next one
// starts. A failure on one coin is logged and skips only that coin; the rest
// of the batch always completes. Nothing here can abort the process.

use chrono::Utc;
use tracing::{error, info, warn};

use crate::indicators;
use crate::market_data::MarketFeed;
use crate::notify::AlertSink;
use crate::runtime_config::RuntimeConfig;
use crate::types::CoinReport;

/// Run one full scan and return the reports that were produced, in discovery
/// order.
///
/// Discovery failure and an empty trending list are equivalent: the run ends
/// after delivering the no-data marker. Per-coin fetch failures skip that
/// coin only; delivery failures are logged and the report still counts.
pub async fn run<F, S>(feed: &F, sink: &S, config: &RuntimeConfig) -> Vec<CoinReport>
where
    F: MarketFeed,
    S: AlertSink,
{
    let mut ids = match feed.trending_ids().await {
        Ok(ids) => ids,
        Err(e) => {
            warn!(error = %e, "trending discovery failed — treating as zero coins");
            Vec::new()
        }
    };

    if ids.is_empty() {
        warn!("no trending coins found");
        if let Err(e) = sink.notify_no_data().await {
            error!(error = %e, "failed to deliver no-data notification");
        }
        return Vec::new();
    }

    if let Some(cap) = config.max_coins {
        if ids.len() > cap {
            info!(discovered = ids.len(), cap, "truncating trending list to configured cap");
            ids.truncate(cap);
        }
    }

    info!(coins = ?ids, "analyzing trending coins");

    let mut reports = Vec::with_capacity(ids.len());

    for id in &ids {
        let snapshot = match feed.snapshot(id).await {
            Ok(s) => s,
            Err(e) => {
                error!(coin = %id, error = %e, "snapshot fetch failed — skipping coin");
                continue;
            }
        };

        let series = match feed.hourly_series(id).await {
            Ok(s) => s,
            Err(e) => {
                error!(coin = %id, error = %e, "history fetch failed — skipping coin");
                continue;
            }
        };

        let report = CoinReport {
            snapshot,
            indicators: indicators::compute(&series),
            generated_at: Utc::now(),
        };

        if let Err(e) = sink.notify(&report).await {
            error!(coin = %id, error = %e, "alert delivery failed");
        }

        reports.push(report);
    }

    info!(
        reports = reports.len(),
        skipped = ids.len() - reports.len(),
        "scan complete"
    );
    reports
}

// =============================================================================
// Tests — run loop against in-memory fakes
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{DateTime, Duration};
    use std::sync::Mutex;

    use crate::errors::{
        DiscoveryError, FetchFailure, HistoryDataError, MarketDataError, NotificationError,
    };
    use crate::types::{CoinSnapshot, PricePoint};

    fn test_config(max_coins: Option<usize>) -> RuntimeConfig {
        RuntimeConfig {
            telegram_token: "token".to_string(),
            telegram_chat_id: "chat".to_string(),
            vs_currency: "usd".to_string(),
            max_coins,
        }
    }

    fn transport(msg: &str) -> FetchFailure {
        FetchFailure::Transport(msg.to_string())
    }

    /// Scripted market feed: fixed trending list plus per-coin failure sets.
    #[derive(Default)]
    struct FakeFeed {
        ids: Vec<String>,
        discovery_fails: bool,
        snapshot_fails: Vec<String>,
        history_fails: Vec<String>,
    }

    impl FakeFeed {
        fn with_ids(ids: &[&str]) -> Self {
            Self {
                ids: ids.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl MarketFeed for FakeFeed {
        async fn trending_ids(&self) -> Result<Vec<String>, DiscoveryError> {
            if self.discovery_fails {
                return Err(DiscoveryError {
                    cause: transport("discovery down"),
                });
            }
            Ok(self.ids.clone())
        }

        async fn snapshot(&self, id: &str) -> Result<CoinSnapshot, MarketDataError> {
            if self.snapshot_fails.iter().any(|s| s == id) {
                return Err(MarketDataError {
                    id: id.to_string(),
                    cause: transport("markets down"),
                });
            }
            Ok(CoinSnapshot {
                id: id.to_string(),
                price: 100.0,
                change_24h: 1.5,
                volume_24h: 50_000.0,
            })
        }

        async fn hourly_series(&self, id: &str) -> Result<Vec<PricePoint>, HistoryDataError> {
            if self.history_fails.iter().any(|s| s == id) {
                return Err(HistoryDataError {
                    id: id.to_string(),
                    cause: transport("chart down"),
                });
            }
            let start = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
            Ok((0..24)
                .map(|i| PricePoint {
                    timestamp: start + Duration::hours(i),
                    price: 100.0 + i as f64,
                })
                .collect())
        }
    }

    /// Recording sink; optionally fails every delivery.
    #[derive(Default)]
    struct FakeSink {
        delivered: Mutex<Vec<String>>,
        no_data_calls: Mutex<usize>,
        fails: bool,
    }

    #[async_trait]
    impl AlertSink for FakeSink {
        async fn notify(&self, report: &CoinReport) -> Result<(), NotificationError> {
            if self.fails {
                return Err(NotificationError {
                    cause: transport("telegram down"),
                });
            }
            self.delivered
                .lock()
                .unwrap()
                .push(report.snapshot.id.clone());
            Ok(())
        }

        async fn notify_no_data(&self) -> Result<(), NotificationError> {
            *self.no_data_calls.lock().unwrap() += 1;
            Ok(())
        }
    }

    #[tokio::test]
    async fn one_history_failure_skips_only_that_coin() {
        let mut feed = FakeFeed::with_ids(&["c1", "c2", "c3", "c4", "c5"]);
        feed.history_fails = vec!["c3".to_string()];
        let sink = FakeSink::default();

        let reports = run(&feed, &sink, &test_config(None)).await;

        let ids: Vec<&str> = reports.iter().map(|r| r.snapshot.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2", "c4", "c5"]);
        assert_eq!(*sink.delivered.lock().unwrap(), vec!["c1", "c2", "c4", "c5"]);
    }

    #[tokio::test]
    async fn snapshot_failure_skips_only_that_coin() {
        let mut feed = FakeFeed::with_ids(&["a", "b"]);
        feed.snapshot_fails = vec!["a".to_string()];
        let sink = FakeSink::default();

        let reports = run(&feed, &sink, &test_config(None)).await;

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].snapshot.id, "b");
    }

    #[tokio::test]
    async fn discovery_failure_ends_the_run_gracefully() {
        let feed = FakeFeed {
            discovery_fails: true,
            ..FakeFeed::default()
        };
        let sink = FakeSink::default();

        let reports = run(&feed, &sink, &test_config(None)).await;

        assert!(reports.is_empty());
        assert_eq!(*sink.no_data_calls.lock().unwrap(), 1);
        assert!(sink.delivered.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_discovery_yields_zero_reports() {
        let feed = FakeFeed::with_ids(&[]);
        let sink = FakeSink::default();

        let reports = run(&feed, &sink, &test_config(None)).await;

        assert!(reports.is_empty());
        assert_eq!(*sink.no_data_calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn delivery_failure_does_not_drop_the_report() {
        let feed = FakeFeed::with_ids(&["c1", "c2"]);
        let sink = FakeSink {
            fails: true,
            ..FakeSink::default()
        };

        let reports = run(&feed, &sink, &test_config(None)).await;

        assert_eq!(reports.len(), 2);
    }

    #[tokio::test]
    async fn coin_cap_truncates_the_trending_list() {
        let feed = FakeFeed::with_ids(&["c1", "c2", "c3", "c4", "c5"]);
        let sink = FakeSink::default();

        let reports = run(&feed, &sink, &test_config(Some(2))).await;

        let ids: Vec<&str> = reports.iter().map(|r| r.snapshot.id.as_str()).collect();
        assert_eq!(ids, vec!["c1", "c2"]);
    }

    #[tokio::test]
    async fn reports_carry_computed_indicators() {
        // The fake feed serves a strictly rising 24-point series, so RSI is
        // pinned at 100 and the MACD diff is positive.
        let feed = FakeFeed::with_ids(&["c1"]);
        let sink = FakeSink::default();

        let reports = run(&feed, &sink, &test_config(None)).await;

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].indicators.rsi, Some(100.0));
        assert!(reports[0].indicators.macd_diff.unwrap() > 0.0);
    }
}
