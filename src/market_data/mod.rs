// =============================================================================
// Market Data — trending discovery, snapshots, hourly price history
// =============================================================================
//
// The scan loop consumes market data through the `MarketFeed` trait so it can
// be exercised against in-memory fakes. The live implementation is the
// CoinGecko client in `coingecko.rs`.

pub mod coingecko;

use async_trait::async_trait;

use crate::errors::{DiscoveryError, HistoryDataError, MarketDataError};
use crate::types::{CoinSnapshot, PricePoint};

/// Read-only market data source for the scan loop.
#[async_trait]
pub trait MarketFeed: Send + Sync {
    /// Ids of the currently trending coins. No pagination.
    async fn trending_ids(&self) -> Result<Vec<String>, DiscoveryError>;

    /// Current price, 24h change and 24h volume for one coin.
    async fn snapshot(&self, id: &str) -> Result<CoinSnapshot, MarketDataError>;

    /// Trailing 24h of hourly (timestamp, price) samples, oldest first.
    ///
    /// An empty series is a valid "no data" result, distinct from a transport
    /// error.
    async fn hourly_series(&self, id: &str) -> Result<Vec<PricePoint>, HistoryDataError>;
}
