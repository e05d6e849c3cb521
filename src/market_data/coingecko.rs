// =============================================================================
// CoinGecko REST API Client — public endpoints, no authentication
// =============================================================================
//
// Three endpoints back the scan:
//   GET /api/v3/search/trending          — trending coin ids
//   GET /api/v3/coins/markets            — price / 24h change / 24h volume
//   GET /api/v3/coins/{id}/market_chart  — hourly price history, trailing day
//
// The HTTP status is checked before the body is parsed. A missing or empty
// `prices` array in the market chart is "no data", not an error.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::{DiscoveryError, FetchFailure, HistoryDataError, MarketDataError};
use crate::market_data::MarketFeed;
use crate::types::{CoinSnapshot, PricePoint};

/// Request timeout applied to every CoinGecko call (seconds).
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// CoinGecko REST client bound to one quote currency.
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    base_url: String,
    vs_currency: String,
    client: reqwest::Client,
}

// -----------------------------------------------------------------------------
// Wire types
// -----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TrendingResponse {
    #[serde(default)]
    coins: Vec<TrendingEntry>,
}

#[derive(Debug, Deserialize)]
struct TrendingEntry {
    item: TrendingItem,
}

#[derive(Debug, Deserialize)]
struct TrendingItem {
    id: String,
}

/// One row of the /coins/markets response. Numeric fields are nullable for
/// thinly traded coins.
#[derive(Debug, Deserialize)]
struct MarketRow {
    current_price: Option<f64>,
    price_change_percentage_24h: Option<f64>,
    total_volume: Option<f64>,
}

/// The /market_chart response: `prices` is an array of [ms_timestamp, price]
/// pairs, oldest first.
#[derive(Debug, Deserialize)]
struct MarketChart {
    #[serde(default)]
    prices: Vec<(f64, f64)>,
}

// -----------------------------------------------------------------------------
// Client
// -----------------------------------------------------------------------------

impl CoinGeckoClient {
    /// Create a client against the public API.
    pub fn new(vs_currency: impl Into<String>) -> Self {
        Self::with_base_url("https://api.coingecko.com", vs_currency)
    }

    /// Create a client against a non-default base URL.
    pub fn with_base_url(base_url: impl Into<String>, vs_currency: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("failed to build reqwest client for CoinGeckoClient");

        Self {
            base_url: base_url.into(),
            vs_currency: vs_currency.into(),
            client,
        }
    }

    /// GET `url` and deserialize the JSON body after checking the status.
    async fn get_json<T>(&self, url: &str) -> Result<T, FetchFailure>
    where
        T: serde::de::DeserializeOwned,
    {
        let resp = self.client.get(url).send().await.map_err(FetchFailure::from)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchFailure::Status {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| FetchFailure::Malformed(e.to_string()))
    }
}

#[async_trait]
impl MarketFeed for CoinGeckoClient {
    async fn trending_ids(&self) -> Result<Vec<String>, DiscoveryError> {
        let url = format!("{}/api/v3/search/trending", self.base_url);

        let resp: TrendingResponse = self
            .get_json(&url)
            .await
            .map_err(|cause| DiscoveryError { cause })?;

        let ids: Vec<String> = resp.coins.into_iter().map(|c| c.item.id).collect();
        debug!(count = ids.len(), "trending ids fetched");
        Ok(ids)
    }

    async fn snapshot(&self, id: &str) -> Result<CoinSnapshot, MarketDataError> {
        let url = format!(
            "{}/api/v3/coins/markets?vs_currency={}&ids={}",
            self.base_url, self.vs_currency, id
        );

        let rows: Vec<MarketRow> = self.get_json(&url).await.map_err(|cause| MarketDataError {
            id: id.to_string(),
            cause,
        })?;

        let row = rows.into_iter().next().ok_or_else(|| MarketDataError {
            id: id.to_string(),
            cause: FetchFailure::Malformed("empty markets response".to_string()),
        })?;

        debug!(coin = %id, price = ?row.current_price, "snapshot fetched");

        Ok(CoinSnapshot {
            id: id.to_string(),
            price: row.current_price.unwrap_or(0.0),
            change_24h: row.price_change_percentage_24h.unwrap_or(0.0),
            volume_24h: row.total_volume.unwrap_or(0.0),
        })
    }

    async fn hourly_series(&self, id: &str) -> Result<Vec<PricePoint>, HistoryDataError> {
        let url = format!(
            "{}/api/v3/coins/{}/market_chart?vs_currency={}&days=1&interval=hourly",
            self.base_url, id, self.vs_currency
        );

        let chart: MarketChart = self.get_json(&url).await.map_err(|cause| HistoryDataError {
            id: id.to_string(),
            cause,
        })?;

        let series: Vec<PricePoint> = chart
            .prices
            .iter()
            .map(|&(ms, price)| PricePoint {
                timestamp: DateTime::from_timestamp_millis(ms as i64)
                    .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
                price,
            })
            .collect();

        if series.is_empty() {
            warn!(coin = %id, "market chart returned no hourly prices");
        }
        debug!(coin = %id, samples = series.len(), "hourly series fetched");
        Ok(series)
    }
}
