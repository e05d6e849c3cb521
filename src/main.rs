// =============================================================================
// Trend Sentinel — Main Entry Point
// =============================================================================
//
// One-shot batch job: discover trending coins on CoinGecko, compute RSI and
// MACD over each coin's hourly history, deliver one Telegram alert per coin,
// exit. Scheduling is external (cron or similar). Every failure is logged and
// contained, so the exit code is always 0 and a scheduler never sees a
// partial run as fatal.

// ── Module declarations ──────────────────────────────────────────────────────
mod errors;
mod indicators;
mod market_data;
mod notify;
mod runtime_config;
mod scanner;
mod types;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::market_data::coingecko::CoinGeckoClient;
use crate::notify::telegram::TelegramNotifier;
use crate::runtime_config::RuntimeConfig;

#[tokio::main]
async fn main() {
    // ── 1. Environment & logging ─────────────────────────────────────────
    let _ = dotenv::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("╔══════════════════════════════════════════════════════════╗");
    info!("║           Trend Sentinel — Starting Scan                ║");
    info!("╚══════════════════════════════════════════════════════════╝");

    // ── 2. Configuration ─────────────────────────────────────────────────
    let config = match RuntimeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration — aborting run");
            return;
        }
    };

    info!(
        vs_currency = %config.vs_currency,
        max_coins = ?config.max_coins,
        "configuration loaded"
    );

    // ── 3. Collaborators ─────────────────────────────────────────────────
    let feed = CoinGeckoClient::new(&config.vs_currency);
    let sink = TelegramNotifier::new(
        &config.telegram_token,
        &config.telegram_chat_id,
        &config.vs_currency,
    );

    // ── 4. One scan, then exit ───────────────────────────────────────────
    let reports = scanner::run(&feed, &sink, &config).await;

    info!(reports = reports.len(), "run finished");
}
