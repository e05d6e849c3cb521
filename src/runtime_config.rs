// =============================================================================
// Runtime Configuration — environment-driven, loaded once at startup
// =============================================================================
//
// All settings come from the environment (optionally via a .env file loaded
// in main). The struct is built once before the run, stays immutable for the
// run's duration and is passed by reference into the collaborators.
//
//   TELEGRAM_TOKEN    — bot token used for alert delivery (required)
//   TELEGRAM_CHAT_ID  — chat that receives the alerts (required)
//   VS_CURRENCY       — quote/display currency (default "usd")
//   MAX_COINS         — optional cap on coins analyzed per run; unset means
//                       every discovered coin is processed

use anyhow::{Context, Result};

/// Immutable settings for one scan run.
#[derive(Clone)]
pub struct RuntimeConfig {
    /// Telegram bot token. Never logged.
    pub telegram_token: String,
    /// Telegram chat id that receives the alerts.
    pub telegram_chat_id: String,
    /// Quote currency for prices and display labels.
    pub vs_currency: String,
    /// Optional per-run cap on the number of trending coins analyzed.
    pub max_coins: Option<usize>,
}

impl RuntimeConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let telegram_token =
            std::env::var("TELEGRAM_TOKEN").context("TELEGRAM_TOKEN must be set")?;
        let telegram_chat_id =
            std::env::var("TELEGRAM_CHAT_ID").context("TELEGRAM_CHAT_ID must be set")?;

        let vs_currency = std::env::var("VS_CURRENCY")
            .map(|c| c.trim().to_lowercase())
            .unwrap_or_else(|_| "usd".to_string());

        let max_coins = match std::env::var("MAX_COINS") {
            Ok(raw) => Some(raw.trim().parse::<usize>().with_context(|| {
                format!("MAX_COINS must be a non-negative integer, got '{raw}'")
            })?),
            Err(_) => None,
        };

        Ok(Self {
            telegram_token,
            telegram_chat_id,
            vs_currency,
            max_coins,
        })
    }
}

impl std::fmt::Debug for RuntimeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeConfig")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("vs_currency", &self.vs_currency)
            .field("max_coins", &self.max_coins)
            .finish()
    }
}
