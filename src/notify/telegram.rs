// =============================================================================
// Telegram Notifier — Bot API sendMessage delivery
// =============================================================================
//
// Alerts are posted to a single chat with parse_mode=HTML. The bot token is
// part of the URL path and must never be logged; `Debug` redacts it.

use async_trait::async_trait;
use tracing::debug;

use crate::errors::{FetchFailure, NotificationError};
use crate::notify::{message, AlertSink};
use crate::types::CoinReport;

/// Request timeout applied to every Telegram call (seconds).
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Telegram Bot API client bound to one chat.
#[derive(Clone)]
pub struct TelegramNotifier {
    token: String,
    chat_id: String,
    vs_currency: String,
    client: reqwest::Client,
}

#[derive(Debug, serde::Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
}

impl TelegramNotifier {
    /// Create a notifier for `chat_id`, labelling prices with `vs_currency`.
    pub fn new(
        token: impl Into<String>,
        chat_id: impl Into<String>,
        vs_currency: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("failed to build reqwest client for TelegramNotifier");

        Self {
            token: token.into(),
            chat_id: chat_id.into(),
            vs_currency: vs_currency.into(),
            client,
        }
    }

    /// POST one message to the configured chat.
    async fn send(&self, text: &str) -> Result<(), NotificationError> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.token);
        let request = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
            parse_mode: "HTML",
        };

        let resp = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| NotificationError {
                cause: FetchFailure::Transport(e.to_string()),
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NotificationError {
                cause: FetchFailure::Status {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        Ok(())
    }
}

#[async_trait]
impl AlertSink for TelegramNotifier {
    async fn notify(&self, report: &CoinReport) -> Result<(), NotificationError> {
        let text = message::render(report, &self.vs_currency);
        self.send(&text).await?;
        debug!(coin = %report.snapshot.id, "alert delivered");
        Ok(())
    }

    async fn notify_no_data(&self) -> Result<(), NotificationError> {
        self.send(&message::render_no_data()).await
    }
}

impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("vs_currency", &self.vs_currency)
            .finish()
    }
}
