// =============================================================================
// Notifications — rendering and delivering per-coin alerts
// =============================================================================
//
// The scan loop hands each finished `CoinReport` to an `AlertSink`. The live
// sink is the Telegram client in `telegram.rs`; `message.rs` owns the fixed
// alert template. Delivery failures are logged by the caller and never stop
// the run.

pub mod message;
pub mod telegram;

use async_trait::async_trait;

use crate::errors::NotificationError;
use crate::types::CoinReport;

/// Delivery target for finished reports.
#[async_trait]
pub trait AlertSink: Send + Sync {
    /// Deliver one per-coin alert.
    async fn notify(&self, report: &CoinReport) -> Result<(), NotificationError>;

    /// Deliver the single "no trending coins found" marker message.
    async fn notify_no_data(&self) -> Result<(), NotificationError>;
}
