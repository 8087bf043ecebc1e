use std::time::Duration;

use chrono::Local;
use tracing::{error, info};

use crate::client::YogaApiClient;
use crate::notifier::EmailNotifier;

/// One fetch-filter-notify pass is the unit of work; the continuous mode just
/// repeats it with a fixed pause in between.
pub struct Monitor {
    client: YogaApiClient,
    notifier: EmailNotifier,
}

impl Monitor {
    pub fn new(client: YogaApiClient, notifier: EmailNotifier) -> Self {
        Self { client, notifier }
    }

    /// Run a single check cycle. Fetch and notify failures are logged and
    /// recovered here; nothing propagates.
    pub async fn run_check(&self) {
        info!(at = %Local::now().format("%Y-%m-%d %H:%M:%S"), "Checking for available yoga classes");

        let available = match self.client.fetch_available_classes().await {
            Ok(classes) => classes,
            Err(err) => {
                error!(error = %err, "Failed to check classes");
                return;
            }
        };

        if available.is_empty() {
            info!("No available classes found");
            return;
        }

        info!(count = available.len(), "Found available classes");
        if let Err(err) = self.notifier.send(&available).await {
            error!(error = %err, "Failed to send notification");
        }
    }

    /// Check forever, sleeping `interval` between cycles. Strictly
    /// sequential: the pause starts only after a cycle fully completes.
    pub async fn run_continuously(&self, interval: Duration) {
        info!(interval_secs = interval.as_secs(), "Starting continuous monitoring");
        loop {
            self.run_check().await;
            tokio::time::sleep(interval).await;
        }
    }
}
