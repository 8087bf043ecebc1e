pub mod client;
pub mod models;
pub mod monitor;
pub mod notifier;
pub mod settings;

use std::time::Duration;

use tracing::{info, warn};

use crate::client::YogaApiClient;
use crate::models::ClassRecord;
use crate::monitor::Monitor;
use crate::notifier::EmailNotifier;
use crate::settings::Settings;

/// Program mode selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One check-and-notify cycle (the default).
    Once,
    /// Repeat cycles on the configured interval until killed.
    Watch,
    /// Send a notification built from sample data to verify SMTP settings.
    TestNotify,
}

impl Mode {
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Self {
        match args.nth(1).as_deref() {
            Some("watch") => Mode::Watch,
            Some("test-notify") => Mode::TestNotify,
            _ => Mode::Once,
        }
    }
}

pub async fn run(mode: Mode) -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    let env_filter = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let client = YogaApiClient::new(
        settings.api_base_url.clone(),
        settings.api_auth_token.clone(),
    );
    let notifier = EmailNotifier::new(&settings);
    let monitor = Monitor::new(client, notifier.clone());

    match mode {
        Mode::Once => monitor.run_check().await,
        Mode::Watch => {
            monitor
                .run_continuously(Duration::from_secs(settings.check_interval_secs))
                .await
        }
        Mode::TestNotify => test_notify(&settings, &notifier).await,
    }

    Ok(())
}

/// Sample classes used by the `test-notify` mode.
pub fn sample_classes() -> Vec<ClassRecord> {
    vec![
        ClassRecord {
            name: "Hatha Yoga".to_string(),
            date: "2024-01-15".to_string(),
            time: "18:00".to_string(),
            available_spots: 3,
        },
        ClassRecord {
            name: "Vinyasa Flow".to_string(),
            date: "2024-01-15".to_string(),
            time: "19:30".to_string(),
            available_spots: 1,
        },
    ]
}

/// Send a notification from sample data so an operator can verify SMTP
/// configuration without waiting for real availability.
async fn test_notify(settings: &Settings, notifier: &EmailNotifier) {
    let classes = sample_classes();
    for class in &classes {
        info!(
            name = %class.name,
            date = %class.date,
            time = %class.time,
            spots = class.available_spots,
            "Sample class"
        );
    }

    match notifier.send(&classes).await {
        Ok(()) => info!("Notification test completed successfully"),
        Err(err) => {
            warn!(error = %err, "Notification test failed");
            warn!(
                email_configured = settings.email_configured(),
                "Set EMAIL_USER, EMAIL_PASS and NOTIFY_EMAIL (via .env or environment) and rerun"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_args_default() {
        let args = ["yoga-monitor".to_string()];
        assert_eq!(Mode::from_args(args.into_iter()), Mode::Once);
    }

    #[test]
    fn test_mode_from_args_watch() {
        let args = ["yoga-monitor".to_string(), "watch".to_string()];
        assert_eq!(Mode::from_args(args.into_iter()), Mode::Watch);
    }

    #[test]
    fn test_mode_from_args_test_notify() {
        let args = ["yoga-monitor".to_string(), "test-notify".to_string()];
        assert_eq!(Mode::from_args(args.into_iter()), Mode::TestNotify);
    }

    #[test]
    fn test_mode_from_args_unknown_falls_back_to_once() {
        let args = ["yoga-monitor".to_string(), "bogus".to_string()];
        assert_eq!(Mode::from_args(args.into_iter()), Mode::Once);
    }
}
