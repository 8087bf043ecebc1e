use std::fmt::Write as _;

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use crate::models::ClassRecord;
use crate::settings::Settings;

const SUBJECT: &str = "🧘 Yoga Classes Available!";

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Email not configured: sender and recipient are both required")]
    NotConfigured,
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("Email build error: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Sends the availability email over STARTTLS-upgraded SMTP.
#[derive(Clone)]
pub struct EmailNotifier {
    smtp_host: String,
    smtp_port: u16,
    email_user: String,
    email_pass: String,
    notify_email: String,
}

impl EmailNotifier {
    pub fn new(settings: &Settings) -> Self {
        Self {
            smtp_host: settings.smtp_host.clone(),
            smtp_port: settings.smtp_port,
            email_user: settings.email_user.clone(),
            email_pass: settings.email_pass.clone(),
            notify_email: settings.notify_email.clone(),
        }
    }

    /// Send one notification email enumerating the given classes.
    ///
    /// Returns `NotConfigured` without opening a connection when the sender
    /// or recipient address is missing.
    pub async fn send(&self, classes: &[ClassRecord]) -> Result<(), NotifyError> {
        if self.email_user.is_empty() || self.notify_email.is_empty() {
            return Err(NotifyError::NotConfigured);
        }

        let email = Message::builder()
            .from(self.email_user.parse()?)
            .to(self.notify_email.parse()?)
            .subject(SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(compose_body(classes))?;

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.smtp_host)?
            .port(self.smtp_port)
            .credentials(Credentials::new(
                self.email_user.clone(),
                self.email_pass.clone(),
            ))
            .build();

        mailer.send(email).await?;
        tracing::info!(to = %self.notify_email, classes = classes.len(), "Notification email sent");
        Ok(())
    }
}

/// Plain-text body: one bullet line per class, input order preserved.
pub fn compose_body(classes: &[ClassRecord]) -> String {
    let mut body = String::from("Available yoga classes:\n\n");
    for class in classes {
        let _ = writeln!(
            body,
            "• {} - {} at {} ({} spots)",
            class.name, class.date, class.time, class.available_spots
        );
    }
    body
}
