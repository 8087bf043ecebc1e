use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub api_base_url: Url,
    pub api_auth_token: Option<String>,
    pub email_user: String,
    pub email_pass: String,
    pub notify_email: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub check_interval_secs: u64,
    pub debug: bool,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // Plain environment variables: API_BASE_URL, EMAIL_USER, ...
            .add_source(Environment::default())
            .set_default("email_user", "")?
            .set_default("email_pass", "")?
            .set_default("notify_email", "")?
            .set_default("smtp_host", "smtp.gmail.com")?
            .set_default("smtp_port", 587)?
            .set_default("check_interval_secs", 300)?
            .set_default("debug", false)?
            .build()?;

        config.try_deserialize()
    }

    /// True when both a sender and a recipient address are present.
    pub fn email_configured(&self) -> bool {
        !self.email_user.is_empty() && !self.notify_email.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn clear_env() {
        for key in [
            "API_BASE_URL",
            "API_AUTH_TOKEN",
            "EMAIL_USER",
            "EMAIL_PASS",
            "NOTIFY_EMAIL",
            "SMTP_HOST",
            "SMTP_PORT",
            "CHECK_INTERVAL_SECS",
            "DEBUG",
        ] {
            unsafe { std::env::remove_var(key) };
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        unsafe { std::env::set_var("API_BASE_URL", "https://api.example.com") };

        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.api_base_url.as_str(), "https://api.example.com/");
        assert_eq!(settings.smtp_host, "smtp.gmail.com");
        assert_eq!(settings.smtp_port, 587);
        assert_eq!(settings.check_interval_secs, 300);
        assert!(!settings.debug);
        assert!(!settings.email_configured());
    }

    #[test]
    #[serial]
    fn test_from_env_missing_base_url() {
        clear_env();
        assert!(Settings::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_email_configured_requires_both_addresses() {
        clear_env();
        unsafe {
            std::env::set_var("API_BASE_URL", "https://api.example.com");
            std::env::set_var("EMAIL_USER", "sender@example.com");
        }

        let settings = Settings::from_env().unwrap();
        assert!(!settings.email_configured());

        unsafe { std::env::set_var("NOTIFY_EMAIL", "me@example.com") };
        let settings = Settings::from_env().unwrap();
        assert!(settings.email_configured());
    }
}
