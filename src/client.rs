use std::sync::Arc;

use thiserror::Error;
use url::Url;

use crate::models::{ClassRecord, ClassesResponse};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Malformed class list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for the upstream class booking API.
///
/// The upstream contract is an external integration: the base URL and the
/// bearer token (if the deployment needs one) come from configuration.
#[derive(Clone)]
pub struct YogaApiClient {
    client: reqwest::Client,
    base_url: Arc<Url>,
    auth_token: Option<String>,
}

impl YogaApiClient {
    pub fn new(base_url: Url, auth_token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: Arc::new(base_url),
            auth_token,
        }
    }

    /// Fetch the yoga class list and keep only classes with free spots.
    ///
    /// `Ok(vec![])` means the upstream was reached and nothing is free;
    /// `Err` means availability could not be determined this cycle.
    pub async fn fetch_available_classes(&self) -> Result<Vec<ClassRecord>, FetchError> {
        let url = self
            .base_url
            .join("classes/yoga")
            .expect("relative endpoint path joins onto any base url");

        let mut request = self.client.get(url.as_str());
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?.error_for_status()?;
        let text = response.text().await?;
        let body: ClassesResponse = serde_json::from_str(&text)?;
        Ok(select_available(body.classes))
    }
}

/// Keep the records with at least one free spot, preserving input order.
pub fn select_available(classes: Vec<ClassRecord>) -> Vec<ClassRecord> {
    classes
        .into_iter()
        .filter(|class| class.available_spots > 0)
        .collect()
}
