//! Image search HTTP client.

use crate::error::ImageSearchError;
use crate::types::*;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument};

/// Bing-style image search client.
#[derive(Clone)]
pub struct ImageSearchClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl ImageSearchClient {
    /// Create a new image search client.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ImageSearchError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: SecretString::new(api_key.into()),
        })
    }

    /// Search for images, returning results in search-ranked order.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        query: &str,
        count: usize,
    ) -> Result<Vec<ImageResult>, ImageSearchError> {
        let count = count.to_string();
        let response = self
            .client
            .get(format!("{}/images/search", self.base_url))
            .query(&[("q", query), ("count", count.as_str())])
            .header(
                "Ocp-Apim-Subscription-Key",
                self.api_key.expose_secret().as_str(),
            )
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            return Err(ImageSearchError::Api(msg));
        }

        let body: ImageSearchResponse = response.json().await?;
        debug!("Image search returned {} results", body.value.len());
        Ok(body.value)
    }
}
