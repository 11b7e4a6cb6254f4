//! Vision annotation HTTP client.

use crate::error::VisionError;
use crate::types::*;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument};

const IMAGE_PROPERTIES_FEATURE: &str = "IMAGE_PROPERTIES";

/// Vision analysis client.
#[derive(Clone)]
pub struct VisionClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl VisionClient {
    /// Create a new vision client.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, VisionError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: SecretString::new(api_key.into()),
        })
    }

    /// Request dominant-color properties for a batch of image URLs.
    ///
    /// One HTTP call per batch; responses come back in request order,
    /// one per URL, each with its own success or error status.
    #[instrument(skip(self, image_urls), fields(image_count = image_urls.len()))]
    pub async fn analyze_dominant_colors(
        &self,
        image_urls: &[String],
    ) -> Result<Vec<AnnotateImageResponse>, VisionError> {
        let request = BatchAnnotateRequest {
            requests: image_urls
                .iter()
                .map(|url| AnnotateImageRequest {
                    image: Image {
                        source: ImageSource {
                            image_uri: url.clone(),
                        },
                    },
                    features: vec![Feature {
                        feature_type: IMAGE_PROPERTIES_FEATURE.to_string(),
                        max_results: 1,
                    }],
                })
                .collect(),
        };

        let response = self
            .client
            .post(format!("{}/v1/images:annotate", self.base_url))
            .query(&[("key", self.api_key.expose_secret())])
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            return Err(VisionError::Api(msg));
        }

        let body: BatchAnnotateResponse = response.json().await?;
        debug!("Vision batch returned {} responses", body.responses.len());
        Ok(body.responses)
    }
}
