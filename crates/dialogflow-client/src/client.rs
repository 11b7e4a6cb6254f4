//! Dialogflow REST HTTP client.

use crate::error::DialogflowError;
use crate::types::*;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Dialogflow detect-intent client bound to one agent project.
///
/// A fresh session id is generated per request; the bot keeps no
/// conversation state of its own.
#[derive(Clone)]
pub struct DialogflowClient {
    client: Client,
    base_url: String,
    project_id: String,
    language_code: String,
    access_token: SecretString,
}

impl DialogflowClient {
    /// Create a new Dialogflow client.
    pub fn new(
        access_token: impl Into<String>,
        base_url: impl Into<String>,
        project_id: impl Into<String>,
        language_code: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, DialogflowError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            project_id: project_id.into(),
            language_code: language_code.into(),
            access_token: SecretString::new(access_token.into()),
        })
    }

    /// The configured agent project id.
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Resolve free text to an intent.
    #[instrument(skip(self, text))]
    pub async fn detect_intent(&self, text: &str) -> Result<DetectIntentResponse, DialogflowError> {
        let session_id = Uuid::new_v4();
        let request = DetectIntentRequest {
            query_input: QueryInput {
                text: TextInput {
                    text: text.to_string(),
                    language_code: self.language_code.clone(),
                },
            },
        };

        let response = self
            .client
            .post(format!(
                "{}/projects/{}/agent/sessions/{}:detectIntent",
                self.base_url, self.project_id, session_id
            ))
            .header(
                "Authorization",
                format!("Bearer {}", self.access_token.expose_secret()),
            )
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = response.text().await.unwrap_or_default();
            return Err(DialogflowError::Api(msg));
        }

        let body: DetectIntentResponse = response.json().await?;
        debug!("Detected intent for session {}", session_id);
        Ok(body)
    }
}
