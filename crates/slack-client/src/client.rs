//! Slack Web API HTTP client.

use crate::error::SlackError;
use crate::types::PostMessageResponse;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

/// Slack Web API client bound to one bot credential token.
///
/// The token is stored as a `SecretString` so it never shows up in
/// debug output or logs.
#[derive(Clone)]
pub struct SlackClient {
    client: Client,
    base_url: String,
    token: SecretString,
}

impl SlackClient {
    /// Create a new Slack client.
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SlackError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token: SecretString::new(token.into()),
        })
    }

    /// Post one text message to a channel.
    #[instrument(skip(self, message))]
    pub async fn send_message(
        &self,
        channel: &str,
        message: &str,
    ) -> Result<PostMessageResponse, SlackError> {
        if channel.trim().is_empty() {
            return Err(SlackError::EmptyChannel);
        }
        if message.trim().is_empty() {
            return Err(SlackError::EmptyMessage);
        }

        let response = self
            .client
            .post(format!("{}/chat.postMessage", self.base_url))
            .query(&[
                ("channel", channel),
                ("token", self.token.expose_secret().as_str()),
                ("text", message),
            ])
            .send()
            .await?;

        let body: PostMessageResponse = response.json().await?;
        info!("Slack response: {:?}", body);

        if !body.ok {
            return Err(SlackError::Api(
                body.error.clone().unwrap_or_else(|| "unknown error".into()),
            ));
        }

        Ok(body)
    }

    /// Bind a channel once, yielding a reusable respond capability.
    pub fn responder(
        self: &Arc<Self>,
        channel: impl Into<String>,
    ) -> Result<Responder, SlackError> {
        let channel_id = channel.into();
        if channel_id.trim().is_empty() {
            return Err(SlackError::EmptyChannel);
        }

        Ok(Responder {
            client: Arc::clone(self),
            channel_id,
        })
    }
}

/// Respond capability bound to a single channel.
#[derive(Clone)]
pub struct Responder {
    client: Arc<SlackClient>,
    channel_id: String,
}

impl Responder {
    /// The channel this responder posts to.
    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// Send one message to the bound channel.
    pub async fn send(&self, message: &str) -> Result<PostMessageResponse, SlackError> {
        self.client.send_message(&self.channel_id, message).await
    }
}
