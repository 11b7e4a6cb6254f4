//! Application configuration loaded from environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Slack configuration
    pub slack: SlackConfig,

    /// Dialogflow configuration
    pub dialogflow: DialogflowConfig,

    /// Image search configuration
    pub image_search: ImageSearchConfig,

    /// Vision analysis configuration
    pub vision: VisionConfig,

    /// Bot configuration
    #[serde(default)]
    pub bot: BotConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SlackConfig {
    /// Bot user OAuth token
    pub bot_user_token: String,

    /// Slack Web API base URL
    #[serde(default = "default_slack_url")]
    pub base_url: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DialogflowConfig {
    /// Dialogflow agent project id
    pub project_id: String,

    /// OAuth access token for the Dialogflow REST API
    pub access_token: String,

    /// Intent id of the color-change intent
    pub intent_id_change_color: String,

    /// API base URL
    #[serde(default = "default_dialogflow_url")]
    pub base_url: String,

    /// Query language
    #[serde(default = "default_language_code")]
    pub language_code: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageSearchConfig {
    /// Subscription key for the image search API
    pub api_key: String,

    /// API base URL
    #[serde(default = "default_image_search_url")]
    pub base_url: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisionConfig {
    /// API key for the vision service
    pub api_key: String,

    /// API base URL
    #[serde(default = "default_vision_url")]
    pub base_url: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Webhook listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            listen_addr: default_listen_addr(),
        }
    }
}

// Default value functions
fn default_slack_url() -> String {
    "https://slack.com/api".into()
}

fn default_dialogflow_url() -> String {
    "https://dialogflow.googleapis.com/v2".into()
}

fn default_image_search_url() -> String {
    "https://api.bing.microsoft.com/v7.0".into()
}

fn default_vision_url() -> String {
    "https://vision.googleapis.com".into()
}

fn default_language_code() -> String {
    "en".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_log_level() -> String {
    "info".into()
}

fn default_listen_addr() -> String {
    "0.0.0.0:8080".into()
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    // Tokens and ids must stay strings.
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
