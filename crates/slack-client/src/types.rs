//! Slack Web API and Events API types.

use serde::Deserialize;

/// Outer envelope delivered to the events webhook.
#[derive(Debug, Clone, Deserialize)]
pub struct EventCallback {
    #[serde(rename = "type")]
    pub callback_type: String,
    /// Present only for `url_verification` callbacks.
    pub challenge: Option<String>,
    /// Present only for `event_callback` callbacks.
    pub event: Option<ChatEvent>,
}

/// Inner chat event.
///
/// Slack omits `user`, `channel` and `text` for several event
/// subtypes, so all addressing fields are optional at the wire level.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub subtype: Option<String>,
    pub user: Option<String>,
    pub channel: Option<String>,
    pub text: Option<String>,
}

/// `chat.postMessage` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageResponse {
    pub ok: bool,
    pub error: Option<String>,
    pub ts: Option<String>,
}
