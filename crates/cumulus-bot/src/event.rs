//! Inbound event classification and the per-event processing pipeline.

use crate::addressing::extract_command;
use crate::dispatch::IntentDispatcher;
use crate::error::{AppError, AppResult};
use dialogflow_client::DialogflowClient;
use slack_client::ChatEvent;
use std::sync::Arc;
use tracing::info;

const MESSAGE_TYPE: &str = "message";
const BOT_MESSAGE_SUBTYPE: &str = "bot_message";

/// Check that an event is a genuine user message.
///
/// Bot echoes are rejected to prevent feedback loops; non-message
/// events (reactions, channel joins) are filtered out before any
/// network call is made.
pub fn validate(event: &ChatEvent) -> AppResult<()> {
    if event.event_type != MESSAGE_TYPE {
        return Err(AppError::InvalidEventType(event.event_type.clone()));
    }
    if event.subtype.as_deref() == Some(BOT_MESSAGE_SUBTYPE) {
        return Err(AppError::BotMessageRejected);
    }
    Ok(())
}

/// Minimal addressing information threaded through dispatch.
/// Immutable once constructed, scoped to one event.
#[derive(Debug, Clone)]
pub struct ChatContext {
    pub user_id: String,
    pub channel_id: String,
    pub text: String,
}

impl ChatContext {
    /// Build a context from a chat event; all three addressing fields
    /// must be present.
    pub fn from_event(event: &ChatEvent) -> AppResult<Self> {
        match (&event.user, &event.channel, &event.text) {
            (Some(user), Some(channel), Some(text)) => Ok(Self {
                user_id: user.clone(),
                channel_id: channel.clone(),
                text: text.clone(),
            }),
            _ => Err(AppError::MissingChatContext),
        }
    }
}

/// Runs one inbound event through classification, addressing, NLU and
/// intent dispatch.
pub struct EventProcessor {
    dialogflow: Arc<DialogflowClient>,
    dispatcher: IntentDispatcher,
}

impl EventProcessor {
    pub fn new(dialogflow: Arc<DialogflowClient>, dispatcher: IntentDispatcher) -> Self {
        Self {
            dialogflow,
            dispatcher,
        }
    }

    /// Process a single chat event end to end.
    ///
    /// Any error aborts this event only; no reply is sent on failure
    /// and the caller decides how to log it.
    pub async fn process(&self, event: &ChatEvent) -> AppResult<()> {
        validate(event)?;

        let context = ChatContext::from_event(event)?;
        info!(
            user = %context.user_id,
            channel = %context.channel_id,
            "Processing message event"
        );

        let command = extract_command(&context.text)?;

        let response = self.dialogflow.detect_intent(&command).await?;
        let query_result = response
            .query_result
            .ok_or(AppError::MissingIntentResult)?;

        self.dispatcher.dispatch(&query_result, &context).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(event_type: &str, subtype: Option<&str>) -> ChatEvent {
        serde_json::from_value(serde_json::json!({
            "type": event_type,
            "subtype": subtype,
            "user": "U2147483697",
            "channel": "C024BE91L",
            "text": "bot hello"
        }))
        .unwrap()
    }

    #[test]
    fn accepts_plain_user_message() {
        assert!(validate(&event("message", None)).is_ok());
    }

    #[test]
    fn rejects_bot_echo() {
        assert!(matches!(
            validate(&event("message", Some("bot_message"))),
            Err(AppError::BotMessageRejected)
        ));
    }

    #[test]
    fn rejects_non_message_events() {
        assert!(matches!(
            validate(&event("emoji_changed", None)),
            Err(AppError::InvalidEventType(ref t)) if t == "emoji_changed"
        ));
    }

    #[test]
    fn accepts_other_subtypes() {
        assert!(validate(&event("message", Some("message_changed"))).is_ok());
    }

    #[test]
    fn context_requires_all_addressing_fields() {
        let incomplete: ChatEvent = serde_json::from_value(serde_json::json!({
            "type": "message",
            "channel": "C024BE91L"
        }))
        .unwrap();

        assert!(matches!(
            ChatContext::from_event(&incomplete),
            Err(AppError::MissingChatContext)
        ));

        let complete = event("message", None);
        let context = ChatContext::from_event(&complete).unwrap();
        assert_eq!(context.user_id, "U2147483697");
        assert_eq!(context.channel_id, "C024BE91L");
        assert_eq!(context.text, "bot hello");
    }
}
