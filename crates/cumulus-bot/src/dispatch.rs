//! Intent dispatch: maps recognized intents to consumer instances.

use crate::error::{AppError, AppResult};
use crate::event::ChatContext;
use crate::intents::IntentConsumer;
use dialogflow_client::QueryResult;
use regex::Regex;
use slack_client::SlackClient;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, info};

/// Zero-argument factory producing a fresh consumer per dispatch.
pub type ConsumerFactory = Box<dyn Fn() -> Box<dyn IntentConsumer> + Send + Sync>;

/// Intent-id-to-consumer registry.
///
/// Populated once at startup and never mutated afterwards; dispatch
/// itself is a pure read and safe for unlimited concurrent use.
pub struct IntentDispatcher {
    intent_name_pattern: Regex,
    registry: HashMap<String, ConsumerFactory>,
    slack: Arc<SlackClient>,
}

impl IntentDispatcher {
    pub fn new(project_id: &str, slack: Arc<SlackClient>) -> Self {
        let pattern = format!(
            "^projects/{}/agent/intents/(.+)$",
            regex::escape(project_id)
        );

        Self {
            intent_name_pattern: Regex::new(&pattern).expect("intent name pattern"),
            registry: HashMap::new(),
            slack,
        }
    }

    /// Register a consumer factory for an intent id. Startup only.
    pub fn register(&mut self, intent_id: impl Into<String>, factory: ConsumerFactory) {
        self.registry.insert(intent_id.into(), factory);
    }

    /// Route a recognized intent to its consumer.
    ///
    /// Unknown intents are returned to the caller. Failures inside the
    /// consumer are logged and swallowed so that one failing intent
    /// cannot take down the event pipeline.
    pub async fn dispatch(
        &self,
        query_result: &QueryResult,
        context: &ChatContext,
    ) -> AppResult<()> {
        let display_name = query_result
            .intent
            .as_ref()
            .map(|i| i.display_name.clone())
            .unwrap_or_default();

        let intent_id = self.intent_id(query_result);

        let factory = intent_id
            .as_deref()
            .and_then(|id| self.registry.get(id))
            .ok_or_else(|| AppError::UnknownIntent {
                display_name: display_name.clone(),
                intent_id: intent_id.clone().unwrap_or_else(|| {
                    // Fall back to the raw name for diagnostics when the
                    // path template did not match at all.
                    query_result
                        .intent
                        .as_ref()
                        .map(|i| i.name.clone())
                        .unwrap_or_default()
                }),
            })?;

        let consumer = factory();
        info!(
            "Dispatching to {} intent '{}' ({})",
            consumer.name(),
            display_name,
            intent_id.as_deref().unwrap_or("-")
        );

        let responder = self.slack.responder(&context.channel_id)?;
        if let Err(err) = consumer.consume(query_result, context, &responder).await {
            error!(
                "Error in intent consumer {} for intent '{}': {}",
                consumer.name(),
                display_name,
                err
            );
        }

        Ok(())
    }

    /// Trailing path segment of the fully-qualified intent name.
    fn intent_id(&self, query_result: &QueryResult) -> Option<String> {
        let name = &query_result.intent.as_ref()?.name;
        self.intent_name_pattern
            .captures(name)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
    }
}
