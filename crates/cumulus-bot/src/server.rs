//! Webhook surface: health endpoint and the Slack events route.

use crate::event::EventProcessor;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use slack_client::EventCallback;
use std::sync::Arc;
use tracing::warn;

pub fn build_router(processor: Arc<EventProcessor>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/slack/events", post(slack_events))
        .with_state(processor)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Accept one Slack event callback.
///
/// The callback is acknowledged immediately and the event is processed
/// on its own task; Slack retries on slow responses, so nothing may
/// block the ACK. A failed event is logged and dropped, never
/// reported back to the chat platform.
async fn slack_events(
    State(processor): State<Arc<EventProcessor>>,
    Json(callback): Json<EventCallback>,
) -> Json<Value> {
    if callback.callback_type == "url_verification" {
        return Json(json!({ "challenge": callback.challenge }));
    }

    if let Some(event) = callback.event {
        tokio::spawn(async move {
            if let Err(err) = processor.process(&event).await {
                warn!("Event dropped: {}", err);
            }
        });
    }

    Json(json!({ "ok": true }))
}
