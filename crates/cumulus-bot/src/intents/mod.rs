//! Intent consumers.

mod color_changer;

pub use color_changer::ColorChanger;

use crate::error::AppResult;
use crate::event::ChatContext;
use async_trait::async_trait;
use dialogflow_client::QueryResult;
use slack_client::Responder;

/// One intent's handler.
///
/// Instances are constructed fresh per dispatch, hold no mutable
/// state and are never pooled.
#[async_trait]
pub trait IntentConsumer: Send + Sync {
    /// Consumer name used in dispatch logging.
    fn name(&self) -> &'static str;

    /// Handle a recognized intent, replying through `respond`.
    async fn consume(
        &self,
        query_result: &QueryResult,
        context: &ChatContext,
        respond: &Responder,
    ) -> AppResult<()>;
}
