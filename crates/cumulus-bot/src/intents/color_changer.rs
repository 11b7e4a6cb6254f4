//! Color-change intent consumer.

use crate::colors::{ColorError, ColorResolver};
use crate::error::{AppError, AppResult};
use crate::event::ChatContext;
use crate::intents::IntentConsumer;
use async_trait::async_trait;
use dialogflow_client::QueryResult;
use slack_client::Responder;
use std::sync::Arc;
use tracing::info;

/// Changes the Cumulus lamp color to whatever the user asked for.
pub struct ColorChanger {
    resolver: Arc<ColorResolver>,
}

impl ColorChanger {
    pub fn new(resolver: Arc<ColorResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl IntentConsumer for ColorChanger {
    fn name(&self) -> &'static str {
        "ColorChanger"
    }

    async fn consume(
        &self,
        query_result: &QueryResult,
        _context: &ChatContext,
        respond: &Responder,
    ) -> AppResult<()> {
        if !query_result.all_required_params_present {
            return Err(AppError::IncompleteParameters);
        }

        let desired_color = match query_result.string_param("color") {
            Some(color) if !color.trim().is_empty() => color,
            _ => return Err(ColorError::EmptyQuery.into()),
        };
        info!("Changing color to '{}'", desired_color);

        let color_code = self.resolver.resolve(desired_color).await?;
        respond
            .send(&format!("Changing the color to {}", color_code))
            .await?;

        Ok(())
    }
}
