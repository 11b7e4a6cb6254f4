//! Cumulus Slack bot - main entry point.

use anyhow::Context;
use cumulus_bot::colors::ColorResolver;
use cumulus_bot::config::Config;
use cumulus_bot::dispatch::IntentDispatcher;
use cumulus_bot::error::AppResult;
use cumulus_bot::event::EventProcessor;
use cumulus_bot::intents::ColorChanger;
use cumulus_bot::server::build_router;
use dialogflow_client::DialogflowClient;
use image_search_client::ImageSearchClient;
use slack_client::SlackClient;
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vision_client::VisionClient;

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.bot.log_level);

    info!("Starting Cumulus Slack bot...");

    // Initialize clients
    let slack = Arc::new(
        SlackClient::new(
            &config.slack.base_url,
            &config.slack.bot_user_token,
            config.slack.timeout,
        )
        .context("Failed to create Slack client")?,
    );

    let dialogflow = Arc::new(
        DialogflowClient::new(
            &config.dialogflow.access_token,
            &config.dialogflow.base_url,
            &config.dialogflow.project_id,
            &config.dialogflow.language_code,
            config.dialogflow.timeout,
        )
        .context("Failed to create Dialogflow client")?,
    );

    let image_search = Arc::new(
        ImageSearchClient::new(
            &config.image_search.api_key,
            &config.image_search.base_url,
            config.image_search.timeout,
        )
        .context("Failed to create image search client")?,
    );

    let vision = Arc::new(
        VisionClient::new(
            &config.vision.api_key,
            &config.vision.base_url,
            config.vision.timeout,
        )
        .context("Failed to create vision client")?,
    );

    let resolver = Arc::new(ColorResolver::new(image_search, vision));

    // Register intent consumers
    let mut dispatcher = IntentDispatcher::new(&config.dialogflow.project_id, slack);
    {
        let resolver = resolver.clone();
        dispatcher.register(
            config.dialogflow.intent_id_change_color.clone(),
            Box::new(move || Box::new(ColorChanger::new(resolver.clone()))),
        );
    }
    info!(
        "Registered color-change intent '{}'",
        config.dialogflow.intent_id_change_color
    );

    let processor = Arc::new(EventProcessor::new(dialogflow, dispatcher));

    // Start webhook server
    let listener = tokio::net::TcpListener::bind(&config.bot.listen_addr)
        .await
        .context("Failed to bind listen address")?;
    info!("Listening on {}", config.bot.listen_addr);

    axum::serve(listener, build_router(processor))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    info!("Shutdown signal received");
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
