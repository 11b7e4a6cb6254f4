//! Application error types.

use crate::colors::ColorError;
use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("unsupported event type: {0}")]
    InvalidEventType(String),

    #[error("bot messages are not served here")]
    BotMessageRejected,

    #[error("message is not addressed to the bot")]
    NotAddressed,

    #[error("chat event is missing user, channel or text")]
    MissingChatContext,

    #[error("NLU response carried no query result")]
    MissingIntentResult,

    #[error("unknown intent '{display_name}' ({intent_id})")]
    UnknownIntent {
        display_name: String,
        intent_id: String,
    },

    #[error("not all required intent parameters are present")]
    IncompleteParameters,

    #[error("Slack error: {0}")]
    Slack(#[from] slack_client::SlackError),

    #[error("Dialogflow error: {0}")]
    Dialogflow(#[from] dialogflow_client::DialogflowError),

    #[error("Color resolution error: {0}")]
    Color(#[from] ColorError),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
