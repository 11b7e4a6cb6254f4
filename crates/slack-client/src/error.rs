//! Slack client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlackError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("channel must not be empty")]
    EmptyChannel,

    #[error("message must not be empty")]
    EmptyMessage,

    #[error("Slack API error: {0}")]
    Api(String),
}
