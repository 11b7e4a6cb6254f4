//! Dialogflow v2 detect-intent client.

mod client;
mod error;
mod types;

pub use client::DialogflowClient;
pub use error::DialogflowError;
pub use types::*;
