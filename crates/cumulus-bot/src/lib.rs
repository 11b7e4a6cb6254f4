//! Cumulus Slack bot core: event classification, addressee parsing,
//! color resolution and intent dispatch.

pub mod addressing;
pub mod colors;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod intents;
pub mod server;
