//! Image search API client.

mod client;
mod error;
mod types;

pub use client::ImageSearchClient;
pub use error::ImageSearchError;
pub use types::*;
