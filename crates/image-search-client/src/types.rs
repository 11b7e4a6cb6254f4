//! Image search API types.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSearchResponse {
    #[serde(default)]
    pub value: Vec<ImageResult>,
}

/// One ranked search result.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResult {
    pub content_url: String,
    pub encoding_format: Option<String>,
    pub name: Option<String>,
}

impl ImageResult {
    /// Only JPEG and PNG results are accepted downstream; the vision
    /// service cannot analyze the other formats search returns.
    pub fn is_supported_format(&self) -> bool {
        self.encoding_format
            .as_deref()
            .map(|f| f.eq_ignore_ascii_case("jpeg") || f.eq_ignore_ascii_case("png"))
            .unwrap_or(false)
    }
}
