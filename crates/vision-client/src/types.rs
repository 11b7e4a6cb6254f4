//! Vision annotation API types (Google Cloud Vision `images:annotate`).

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAnnotateRequest {
    pub requests: Vec<AnnotateImageRequest>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateImageRequest {
    pub image: Image,
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub source: ImageSource,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSource {
    pub image_uri: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub max_results: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAnnotateResponse {
    #[serde(default)]
    pub responses: Vec<AnnotateImageResponse>,
}

/// Per-image result. A batch never fails as a whole; each entry either
/// carries an annotation or its own `error` status.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnnotateImageResponse {
    pub image_properties_annotation: Option<ImageProperties>,
    pub error: Option<Status>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageProperties {
    pub dominant_colors: Option<DominantColors>,
}

/// Dominant colors, most prevalent first.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DominantColors {
    #[serde(default)]
    pub colors: Vec<ColorInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorInfo {
    pub color: RgbColor,
    pub score: Option<f32>,
    pub pixel_fraction: Option<f32>,
}

/// Proto3-style RGB: channels with value 0 are omitted on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RgbColor {
    pub red: Option<f64>,
    pub green: Option<f64>,
    pub blue: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    pub code: Option<i32>,
    pub message: Option<String>,
}

impl AnnotateImageResponse {
    /// The single most dominant color, if the annotation carries one.
    pub fn dominant_color(&self) -> Option<&RgbColor> {
        self.image_properties_annotation
            .as_ref()?
            .dominant_colors
            .as_ref()?
            .colors
            .first()
            .map(|c| &c.color)
    }
}

impl RgbColor {
    /// Channels as 0-255 values; omitted channels read as 0.
    pub fn channels(&self) -> (f64, f64, f64) {
        (
            self.red.unwrap_or(0.0),
            self.green.unwrap_or(0.0),
            self.blue.unwrap_or(0.0),
        )
    }
}
