//! Free-text color resolution.
//!
//! Three strategies, cheapest first: fuzzy lookup against the named
//! catalogues, literal color parsing, and image-search plus
//! vision-based dominant-color averaging. The first strategy that
//! produces a code wins.

mod catalogue;

pub use catalogue::{Catalogue, CATALOGUES};

use image_search_client::ImageSearchClient;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};
use vision_client::VisionClient;

/// Minimum bigram similarity for a catalogue name to count as a match.
const SIMILARITY_THRESHOLD: f64 = 0.70;

/// Cap on image results fed to the vision batch, applied after the
/// format filter.
const MAX_IMAGES: usize = 20;

#[derive(Error, Debug)]
pub enum ColorError {
    #[error("color query is empty")]
    EmptyQuery,

    #[error("could not resolve '{0}' to a color")]
    Unresolved(String),

    #[error("no image analysis succeeded for '{0}'")]
    NoSuccessfulAnalysis(String),

    #[error("Image search error: {0}")]
    Search(#[from] image_search_client::ImageSearchError),

    #[error("Vision error: {0}")]
    Vision(#[from] vision_client::VisionError),
}

/// A catalogue entry scored against the query. Lives only for the
/// duration of one name-matching pass.
#[derive(Debug, Clone)]
struct ColorCandidate {
    name: &'static str,
    color_code: &'static str,
    collection: &'static str,
    normalized_name: String,
    similarity_score: f64,
}

/// Resolves free-text color queries to `#rrggbb` codes.
pub struct ColorResolver {
    image_search: Arc<ImageSearchClient>,
    vision: Arc<VisionClient>,
}

impl ColorResolver {
    pub fn new(image_search: Arc<ImageSearchClient>, vision: Arc<VisionClient>) -> Self {
        Self {
            image_search,
            vision,
        }
    }

    /// Resolve a free-text query to a lowercase `#rrggbb` code.
    pub async fn resolve(&self, query: &str) -> Result<String, ColorError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ColorError::EmptyQuery);
        }

        // Cheap, local strategies first.
        let strategies: [fn(&str) -> Option<String>; 2] =
            [match_named_color, parse_color_literal];
        for strategy in strategies {
            if let Some(code) = strategy(query) {
                return Ok(code);
            }
        }

        self.match_from_images(query).await
    }

    /// Last-resort strategy: average the dominant colors of the top
    /// image-search hits for the query.
    async fn match_from_images(&self, query: &str) -> Result<String, ColorError> {
        let results = self.image_search.search(query, MAX_IMAGES).await?;
        let urls: Vec<String> = results
            .into_iter()
            .filter(|r| r.is_supported_format())
            .take(MAX_IMAGES)
            .map(|r| r.content_url)
            .collect();

        if urls.is_empty() {
            return Err(ColorError::Unresolved(query.to_string()));
        }

        let responses = self.vision.analyze_dominant_colors(&urls).await?;

        let mut extracted = Vec::new();
        for (url, response) in urls.iter().zip(&responses) {
            if let Some(status) = &response.error {
                warn!(
                    image = %url,
                    "Image analysis failed: {}",
                    status.message.as_deref().unwrap_or("unknown error")
                );
                continue;
            }
            if let Some(color) = response.dominant_color() {
                extracted.push(color.channels());
            }
        }

        if extracted.is_empty() {
            return Err(ColorError::NoSuccessfulAnalysis(query.to_string()));
        }

        debug!(
            "Averaging dominant colors of {} of {} images for '{}'",
            extracted.len(),
            urls.len(),
            query
        );
        Ok(average_color(&extracted))
    }
}

/// Strategy 1: fuzzy match against the named catalogues.
fn match_named_color(query: &str) -> Option<String> {
    let normalized_query = query.to_lowercase();

    let mut candidates: Vec<ColorCandidate> = Vec::new();
    for catalogue in CATALOGUES {
        for (name, color_code) in catalogue.entries {
            let normalized_name = name.to_lowercase();
            let similarity_score = strsim::sorensen_dice(&normalized_query, &normalized_name);
            if similarity_score >= SIMILARITY_THRESHOLD {
                candidates.push(ColorCandidate {
                    name,
                    color_code,
                    collection: catalogue.name,
                    normalized_name,
                    similarity_score,
                });
            }
        }
    }

    // Stable sort, so catalogue iteration order breaks ties.
    candidates.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));

    let best = candidates.first()?;
    debug!(
        "Best catalogue match for '{}': '{}' as '{}' [{}] score {:.2}",
        query, best.name, best.normalized_name, best.collection, best.similarity_score
    );
    Some(format!("#{}", best.color_code))
}

/// Strategy 2: the query may already be a color literal. Parse
/// failure is expected here and falls through silently.
fn parse_color_literal(query: &str) -> Option<String> {
    let color = csscolorparser::parse(query).ok()?;
    let [r, g, b, _] = color.to_rgba8();
    Some(format!("#{:02x}{:02x}{:02x}", r, g, b))
}

/// Per-channel mean of 0-255 RGB triples, computed before hex
/// encoding.
fn average_color(colors: &[(f64, f64, f64)]) -> String {
    let n = colors.len() as f64;
    let (r, g, b) = colors
        .iter()
        .fold((0.0, 0.0, 0.0), |acc, c| (acc.0 + c.0, acc.1 + c.1, acc.2 + c.2));

    format!(
        "#{:02x}{:02x}{:02x}",
        (r / n).round() as u8,
        (g / n).round() as u8,
        (b / n).round() as u8
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_name_wins() {
        assert_eq!(match_named_color("red").unwrap(), "#ff0000");
        assert_eq!(match_named_color("rose gold").unwrap(), "#c08081");
    }

    #[test]
    fn name_match_is_case_insensitive() {
        assert_eq!(match_named_color("Rose Gold").unwrap(), "#c08081");
        assert_eq!(match_named_color("RED").unwrap(), "#ff0000");
    }

    #[test]
    fn near_spelling_passes_threshold() {
        // One transposed bigram still scores well above 0.70.
        assert_eq!(match_named_color("turquose").unwrap(), "#40e0d0");
    }

    #[test]
    fn unrelated_text_matches_nothing() {
        assert!(match_named_color("gibberish non-existent color").is_none());
        assert!(match_named_color("q").is_none());
    }

    #[test]
    fn literal_hex_parses() {
        assert_eq!(parse_color_literal("#AABBCC").unwrap(), "#aabbcc");
        assert_eq!(parse_color_literal("rgb(255, 0, 0)").unwrap(), "#ff0000");
    }

    #[test]
    fn literal_garbage_falls_through() {
        assert!(parse_color_literal("definitely not a color").is_none());
    }

    #[test]
    fn averaging_is_per_channel() {
        let mean = average_color(&[(200.0, 100.0, 0.0), (100.0, 50.0, 0.0)]);
        assert_eq!(mean, "#964b00");

        let single = average_color(&[(192.0, 128.0, 129.0)]);
        assert_eq!(single, "#c08081");
    }
}
