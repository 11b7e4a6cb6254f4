//! Vision analysis API client.

mod client;
mod error;
mod types;

pub use client::VisionClient;
pub use error::VisionError;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(mock_server: &MockServer) -> VisionClient {
        VisionClient::new("test-api-key", mock_server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_analyze_dominant_colors() {
        let mock_server = MockServer::start().await;

        let body = serde_json::json!({
            "responses": [
                {
                    "imagePropertiesAnnotation": {
                        "dominantColors": {
                            "colors": [
                                { "color": { "red": 192, "green": 128, "blue": 129 }, "score": 0.6, "pixelFraction": 0.3 },
                                { "color": { "red": 10, "green": 10, "blue": 10 }, "score": 0.2, "pixelFraction": 0.1 }
                            ]
                        }
                    }
                },
                {
                    "error": { "code": 7, "message": "image fetch failed" }
                }
            ]
        });

        Mock::given(method("POST"))
            .and(path("/v1/images:annotate"))
            .and(query_param("key", "test-api-key"))
            .and(body_string_contains("IMAGE_PROPERTIES"))
            .and(body_string_contains("https://img.example/a.jpg"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let urls = vec![
            "https://img.example/a.jpg".to_string(),
            "https://img.example/b.png".to_string(),
        ];
        let responses = client.analyze_dominant_colors(&urls).await.unwrap();

        assert_eq!(responses.len(), 2);

        let first = responses[0].dominant_color().unwrap();
        assert_eq!(first.channels(), (192.0, 128.0, 129.0));
        assert!(responses[0].error.is_none());

        assert!(responses[1].dominant_color().is_none());
        let status = responses[1].error.as_ref().unwrap();
        assert_eq!(status.message.as_deref(), Some("image fetch failed"));
    }

    #[tokio::test]
    async fn test_analyze_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images:annotate"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let result = client
            .analyze_dominant_colors(&["https://img.example/a.jpg".to_string()])
            .await;

        assert!(matches!(result, Err(VisionError::Api(ref m)) if m == "bad request"));
    }

    #[test]
    fn test_omitted_channels_default_to_zero() {
        let response: AnnotateImageResponse = serde_json::from_value(serde_json::json!({
            "imagePropertiesAnnotation": {
                "dominantColors": {
                    "colors": [ { "color": { "red": 255 } } ]
                }
            }
        }))
        .unwrap();

        let color = response.dominant_color().unwrap();
        assert_eq!(color.channels(), (255.0, 0.0, 0.0));
    }
}
