use std::error::Error as _;
use std::time::Duration;

use log::debug;
use serde::Deserialize;
use shared::PlantIdentification;

use crate::gemini::config::GeminiConfig;
use crate::gemini::error::{IdentifyError, map_provider_error};
use crate::gemini::request::{ImagePayload, generate_content_body};

#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build reqwest client");
        Self { client, config }
    }

    /// Issues a single `generateContent` call and decodes the structured
    /// identification. The credential is checked before any network traffic;
    /// no retries are made.
    pub async fn identify(
        &self,
        image: &ImagePayload,
    ) -> Result<PlantIdentification, IdentifyError> {
        self.config.validate()?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
            self.config.api_key
        );
        let body = generate_content_body(image);

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_transport_error)?;

        if !status.is_success() {
            debug!("Gemini returned {}: {}", status, text);
            return Err(IdentifyError::Transport(map_provider_error(&text)));
        }

        parse_identification(&text)
    }
}

/// Pulls the first candidate text out of the response envelope and decodes it
/// against the fixed result shape. Anything short of a complete record is an
/// invalid response.
fn parse_identification(body: &str) -> Result<PlantIdentification, IdentifyError> {
    let envelope: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| IdentifyError::InvalidResponse(e.to_string()))?;

    let candidate_text = envelope
        .candidates
        .into_iter()
        .find_map(|c| c.content)
        .and_then(|c| c.parts.into_iter().find_map(|p| p.text))
        .ok_or_else(|| IdentifyError::InvalidResponse("no candidate text".to_string()))?;

    serde_json::from_str(&candidate_text).map_err(|e| {
        IdentifyError::InvalidResponse(format!("candidate did not match the expected shape: {e}"))
    })
}

fn map_transport_error(err: reqwest::Error) -> IdentifyError {
    if err.is_timeout() {
        return IdentifyError::Transport(
            "The request to the Gemini API timed out. Please try again.".to_string(),
        );
    }
    if err.is_connect() {
        return IdentifyError::Transport(
            "Could not reach the Gemini API. Check your network connection.".to_string(),
        );
    }

    // Collect the cause chain so provider strings buried in a source error
    // still hit the pattern mapping.
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    IdentifyError::Transport(map_provider_error(&message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(candidate: &str) -> String {
        serde_json::json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": candidate }] },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 300, "candidatesTokenCount": 120 }
        })
        .to_string()
    }

    #[test]
    fn decodes_a_complete_candidate() {
        let candidate = r#"{
            "isPlant": true,
            "commonName": "Snake Plant",
            "scientificName": "Dracaena trifasciata",
            "habitat": "Tropical West Africa",
            "species": "D. trifasciata",
            "lifespan": "5-10 years",
            "description": "An upright succulent with banded sword-shaped leaves."
        }"#;

        let result = parse_identification(&envelope(candidate)).unwrap();
        assert!(result.is_plant);
        assert_eq!(result.common_name, "Snake Plant");
    }

    #[test]
    fn not_a_plant_candidate_still_decodes() {
        let candidate = r#"{
            "isPlant": false,
            "commonName": "Unknown",
            "scientificName": "Unknown",
            "habitat": "Unknown",
            "species": "Unknown",
            "lifespan": "Unknown",
            "description": "A tabby cat sleeping on a windowsill."
        }"#;

        let result = parse_identification(&envelope(candidate)).unwrap();
        assert!(!result.is_plant);
        assert_eq!(result.common_name, shared::UNKNOWN);
        assert!(!result.description.is_empty());
    }

    #[test]
    fn empty_candidates_is_an_invalid_response() {
        let err = parse_identification(r#"{"candidates": []}"#).unwrap_err();
        assert!(matches!(err, IdentifyError::InvalidResponse(_)));
    }

    #[test]
    fn unparsable_body_is_an_invalid_response() {
        let err = parse_identification("not json at all").unwrap_err();
        assert!(matches!(err, IdentifyError::InvalidResponse(_)));
    }

    #[test]
    fn incomplete_candidate_is_an_invalid_response() {
        let candidate = r#"{"isPlant": true, "commonName": "Snake Plant"}"#;
        let err = parse_identification(&envelope(candidate)).unwrap_err();
        assert!(matches!(err, IdentifyError::InvalidResponse(_)));
    }
}
