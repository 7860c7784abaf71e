use thiserror::Error;

/// Failure taxonomy for one identification attempt. Everything is converted
/// to a `{error}` JSON body at the route boundary; nothing propagates past it.
#[derive(Debug, Error)]
pub enum IdentifyError {
    #[error("{0}")]
    Configuration(String),
    #[error(
        "The model did not return a valid response. This usually means GEMINI_API_KEY is misconfigured. ({0})"
    )]
    InvalidResponse(String),
    #[error("This doesn't look like a plant. The model saw: {description}")]
    NotAPlant { description: String },
    #[error("{0}")]
    Transport(String),
}

pub const GENERIC_FAILURE: &str =
    "An unexpected error occurred during identification. Please try again.";

/// Maps known provider error strings to user-actionable messages. Falls back
/// to a generic message for anything unrecognized.
pub fn map_provider_error(message: &str) -> String {
    if message.contains("API key not valid") || message.contains("API_KEY_INVALID") {
        "The Gemini API rejected the configured key. Double-check GEMINI_API_KEY in your .env file."
            .to_string()
    } else if message.contains("RESOURCE_EXHAUSTED") || message.contains("quota") {
        "The Gemini API quota has been exhausted. Wait a bit and try again.".to_string()
    } else if message.contains("PERMISSION_DENIED") {
        "The configured Gemini API key is not permitted to use this model.".to_string()
    } else {
        GENERIC_FAILURE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_key_maps_to_credential_message() {
        let body = r#"{"error":{"code":400,"message":"API key not valid. Please pass a valid API key.","status":"INVALID_ARGUMENT"}}"#;
        let mapped = map_provider_error(body);
        assert_ne!(mapped, GENERIC_FAILURE);
        assert!(mapped.contains("GEMINI_API_KEY"));
    }

    #[test]
    fn invalid_key_status_code_maps_to_credential_message() {
        assert!(map_provider_error("API_KEY_INVALID").contains("GEMINI_API_KEY"));
    }

    #[test]
    fn quota_maps_to_quota_message() {
        let mapped = map_provider_error(r#"{"error":{"status":"RESOURCE_EXHAUSTED"}}"#);
        assert!(mapped.contains("quota"));
    }

    #[test]
    fn unknown_errors_fall_back_to_generic_message() {
        assert_eq!(map_provider_error("something exploded"), GENERIC_FAILURE);
    }

    #[test]
    fn not_a_plant_embeds_the_description() {
        let err = IdentifyError::NotAPlant {
            description: "A ceramic coffee mug on a desk.".to_string(),
        };
        assert!(err.to_string().contains("A ceramic coffee mug"));
    }
}
