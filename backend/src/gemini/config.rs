use std::env;

use crate::gemini::error::IdentifyError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Gemini access configuration, resolved once at startup and handed to the
/// client. The key is never read from the environment after this point.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeminiConfig {
    pub fn from_env() -> Self {
        let mut config = Self {
            api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            ..Default::default()
        };

        if let Ok(model) = env::var("GEMINI_MODEL") {
            config.model = model;
        }
        if let Ok(base_url) = env::var("GEMINI_BASE_URL") {
            config.base_url = base_url;
        }
        config
    }

    /// Rejects a missing or template placeholder key. Runs before any network
    /// call so a bad setup never reaches the provider.
    pub fn validate(&self) -> Result<(), IdentifyError> {
        let key = self.api_key.trim();
        if key.is_empty() {
            return Err(IdentifyError::Configuration(
                "GEMINI_API_KEY is not set. Add your Google AI Studio key to the .env file."
                    .to_string(),
            ));
        }
        if is_placeholder(key) {
            return Err(IdentifyError::Configuration(format!(
                "GEMINI_API_KEY still holds the placeholder value \"{key}\". Replace it with a real key from Google AI Studio."
            )));
        }
        Ok(())
    }
}

fn is_placeholder(key: &str) -> bool {
    let lowered = key.to_ascii_lowercase();
    lowered.contains("your_gemini") || lowered.contains("your_api_key") || lowered == "changeme"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: &str) -> GeminiConfig {
        GeminiConfig {
            api_key: key.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_key_is_a_configuration_error() {
        let err = config_with_key("").validate().unwrap_err();
        assert!(matches!(err, IdentifyError::Configuration(_)));
        assert!(err.to_string().contains(".env"));
    }

    #[test]
    fn placeholder_key_is_a_configuration_error() {
        for key in ["your_gemini_api_key", "YOUR_API_KEY_HERE", "changeme"] {
            let err = config_with_key(key).validate().unwrap_err();
            assert!(matches!(err, IdentifyError::Configuration(_)), "{key}");
        }
    }

    #[test]
    fn real_looking_key_passes() {
        assert!(config_with_key("AIzaSyD-real-looking-key").validate().is_ok());
    }
}
