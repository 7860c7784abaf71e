use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PayloadError {
    #[error("No image was provided. Select an image or take a picture first.")]
    Empty,
    #[error("The image payload must be a base64 data URI (data:<mimetype>;base64,<data>).")]
    NotADataUri,
    #[error("Unsupported content type \"{0}\". Only still images are accepted.")]
    NotAnImage(String),
    #[error("The image data is not valid base64.")]
    InvalidBase64,
}

/// A still image unpacked from a `data:` URI. The base64 body stays encoded;
/// the model consumes it as-is, so no resizing or transcoding happens here.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePayload {
    pub mime_type: String,
    pub data: String,
}

impl ImagePayload {
    pub fn from_data_uri(uri: &str) -> Result<Self, PayloadError> {
        let uri = uri.trim();
        if uri.is_empty() {
            return Err(PayloadError::Empty);
        }

        let rest = uri.strip_prefix("data:").ok_or(PayloadError::NotADataUri)?;
        let (mime_type, data) = rest.split_once(";base64,").ok_or(PayloadError::NotADataUri)?;

        if !mime_type.starts_with("image/") {
            return Err(PayloadError::NotAnImage(mime_type.to_string()));
        }
        if data.is_empty() || BASE64.decode(data).is_err() {
            return Err(PayloadError::InvalidBase64);
        }

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: data.to_string(),
        })
    }
}

const INSTRUCTION: &str = "You are an expert botanist. Your task is to analyze the provided photo.\n\n\
First, determine if the image contains a plant. Set the 'isPlant' field accordingly.\n\n\
If it is a plant, identify it and fill in all the details: common name, scientific name, habitat, \
species, lifespan, and a detailed description. If any detail is unknown, use the string \"Unknown\".\n\n\
If it is not a plant, set 'isPlant' to false, fill the plant-specific fields with \"Unknown\", \
and provide a description of what you see in the image.";

/// Builds the `generateContent` request body: the fixed botanist instruction,
/// the inline image, and a response schema pinning the output shape.
pub fn generate_content_body(image: &ImagePayload) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [
                { "text": INSTRUCTION },
                { "inlineData": { "mimeType": image.mime_type, "data": image.data } },
            ],
        }],
        "generationConfig": {
            "temperature": 0.2,
            "responseMimeType": "application/json",
            "responseSchema": response_schema(),
        },
    })
}

fn response_schema() -> Value {
    let sentinel_string = |what: &str| {
        json!({
            "type": "STRING",
            "description": format!("{what}. \"Unknown\" if not a plant or it cannot be identified."),
        })
    };

    json!({
        "type": "OBJECT",
        "properties": {
            "isPlant": { "type": "BOOLEAN", "description": "Whether the image contains a plant." },
            "commonName": sentinel_string("The common name of the plant"),
            "scientificName": sentinel_string("The scientific name of the plant"),
            "habitat": sentinel_string("The natural environment of the plant"),
            "species": sentinel_string("The species of the plant"),
            "lifespan": sentinel_string("The typical lifespan of the plant"),
            "description": {
                "type": "STRING",
                "description": "A detailed description. If it is a plant, describe the plant. If not, describe what is in the image.",
            },
        },
        "required": [
            "isPlant", "commonName", "scientificName", "habitat",
            "species", "lifespan", "description",
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // 8 bytes of PNG magic, valid base64.
    const TINY_PNG_URI: &str = "data:image/png;base64,iVBORw0KGgo=";

    #[test]
    fn parses_an_image_data_uri() {
        let payload = ImagePayload::from_data_uri(TINY_PNG_URI).unwrap();
        assert_eq!(payload.mime_type, "image/png");
        assert_eq!(payload.data, "iVBORw0KGgo=");
    }

    #[test]
    fn rejects_an_empty_payload() {
        assert_eq!(ImagePayload::from_data_uri("").unwrap_err(), PayloadError::Empty);
        assert_eq!(ImagePayload::from_data_uri("   ").unwrap_err(), PayloadError::Empty);
    }

    #[test]
    fn rejects_a_plain_url() {
        assert_eq!(
            ImagePayload::from_data_uri("https://example.com/plant.png").unwrap_err(),
            PayloadError::NotADataUri
        );
    }

    #[test]
    fn rejects_a_uri_without_base64_marker() {
        assert_eq!(
            ImagePayload::from_data_uri("data:image/png,rawbytes").unwrap_err(),
            PayloadError::NotADataUri
        );
    }

    #[test]
    fn rejects_non_image_content() {
        assert_eq!(
            ImagePayload::from_data_uri("data:video/mp4;base64,AAAA").unwrap_err(),
            PayloadError::NotAnImage("video/mp4".to_string())
        );
    }

    #[test]
    fn rejects_invalid_base64() {
        assert_eq!(
            ImagePayload::from_data_uri("data:image/png;base64,not%%base64").unwrap_err(),
            PayloadError::InvalidBase64
        );
    }

    #[test]
    fn body_inlines_the_image_and_pins_the_schema() {
        let payload = ImagePayload::from_data_uri(TINY_PNG_URI).unwrap();
        let body = generate_content_body(&payload);

        let part = &body["contents"][0]["parts"][1]["inlineData"];
        assert_eq!(part["mimeType"], "image/png");
        assert_eq!(part["data"], "iVBORw0KGgo=");

        let config = &body["generationConfig"];
        assert_eq!(config["responseMimeType"], "application/json");
        let required = config["responseSchema"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 7);
        assert!(required.iter().any(|f| f == "isPlant"));
    }
}
