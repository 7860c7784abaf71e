use serde::{Deserialize, Serialize};

/// Sentinel the model uses for classification fields it cannot fill.
pub const UNKNOWN: &str = "Unknown";

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct IdentifyRequest {
    pub photo_data_uri: String,
}

/// Structured identification returned by the model. Every field is always
/// present; deserialization fails on partial results.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlantIdentification {
    pub is_plant: bool,
    pub common_name: String,
    pub scientific_name: String,
    pub habitat: String,
    pub species: String,
    pub lifespan: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identification_deserializes_from_camel_case() {
        let json = r#"{
            "isPlant": true,
            "commonName": "Peace Lily",
            "scientificName": "Spathiphyllum wallisii",
            "habitat": "Tropical rainforest understory",
            "species": "S. wallisii",
            "lifespan": "3-5 years indoors",
            "description": "A shade-loving plant with glossy leaves."
        }"#;

        let result: PlantIdentification = serde_json::from_str(json).unwrap();
        assert!(result.is_plant);
        assert_eq!(result.common_name, "Peace Lily");
    }

    #[test]
    fn identification_rejects_partial_results() {
        // Missing "habitat" must fail instead of producing a partial record.
        let json = r#"{
            "isPlant": true,
            "commonName": "Peace Lily",
            "scientificName": "Spathiphyllum wallisii",
            "species": "S. wallisii",
            "lifespan": "3-5 years indoors",
            "description": "A shade-loving plant."
        }"#;

        assert!(serde_json::from_str::<PlantIdentification>(json).is_err());
    }
}
