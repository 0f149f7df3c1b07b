use meridian_campaign::models::Campaign;
use meridian_catalog::Product;
use meridian_core::MemberProfile;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Demo dataset the in-memory stores start from.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub campaigns: Vec<Campaign>,
    pub products: Vec<Product>,
    pub profiles: Vec<MemberProfile>,
}

impl SeedData {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_parses_partial_document() {
        let seed = SeedData::from_json(
            r#"{
                "profiles": [
                    {
                        "id": "7f8f0f5e-3f7a-4d8e-9a3b-0d1c2e3f4a5b",
                        "name": "Jordan Avery",
                        "attributes": { "creditScore": 720 }
                    }
                ]
            }"#,
        )
        .unwrap();

        assert!(seed.campaigns.is_empty());
        assert!(seed.products.is_empty());
        assert_eq!(seed.profiles.len(), 1);
    }

    #[test]
    fn test_seed_rejects_malformed_json() {
        assert!(matches!(
            SeedData::from_json("{ not json"),
            Err(SeedError::Parse(_))
        ));
    }
}
