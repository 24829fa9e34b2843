//! Data types returned by the services.

use serde::{Deserialize, Serialize};

/// Structured product copy generated from a garment photo.
///
/// Every field defaults, so a model reply that omits a key still parses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductContent {
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub bullet_points: Vec<String>,
    pub attributes: ProductAttributes,
}

/// Visible garment attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductAttributes {
    pub color: String,
    pub material: String,
    pub pattern: String,
    pub category: String,
    pub gender: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_reply_parses_with_defaults() {
        let content: ProductContent = serde_json::from_str(
            r#"{"title": "Crew neck tee", "attributes": {"color": "navy"}}"#,
        )
        .unwrap();
        assert_eq!(content.title, "Crew neck tee");
        assert!(content.bullet_points.is_empty());
        assert_eq!(content.attributes.color, "navy");
        assert_eq!(content.attributes.material, "");
    }
}
