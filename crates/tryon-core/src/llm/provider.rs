//! Provider traits and request/response types.
//!
//! Defines the two hosted-model seams (try-on image generation and product
//! description) plus the factory that builds them from config.

use crate::config::Config;
use crate::error::ProviderError;
use crate::sizing::Category;
use crate::types::ProductContent;
use async_trait::async_trait;
use base64::Engine;
use std::sync::Arc;

/// Base64-encoded image ready to send to a model API.
#[derive(Debug, Clone)]
pub struct ImageInput {
    /// Base64-encoded image bytes
    pub data: String,
    /// MIME type (e.g., "image/jpeg", "image/png")
    pub media_type: String,
}

impl ImageInput {
    /// Create an `ImageInput` from raw bytes and format string.
    ///
    /// The format is the image format identifier (e.g., "jpeg", "png", "webp").
    pub fn from_bytes(bytes: &[u8], format: &str) -> Self {
        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            media_type: media_type_for(format).to_string(),
        }
    }

    /// Return a data URL suitable for OpenAI-style APIs.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, self.data)
    }
}

/// MIME type for a short format name.
pub fn media_type_for(format: &str) -> &'static str {
    match format {
        "jpeg" | "jpg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        other => {
            tracing::warn!("Unknown image format '{other}', defaulting to image/jpeg");
            "image/jpeg"
        }
    }
}

/// A virtual try-on generation request: person first, garment second.
#[derive(Debug, Clone)]
pub struct TryOnPrompt {
    pub person: ImageInput,
    pub garment: ImageInput,
    pub prompt: String,
}

impl TryOnPrompt {
    /// Build the standard dressing prompt for a garment category.
    pub fn for_category(person: ImageInput, garment: ImageInput, category: Category) -> Self {
        let prompt = format!(
            "Perform a realistic virtual try-on. Dress the person in the first image \
             with the {category} garment from the second image. \
             Preserve body pose, lighting, shadows, fabric texture, and occlusions. \
             If hands or arms overlap the garment, keep them visible."
        );
        Self {
            person,
            garment,
            prompt,
        }
    }
}

/// Image bytes returned by a generator.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub data: Vec<u8>,
    pub mime_type: String,
    /// Model identifier used
    pub model: String,
    /// Round-trip latency in milliseconds
    pub latency_ms: u64,
}

/// Hosted model that dresses a person image in a garment image.
///
/// Uses `async_trait` because the service holds it as `Arc<dyn ImageGenerator>`.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Provider name for logging (e.g., "gemini").
    fn name(&self) -> &str;

    /// Model identifier reported by the health check.
    fn model(&self) -> &str;

    async fn generate(&self, request: &TryOnPrompt) -> Result<GeneratedImage, ProviderError>;
}

/// Hosted vision model that writes product copy for a garment photo.
#[async_trait]
pub trait ProductDescriber: Send + Sync {
    fn name(&self) -> &str;

    /// Describe the image, writing all text in `language`.
    async fn describe(
        &self,
        image: &ImageInput,
        language: &str,
    ) -> Result<ProductContent, ProviderError>;
}

/// Resolve `${ENV_VAR}` references in config strings.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok().filter(|v| !v.is_empty())
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Builds providers from configuration.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Gemini image generator. Fails when no API key is available.
    pub fn image_generator(config: &Config) -> Result<Arc<dyn ImageGenerator>, ProviderError> {
        let cfg = &config.gemini;
        let api_key = resolve_env_var(&cfg.api_key).ok_or_else(|| {
            ProviderError::NotConfigured(
                "Gemini API key not set. Set GEMINI_API_KEY env var.".to_string(),
            )
        })?;
        Ok(Arc::new(super::gemini::GeminiProvider::new(
            &cfg.endpoint,
            &api_key,
            &cfg.model,
        )))
    }

    /// OpenAI product describer. Fails when no API key is available.
    pub fn describer(config: &Config) -> Result<Arc<dyn ProductDescriber>, ProviderError> {
        let cfg = &config.openai;
        let api_key = resolve_env_var(&cfg.api_key).ok_or_else(|| {
            ProviderError::NotConfigured(
                "OpenAI API key not set. Set OPENAI_API_KEY env var.".to_string(),
            )
        })?;
        Ok(Arc::new(super::openai::OpenAiProvider::new(
            &cfg.endpoint,
            &api_key,
            &cfg.model,
            cfg.max_tokens,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_input_from_bytes_jpeg() {
        let input = ImageInput::from_bytes(&[0xFF, 0xD8, 0xFF], "jpeg");
        assert_eq!(input.media_type, "image/jpeg");
        assert!(!input.data.is_empty());
    }

    #[test]
    fn test_image_input_data_url() {
        let input = ImageInput::from_bytes(&[1, 2, 3], "png");
        assert_eq!(input.data_url(), "data:image/png;base64,AQID");
    }

    #[test]
    fn test_prompt_names_category() {
        let person = ImageInput::from_bytes(&[1], "jpeg");
        let garment = ImageInput::from_bytes(&[2], "png");
        let request = TryOnPrompt::for_category(person, garment, Category::Jackets);
        assert!(request.prompt.contains("with the jackets garment"));
        assert!(request.prompt.starts_with("Perform a realistic virtual try-on."));
        assert_eq!(request.garment.media_type, "image/png");
    }

    #[test]
    fn test_resolve_env_var() {
        // Non-env-var strings pass through
        assert_eq!(resolve_env_var("plain-key"), Some("plain-key".to_string()));
        // Empty returns None
        assert_eq!(resolve_env_var(""), None);
        // Unset env var returns None
        assert_eq!(resolve_env_var("${DEFINITELY_NOT_SET_XYZ_123}"), None);
    }

    #[test]
    fn test_factory_requires_api_key() {
        let mut config = Config::default();
        config.gemini.api_key = "${DEFINITELY_NOT_SET_XYZ_123}".into();
        let err = ProviderFactory::image_generator(&config).err().unwrap();
        assert!(err.to_string().contains("GEMINI_API_KEY"));

        config.gemini.api_key = "test-key".into();
        let generator = ProviderFactory::image_generator(&config).unwrap();
        assert_eq!(generator.name(), "gemini");
        assert_eq!(generator.model(), "gemini-3-pro-image-preview");
    }

    #[test]
    fn test_factory_builds_describer() {
        let mut config = Config::default();
        config.openai.api_key = "test-key".into();
        let describer = ProviderFactory::describer(&config).unwrap();
        assert_eq!(describer.name(), "openai");
    }
}
