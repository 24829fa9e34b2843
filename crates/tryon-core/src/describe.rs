//! Product description generation from a garment photo.

use std::sync::Arc;

use crate::config::{Config, DescribeConfig};
use crate::error::{DescribeError, ImageError, ProviderError};
use crate::imaging::{self, ImageDecoder};
use crate::llm::retry::{self, RetryPolicy};
use crate::llm::{ImageInput, ProductDescriber};
use crate::types::ProductContent;

/// Validates uploads, shrinks them, and asks the describer for product copy.
pub struct DescribeService {
    describer: Option<Arc<dyn ProductDescriber>>,
    decoder: ImageDecoder,
    settings: DescribeConfig,
    max_upload_mb: u64,
    max_upload_bytes: usize,
    retry: RetryPolicy,
}

impl DescribeService {
    /// Build from config. `describer` is `None` when no API key is configured;
    /// every call then fails with [`ProviderError::NotConfigured`].
    pub fn from_config(config: &Config, describer: Option<Arc<dyn ProductDescriber>>) -> Self {
        // Requests are matched in lowercase, so the configured codes are too
        let mut settings = config.describe.clone();
        settings.default_language = settings.default_language.trim().to_lowercase();
        for language in &mut settings.languages {
            *language = language.trim().to_lowercase();
        }

        Self {
            describer,
            decoder: ImageDecoder::new(&config.limits),
            settings,
            max_upload_mb: config.limits.max_upload_mb,
            max_upload_bytes: config.limits.max_upload_bytes(),
            retry: RetryPolicy {
                retry_attempts: config.retry.attempts,
                retry_delay_ms: config.retry.delay_ms,
                timeout_ms: config.limits.describe_timeout_ms,
            },
        }
    }

    pub fn is_available(&self) -> bool {
        self.describer.is_some()
    }

    pub fn default_language(&self) -> &str {
        &self.settings.default_language
    }

    pub fn languages(&self) -> &[String] {
        &self.settings.languages
    }

    /// Describe `image` in `language` (the default language when `None`).
    pub async fn describe(
        &self,
        image: Vec<u8>,
        language: Option<&str>,
    ) -> Result<ProductContent, DescribeError> {
        let language = language
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(self.settings.default_language.as_str())
            .to_lowercase();
        if !self.settings.languages.iter().any(|l| *l == language) {
            return Err(DescribeError::UnsupportedLanguage(language));
        }

        if image.len() > self.max_upload_bytes {
            return Err(DescribeError::FileTooLarge {
                size_bytes: image.len(),
                max_mb: self.max_upload_mb,
            });
        }

        let describer = self.describer.clone().ok_or_else(|| {
            ProviderError::NotConfigured(
                "OpenAI API key not set. Set OPENAI_API_KEY env var.".to_string(),
            )
        })?;

        let decoded = self.decoder.decode(image).await?;
        let max_edge = self.settings.max_image_edge;
        let quality = self.settings.jpeg_quality;
        let source = decoded.image;
        let jpeg = tokio::task::spawn_blocking(move || {
            imaging::encode_jpeg(&source, max_edge, quality)
        })
        .await
        .map_err(|e| ImageError::Encode(format!("Task join error: {e}")))??;

        tracing::debug!(
            "Describing {}x{} image as {} byte JPEG in '{language}'",
            decoded.width,
            decoded.height,
            jpeg.len()
        );
        let input = ImageInput::from_bytes(&jpeg, "jpeg");

        let content = retry::with_retry(&self.retry, "describe", || {
            let describer = describer.clone();
            let input = input.clone();
            let language = language.clone();
            async move { describer.describe(&input, &language).await }
        })
        .await?;

        tracing::info!("Generated description: {}", content.title);
        Ok(content)
    }
}
