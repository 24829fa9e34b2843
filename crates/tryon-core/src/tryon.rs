//! Virtual try-on flow.
//!
//! ```text
//! person image ─┐
//! size form ──► resolve size ──► inventory garment ──► Gemini ──► PNG + mapped size
//! ```
//!
//! Each request is self-contained: no state survives between calls.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::error::TryOnError;
use crate::imaging::{self, ImageDecoder};
use crate::inventory::GarmentInventory;
use crate::llm::retry::{self, RetryPolicy};
use crate::llm::{ImageGenerator, ImageInput, TryOnPrompt};
use crate::sizing::{Brand, Category, Gender, SizeResolver, SizeTable, SizeToken};

/// Raw form input for one try-on.
#[derive(Debug, Clone, Default)]
pub struct TryOnRequest {
    pub gender: String,
    pub category: String,
    pub current_brand: String,
    pub current_size: String,
    pub target_brand: String,
    /// Uploaded person photo; the default model for the gender is used when absent
    pub user_image: Option<Vec<u8>>,
}

/// Result of a successful try-on.
#[derive(Debug, Clone)]
pub struct TryOnOutcome {
    pub image: Vec<u8>,
    pub mime_type: String,
    /// Size in the target brand's scheme
    pub mapped_size: String,
    /// Inventory asset used as the garment image
    pub garment_path: PathBuf,
    pub model: String,
}

/// Orchestrates size resolution, inventory lookup and generation.
pub struct TryOnService {
    resolver: SizeResolver<'static>,
    inventory: GarmentInventory,
    decoder: ImageDecoder,
    generator: Arc<dyn ImageGenerator>,
    retry: RetryPolicy,
}

impl TryOnService {
    pub fn new(
        resolver: SizeResolver<'static>,
        inventory: GarmentInventory,
        decoder: ImageDecoder,
        generator: Arc<dyn ImageGenerator>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            resolver,
            inventory,
            decoder,
            generator,
            retry,
        }
    }

    /// Build the service from config around an existing generator.
    pub fn from_config(config: &Config, generator: Arc<dyn ImageGenerator>) -> Self {
        Self::new(
            SizeResolver::new(SizeTable::builtin(), config.sizing.identity),
            GarmentInventory::from_config(config),
            ImageDecoder::new(&config.limits),
            generator,
            RetryPolicy {
                retry_attempts: config.retry.attempts,
                retry_delay_ms: config.retry.delay_ms,
                timeout_ms: config.limits.generate_timeout_ms,
            },
        )
    }

    pub fn resolver(&self) -> &SizeResolver<'static> {
        &self.resolver
    }

    pub fn inventory(&self) -> &GarmentInventory {
        &self.inventory
    }

    /// Model identifier of the configured generator.
    pub fn model(&self) -> &str {
        self.generator.model()
    }

    /// Run one try-on end to end.
    pub async fn run(&self, request: TryOnRequest) -> Result<TryOnOutcome, TryOnError> {
        tracing::info!(
            "Received request: {} {} -> {} {}",
            request.current_brand,
            request.current_size,
            request.target_brand,
            request.category
        );

        let gender = Gender::parse(&request.gender).ok_or_else(|| {
            TryOnError::InvalidInput(format!(
                "gender must be male or female, got '{}'",
                request.gender
            ))
        })?;

        let person = self.person_image(gender, request.user_image).await?;

        // Unparseable keys are a missing mapping, same as an absent table row
        let size = SizeToken::normalize(&request.current_size);
        let resolved = match (
            Category::parse(&request.category),
            Brand::parse(&request.current_brand),
            Brand::parse(&request.target_brand),
        ) {
            (Some(category), Some(from), Some(target)) => self
                .resolver
                .resolve_typed(category, gender, from, &size, target)
                .map(|mapped| (category, target, mapped)),
            _ => None,
        };
        let (category, target, mapped_size) = resolved.ok_or_else(|| {
            tracing::error!("Size mapping failed");
            TryOnError::SizeMappingNotFound {
                category: request.category.clone(),
                gender: request.gender.clone(),
                from_brand: request.current_brand.clone(),
                from_size: request.current_size.clone(),
                to_brand: request.target_brand.clone(),
            }
        })?;

        let garment_path = self
            .inventory
            .find(target, gender, category, &mapped_size)
            .ok_or_else(|| {
                tracing::error!("Garment missing: {target} {category} {mapped_size}");
                TryOnError::GarmentNotFound {
                    brand: target,
                    category,
                    size: mapped_size.clone(),
                }
            })?;

        let garment_bytes =
            tokio::fs::read(&garment_path)
                .await
                .map_err(|source| TryOnError::Asset {
                    path: garment_path.clone(),
                    source,
                })?;
        let garment_format = imaging::sniff_format(&garment_bytes).unwrap_or("jpeg");
        let garment = ImageInput::from_bytes(&garment_bytes, garment_format);

        let prompt = TryOnPrompt::for_category(person, garment, category);
        let generator = self.generator.clone();
        let generated = retry::with_retry(&self.retry, "generate", || {
            let generator = generator.clone();
            let prompt = prompt.clone();
            async move { generator.generate(&prompt).await }
        })
        .await
        .inspect_err(|e| tracing::error!("{} API error: {e}", self.generator.name()))?;

        tracing::info!(
            "Try-on generated with {} in {}ms (mapped size {mapped_size})",
            generated.model,
            generated.latency_ms
        );

        Ok(TryOnOutcome {
            image: generated.data,
            mime_type: generated.mime_type,
            mapped_size,
            garment_path,
            model: generated.model,
        })
    }

    /// Uploaded photo if given, otherwise the default model image.
    async fn person_image(
        &self,
        gender: Gender,
        upload: Option<Vec<u8>>,
    ) -> Result<ImageInput, TryOnError> {
        let bytes = match upload {
            Some(bytes) => bytes,
            None => {
                let path = self
                    .inventory
                    .default_model(gender)
                    .ok_or_else(|| {
                        TryOnError::DefaultModelMissing(self.inventory.default_model_path(gender))
                    })?;
                tokio::fs::read(&path)
                    .await
                    .map_err(|e| TryOnError::InvalidImage(e.to_string()))?
            }
        };

        let decoded = self.decoder.decode(bytes.clone()).await?;
        Ok(ImageInput::from_bytes(&bytes, decoded.format_name()))
    }
}
