//! Error types for the try-on backend.
//!
//! Errors are organized by service so the HTTP layer can map each variant to
//! a status code without string matching. A missing size mapping is *not* an
//! error at the resolver level (it is `None`); it only becomes
//! [`TryOnError::SizeMappingNotFound`] once a try-on request depends on it.

use std::path::PathBuf;
use thiserror::Error;

use crate::sizing::{Brand, Category};

/// Top-level error type for try-on operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Virtual try-on errors
    #[error("Try-on error: {0}")]
    TryOn(#[from] TryOnError),

    /// Product description errors
    #[error("Description error: {0}")]
    Describe(#[from] DescribeError),

    /// Provider setup or call errors
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors from decoding or re-encoding an uploaded image.
#[derive(Error, Debug)]
pub enum ImageError {
    /// Bytes are not a decodable image
    #[error("cannot decode image: {0}")]
    Decode(String),

    /// Format could not be detected or is not supported
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Image dimensions exceed the configured limit
    #[error("image too large ({width}x{height} > {max_dim})")]
    TooLarge { width: u32, height: u32, max_dim: u32 },

    /// Decoding did not finish in time
    #[error("decode timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    /// Re-encoding the image failed
    #[error("cannot encode image: {0}")]
    Encode(String),
}

/// Errors from a hosted model provider (Gemini, OpenAI).
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Request failed or returned a non-2xx status
    #[error("{provider} request failed: {message}")]
    Http {
        provider: String,
        message: String,
        /// HTTP status code, when the failure came from a response
        status_code: Option<u16>,
    },

    /// No response arrived (connection refused, DNS failure, socket timeout)
    #[error("{provider} connection failed: {message}")]
    Connection { provider: String, message: String },

    /// The call did not complete within its timeout
    #[error("{stage} call timed out after {timeout_ms}ms")]
    Timeout { stage: String, timeout_ms: u64 },

    /// The response parsed but carried no usable payload
    #[error("{provider} returned no usable content: {message}")]
    EmptyResponse { provider: String, message: String },

    /// The provider is not configured (usually a missing API key)
    #[error("{0}")]
    NotConfigured(String),
}

/// Errors from the virtual try-on flow.
#[derive(Error, Debug)]
pub enum TryOnError {
    /// A form value is outside its allowed set
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The person image could not be used
    #[error("Image Error: {0}")]
    InvalidImage(String),

    /// No default model image exists for the gender
    #[error("Image Error: Default model missing at {}", .0.display())]
    DefaultModelMissing(PathBuf),

    /// The size table has no path for the requested translation
    #[error(
        "Size mapping not found: [{category}][{gender}][{from_brand}][{from_size}][{to_brand}]"
    )]
    SizeMappingNotFound {
        category: String,
        gender: String,
        from_brand: String,
        from_size: String,
        to_brand: String,
    },

    /// The inventory holds no asset for the mapped size
    #[error("Garment missing: {brand} {category} {size}")]
    GarmentNotFound {
        brand: Brand,
        category: Category,
        size: String,
    },

    /// Reading an inventory asset failed
    #[error("Engine Error: failed to read {}: {source}", path.display())]
    Asset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image generator failed
    #[error("Engine Error: {0}")]
    Provider(#[from] ProviderError),
}

impl From<ImageError> for TryOnError {
    fn from(err: ImageError) -> Self {
        Self::InvalidImage(err.to_string())
    }
}

/// Errors from the product description flow.
#[derive(Error, Debug)]
pub enum DescribeError {
    /// Language code not in the configured list
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Upload exceeds the size limit
    #[error("File too large (max {max_mb}MB)")]
    FileTooLarge { size_bytes: usize, max_mb: u64 },

    /// Upload is not a usable image
    #[error("Invalid image: {0}")]
    InvalidImage(#[from] ImageError),

    /// The description provider failed
    #[error("Description generation failed: {0}")]
    Provider(#[from] ProviderError),
}

/// Convenience type alias for try-on results.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mapping_message_shows_lookup_path() {
        let err = TryOnError::SizeMappingNotFound {
            category: "shoes".into(),
            gender: "male".into(),
            from_brand: "nike".into(),
            from_size: "11".into(),
            to_brand: "adidas".into(),
        };
        assert_eq!(
            err.to_string(),
            "Size mapping not found: [shoes][male][nike][11][adidas]"
        );
    }

    #[test]
    fn test_image_error_becomes_invalid_image() {
        let err: TryOnError = ImageError::Decode("bad header".into()).into();
        assert!(matches!(err, TryOnError::InvalidImage(_)));
        assert!(err.to_string().starts_with("Image Error:"));
    }

    #[test]
    fn test_provider_error_wraps_into_engine_error() {
        let err: TryOnError = ProviderError::NotConfigured("no key".into()).into();
        assert_eq!(err.to_string(), "Engine Error: no key");
    }
}
