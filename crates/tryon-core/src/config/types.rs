//! Sub-configuration structs with their defaults.

use crate::sizing::IdentityPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Cross-origin settings for browser front ends
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors: CorsConfig::default(),
        }
    }
}

/// CORS settings.
///
/// With `allow_any_origin` set the `origins` list is ignored. Credentials are
/// only allowed together with an explicit origin list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allow_any_origin: bool,

    /// Explicit origins, e.g. "http://localhost:8501"
    pub origins: Vec<String>,

    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_any_origin: true,
            origins: Vec::new(),
            allow_credentials: false,
        }
    }
}

/// Size resolution settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingConfig {
    /// Same-brand policy: "table_only" or "passthrough"
    pub identity: IdentityPolicy,
}

/// Garment inventory layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Root of `{brand}/{gender}/{category}/` asset folders
    pub root: PathBuf,

    /// Folder holding `model_{gender}.jpg` fallback person images
    pub default_models_dir: PathBuf,

    /// Extensions tried in order when locating a garment
    pub extensions: Vec<String>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets/inventory"),
            default_models_dir: PathBuf::from("assets/default_models"),
            extensions: vec![".jpg".to_string(), ".jpeg".to_string(), ".png".to_string()],
        }
    }
}

/// Resource limits to protect against problematic inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum upload size in megabytes
    pub max_upload_mb: u64,

    /// Maximum image dimension (width or height)
    pub max_image_dimension: u32,

    /// Decode timeout in milliseconds
    pub decode_timeout_ms: u64,

    /// Try-on generation timeout in milliseconds (per attempt)
    pub generate_timeout_ms: u64,

    /// Description call timeout in milliseconds (per attempt)
    pub describe_timeout_ms: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_upload_mb: 10,
            max_image_dimension: 10000,
            decode_timeout_ms: 5000,
            generate_timeout_ms: 120_000,
            describe_timeout_ms: 60_000,
        }
    }
}

impl LimitsConfig {
    pub fn max_upload_bytes(&self) -> usize {
        usize::try_from(self.max_upload_mb.saturating_mul(1024 * 1024)).unwrap_or(usize::MAX)
    }
}

/// Retry settings for provider calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub attempts: u32,

    /// Base backoff delay in milliseconds
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            attempts: 2,
            delay_ms: 1000,
        }
    }
}

/// Gemini image generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// API base URL
    pub endpoint: String,

    /// API key (supports ${ENV_VAR} syntax)
    pub api_key: String,

    /// Model name
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: "${GEMINI_API_KEY}".to_string(),
            model: "gemini-3-pro-image-preview".to_string(),
        }
    }
}

/// OpenAI vision settings (product descriptions).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiConfig {
    /// Chat Completions endpoint
    pub endpoint: String,

    /// API key (supports ${ENV_VAR} syntax)
    pub api_key: String,

    /// Model name
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            api_key: "${OPENAI_API_KEY}".to_string(),
            model: "gpt-4o".to_string(),
            max_tokens: 700,
        }
    }
}

/// Product description settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DescribeConfig {
    /// Accepted language codes
    pub languages: Vec<String>,

    /// Language used when the request names none
    pub default_language: String,

    /// Longest edge, in pixels, of the image sent to the model
    pub max_image_edge: u32,

    /// JPEG quality of the image sent to the model
    pub jpeg_quality: u8,
}

impl Default for DescribeConfig {
    fn default() -> Self {
        Self {
            languages: ["en", "hi", "ta", "te", "bn", "mr", "gu", "kn"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            default_language: "en".to_string(),
            max_image_edge: 1024,
            jpeg_quality: 85,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive, e.g. "info" or "tryon_core=debug"
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
