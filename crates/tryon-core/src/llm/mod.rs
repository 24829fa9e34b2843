//! Hosted model integration.
//!
//! Provides the provider seams for try-on image generation (Gemini) and
//! product description (OpenAI vision), plus retry handling shared by both
//! services.

pub(crate) mod gemini;
pub(crate) mod openai;
pub(crate) mod provider;
pub mod retry;

pub use provider::{
    media_type_for, resolve_env_var, GeneratedImage, ImageGenerator, ImageInput,
    ProductDescriber, ProviderFactory, TryOnPrompt,
};
pub use retry::RetryPolicy;
