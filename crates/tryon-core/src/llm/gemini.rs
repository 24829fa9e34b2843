//! Gemini image generation via the `generateContent` API.
//!
//! Both images go inline in one user turn, followed by the text prompt. The
//! reply is scanned for the first inline image part of the first candidate.

use super::provider::{GeneratedImage, ImageGenerator, ImageInput, TryOnPrompt};
use super::retry;
use crate::error::ProviderError;
use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Gemini provider for try-on image generation.
pub struct GeminiProvider {
    api_key: String,
    model: String,
    client: reqwest::Client,
    endpoint: String,
}

impl GeminiProvider {
    pub fn new(endpoint: &str, api_key: &str, model: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            client: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }
}

// --- Wire types (shared by request and response) ---

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_modalities: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    /// Base64-encoded bytes
    data: String,
}

impl From<&ImageInput> for Part {
    fn from(image: &ImageInput) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: image.media_type.clone(),
                data: image.data.clone(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

fn build_request(request: &TryOnPrompt) -> GenerateRequest {
    GenerateRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![
                Part::from(&request.person),
                Part::from(&request.garment),
                Part {
                    text: Some(request.prompt.clone()),
                    inline_data: None,
                },
            ],
        }],
        generation_config: GenerationConfig {
            response_modalities: vec!["IMAGE".to_string(), "TEXT".to_string()],
        },
    }
}

/// Pull the first inline image out of the first candidate.
fn extract_image(response: GenerateResponse) -> Result<(String, Vec<u8>), ProviderError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ProviderError::EmptyResponse {
            provider: "gemini".to_string(),
            message: "no candidates".to_string(),
        })?;

    let finish_reason = candidate.finish_reason.unwrap_or_default();
    let inline = candidate
        .content
        .unwrap_or_default()
        .parts
        .into_iter()
        .find_map(|part| part.inline_data)
        .ok_or_else(|| ProviderError::EmptyResponse {
            provider: "gemini".to_string(),
            message: format!("Gemini returned no image data (finish reason: {finish_reason})"),
        })?;

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(inline.data.as_bytes())
        .map_err(|e| ProviderError::EmptyResponse {
            provider: "gemini".to_string(),
            message: format!("invalid base64 image data: {e}"),
        })?;
    Ok((inline.mime_type, bytes))
}

#[async_trait]
impl ImageGenerator for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &TryOnPrompt) -> Result<GeneratedImage, ProviderError> {
        let start = Instant::now();
        let body = build_request(request);

        let resp = self
            .client
            .post(self.generate_url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| retry::send_error("gemini", e))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Http {
                provider: "gemini".to_string(),
                message: format!("HTTP {status}: {text}"),
                status_code: Some(status.as_u16()),
            });
        }

        let parsed: GenerateResponse = resp.json().await.map_err(|e| ProviderError::Http {
            provider: "gemini".to_string(),
            message: format!("invalid response body: {e}"),
            status_code: None,
        })?;

        let (mime_type, data) = extract_image(parsed)?;
        tracing::info!("Generation successful ({} bytes, {mime_type})", data.len());

        Ok(GeneratedImage {
            data,
            mime_type,
            model: self.model.clone(),
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}
