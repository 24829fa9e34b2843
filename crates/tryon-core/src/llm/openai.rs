//! OpenAI product describer using the Chat Completions API.
//!
//! Sends the image via data URL and forces a JSON object reply, which is then
//! parsed into [`ProductContent`].

use super::provider::{ImageInput, ProductDescriber};
use super::retry;
use crate::error::ProviderError;
use crate::types::ProductContent;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const SYSTEM_PROMPT: &str =
    "You are a product content generation system. You MUST return ONLY valid JSON.";

/// OpenAI provider using Chat Completions API.
pub struct OpenAiProvider {
    api_key: String,
    model: String,
    max_tokens: u32,
    client: reqwest::Client,
    endpoint: String,
}

impl OpenAiProvider {
    pub fn new(endpoint: &str, api_key: &str, model: &str, max_tokens: u32) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            max_tokens,
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }
}

// --- Request types ---

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: MessageContent,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ChatContent>),
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum ChatContent {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(rename = "image_url")]
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

// --- Response types ---

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

fn user_prompt(language: &str) -> String {
    format!(
        "Generate structured product content in {language} for the image. \
         Use only visible evidence. Return exactly this JSON structure:\n\
         {{\n  \"title\": string,\n  \"short_description\": string,\n  \
         \"long_description\": string,\n  \"bullet_points\": [string],\n  \
         \"attributes\": {{\n    \"color\": string,\n    \"material\": string,\n    \
         \"pattern\": string,\n    \"category\": string,\n    \"gender\": string\n  }}\n}}"
    )
}

impl OpenAiProvider {
    fn build_request(&self, image: &ImageInput, language: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            response_format: ResponseFormat {
                kind: "json_object".to_string(),
            },
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: MessageContent::Text(SYSTEM_PROMPT.to_string()),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: MessageContent::Parts(vec![
                        ChatContent::Text {
                            text: user_prompt(language),
                        },
                        ChatContent::ImageUrl {
                            image_url: ImageUrl {
                                url: image.data_url(),
                            },
                        },
                    ]),
                },
            ],
        }
    }
}

/// Parse the JSON object the model was asked to return.
fn parse_content(chat_resp: ChatResponse) -> Result<ProductContent, ProviderError> {
    let text = chat_resp
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| ProviderError::EmptyResponse {
            provider: "openai".to_string(),
            message: "empty choices array".to_string(),
        })?;

    serde_json::from_str(text.trim()).map_err(|e| ProviderError::EmptyResponse {
        provider: "openai".to_string(),
        message: format!("reply is not the requested JSON: {e}"),
    })
}

#[async_trait]
impl ProductDescriber for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn describe(
        &self,
        image: &ImageInput,
        language: &str,
    ) -> Result<ProductContent, ProviderError> {
        let body = self.build_request(image, language);

        let resp = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| retry::send_error("openai", e))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Http {
                provider: "openai".to_string(),
                message: format!("HTTP {status}: {text}"),
                status_code: Some(status.as_u16()),
            });
        }

        let chat_resp: ChatResponse = resp.json().await.map_err(|e| ProviderError::Http {
            provider: "openai".to_string(),
            message: format!("invalid response body: {e}"),
            status_code: None,
        })?;

        parse_content(chat_resp)
    }
}
