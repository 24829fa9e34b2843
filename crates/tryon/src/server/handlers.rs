//! Route handlers.

use axum::body::Body;
use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::Response;
use axum::Json;
use serde_json::{json, Value};
use tryon_core::{ProductContent, TryOnRequest};

use super::error::ApiError;
use super::{AppState, MAPPED_SIZE_HEADER};

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "online",
        "model": state.tryon.model(),
    }))
}

/// `POST /generate-tryon`
///
/// Responds with the generated image and the translated size in
/// `X-Mapped-Size`.
pub async fn generate_tryon(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut form = TryOnForm::default();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "user_image" => {
                let bytes = field.bytes().await?;
                // Browsers send an empty part when no file was picked
                if !bytes.is_empty() {
                    form.user_image = Some(bytes.to_vec());
                }
            }
            "gender" => form.gender = Some(field.text().await?),
            "category" => form.category = Some(field.text().await?),
            "current_brand" => form.current_brand = Some(field.text().await?),
            "current_size" => form.current_size = Some(field.text().await?),
            "target_brand" => form.target_brand = Some(field.text().await?),
            other => tracing::debug!("Ignoring unknown form field '{other}'"),
        }
    }

    let outcome = state.tryon.run(form.into_request()?).await?;

    Response::builder()
        .header(header::CONTENT_TYPE, outcome.mime_type)
        .header(MAPPED_SIZE_HEADER, &outcome.mapped_size)
        .body(Body::from(outcome.image))
        .map_err(|e| ApiError::Internal(e.to_string()))
}

/// `POST /generate-description`
pub async fn generate_description(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ProductContent>, ApiError> {
    let mut image = None;
    let mut language = None;
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => image = Some(field.bytes().await?.to_vec()),
            "language" => language = Some(field.text().await?),
            _ => {}
        }
    }

    let image = image.ok_or(ApiError::MissingField("image"))?;
    let content = state.describe.describe(image, language.as_deref()).await?;
    Ok(Json(content))
}

#[derive(Default)]
struct TryOnForm {
    gender: Option<String>,
    category: Option<String>,
    current_brand: Option<String>,
    current_size: Option<String>,
    target_brand: Option<String>,
    user_image: Option<Vec<u8>>,
}

impl TryOnForm {
    fn into_request(self) -> Result<TryOnRequest, ApiError> {
        Ok(TryOnRequest {
            gender: self.gender.ok_or(ApiError::MissingField("gender"))?,
            category: self.category.ok_or(ApiError::MissingField("category"))?,
            current_brand: self
                .current_brand
                .ok_or(ApiError::MissingField("current_brand"))?,
            current_size: self
                .current_size
                .ok_or(ApiError::MissingField("current_size"))?,
            target_brand: self
                .target_brand
                .ok_or(ApiError::MissingField("target_brand"))?,
            user_image: self.user_image,
        })
    }
}
