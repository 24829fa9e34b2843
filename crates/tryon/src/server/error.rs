//! HTTP error mapping.
//!
//! Bodies keep the shapes the storefront front end already parses:
//! `{"detail": ...}` for most failures and
//! `{"error": "Size mapping not found", "confidence": "LOW"}` for an
//! unmappable size.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tryon_core::{DescribeError, ProviderError, TryOnError};

/// Any failure a handler can return.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    TryOn(#[from] TryOnError),

    #[error(transparent)]
    Describe(#[from] DescribeError),

    /// A required form field was not sent
    #[error("Missing form field: {0}")]
    MissingField(&'static str),

    /// The multipart body could not be read
    #[error("Invalid form data: {1}")]
    BadForm(StatusCode, String),

    /// Building the response failed
    #[error("Engine Error: {0}")]
    Internal(String),
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        Self::BadForm(err.status(), err.body_text())
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::TryOn(err) => match err {
                TryOnError::InvalidInput(_)
                | TryOnError::InvalidImage(_)
                | TryOnError::DefaultModelMissing(_)
                | TryOnError::SizeMappingNotFound { .. } => StatusCode::BAD_REQUEST,
                TryOnError::GarmentNotFound { .. } => StatusCode::NOT_FOUND,
                TryOnError::Asset { .. } | TryOnError::Provider(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Describe(err) => match err {
                DescribeError::UnsupportedLanguage(_)
                | DescribeError::FileTooLarge { .. }
                | DescribeError::InvalidImage(_) => StatusCode::BAD_REQUEST,
                DescribeError::Provider(ProviderError::NotConfigured(_)) => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                DescribeError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::MissingField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::BadForm(status, _) => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> serde_json::Value {
        match self {
            Self::TryOn(TryOnError::SizeMappingNotFound { .. }) => json!({
                "error": "Size mapping not found",
                "confidence": "LOW",
            }),
            Self::TryOn(TryOnError::GarmentNotFound { .. }) => json!({
                "detail": "Garment not found in inventory.",
            }),
            _ => json!({ "detail": self.to_string() }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{status}: {self}");
        }
        (status, Json(self.body())).into_response()
    }
}
