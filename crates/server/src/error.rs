use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidPayload(#[from] JsonRejection),

    #[error("PDF generation failed: {0}")]
    RenderFailed(String),
}

impl From<axis_form::FormError> for ApiError {
    fn from(err: axis_form::FormError) -> Self {
        Self::RenderFailed(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::RenderFailed(format!("render task failed: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::InvalidPayload(ref rejection) => {
                tracing::debug!("Rejected payload: {}", rejection.body_text());
                (rejection.status(), rejection.body_text())
            }
            Self::RenderFailed(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PDF generation failed".to_string(),
                )
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
