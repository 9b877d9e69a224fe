use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, warn};

use sumd_core::{HealthResponse, SummarizeRequest, SummarizeResponse, MOCK_MODEL};
use sumd_inference::{build_prompts, classify, mock_summary, ClassifiedError, TEMPERATURE};

use crate::{AppState, SERVICE_NAME};

/// Error response in the `{"detail": ...}` shape. Detail strings are always
/// the sanitized per-category messages, never raw upstream text.
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn validation(err: sumd_core::Error) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: err.to_string(),
        }
    }
}

impl From<ClassifiedError> for ApiError {
    fn from(classified: ClassifiedError) -> Self {
        Self {
            status: StatusCode::from_u16(classified.status).unwrap_or(StatusCode::BAD_GATEWAY),
            detail: classified.detail.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

pub async fn root() -> impl IntoResponse {
    Json(json!({
        "name": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "health": "/health",
    }))
}

pub async fn health() -> impl IntoResponse {
    Json(HealthResponse::ok())
}

pub async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    payload.validate().map_err(ApiError::validation)?;

    let Some(provider) = &state.provider else {
        debug!("no API key configured, using mock summarizer");
        return Ok(Json(SummarizeResponse {
            summary: mock_summary(&payload.text),
            model_used: MOCK_MODEL.to_string(),
        }));
    };

    let model = payload.effective_model(&state.default_model).to_string();
    let (system_prompt, user_prompt) =
        build_prompts(&payload.text, payload.effective_language(), payload.length);

    match provider
        .complete(&model, &system_prompt, &user_prompt, TEMPERATURE)
        .await
    {
        Ok(summary) => Ok(Json(SummarizeResponse {
            summary,
            model_used: model,
        })),
        Err(err) => {
            warn!(provider = provider.name(), error = %err, "completion request failed");
            Err(ApiError::from(classify(&err)))
        }
    }
}
