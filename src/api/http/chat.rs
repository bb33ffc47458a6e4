// src/api/http/chat.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use tracing::{error, info};

use crate::api::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::pipeline::ChatRequest;

pub async fn chat_handler(
    State(app_state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    let result: ApiResult<_> = async {
        info!("chat request ({} chars)", request.message.len());

        let response = app_state.pipeline.run(request).await.map_err(|e| {
            error!("completion upstream failed: {e:#}");
            ApiError::bad_gateway("Completion upstream failed")
        })?;

        Ok(Json(response))
    }
    .await;

    match result {
        Ok(response) => response.into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}
