//! Free-form operator prompt endpoint.
//!
//! `POST /api/prompt` forwards an operator instruction to the generation
//! service under the short response budget and returns the raw completion.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::prompt::SIMULATION_SYSTEM_DIRECTIVE;
use crate::{AppState, Error};

// ---

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/prompt", post(handler))
}

#[derive(Debug, Deserialize)]
struct PromptRequest {
    #[serde(default)]
    prompt: Option<String>,
}

#[derive(Serialize)]
struct PromptResponse {
    #[serde(rename = "aiResponse")]
    ai_response: String,
}

async fn handler(
    State(state): State<AppState>,
    Json(req): Json<PromptRequest>,
) -> Result<Json<PromptResponse>, Error> {
    // ---
    let prompt = match req.prompt.as_deref().map(str::trim) {
        Some(p) if !p.is_empty() => p.to_string(),
        _ => return Err(Error::Validation("prompt required".to_string())),
    };

    info!("POST /api/prompt ({} chars)", prompt.len());

    let text = state
        .gateway
        .generate(SIMULATION_SYSTEM_DIRECTIVE, &prompt, state.config.prompt_max_tokens)
        .await?;

    Ok(Json(PromptResponse { ai_response: text }))
}
