//! Review history endpoint.
//!
//! `GET /api/reviews` returns the newest advisory results. Review text is
//! truncated to a preview length here, at the presentation boundary; the
//! stored entries always keep their full text.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::AdvisoryResult;
use crate::AppState;

// ---

/// Characters of review text shown per history entry.
const PREVIEW_LEN: usize = 200;

const DEFAULT_LIMIT: usize = 5;

pub fn router() -> Router<AppState> {
    // ---
    Router::new().route("/api/reviews", get(handler))
}

#[derive(Debug, Deserialize)]
struct HistoryQuery {
    limit: Option<usize>,
}

#[derive(Serialize)]
struct ReviewPreview {
    id: String,
    neighborhood: String,
    review: String,
    timestamp: DateTime<Utc>,
}

#[derive(Serialize)]
struct HistoryResponse {
    reviews: Vec<ReviewPreview>,
}

async fn handler(
    Query(params): Query<HistoryQuery>,
    State(state): State<AppState>,
) -> Json<HistoryResponse> {
    // ---
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let reviews: Vec<ReviewPreview> = state
        .history
        .recent(limit)
        .into_iter()
        .map(preview)
        .collect();

    tracing::debug!("Serving {} of {} recorded reviews", reviews.len(), state.history.len());
    Json(HistoryResponse { reviews })
}

fn preview(result: AdvisoryResult) -> ReviewPreview {
    // ---
    let review = if result.review.chars().count() > PREVIEW_LEN {
        let mut truncated: String = result.review.chars().take(PREVIEW_LEN).collect();
        truncated.push_str("...");
        truncated
    } else {
        result.review
    };

    ReviewPreview {
        id: result.id,
        neighborhood: result.neighborhood,
        review,
        timestamp: result.timestamp,
    }
}
