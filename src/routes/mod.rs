use axum::Router;

use crate::AppState;

mod health;
mod history;
mod neighborhoods;
mod prompt;
mod review;
mod sensors;

// ---

pub fn router(state: AppState) -> Router {
    // ---
    Router::new()
        .merge(health::router())
        .merge(prompt::router())
        .merge(review::router())
        .merge(sensors::router())
        .merge(neighborhoods::router())
        .merge(history::router())
        .with_state(state)
}
