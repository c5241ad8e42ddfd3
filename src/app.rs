use crate::handlers;
use crate::session::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/authorize", post(handlers::authorize))
        .route("/api/logout", post(handlers::log_out))
        .route("/api/week", get(handlers::get_week))
        .route("/api/week/previous", post(handlers::previous_week))
        .route("/api/week/next", post(handlers::next_week))
        .with_state(state)
}
