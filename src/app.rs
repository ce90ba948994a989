use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/today", get(handlers::get_today))
        .route(
            "/api/challenges",
            get(handlers::list_challenges).post(handlers::create_challenge),
        )
        .route("/api/challenges/:id", get(handlers::get_challenge))
        .route("/api/challenges/:id/join", post(handlers::join_challenge))
        .route("/api/challenges/:id/check-in", post(handlers::check_in))
        .route("/api/challenges/:id/undo", post(handlers::undo_check_in))
        .route("/api/challenges/:id/leaderboard", get(handlers::get_leaderboard))
        .route(
            "/api/challenges/:id/participants/:username",
            get(handlers::get_participant),
        )
        .route(
            "/api/challenges/:id/participants/:username/calendar",
            get(handlers::get_calendar),
        )
        .with_state(state)
}
