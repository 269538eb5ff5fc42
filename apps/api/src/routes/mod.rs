pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route("/api/v1/matches/score", post(handlers::handle_score))
        .route("/api/v1/matches/rank", post(handlers::handle_rank))
        // Candidate store
        .route("/api/v1/candidates", post(handlers::handle_create_candidate))
        .route(
            "/api/v1/candidates/:id",
            get(handlers::handle_get_candidate).put(handlers::handle_update_candidate),
        )
        // Gig store
        .route("/api/v1/gigs", post(handlers::handle_create_gig))
        .route(
            "/api/v1/gigs/:id",
            get(handlers::handle_get_gig).put(handlers::handle_update_gig),
        )
        .route("/api/v1/gigs/:id/matches", get(handlers::handle_gig_matches))
        .with_state(state)
}
