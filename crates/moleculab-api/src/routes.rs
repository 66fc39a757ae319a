use crate::{handlers, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Discovery endpoints
        .route("/api/discovery/generate", post(handlers::generate))
        .route(
            "/api/discovery/predict-interactions",
            post(handlers::predict),
        )
        .route("/api/discovery/toxicity", post(handlers::toxicity))
        .route("/api/discovery/synthesis", post(handlers::synthesis))
        .route("/api/discovery/explain", post(handlers::explain))
        .route("/api/discovery/identify", post(handlers::identify))
        .route("/api/discovery/feedback", post(handlers::feedback))
        // Add state
        .with_state(state)
        // Add middleware
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(TraceLayer::new_for_http())
}
