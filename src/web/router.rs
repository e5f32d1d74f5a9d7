use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::web::handlers;
use crate::web::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard_page))
        .route("/export.csv", get(handlers::export_csv))
        .route("/api/sources", get(handlers::api_sources))
        .route("/api/events", get(handlers::api_events))
        .route("/api/calendar", get(handlers::api_calendar))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
