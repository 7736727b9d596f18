pub mod health;
pub mod metrics;
pub mod pages;
pub mod quotes;

use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Largest accepted request body. Quote forms are a few hundred bytes.
const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Build the site router: pages, quote endpoints and health.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::home))
        .route("/services", get(pages::services))
        .route("/contact", get(pages::contact).post(pages::submit_contact))
        .route("/api/v1/quotes", post(quotes::submit_quote))
        .route("/health", get(health::health_check))
        .fallback(pages::not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
}
