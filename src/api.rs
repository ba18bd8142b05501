//! Unified API router for embernote
//!
//! Merges the module routers into a single axum `Router` with CORS and a
//! health probe, ready to be served by `axum::serve`.
//!
//! ## Endpoint Map
//!
//! | Prefix                       | Module | Description                        |
//! |------------------------------|--------|------------------------------------|
//! | `/health`                    | api    | Load balancer health probe         |
//! | `/api/notes`                 | notes  | List, create                       |
//! | `/api/notes/:id`             | notes  | Edit content                       |
//! | `/api/notes/:id/archive`     | notes  | Archive with optional summary      |

use crate::notes::{notes_router, NotesState};
use axum::{
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

/// Build the complete embernote HTTP application
pub fn build_app(notes_state: NotesState, cors_origins: &[String]) -> Router {
    let cors = build_cors(cors_origins);

    Router::new()
        // Root-level probe
        .route("/health", get(health_check))
        // Notes API
        .merge(notes_router(notes_state))
        // CORS
        .layer(cors)
}

// =============================================================================
// Root handlers
// =============================================================================

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

// =============================================================================
// CORS
// =============================================================================

fn build_cors(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT]);

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        let parsed: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(parsed)
    }
}
