//! HTTP handlers for the Notes API
//!
//! Provides 4 REST endpoints:
//! - GET    /api/notes              — list notes in a space, with derived status
//! - POST   /api/notes              — create a note
//! - PATCH  /api/notes/:id          — edit note content
//! - PATCH  /api/notes/:id/archive  — archive a note, optional summary
//!
//! Every handler resolves the owner identity first, then routes the operation
//! to that owner's actor via the registry.

use crate::error::Error;
use crate::notes::types::*;
use crate::router::{IdentityResolver, NoteRegistry};
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Shared state for note handlers
#[derive(Clone)]
pub struct NotesState {
    pub registry: Arc<NoteRegistry>,
    pub identity: Arc<IdentityResolver>,
}

/// Create the notes router with all REST endpoints
pub fn notes_router(state: NotesState) -> Router {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/:id", patch(edit_note))
        .route("/api/notes/:id/archive", patch(archive_note))
        .with_state(state)
}

// =============================================================================
// Query parameter types
// =============================================================================

#[derive(Debug, Deserialize)]
struct ListNotesQuery {
    space: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/notes
async fn list_notes(
    State(state): State<NotesState>,
    headers: HeaderMap,
    Query(params): Query<ListNotesQuery>,
) -> Response {
    let result = async {
        let owner = state.identity.resolve(&headers)?;
        let actor = state.registry.get_or_create(&owner).await?;
        actor.list(params.space).await
    }
    .await;

    match result {
        Ok(notes) => (StatusCode::OK, Json(NotesResponse { notes })).into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /api/notes
async fn create_note(
    State(state): State<NotesState>,
    headers: HeaderMap,
    Json(request): Json<CreateNoteRequest>,
) -> Response {
    let result = async {
        let owner = state.identity.resolve(&headers)?;
        let actor = state.registry.get_or_create(&owner).await?;
        actor
            .create(request.content, request.intent, request.space)
            .await
    }
    .await;

    match result {
        Ok(note) => (StatusCode::OK, Json(note)).into_response(),
        Err(e) => error_response(e),
    }
}

/// PATCH /api/notes/:id
async fn edit_note(
    State(state): State<NotesState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(request): Json<EditNoteRequest>,
) -> Response {
    let result = async {
        let owner = state.identity.resolve(&headers)?;
        let actor = state.registry.get_or_create(&owner).await?;
        actor.edit(id, request.content).await
    }
    .await;

    match result {
        Ok(note) => (StatusCode::OK, Json(note)).into_response(),
        Err(e) => error_response(e),
    }
}

/// PATCH /api/notes/:id/archive
async fn archive_note(
    State(state): State<NotesState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(request): Json<ArchiveNoteRequest>,
) -> Response {
    let result = async {
        let owner = state.identity.resolve(&headers)?;
        let actor = state.registry.get_or_create(&owner).await?;
        actor.archive(id, request.summary).await
    }
    .await;

    match result {
        Ok(note) => (StatusCode::OK, Json(note)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Map a core error onto the wire taxonomy
fn error_response(err: Error) -> Response {
    match err {
        Error::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ApiError::not_found(msg))).into_response(),
        Error::BadRequest(msg) => {
            (StatusCode::BAD_REQUEST, Json(ApiError::bad_request(msg))).into_response()
        }
        other => {
            tracing::error!("Note operation failed: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::internal(other.to_string())),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{IdentityConfig, IdentityMode};
    use axum::body::Body;
    use axum::http::Request;
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    fn make_state(dir: &TempDir) -> NotesState {
        NotesState {
            registry: Arc::new(NoteRegistry::new(dir.path().to_path_buf())),
            identity: Arc::new(IdentityResolver::new(&IdentityConfig::default())),
        }
    }

    fn make_app(dir: &TempDir) -> Router {
        notes_router(make_state(dir))
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), 1024 * 64)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn post_note(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/notes")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_stamps_resolved_owner() {
        let dir = TempDir::new().unwrap();
        let app = make_app(&dir);

        let resp = app
            .oneshot(post_note(r#"{"content":"buy milk","ownerId":"attacker"}"#))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["ownerId"], "dev-user-001");
        assert_eq!(json["intent"], "thinking");
        assert_eq!(json["space"], "main");
        assert_eq!(json["status"], "alive");
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let dir = TempDir::new().unwrap();
        let app = make_app(&dir);

        let resp = app
            .clone()
            .oneshot(post_note(r#"{"content":"buy milk"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/notes?space=main")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        let notes = json["notes"].as_array().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0]["content"], "buy milk");
        assert_eq!(notes[0]["status"], "alive");
    }

    #[tokio::test]
    async fn test_list_unknown_space_is_empty() {
        let dir = TempDir::new().unwrap();
        let app = make_app(&dir);

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/notes?space=nowhere")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["notes"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_edit_missing_note_404() {
        let dir = TempDir::new().unwrap();
        let app = make_app(&dir);

        let resp = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri("/api/notes/no-such-id")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"content":"x"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json = body_json(resp).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_archive_flow() {
        let dir = TempDir::new().unwrap();
        let app = make_app(&dir);

        let resp = app
            .clone()
            .oneshot(post_note(r#"{"content":"ship it","intent":"building"}"#))
            .await
            .unwrap();
        let created = body_json(resp).await;
        let id = created["id"].as_str().unwrap().to_string();

        let resp = app
            .oneshot(
                Request::builder()
                    .method("PATCH")
                    .uri(format!("/api/notes/{}/archive", id))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"summary":"done"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["status"], "archived");
        assert_eq!(json["summary"], "done");
        assert!(json["closedAt"].is_i64());
    }

    #[tokio::test]
    async fn test_header_identity_missing_is_400() {
        let dir = TempDir::new().unwrap();
        let state = NotesState {
            registry: Arc::new(NoteRegistry::new(dir.path().to_path_buf())),
            identity: Arc::new(IdentityResolver::new(&IdentityConfig {
                mode: IdentityMode::Header,
                ..IdentityConfig::default()
            })),
        };
        let app = notes_router(state);

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/notes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_header_identity_scopes_owners() {
        let dir = TempDir::new().unwrap();
        let state = NotesState {
            registry: Arc::new(NoteRegistry::new(dir.path().to_path_buf())),
            identity: Arc::new(IdentityResolver::new(&IdentityConfig {
                mode: IdentityMode::Header,
                ..IdentityConfig::default()
            })),
        };
        let app = notes_router(state);

        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/notes")
                    .header("content-type", "application/json")
                    .header("x-owner-id", "alice")
                    .body(Body::from(r#"{"content":"alice's note"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/api/notes")
                    .header("x-owner-id", "bob")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(resp).await;
        assert_eq!(json["notes"].as_array().unwrap().len(), 0);
    }
}
