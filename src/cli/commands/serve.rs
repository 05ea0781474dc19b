//! HTTP API server for the web frontend.
//!
//! Exposes note generation and the saved-note store over REST.

use crate::audio;
use crate::cli::Output;
use crate::config::{DetailLevel, NoteFormat, Settings};
use crate::error::NotatError;
use crate::orchestrator::Orchestrator;
use crate::store::{Note, NoteType};
use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::error;
use uuid::Uuid;

/// Shared application state.
struct AppState {
    orchestrator: Orchestrator,
    settings: Settings,
}

/// Run the HTTP API server.
pub async fn run_serve(
    host: Option<String>,
    port: Option<u16>,
    settings: Settings,
) -> anyhow::Result<()> {
    let host = host.unwrap_or_else(|| settings.server.host.clone());
    let port = port.unwrap_or(settings.server.port);
    let max_upload_bytes = settings.uploads.max_size_mb as usize * 1024 * 1024;

    let orchestrator = Orchestrator::new(settings.clone());

    let state = Arc::new(AppState {
        orchestrator,
        settings,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/generate-notes/youtube", post(generate_youtube))
        .route("/api/generate-notes/audio", post(generate_audio))
        .route("/api/notes", get(list_notes))
        .route("/api/notes/{id}", get(get_note))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(cors)
        .with_state(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Notat API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /api/health");
    Output::kv("YouTube Notes", "POST /api/generate-notes/youtube");
    Output::kv("Audio Notes", "POST /api/generate-notes/audio");
    Output::kv("List Notes", "GET  /api/notes");
    Output::kv("Get Note", "GET  /api/notes/:id");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct YoutubeRequest {
    url: String,
    #[serde(default)]
    detail_level: Option<String>,
    #[serde(default)]
    format_type: Option<String>,
}

#[derive(Serialize)]
struct NotesResponse {
    success: bool,
    notes: String,
    title: String,
    note_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    video_id: Option<String>,
}

#[derive(Serialize)]
struct NoteListResponse {
    notes: Vec<Note>,
    total: usize,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Map a pipeline error to an HTTP status.
fn status_for(err: &NotatError) -> StatusCode {
    match err {
        NotatError::InvalidUrl(_)
        | NotatError::InvalidUpload(_)
        | NotatError::TranscriptTooShort(_) => StatusCode::BAD_REQUEST,
        NotatError::NoTranscriptAvailable => StatusCode::NOT_FOUND,
        NotatError::MissingCredential(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: NotatError) -> axum::response::Response {
    error!("Request failed: {}", err);
    (
        status_for(&err),
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// Parse an optional request override, falling back to the configured value.
fn parse_or<T>(raw: Option<String>, default: T) -> Result<T, NotatError>
where
    T: std::str::FromStr<Err = String>,
{
    match raw {
        Some(s) => s.parse::<T>().map_err(NotatError::Config),
        None => Ok(default),
    }
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

async fn generate_youtube(
    State(state): State<Arc<AppState>>,
    Json(req): Json<YoutubeRequest>,
) -> impl IntoResponse {
    let detail: DetailLevel = match parse_or(req.detail_level, state.settings.notes.detail_level) {
        Ok(d) => d,
        Err(e) => return error_response(e),
    };
    let format: NoteFormat = match parse_or(req.format_type, state.settings.notes.format) {
        Ok(f) => f,
        Err(e) => return error_response(e),
    };

    let notes = match state
        .orchestrator
        .generate_from_url(&req.url, detail, format)
        .await
    {
        Ok(notes) => notes,
        Err(e) => return error_response(e),
    };

    let metadata = HashMap::from([
        ("url".to_string(), req.url),
        ("video_id".to_string(), notes.video_id.clone()),
        ("detail_level".to_string(), detail.to_string()),
        ("format_type".to_string(), format.to_string()),
    ]);

    match state
        .orchestrator
        .store()
        .add(NoteType::Youtube, &notes.title, &notes.document, metadata)
    {
        Ok(saved) => Json(NotesResponse {
            success: true,
            notes: notes.document,
            title: notes.title,
            note_id: saved.id,
            video_id: Some(notes.video_id),
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}

async fn generate_audio(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut detail_raw: Option<String> = None;
    let mut format_raw: Option<String> = None;
    let mut upload: Option<(String, Vec<u8>)> = None;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return error_response(NotatError::InvalidUpload(format!(
                    "Malformed multipart body: {}",
                    e
                )))
            }
        };

        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "audio" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(bytes) => upload = Some((filename, bytes.to_vec())),
                    Err(e) => {
                        return error_response(NotatError::InvalidUpload(format!(
                            "Failed to read audio field: {}",
                            e
                        )))
                    }
                }
            }
            "detail_level" => detail_raw = field.text().await.ok(),
            "format_type" => format_raw = field.text().await.ok(),
            _ => {}
        }
    }

    let Some((filename, bytes)) = upload else {
        return error_response(NotatError::InvalidUpload(
            "No audio file provided".to_string(),
        ));
    };

    let detail: DetailLevel = match parse_or(detail_raw, state.settings.notes.detail_level) {
        Ok(d) => d,
        Err(e) => return error_response(e),
    };
    let format: NoteFormat = match parse_or(format_raw, state.settings.notes.format) {
        Ok(f) => f,
        Err(e) => return error_response(e),
    };

    let upload_dir = state.settings.temp_dir().join("uploads");
    let path = match audio::save_upload(&upload_dir, &filename, &bytes) {
        Ok(path) => path,
        Err(e) => return error_response(e),
    };

    let result = state
        .orchestrator
        .generate_from_audio(&path, detail, format)
        .await;
    audio::cleanup_file(&path);

    let document = match result {
        Ok(document) => document,
        Err(e) => return error_response(e),
    };

    let title = format!("Meeting Notes - {}", filename);
    let metadata = HashMap::from([
        ("filename".to_string(), filename),
        ("detail_level".to_string(), detail.to_string()),
        ("format_type".to_string(), format.to_string()),
    ]);

    match state
        .orchestrator
        .store()
        .add(NoteType::Meet, &title, &document, metadata)
    {
        Ok(saved) => Json(NotesResponse {
            success: true,
            notes: document,
            title,
            note_id: saved.id,
            video_id: None,
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}

async fn list_notes(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.orchestrator.store().all() {
        Ok(notes) => Json(NoteListResponse {
            total: notes.len(),
            notes,
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}

async fn get_note(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let Ok(id) = id.parse::<Uuid>() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Invalid note id: {}", id),
            }),
        )
            .into_response();
    };

    match state.orchestrator.store().get(&id) {
        Ok(Some(note)) => Json(note).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Note not found: {}", id),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
