//! Axum route handlers for form sessions: field edits, tag input events,
//! and the two export actions (download/export and candidate matching).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::brief::builder::summary;
use crate::brief::export::{export_filename, write_export};
use crate::brief::handlers::download_response;
use crate::brief::{build_brief, RoleBrief};
use crate::errors::AppError;
use crate::models::notice::Notice;
use crate::session::{FormPatch, FormSession, TagField};
use crate::state::AppState;
use crate::tags::{Key, TagList};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    #[serde(flatten)]
    pub session: FormSession,
    /// Live preview of the brief's summary sentence.
    pub summary: String,
}

impl SessionResponse {
    fn new(session_id: Uuid, session: FormSession) -> Self {
        let summary = summary(&session.form);
        Self {
            session_id,
            session,
            summary,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct KeyPressRequest {
    /// Pending input text at the moment the key was pressed.
    #[serde(default)]
    pub pending: String,
    pub key: Key,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub suggestion: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveTagRequest {
    pub value: String,
}

/// Outcome of a tag edit. `values` is always the complete list; when
/// `changed` is true it replaces the caller's copy wholesale.
#[derive(Debug, Serialize)]
pub struct TagEditResponse {
    pub field: TagField,
    pub changed: bool,
    pub default_prevented: bool,
    pub pending: String,
    pub values: TagList,
}

impl TagEditResponse {
    fn new(field: TagField, changed: bool, default_prevented: bool, session: &FormSession) -> Self {
        Self {
            field,
            changed,
            default_prevented,
            pending: session.pending(field).to_string(),
            values: session.tags(field).clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExportResponse {
    pub filename: String,
    pub path: String,
    pub brief: RoleBrief,
    pub notice: Notice,
}

#[derive(Debug, Serialize)]
pub struct MatchResultResponse {
    pub matches: Vec<serde_json::Value>,
    pub notice: Notice,
}

fn session_not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}

async fn load_snapshot(state: &AppState, id: Uuid) -> Result<FormSession, AppError> {
    state
        .sessions
        .snapshot(id)
        .await
        .ok_or_else(|| session_not_found(id))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/sessions
///
/// Opens a session with the form's initial values.
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionResponse>) {
    let (id, session) = state.sessions.create(Default::default()).await;
    info!("Opened form session {id}");
    (StatusCode::CREATED, Json(SessionResponse::new(id, session)))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = load_snapshot(&state, id).await?;
    Ok(Json(SessionResponse::new(id, session)))
}

/// PATCH /api/v1/sessions/:id
pub async fn handle_patch_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<FormPatch>,
) -> Result<Json<SessionResponse>, AppError> {
    let ((), session) = state
        .sessions
        .update(id, |s| s.apply_patch(patch))
        .await
        .ok_or_else(|| session_not_found(id))?;
    Ok(Json(SessionResponse::new(id, session)))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.remove(id).await {
        return Err(session_not_found(id));
    }
    info!("Closed form session {id}");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/sessions/:id/tags/:field/keys
pub async fn handle_key_press(
    State(state): State<AppState>,
    Path((id, field)): Path<(Uuid, TagField)>,
    Json(req): Json<KeyPressRequest>,
) -> Result<Json<TagEditResponse>, AppError> {
    let (response, session) = state
        .sessions
        .update(id, |s| s.press_key(field, &req.pending, &req.key))
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(TagEditResponse::new(
        field,
        response.replaced.is_some(),
        response.default_prevented,
        &session,
    )))
}

/// POST /api/v1/sessions/:id/tags/:field/suggestions
pub async fn handle_pick_suggestion(
    State(state): State<AppState>,
    Path((id, field)): Path<(Uuid, TagField)>,
    Json(req): Json<SuggestionRequest>,
) -> Result<Json<TagEditResponse>, AppError> {
    let (changed, session) = state
        .sessions
        .update(id, |s| s.pick_suggestion(field, &req.suggestion))
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(TagEditResponse::new(field, changed, false, &session)))
}

/// POST /api/v1/sessions/:id/tags/:field/remove
pub async fn handle_remove_tag(
    State(state): State<AppState>,
    Path((id, field)): Path<(Uuid, TagField)>,
    Json(req): Json<RemoveTagRequest>,
) -> Result<Json<TagEditResponse>, AppError> {
    let (changed, session) = state
        .sessions
        .update(id, |s| s.remove_tag(field, &req.value))
        .await
        .ok_or_else(|| session_not_found(id))?;

    Ok(Json(TagEditResponse::new(field, changed, false, &session)))
}

/// GET /api/v1/sessions/:id/brief
///
/// Downloads a brief built from the session as it is right now.
pub async fn handle_download_session_brief(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let session = load_snapshot(&state, id).await?;
    download_response(&build_brief(&session.form, Utc::now()))
}

/// POST /api/v1/sessions/:id/export
///
/// Writes `<slug>.json` into the configured export directory.
pub async fn handle_export_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExportResponse>, AppError> {
    let session = load_snapshot(&state, id).await?;
    let brief = build_brief(&session.form, Utc::now());
    let path = write_export(&state.config.export_dir, &brief).await?;

    Ok(Json(ExportResponse {
        filename: export_filename(&brief.role.title),
        path: path.display().to_string(),
        brief,
        notice: Notice::brief_exported(),
    }))
}

/// POST /api/v1/sessions/:id/match
///
/// Sends a fresh brief to the matching service. A failure leaves the session
/// untouched and surfaces as a generic notice.
pub async fn handle_match_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MatchResultResponse>, AppError> {
    let session = load_snapshot(&state, id).await?;
    let brief = build_brief(&session.form, Utc::now());

    let response = state.matcher.find_matches(&brief).await?;
    info!(
        "Matching for session {id} returned {} candidates",
        response.matches.len()
    );

    Ok(Json(MatchResultResponse {
        notice: Notice::matches_found(response.matches.len()),
        matches: response.matches,
    }))
}
