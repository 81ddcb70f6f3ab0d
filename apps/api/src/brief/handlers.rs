//! Axum route handlers for stateless brief construction.

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::brief::export::{export_filename, to_pretty_json};
use crate::brief::{build_brief, RoleBrief, RoleForm};
use crate::errors::AppError;

/// POST /api/v1/briefs
///
/// Builds a brief from a full form body. Missing fields take the form defaults.
pub async fn handle_build_brief(Json(form): Json<RoleForm>) -> Json<RoleBrief> {
    Json(build_brief(&form, Utc::now()))
}

/// POST /api/v1/briefs/download
pub async fn handle_download_brief(Json(form): Json<RoleForm>) -> Result<Response, AppError> {
    download_response(&build_brief(&form, Utc::now()))
}

/// Pretty-printed brief served as an attachment named `<slug>.json`.
pub fn download_response(brief: &RoleBrief) -> Result<Response, AppError> {
    let body = to_pretty_json(brief)?;
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_filename(&brief.role.title)
    );

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
