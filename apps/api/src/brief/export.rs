use std::path::{Path, PathBuf};

use tracing::info;

use crate::brief::builder::file_slug;
use crate::brief::models::RoleBrief;

/// Pretty-printed (2-space indent) UTF-8 JSON, as offered for download.
pub fn to_pretty_json(brief: &RoleBrief) -> serde_json::Result<String> {
    serde_json::to_string_pretty(brief)
}

/// Compact JSON, as embedded in the `job_description` field of a match request.
pub fn to_compact_json(brief: &RoleBrief) -> serde_json::Result<String> {
    serde_json::to_string(brief)
}

pub fn export_filename(title: &str) -> String {
    format!("{}.json", file_slug(title))
}

/// Writes the brief to `<dir>/<slug>.json`, creating `dir` if needed.
/// An existing file with the same name is overwritten.
pub async fn write_export(dir: &Path, brief: &RoleBrief) -> anyhow::Result<PathBuf> {
    let body = to_pretty_json(brief)?;
    tokio::fs::create_dir_all(dir).await?;

    let path = dir.join(export_filename(&brief.role.title));
    tokio::fs::write(&path, body.as_bytes()).await?;

    info!("Exported role brief to {}", path.display());
    Ok(path)
}
