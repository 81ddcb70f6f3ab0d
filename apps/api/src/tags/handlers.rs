use axum::Json;
use serde::Serialize;

use crate::tags::presets::{DOMAIN_PRESETS, SKILL_PRESETS, TOOL_PRESETS};

#[derive(Debug, Serialize)]
pub struct PresetsResponse {
    pub core_skills: &'static [&'static str],
    pub nice_to_have: &'static [&'static str],
    pub tools: &'static [&'static str],
    pub domains: &'static [&'static str],
}

/// GET /api/v1/presets
pub async fn handle_presets() -> Json<PresetsResponse> {
    Json(PresetsResponse {
        core_skills: SKILL_PRESETS,
        nice_to_have: &[],
        tools: TOOL_PRESETS,
        domains: DOMAIN_PRESETS,
    })
}
