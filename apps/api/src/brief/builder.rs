//! Role brief builder — snapshots a `RoleForm` into a `RoleBrief`.
//!
//! All derivations are pure functions of the form. The timestamp is passed in
//! so that two builds of the same form at the same instant are identical.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::brief::form::{RoleForm, Seniority};
use crate::brief::models::{
    AtsSection, BriefMeta, Requirements, RoleBrief, RoleSection, BRIEF_SOURCE, BRIEF_VERSION,
};

const SUMMARY_TAIL: &str = "You will build, evaluate, and deploy scalable AI/ML systems, \
partnering cross-functionally to deliver measurable impact.";

const FALLBACK_SLUG: &str = "ai-ml-role";

/// Builds a fresh brief from the current form state.
pub fn build_brief(form: &RoleForm, generated_at: DateTime<Utc>) -> RoleBrief {
    RoleBrief {
        meta: BriefMeta {
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            source: BRIEF_SOURCE.to_string(),
            version: BRIEF_VERSION,
        },
        role: RoleSection {
            title: form.title.clone(),
            location: (!form.location.is_empty()).then(|| form.location.clone()),
            employment_type: form.employment_type,
            seniority: form.seniority,
            years_experience: form.years_experience,
            remote_policy: form.remote_policy,
        },
        summary: summary(form),
        requirements: Requirements {
            core_skills: form.core_skills.clone(),
            nice_to_have: form.nice_to_have.clone(),
            tools: form.tools.clone(),
            domains: form.domains.clone(),
        },
        responsibilities: responsibilities(&form.responsibilities),
        ats: AtsSection {
            keywords: keywords(form),
            title_normalized: normalized_title(&form.title, form.seniority, form.years_experience),
            location_policy: form.remote_policy,
        },
    }
}

/// "{title}[ in {location}][ focused on {d1, d2}]. {tail}"
pub fn summary(form: &RoleForm) -> String {
    let mut sentence = form.title.clone();
    if !form.location.is_empty() {
        sentence.push_str(" in ");
        sentence.push_str(&form.location);
    }
    if !form.domains.is_empty() {
        sentence.push_str(" focused on ");
        sentence.push_str(&form.domains.as_slice().join(", "));
    }
    sentence.push_str(". ");
    sentence.push_str(SUMMARY_TAIL);
    sentence
}

/// Core skills, then tools, then domains, keeping the first occurrence of
/// each value.
pub fn keywords(form: &RoleForm) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in form
        .core_skills
        .iter()
        .chain(form.tools.iter())
        .chain(form.domains.iter())
    {
        if !out.contains(value) {
            out.push(value.clone());
        }
    }
    out
}

pub fn normalized_title(title: &str, seniority: Seniority, years: u32) -> String {
    format!("{title} ({}, {years}+ yrs)", seniority.as_str())
}

/// Lower-cased title with every run outside `[a-z0-9]` collapsed to one `-`
/// and no leading or trailing `-`. Falls back to `ai-ml-role`.
pub fn file_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// One entry per non-blank line; `\n` and `\r` both break lines.
pub fn responsibilities(text: &str) -> Vec<String> {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
