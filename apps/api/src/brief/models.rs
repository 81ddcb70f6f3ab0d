//! The exported role brief. Field order and names are the compatibility
//! contract with downstream consumers; do not reorder.

use serde::{Deserialize, Serialize};

use crate::brief::form::{EmploymentType, RemotePolicy, Seniority};
use crate::tags::TagList;

pub const BRIEF_SOURCE: &str = "AI/ML Job JSON Generator";
pub const BRIEF_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleBrief {
    pub meta: BriefMeta,
    pub role: RoleSection,
    pub summary: String,
    pub requirements: Requirements,
    pub responsibilities: Vec<String>,
    pub ats: AtsSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BriefMeta {
    /// ISO-8601 UTC, millisecond precision.
    pub generated_at: String,
    pub source: String,
    pub version: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSection {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub employment_type: EmploymentType,
    pub seniority: Seniority,
    pub years_experience: u32,
    pub remote_policy: RemotePolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirements {
    pub core_skills: TagList,
    pub nice_to_have: TagList,
    pub tools: TagList,
    pub domains: TagList,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsSection {
    pub keywords: Vec<String>,
    pub title_normalized: String,
    pub location_policy: RemotePolicy,
}
