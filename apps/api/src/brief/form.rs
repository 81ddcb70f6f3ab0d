use serde::{Deserialize, Serialize};

use crate::tags::TagList;

pub const MAX_YEARS_EXPERIENCE: u32 = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
    Internship,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    Junior,
    #[default]
    Mid,
    Senior,
    Staff,
}

impl Seniority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Seniority::Junior => "junior",
            Seniority::Mid => "mid",
            Seniority::Senior => "senior",
            Seniority::Staff => "staff",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemotePolicy {
    Remote,
    #[default]
    Hybrid,
    Onsite,
}

/// Every editable field of the role form.
///
/// Missing fields in an incoming JSON body take the form's initial values,
/// so a client can post only what the user touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleForm {
    pub title: String,
    /// Empty means "no location".
    pub location: String,
    pub employment_type: EmploymentType,
    pub seniority: Seniority,
    pub years_experience: u32,
    pub remote_policy: RemotePolicy,
    pub core_skills: TagList,
    pub nice_to_have: TagList,
    pub tools: TagList,
    pub domains: TagList,
    /// Raw multi-line text, one responsibility per line.
    pub responsibilities: String,
}

impl Default for RoleForm {
    fn default() -> Self {
        Self {
            title: "Machine Learning Engineer".to_string(),
            location: String::new(),
            employment_type: EmploymentType::FullTime,
            seniority: Seniority::Mid,
            years_experience: 3,
            remote_policy: RemotePolicy::Hybrid,
            core_skills: TagList::from_values(["Python", "PyTorch"]),
            nice_to_have: TagList::new(),
            tools: TagList::from_values(["Hugging Face"]),
            domains: TagList::from_values(["Generative AI", "LLMs"]),
            responsibilities: String::new(),
        }
    }
}

/// Coerces raw years-of-experience input the way a numeric form field does:
/// the leading integer of the text is taken, anything non-numeric becomes 0,
/// and the result is clamped to 0..=50.
pub fn coerce_years(raw: &str) -> u32 {
    let text = raw.trim_start();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let leading: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if negative || leading.is_empty() {
        return 0;
    }

    // Anything too long to parse is far above the cap anyway.
    leading
        .parse::<u32>()
        .map(clamp_years)
        .unwrap_or(MAX_YEARS_EXPERIENCE)
}

pub fn clamp_years(years: u32) -> u32 {
    years.min(MAX_YEARS_EXPERIENCE)
}
