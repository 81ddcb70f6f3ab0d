use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::brief::form::{clamp_years, coerce_years, EmploymentType, RemotePolicy, Seniority};
use crate::brief::RoleForm;
use crate::tags::presets::{DOMAIN_PRESETS, SKILL_PRESETS, TOOL_PRESETS};
use crate::tags::{Key, KeyResponse, TagInput, TagList};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagField {
    CoreSkills,
    NiceToHave,
    Tools,
    Domains,
}

impl TagField {
    pub fn suggestions(self) -> &'static [&'static str] {
        match self {
            TagField::CoreSkills => SKILL_PRESETS,
            TagField::Tools => TOOL_PRESETS,
            TagField::Domains => DOMAIN_PRESETS,
            TagField::NiceToHave => &[],
        }
    }
}

/// Pending text for each tag input.
#[derive(Debug, Clone, Serialize)]
pub struct TagInputs {
    pub core_skills: TagInput,
    pub nice_to_have: TagInput,
    pub tools: TagInput,
    pub domains: TagInput,
}

impl Default for TagInputs {
    fn default() -> Self {
        Self {
            core_skills: TagInput::with_suggestions(TagField::CoreSkills.suggestions()),
            nice_to_have: TagInput::new(),
            tools: TagInput::with_suggestions(TagField::Tools.suggestions()),
            domains: TagInput::with_suggestions(TagField::Domains.suggestions()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FormSession {
    pub form: RoleForm,
    pub inputs: TagInputs,
}

impl FormSession {
    pub fn new(form: RoleForm) -> Self {
        Self {
            form,
            inputs: TagInputs::default(),
        }
    }

    pub fn tags(&self, field: TagField) -> &TagList {
        match field {
            TagField::CoreSkills => &self.form.core_skills,
            TagField::NiceToHave => &self.form.nice_to_have,
            TagField::Tools => &self.form.tools,
            TagField::Domains => &self.form.domains,
        }
    }

    /// Split borrow of one tag list and the input that edits it.
    fn field_mut(&mut self, field: TagField) -> (&mut TagList, &mut TagInput) {
        match field {
            TagField::CoreSkills => (&mut self.form.core_skills, &mut self.inputs.core_skills),
            TagField::NiceToHave => (&mut self.form.nice_to_have, &mut self.inputs.nice_to_have),
            TagField::Tools => (&mut self.form.tools, &mut self.inputs.tools),
            TagField::Domains => (&mut self.form.domains, &mut self.inputs.domains),
        }
    }

    pub fn pending(&self, field: TagField) -> &str {
        match field {
            TagField::CoreSkills => self.inputs.core_skills.pending(),
            TagField::NiceToHave => self.inputs.nice_to_have.pending(),
            TagField::Tools => self.inputs.tools.pending(),
            TagField::Domains => self.inputs.domains.pending(),
        }
    }

    /// Sets the pending text of `field`'s input, then handles `key`.
    pub fn press_key(&mut self, field: TagField, pending: &str, key: &Key) -> KeyResponse {
        let (values, input) = self.field_mut(field);
        input.set_pending(pending);
        let response = input.on_key(values, key);
        if let Some(next) = &response.replaced {
            debug!(?field, ?key, len = next.len(), "Tag list replaced");
            *values = next.clone();
        }
        response
    }

    pub fn pick_suggestion(&mut self, field: TagField, suggestion: &str) -> bool {
        let (values, input) = self.field_mut(field);
        let replaced = input.pick_suggestion(values, suggestion);
        Self::apply(values, replaced)
    }

    pub fn remove_tag(&mut self, field: TagField, value: &str) -> bool {
        let (values, input) = self.field_mut(field);
        let replaced = input.remove_tag(values, value);
        Self::apply(values, replaced)
    }

    /// Stores a "list replaced" payload wholesale.
    fn apply(values: &mut TagList, replaced: Option<TagList>) -> bool {
        match replaced {
            Some(next) => {
                *values = next;
                true
            }
            None => false,
        }
    }

    pub fn apply_patch(&mut self, patch: FormPatch) {
        let form = &mut self.form;
        if let Some(title) = patch.title {
            form.title = title;
        }
        if let Some(location) = patch.location {
            form.location = location;
        }
        if let Some(employment_type) = patch.employment_type {
            form.employment_type = employment_type;
        }
        if let Some(seniority) = patch.seniority {
            form.seniority = seniority;
        }
        if let Some(years) = patch.years_experience {
            form.years_experience = years.coerce();
        }
        if let Some(remote_policy) = patch.remote_policy {
            form.remote_policy = remote_policy;
        }
        if let Some(responsibilities) = patch.responsibilities {
            form.responsibilities = responsibilities;
        }
    }
}

/// Years as typed into the form: a number or raw text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum YearsInput {
    Number(i64),
    Text(String),
}

impl YearsInput {
    pub fn coerce(&self) -> u32 {
        match self {
            YearsInput::Number(n) => u32::try_from(*n).map(clamp_years).unwrap_or(0),
            YearsInput::Text(raw) => coerce_years(raw),
        }
    }
}

/// Partial update of the scalar form fields. Tag lists are edited through
/// the tag input operations only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormPatch {
    pub title: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    pub seniority: Option<Seniority>,
    pub years_experience: Option<YearsInput>,
    pub remote_policy: Option<RemotePolicy>,
    pub responsibilities: Option<String>,
}
