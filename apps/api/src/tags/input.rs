//! Keyboard-driven tag editor.
//!
//! `TagInput` never owns the tag list. Every operation reads the owner's
//! current list and, when something changes, answers with the complete
//! replacement list. Callers must store that payload wholesale; there are no
//! incremental add/remove events.

use serde::{Deserialize, Serialize};

use crate::tags::TagList;

/// A key pressed while the pending-input field has focus.
/// Wire values follow DOM `KeyboardEvent.key` names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Key {
    Enter,
    Tab,
    Comma,
    Backspace,
    Other(String),
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Enter" => Key::Enter,
            "Tab" => Key::Tab,
            "," => Key::Comma,
            "Backspace" => Key::Backspace,
            _ => Key::Other(name),
        }
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        match key {
            Key::Enter => "Enter".to_string(),
            Key::Tab => "Tab".to_string(),
            Key::Comma => ",".to_string(),
            Key::Backspace => "Backspace".to_string(),
            Key::Other(name) => name,
        }
    }
}

/// Result of handling one key press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyResponse {
    /// The key's default text-editing action must be suppressed.
    pub default_prevented: bool,
    /// Full replacement list when the key changed the tags.
    pub replaced: Option<TagList>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TagInput {
    pending: String,
    #[serde(skip)]
    suggestions: &'static [&'static str],
}

impl TagInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suggestions(suggestions: &'static [&'static str]) -> Self {
        Self {
            pending: String::new(),
            suggestions,
        }
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Default text editing on the pending field.
    pub fn set_pending(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Adds `raw` (trimmed) to `values`. Blank or already-present tags are a
    /// silent no-op that leaves the pending buffer alone.
    pub fn add_tag(&mut self, values: &TagList, raw: &str) -> Option<TagList> {
        let mut next = values.clone();
        if !next.push_unique(raw) {
            return None;
        }
        self.pending.clear();
        Some(next)
    }

    pub fn remove_tag(&mut self, values: &TagList, value: &str) -> Option<TagList> {
        let mut next = values.clone();
        next.remove(value).then_some(next)
    }

    pub fn on_key(&mut self, values: &TagList, key: &Key) -> KeyResponse {
        match key {
            Key::Enter | Key::Tab | Key::Comma => {
                let pending = self.pending.clone();
                KeyResponse {
                    default_prevented: true,
                    replaced: self.add_tag(values, &pending),
                }
            }
            Key::Backspace if self.pending.is_empty() && !values.is_empty() => {
                let mut next = values.clone();
                next.pop();
                KeyResponse {
                    default_prevented: false,
                    replaced: Some(next),
                }
            }
            Key::Backspace | Key::Other(_) => KeyResponse {
                default_prevented: false,
                replaced: None,
            },
        }
    }

    /// Clicking a suggestion chip. Values outside the configured suggestion
    /// list are ignored.
    pub fn pick_suggestion(&mut self, values: &TagList, suggestion: &str) -> Option<TagList> {
        if !self.suggestions.iter().any(|s| *s == suggestion) {
            return None;
        }
        self.add_tag(values, suggestion)
    }
}
