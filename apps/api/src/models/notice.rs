use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeVariant {
    Default,
    Destructive,
}

/// A user-facing toast: short title plus one-line description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    fn new(title: &str, description: impl Into<String>, variant: NoticeVariant) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            variant,
        }
    }

    pub fn brief_exported() -> Self {
        Self::new(
            "Job JSON downloaded",
            "Your AI/ML job brief is ready.",
            NoticeVariant::Default,
        )
    }

    pub fn matches_found(count: usize) -> Self {
        Self::new(
            "Matching candidates found",
            format!("Retrieved {count} candidates"),
            NoticeVariant::Default,
        )
    }

    pub fn match_failed() -> Self {
        Self::new("Error", "Could not match candidates", NoticeVariant::Destructive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_found_counts() {
        assert_eq!(Notice::matches_found(0).description, "Retrieved 0 candidates");
        assert_eq!(Notice::matches_found(5).description, "Retrieved 5 candidates");
    }

    #[test]
    fn test_match_failed_is_destructive() {
        let notice = Notice::match_failed();
        assert_eq!(notice.variant, NoticeVariant::Destructive);
        assert_eq!(notice.description, "Could not match candidates");
    }
}
