use crate::{CoreError, Result as CoreErrorResult};

/// Validated title/content pair for a note create or update.
///
/// Construction trims both fields and rejects empty values, so a draft that
/// reaches the remote store is always non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteDraft {
    title: String,
    content: String,
}

impl NoteDraft {
    #[track_caller]
    pub fn new(title: &str, content: &str) -> CoreErrorResult<Self> {
        let title = title.trim();
        let content = content.trim();

        if title.is_empty() {
            return Err(CoreError::validation("note title must not be empty"));
        }
        if content.is_empty() {
            return Err(CoreError::validation("note content must not be empty"));
        }

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
