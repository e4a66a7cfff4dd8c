use crate::{MAX_TITLE_LENGTH, StoryError, StoryResult};

/// A validated, trimmed title/description pair.
///
/// Only constructible through [`CreationRequest::new`], so holding one means
/// the title is non-empty and within the remote length limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreationRequest {
    title: String,
    description: String,
}

impl CreationRequest {
    #[track_caller]
    pub fn new(title: &str, description: &str) -> StoryResult<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoryError::validation("title required"));
        }

        let title_length = title.chars().count();
        if title_length > MAX_TITLE_LENGTH {
            return Err(StoryError::validation(format!(
                "title must be at most {MAX_TITLE_LENGTH} characters, got {title_length}"
            )));
        }

        Ok(Self {
            title: title.to_string(),
            description: description.trim().to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
