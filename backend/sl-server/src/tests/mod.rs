mod mode;

use sl_devops::{CreationRequest, CreationResult, StoryCreator, StoryError, StoryResult};

use std::sync::Mutex;

use async_trait::async_trait;

/// Records accepted stories; fails remotely when `fail_with_status` is set.
#[derive(Default)]
pub(crate) struct RecordingCreator {
    pub(crate) calls: Mutex<Vec<(String, String)>>,
    pub(crate) fail_with_status: Option<u16>,
}

#[async_trait]
impl StoryCreator for RecordingCreator {
    async fn create_story(&self, title: &str, description: &str) -> StoryResult<CreationResult> {
        let request = CreationRequest::new(title, description)?;

        let mut calls = self.calls.lock().unwrap();
        calls.push((
            request.title().to_string(),
            request.description().to_string(),
        ));

        if let Some(status) = self.fail_with_status {
            return Err(StoryError::from_status(status, "remote says no"));
        }

        Ok(CreationResult {
            item_id: 40 + calls.len() as u64,
            item_url: format!("https://example/{}", 40 + calls.len()),
            title: request.title().to_string(),
        })
    }
}
