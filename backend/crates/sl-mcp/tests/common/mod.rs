#![allow(dead_code)]

use sl_devops::{CreationRequest, CreationResult, StoryCreator, StoryError, StoryResult};
use sl_mcp::McpProtocolHandler;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

/// In-memory story creator that validates like the real one and records
/// every accepted request.
#[derive(Default)]
pub struct FakeCreator {
    calls: Mutex<Vec<(String, String)>>,
    reject_with_status: Option<u16>,
}

impl FakeCreator {
    /// Every valid request fails as if the remote service answered `status`.
    pub fn rejecting(status: u16) -> Self {
        Self {
            reject_with_status: Some(status),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StoryCreator for FakeCreator {
    async fn create_story(&self, title: &str, description: &str) -> StoryResult<CreationResult> {
        let request = CreationRequest::new(title, description)?;

        let mut calls = self.calls.lock().unwrap();
        calls.push((
            request.title().to_string(),
            request.description().to_string(),
        ));

        if let Some(status) = self.reject_with_status {
            return Err(StoryError::from_status(status, ""));
        }

        let item_id = calls.len() as u64;
        Ok(CreationResult {
            item_id,
            item_url: format!("https://dev.azure.com/contoso/web/_workitems/edit/{item_id}"),
            title: request.title().to_string(),
        })
    }
}

pub fn handler_with(creator: Arc<FakeCreator>) -> McpProtocolHandler {
    McpProtocolHandler::new(creator)
}
