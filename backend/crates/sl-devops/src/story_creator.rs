use crate::{CreationResult, StoryResult};

use async_trait::async_trait;

/// The one action every front-end calls.
///
/// Takes raw caller input; implementations validate it before doing any I/O.
#[async_trait]
pub trait StoryCreator: Send + Sync {
    async fn create_story(&self, title: &str, description: &str) -> StoryResult<CreationResult>;
}
