//! Azure DevOps user story creation.
//!
//! One linear pipeline per call: validate the request, build the JSON patch
//! payload, POST it once, and classify whatever comes back. Nothing is
//! retried and nothing is kept between calls.

mod creation_request;
mod creation_result;
mod endpoint;
mod error;
mod patch_operation;
mod response;
mod story_creator;
mod work_item_creator;

#[cfg(test)]
mod tests;

pub use creation_request::CreationRequest;
pub use creation_result::CreationResult;
pub use endpoint::work_items_url;
pub use error::{Result as StoryResult, StoryError};
pub use patch_operation::{PatchOp, PatchOperation, build_payload, format_description};
pub use response::interpret_response;
pub use story_creator::StoryCreator;
pub use work_item_creator::WorkItemCreator;

/// Path segment for the single supported work item type (`$User Story`).
pub const WORK_ITEM_TYPE: &str = "$User Story";

/// Azure DevOps rejects titles longer than this.
pub const MAX_TITLE_LENGTH: usize = 255;

pub const JSON_PATCH_CONTENT_TYPE: &str = "application/json-patch+json";

pub const FIELD_TITLE: &str = "/fields/System.Title";
pub const FIELD_DESCRIPTION: &str = "/fields/System.Description";
pub const FIELD_AREA_PATH: &str = "/fields/System.AreaPath";
pub const FIELD_ITERATION_PATH: &str = "/fields/System.IterationPath";
