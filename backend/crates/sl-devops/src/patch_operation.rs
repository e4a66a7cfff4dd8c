use crate::{CreationRequest, FIELD_AREA_PATH, FIELD_DESCRIPTION, FIELD_ITERATION_PATH, FIELD_TITLE};

use sl_config::AzureDevOpsConfig;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
}

/// One entry of a JSON patch document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchOperation {
    pub op: PatchOp,
    pub path: &'static str,
    pub value: String,
}

impl PatchOperation {
    pub fn add(path: &'static str, value: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Add,
            path,
            value: value.into(),
        }
    }
}

/// Build the patch document for a new story.
///
/// Order is fixed: title, description, then area and iteration paths when
/// the config carries them.
pub fn build_payload(request: &CreationRequest, config: &AzureDevOpsConfig) -> Vec<PatchOperation> {
    let mut operations = vec![
        PatchOperation::add(FIELD_TITLE, request.title()),
        PatchOperation::add(FIELD_DESCRIPTION, format_description(request.description())),
    ];

    if let Some(ref area_path) = config.area_path {
        operations.push(PatchOperation::add(FIELD_AREA_PATH, area_path.as_str()));
    }

    if let Some(ref iteration_path) = config.iteration_path {
        operations.push(PatchOperation::add(FIELD_ITERATION_PATH, iteration_path.as_str()));
    }

    operations
}

/// Render plain text as the HTML the description field expects.
pub fn format_description(description: &str) -> String {
    if description.is_empty() {
        return String::new();
    }

    description
        .replace("\r\n", "\n")
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\n', "<br />\n")
}
