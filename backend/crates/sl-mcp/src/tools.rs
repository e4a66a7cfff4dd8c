use crate::CREATE_STORY_TOOL;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// `tools/call` params
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Option<Value>,
}

/// Arguments of the `create_story` tool. Both are optional at this layer;
/// the story creator decides what is valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateStoryArgs {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

/// `tools/call` result. Domain failures travel here with `is_error` set,
/// not as JSON-RPC errors, so the calling agent can relay them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolResult {
    pub content: Vec<TextContent>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text.into(), false)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text.into(), true)
    }

    fn new(text: String, is_error: bool) -> Self {
        Self {
            content: vec![TextContent {
                kind: "text".to_string(),
                text,
            }],
            is_error,
        }
    }
}

/// Tool descriptor advertised by `tools/list`.
pub fn create_story_tool() -> Value {
    json!({
        "name": CREATE_STORY_TOOL,
        "title": "Create Story",
        "description": "Create an Azure DevOps user story. Provide a title and description gathered during the conversation.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "Short summary of the story; must not be blank"
                },
                "description": {
                    "type": "string",
                    "description": "Details of the story; may be empty"
                }
            },
            "required": ["title"]
        }
    })
}
