use crate::protocol::{JSONRPC_VERSION, error_codes};
use crate::{
    CREATE_STORY_TOOL, CreateStoryArgs, JsonRpcRequest, JsonRpcResponse, PROTOCOL_VERSION,
    SERVER_NAME, SERVER_VERSION, ToolCallParams, ToolResult, create_story_tool,
};

use sl_devops::StoryCreator;

use std::sync::Arc;

use log::{debug, info, warn};
use serde_json::{Value, json};

/// MCP protocol handler
///
/// Transport-agnostic: both the stdio loop and the HTTP route feed raw
/// messages through [`McpProtocolHandler::handle_message`].
pub struct McpProtocolHandler {
    creator: Arc<dyn StoryCreator>,
}

impl McpProtocolHandler {
    pub fn new(creator: Arc<dyn StoryCreator>) -> Self {
        Self { creator }
    }

    /// Handle one raw JSON-RPC message. Returns `None` for notifications.
    pub async fn handle_message(&self, raw: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Discarding unparseable JSON-RPC message: {e}");
                return Some(JsonRpcResponse::error(
                    None,
                    error_codes::PARSE_ERROR,
                    "Parse error",
                ));
            }
        };

        if value.is_array() {
            return Some(JsonRpcResponse::error(
                None,
                error_codes::INVALID_REQUEST,
                "Batch requests are not supported",
            ));
        }

        let id = value.get("id").cloned().filter(|id| !id.is_null());
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_REQUEST,
                    format!("Invalid request: {e}"),
                ));
            }
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(JsonRpcResponse::error(
                request.id,
                error_codes::INVALID_REQUEST,
                "Invalid request: jsonrpc must be \"2.0\"",
            ));
        }

        self.handle_request(request).await
    }

    /// Handle a parsed JSON-RPC request. Returns `None` for notifications.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            debug!("Notification received: {}", request.method);
            return None;
        }

        debug!("Request received: {}", request.method);
        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(request.id, initialize_result()),
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => {
                JsonRpcResponse::success(request.id, json!({ "tools": [create_story_tool()] }))
            }
            "tools/call" => self.handle_tool_call(request.id, request.params).await,
            other => JsonRpcResponse::error(
                request.id,
                error_codes::METHOD_NOT_FOUND,
                format!("Method not found: {other}"),
            ),
        };

        Some(response)
    }

    async fn handle_tool_call(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let Some(params) = params else {
            return invalid_params(id, "tools/call requires params");
        };

        let call: ToolCallParams = match serde_json::from_value(params) {
            Ok(call) => call,
            Err(e) => return invalid_params(id, format!("Invalid tools/call params: {e}")),
        };

        if call.name != CREATE_STORY_TOOL {
            return invalid_params(id, format!("Unknown tool: {}", call.name));
        }

        let args: CreateStoryArgs = match call.arguments {
            None | Some(Value::Null) => CreateStoryArgs::default(),
            Some(arguments) => match serde_json::from_value(arguments) {
                Ok(args) => args,
                Err(e) => {
                    return invalid_params(id, format!("Invalid create_story arguments: {e}"));
                }
            },
        };

        info!("Tool call: {CREATE_STORY_TOOL}");
        let outcome = self
            .creator
            .create_story(
                args.title.as_deref().unwrap_or_default(),
                args.description.as_deref().unwrap_or_default(),
            )
            .await;

        let result = match outcome {
            Ok(created) => ToolResult::text(created.confirmation()),
            Err(e) => ToolResult::error(e.to_string()),
        };

        match serde_json::to_value(&result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(
                id,
                error_codes::INTERNAL_ERROR,
                format!("Failed to encode tool result: {e}"),
            ),
        }
    }
}

fn invalid_params(id: Option<Value>, message: impl Into<String>) -> JsonRpcResponse {
    JsonRpcResponse::error(id, error_codes::INVALID_PARAMS, message)
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION
        },
        "instructions": "Use create_story to file an Azure DevOps user story from a title and description."
    })
}
