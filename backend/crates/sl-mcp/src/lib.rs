//! Model Context Protocol front-end for the story action.
//!
//! JSON-RPC 2.0 messages are handled by [`McpProtocolHandler`] and carried
//! either as newline-delimited JSON over stdio or as `POST /mcp` over HTTP.

mod error;
mod handler;
mod http;
mod protocol;
mod stdio;
mod tools;


pub use error::{McpError, Result as McpResult};
pub use handler::McpProtocolHandler;
pub use http::{build_router, serve_http};
pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, error_codes};
pub use stdio::{MAX_MESSAGE_BYTES, serve, serve_stdio};
pub use tools::{CreateStoryArgs, ToolCallParams, ToolResult, create_story_tool};

pub const SERVER_NAME: &str = "storyline";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const CREATE_STORY_TOOL: &str = "create_story";
