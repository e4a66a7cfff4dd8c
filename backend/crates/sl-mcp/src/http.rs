use crate::{McpError, McpProtocolHandler, McpResult};

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use log::{error, info};
use serde_json::json;
use tokio::net::TcpListener;

/// Build the MCP HTTP router
///
/// - `POST /mcp` carries one JSON-RPC message per request
/// - `GET /health` reports liveness
pub fn build_router(handler: Arc<McpProtocolHandler>) -> Router {
    Router::new()
        .route("/mcp", post(mcp_message))
        .route("/health", get(health))
        .with_state(handler)
}

/// Bind `addr` and serve the router until Ctrl+C.
pub async fn serve_http(handler: Arc<McpProtocolHandler>, addr: &str) -> McpResult<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| McpError::Bind {
            addr: addr.to_string(),
            source,
        })?;

    let local_addr = listener
        .local_addr()
        .map_err(|e| McpError::io("failed to read bound address", e))?;
    info!("MCP server listening on http://{local_addr}/mcp");

    axum::serve(listener, build_router(handler))
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {e}"),
            }
        })
        .await
        .map_err(|e| McpError::io("HTTP server failed", e))?;

    info!("MCP HTTP server stopped");
    Ok(())
}

/// POST /mcp
async fn mcp_message(State(handler): State<Arc<McpProtocolHandler>>, body: String) -> Response {
    match handler.handle_message(&body).await {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// GET /health
async fn health() -> Response {
    let health = json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    });

    (StatusCode::OK, Json(health)).into_response()
}
