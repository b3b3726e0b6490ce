//! Streamable-HTTP transport for the MCP server.
//!
//! One route: `POST /mcp`. Requests get their JSON-RPC response with
//! status 200; notifications get 202 with no body; bodies that are not
//! valid JSON get a JSON-RPC parse error. No SSE stream and no session
//! header — the server runs in stateless mode.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::mcp::dispatch::McpServer;
use crate::mcp::protocol::{RpcRequest, RpcResponse};
use crate::types::Result;

/// Build the HTTP router around a shared server instance.
pub fn router(server: Arc<McpServer>) -> Router {
    Router::new()
        .route("/mcp", post(handle_post))
        .fallback(fallback)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        )
        .with_state(server)
}

/// Simple fallback handler for unmatched routes.
async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

async fn handle_post(State(server): State<Arc<McpServer>>, body: String) -> Response {
    let request: RpcRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!("undecodable request body: {}", e);
            return (
                StatusCode::OK,
                Json(RpcResponse::parse_error(&e.to_string())),
            )
                .into_response();
        }
    };

    match server.handle(request) {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Bind the listener and serve until a fatal error occurs.
pub async fn serve(addr: &str, app: Router) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("MCP server listening on http://{}/mcp", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
