//! MCP content server - main entry point.
//!
//! Serves one tool over stateless streamable HTTP:
//! - get_content: fixed ordered pair of text content items

use std::sync::Arc;

use mcp_content_probe::mcp::{http, McpServer};
use mcp_content_probe::tools::{GetContent, ToolRegistry};
use mcp_content_probe::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize observability
    mcp_content_probe::observability::init_tracing();

    // Register the single tool; the registry is immutable from here on
    let mut registry = ToolRegistry::new();
    registry.register(Box::new(GetContent))?;

    let server = Arc::new(McpServer::new(registry));
    let app = http::router(server);

    tracing::info!("🚀 MCP content server starting on {}", config.server.listen_addr);
    tracing::info!("  ✓ get_content: two text items, fixed order");

    http::serve(&config.server.listen_addr, app).await?;

    Ok(())
}
