//! Invocation client - asks the OpenAI Responses API to call the MCP
//! server's `get_content` tool and prints the full response.
//!
//! Nothing is printed to stdout until the response arrives; failures
//! propagate out of main and exit non-zero with the library diagnostic.

use mcp_content_probe::openai::{ApprovalPolicy, OpenAiClient, Reasoning, ResponsesRequest, ToolSpec};
use mcp_content_probe::types::ClientConfig;

/// The single instruction sent to the model.
const INSTRUCTION: &str = "Call the `get_content` tool and return its output verbatim.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Pick up OPENAI_API_KEY / MCP_URL from a local .env if present
    dotenv::dotenv().ok();

    mcp_content_probe::observability::init_tracing();

    let config = ClientConfig::from_env()?;
    let client = OpenAiClient::from_env()?;

    let request = ResponsesRequest {
        model: config.model.clone(),
        input: INSTRUCTION.to_string(),
        reasoning: Some(Reasoning::auto()),
        tools: vec![ToolSpec::Mcp {
            server_label: config.server_label.clone(),
            server_url: config.mcp_url.clone(),
            require_approval: ApprovalPolicy::Never,
        }],
    };

    tracing::info!(
        model = %config.model,
        mcp_url = %config.mcp_url,
        "sending Responses API request"
    );

    let response = client.create_response(&request).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
