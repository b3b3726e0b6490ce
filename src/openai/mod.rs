//! OpenAI Responses API client.
//!
//! A thin wrapper over `reqwest`: build one request declaring the MCP
//! server as a tool, send it, hand back the provider's JSON untyped so the
//! caller can print the full structure verbatim. No retries, no response
//! modeling — the response schema is the observation being captured.

use serde::Serialize;
use serde_json::Value;

use crate::types::{Error, Result};

/// A Responses API request.
#[derive(Debug, Clone, Serialize)]
pub struct ResponsesRequest {
    pub model: String,

    pub input: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<Reasoning>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolSpec>,
}

/// Reasoning options. Only the summary knob is used here.
#[derive(Debug, Clone, Serialize)]
pub struct Reasoning {
    pub summary: String,
}

impl Reasoning {
    /// Request an automatically generated reasoning summary.
    pub fn auto() -> Self {
        Self {
            summary: "auto".to_string(),
        }
    }
}

/// Tool declarations the model may invoke.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolSpec {
    /// A remote MCP server the hosted service connects to on our behalf.
    Mcp {
        server_label: String,
        server_url: String,
        require_approval: ApprovalPolicy,
    },
}

/// Tool-call approval policy.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalPolicy {
    Never,
    Always,
}

/// Client for the Responses API.
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl OpenAiClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a client from `OPENAI_API_KEY` (required) and `OPENAI_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| Error::config("OPENAI_API_KEY is not set"))?;
        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| crate::types::config::DEFAULT_API_BASE.to_string());
        Ok(Self::new(base_url, api_key))
    }

    /// Create a model response. Returns the raw JSON body on success; a
    /// non-2xx status becomes `Error::Api` carrying the body text.
    pub async fn create_response(&self, request: &ResponsesRequest) -> Result<Value> {
        let url = format!("{}/responses", self.base_url.trim_end_matches('/'));

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
