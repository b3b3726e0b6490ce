//! Configuration structures.
//!
//! Configuration is loaded from environment variables; every field has a
//! default except the values the client genuinely cannot guess (the MCP
//! server URL and the API key, the latter read by the OpenAI client itself).

use serde::{Deserialize, Serialize};
use std::env;

use crate::types::{Error, Result};

/// Default bind address for the MCP server (matches the conventional
/// local MCP port).
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

/// Default OpenAI API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default model for the invocation client.
pub const DEFAULT_MODEL: &str = "gpt-5-nano";

/// Default label under which the MCP server is declared to the model.
pub const DEFAULT_SERVER_LABEL: &str = "test";

/// Global configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env(),
        })
    }
}

/// MCP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP bind address.
    pub listen_addr: String,
}

impl ServerConfig {
    /// Read `MCP_BIND_ADDR`, defaulting to loopback port 8000.
    pub fn from_env() -> Self {
        Self {
            listen_addr: env::var("MCP_BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}

/// Invocation client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// URL of the MCP server, as reachable by the hosted model service.
    pub mcp_url: String,

    /// OpenAI API base URL.
    pub api_base: String,

    /// Model to invoke.
    pub model: String,

    /// Label under which the MCP server is declared as a tool.
    pub server_label: String,
}

impl ClientConfig {
    /// Load from the environment. `MCP_URL` is required; everything else
    /// has a default.
    pub fn from_env() -> Result<Self> {
        let mcp_url = env::var("MCP_URL")
            .map_err(|_| Error::config("MCP_URL is not set (URL of the MCP server)"))?;

        Ok(Self {
            mcp_url,
            api_base: env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            model: env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            server_label: env::var("MCP_SERVER_LABEL")
                .unwrap_or_else(|_| DEFAULT_SERVER_LABEL.to_string()),
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mcp_url: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            server_label: DEFAULT_SERVER_LABEL.to_string(),
        }
    }
}
