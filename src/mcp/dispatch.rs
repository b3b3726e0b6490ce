//! MCP method dispatch — stateless routing of JSON-RPC requests.
//!
//! The server issues no session ids and keeps nothing between requests;
//! `initialize` answers identically on every call, which is what lets the
//! HTTP transport run in stateless mode.

use serde::Serialize;
use serde_json::{json, Value};

use crate::mcp::protocol::{
    InitializeResult, RpcError, RpcId, RpcRequest, RpcResponse, ServerCapabilities, ServerInfo,
    ToolCallParams, ToolCallResult, ToolsCapability, ToolsListResult, PROTOCOL_VERSION,
};
use crate::tools::ToolRegistry;

/// Stateless MCP server: an immutable tool registry plus identity.
#[derive(Debug)]
pub struct McpServer {
    registry: ToolRegistry,
    server_info: ServerInfo,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            registry,
            server_info: ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// Route a single request. Returns `None` for notifications, which get
    /// no response body.
    pub fn handle(&self, request: RpcRequest) -> Option<RpcResponse> {
        if request.is_notification() {
            tracing::debug!(method = %request.method, "notification acknowledged");
            return None;
        }

        let id = request.id.clone();
        let response = match request.method.as_str() {
            "initialize" => self.initialize(id),
            "ping" => RpcResponse::success(id, json!({})),
            "tools/list" => self.tools_list(id),
            "tools/call" => self.tools_call(id, request.params),
            other => {
                tracing::debug!(method = %other, "unknown method");
                RpcResponse::error(id, RpcError::method_not_found(other))
            }
        };
        Some(response)
    }

    fn initialize(&self, id: Option<RpcId>) -> RpcResponse {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            server_info: self.server_info.clone(),
        };
        success_value(id, &result)
    }

    fn tools_list(&self, id: Option<RpcId>) -> RpcResponse {
        let result = ToolsListResult {
            tools: self.registry.definitions(),
        };
        success_value(id, &result)
    }

    fn tools_call(&self, id: Option<RpcId>, params: Option<Value>) -> RpcResponse {
        let params: ToolCallParams = match params.map(serde_json::from_value).transpose() {
            Ok(Some(p)) => p,
            Ok(None) => {
                return RpcResponse::error(id, RpcError::invalid_params("missing params"));
            }
            Err(e) => {
                return RpcResponse::error(
                    id,
                    RpcError::invalid_params(format!("invalid tools/call params: {}", e)),
                );
            }
        };

        let Some(tool) = self.registry.get(&params.name) else {
            return RpcResponse::error(
                id,
                RpcError::invalid_params(format!("unknown tool: {}", params.name)),
            );
        };

        let arguments = params
            .arguments
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        tracing::info!(tool = %params.name, "tool call");

        // Execution failures become isError results, not protocol errors.
        match tool.call(&arguments) {
            Ok(content) => success_value(id, &ToolCallResult::ok(content)),
            Err(e) => success_value(id, &ToolCallResult::error(e.to_string())),
        }
    }
}

fn success_value<T: Serialize>(id: Option<RpcId>, result: &T) -> RpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => RpcResponse::success(id, value),
        Err(e) => RpcResponse::error(id, RpcError::internal(format!("serialization failed: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::protocol::{INVALID_PARAMS, METHOD_NOT_FOUND};
    use crate::tools::{GetContent, FIRST_TEXT, SECOND_TEXT};
    use pretty_assertions::assert_eq;

    fn test_server() -> McpServer {
        let mut registry = ToolRegistry::new();
        registry.register(Box::new(GetContent)).unwrap();
        McpServer::new(registry)
    }

    fn request(method: &str, params: Option<Value>) -> RpcRequest {
        RpcRequest {
            jsonrpc: "2.0".to_string(),
            id: Some(RpcId::Number(1)),
            method: method.to_string(),
            params,
        }
    }

    #[test]
    fn test_initialize() {
        let response = test_server().handle(request("initialize", None)).unwrap();
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(result["capabilities"]["tools"]["listChanged"], false);
    }

    #[test]
    fn test_initialize_is_stateless() {
        let server = test_server();
        let a = server.handle(request("initialize", None)).unwrap();
        let b = server.handle(request("initialize", None)).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_ping() {
        let response = test_server().handle(request("ping", None)).unwrap();
        assert_eq!(response.result.unwrap(), json!({}));
        assert!(response.error.is_none());
    }

    #[test]
    fn test_tools_list() {
        let response = test_server().handle(request("tools/list", None)).unwrap();
        let result = response.result.unwrap();
        let tools = result["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], "get_content");
        assert_eq!(tools[0]["inputSchema"]["type"], "object");
    }

    #[test]
    fn test_tools_call_returns_both_items() {
        let params = json!({"name": "get_content", "arguments": {}});
        let response = test_server()
            .handle(request("tools/call", Some(params)))
            .unwrap();
        let result = response.result.unwrap();
        let content = result["content"].as_array().unwrap();
        assert_eq!(content.len(), 2);
        assert_eq!(content[0]["type"], "text");
        assert_eq!(content[0]["text"], FIRST_TEXT);
        assert_eq!(content[1]["text"], SECOND_TEXT);
        assert!(result.get("isError").is_none());
    }

    #[test]
    fn test_tools_call_without_arguments_key() {
        let params = json!({"name": "get_content"});
        let response = test_server()
            .handle(request("tools/call", Some(params)))
            .unwrap();
        assert!(response.error.is_none());
    }

    #[test]
    fn test_tools_call_unknown_tool() {
        let params = json!({"name": "bogus"});
        let response = test_server()
            .handle(request("tools/call", Some(params)))
            .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, INVALID_PARAMS);
        assert!(error.message.contains("bogus"));
    }

    #[test]
    fn test_tools_call_missing_params() {
        let response = test_server().handle(request("tools/call", None)).unwrap();
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[test]
    fn test_unknown_method() {
        let response = test_server()
            .handle(request("resources/list", None))
            .unwrap();
        assert_eq!(response.error.unwrap().code, METHOD_NOT_FOUND);
    }

    #[test]
    fn test_notification_gets_no_response() {
        let notification = RpcRequest {
            jsonrpc: "2.0".to_string(),
            id: None,
            method: "notifications/initialized".to_string(),
            params: None,
        };
        assert!(test_server().handle(notification).is_none());
    }
}
