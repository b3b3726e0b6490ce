//! MCP (Model Context Protocol) server — wire types, method dispatch, and
//! the stateless streamable-HTTP transport.

pub mod dispatch;
pub mod http;
pub mod protocol;

pub use dispatch::McpServer;
pub use protocol::{ContentItem, RpcError, RpcRequest, RpcResponse};
