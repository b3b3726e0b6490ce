//! # MCP Content Probe
//!
//! A minimal two-binary harness for reproducing an upstream truncation
//! behavior in hosted-model tool calling:
//! - `mcp-server` exposes a single MCP tool, `get_content`, over a stateless
//!   streamable-HTTP transport. The tool always returns the same ordered pair
//!   of text content items.
//! - `call-openai` asks the OpenAI Responses API to invoke that tool and
//!   prints the full response, making it observable that only the first of
//!   the two returned items survives the hosted service's tool-result
//!   handling.
//!
//! ## Architecture
//!
//! ```text
//!   call-openai ──▶ OpenAI Responses API ──▶ mcp-server (POST /mcp)
//!        ▲                  │                      │
//!        └──── response ────┘◀──── tool result ────┘
//! ```
//!
//! The two binaries never talk to each other directly; the hosted service
//! mediates every tool call.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod mcp;
pub mod openai;
pub mod tools;
pub mod types;

// Internal utilities
pub mod observability;

pub use types::{Config, Error, Result};
