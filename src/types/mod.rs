//! Foundational types shared by both binaries:
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Environment-driven server and client configuration

pub mod config;
pub mod errors;

pub use config::{ClientConfig, Config, ServerConfig};
pub use errors::{Error, Result};
