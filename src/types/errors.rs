//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the probe.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or malformed configuration (usually environment variables).
    #[error("config error: {0}")]
    Config(String),

    /// Tool registration or invocation errors.
    #[error("tool error: {0}")]
    Tool(String),

    /// HTTP transport errors from the OpenAI client.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status from the OpenAI API, with the response body.
    #[error("api error: status {status}: {body}")]
    Api { status: u16, body: String },

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience constructors
impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn tool(msg: impl Into<String>) -> Self {
        Self::Tool(msg.into())
    }
}
