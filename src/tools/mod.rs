//! Tool infrastructure — the `Tool` trait, the registry the dispatcher
//! routes through, and the single fixed-content tool this server exposes.

pub mod content;
pub mod registry;

pub use content::{GetContent, FIRST_TEXT, SECOND_TEXT};
pub use registry::{Tool, ToolRegistry};
