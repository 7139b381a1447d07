//! Tool-protocol (MCP) shapes the registry produces for the host runtime.

pub mod types;

pub use types::{
    CallToolParams, CallToolResult, Content, ListToolsResult, TextContent, Tool, ToolAnnotations,
};
