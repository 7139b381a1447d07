//! Shared types and traits for the tool system.
//!
//! This module defines the core abstractions for tools:
//! - Tool trait implemented by every adapter
//! - Error types for tool invocation

use async_trait::async_trait;

use crate::core::tool::ToolDescriptor;
use crate::http::TransportError;
use crate::mcp::{CallToolResult, ToolAnnotations};

/// Errors that can occur during tool invocation.
///
/// Every variant is recoverable: the registry turns it into a text error
/// result for the caller.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("Invalid arguments object")]
    InvalidArguments,
    #[error("Missing required path parameter: {0}")]
    MissingParameter(String),
    #[error("Invalid path parameter: {0}")]
    InvalidParameterType(String),
    #[error("Failed to convert arguments to request type: {0}")]
    RequestConversion(String),
    #[error("Request failed: {0}")]
    Transport(#[from] TransportError),
    /// The remote answered with status >= 400. Displays as the raw body.
    #[error("{body}")]
    Api { status: u16, body: String },
    #[error("Failed to format JSON: {0}")]
    ResponseFormat(String),
}

/// Trait for implementing tools.
///
/// Tools are invoked by the host runtime and must be Send + Sync for use
/// across async boundaries.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Returns the descriptor for this tool: name, description and
    /// parameters.
    fn descriptor(&self) -> ToolDescriptor;

    /// Behavior hints advertised alongside the descriptor.
    fn annotations(&self) -> Option<ToolAnnotations> {
        None
    }

    /// Invokes the tool and returns its single text payload.
    async fn invoke(&self, args: serde_json::Value) -> Result<String, ToolError>;

    /// Invokes the tool and folds any error into a text error result.
    async fn call(&self, args: serde_json::Value) -> CallToolResult {
        match self.invoke(args).await {
            Ok(text) => CallToolResult::text(text),
            Err(error) => CallToolResult::error(error.to_string()),
        }
    }
}
