//! MCP (Model Context Protocol) tool shapes.
//!
//! Only the parts of the protocol the adapters register against: the tool
//! listing entry and the call request/result. The wire loop that carries
//! them belongs to the host.

use serde::{Deserialize, Serialize};

use crate::core::tool::ToolDescriptor;
use crate::http::HttpMethod;

// ============================================================================
// Tool Listing
// ============================================================================

/// A tool as advertised in a `tools/list` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Tool name (unique identifier).
    pub name: String,
    /// Human-readable description of the tool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for the tool's input parameters.
    pub input_schema: serde_json::Value,
    /// Additional tool annotations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<ToolAnnotations>,
}

impl Tool {
    pub fn from_descriptor(
        descriptor: &ToolDescriptor,
        annotations: Option<ToolAnnotations>,
    ) -> Self {
        Self {
            name: descriptor.name.clone(),
            description: Some(descriptor.description.clone()).filter(|d| !d.is_empty()),
            input_schema: descriptor.input_schema(),
            annotations,
        }
    }
}

/// Annotations for tool behavior hints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ToolAnnotations {
    /// Hint indicating whether the tool only reads data (does not modify).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only_hint: Option<bool>,
    /// Hint indicating whether the tool may interact with external systems.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_world_hint: Option<bool>,
    /// Hint indicating whether the tool performs destructive operations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destructive_hint: Option<bool>,
    /// Hint indicating whether the tool produces the same output given the same input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotent_hint: Option<bool>,
}

impl ToolAnnotations {
    /// Hints implied by the HTTP method an endpoint uses.
    pub fn for_method(method: HttpMethod) -> Self {
        let read_only = method == HttpMethod::Get;
        let idempotent = matches!(
            method,
            HttpMethod::Get | HttpMethod::Put | HttpMethod::Delete
        );
        Self {
            read_only_hint: Some(read_only),
            open_world_hint: Some(true),
            destructive_hint: (!read_only).then_some(method == HttpMethod::Delete),
            idempotent_hint: Some(idempotent),
        }
    }
}

/// Result of listing tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListToolsResult {
    /// List of available tools.
    pub tools: Vec<Tool>,
}

// ============================================================================
// Tool Calls
// ============================================================================

/// Parameters of a `tools/call` request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToolParams {
    pub name: String,
    /// Loosely typed arguments. Omitted by some hosts for parameterless tools.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<serde_json::Value>,
}

/// Result of a tool call: a single text payload plus an error flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
    pub content: Vec<Content>,
    /// Whether the tool call resulted in an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

impl CallToolResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![Content::text(text)],
            is_error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![Content::text(message)],
            is_error: Some(true),
        }
    }

    pub fn is_error(&self) -> bool {
        self.is_error.unwrap_or(false)
    }

    /// Concatenated text of all text content blocks.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .map(|content| match content {
                Content::Text(text) => text.text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

// ============================================================================
// Content Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Content {
    Text(TextContent),
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text(TextContent { text: text.into() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    /// The text content.
    pub text: String,
}
