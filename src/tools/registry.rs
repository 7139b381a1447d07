//! Tool registry for discovery and invocation.
//!
//! The registry is built once from the endpoint table and handed to the host
//! runtime. Order is declaration order and stays fixed for the process
//! lifetime.

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::core::tool::ToolDescriptor;
use crate::http::{HttpTransport, ReqwestTransport};
use crate::mcp::{CallToolParams, CallToolResult, Tool as McpTool};
use crate::tools::endpoint::EndpointTool;
use crate::tools::endpoints;
use crate::tools::types::Tool;

/// Every adapter bound to `config`, using the default reqwest transport.
pub fn get_all(config: Arc<ApiConfig>) -> Vec<Arc<dyn Tool>> {
    get_all_with_transport(config, Arc::new(ReqwestTransport::new()))
}

/// Every adapter bound to `config` and an injected transport.
pub fn get_all_with_transport(
    config: Arc<ApiConfig>,
    transport: Arc<dyn HttpTransport>,
) -> Vec<Arc<dyn Tool>> {
    endpoints::all()
        .into_iter()
        .map(|endpoint| {
            Arc::new(EndpointTool::new(
                endpoint,
                Arc::clone(&config),
                Arc::clone(&transport),
            )) as Arc<dyn Tool>
        })
        .collect()
}

/// Ordered collection of tools with lookup by name.
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new(tools: Vec<Arc<dyn Tool>>) -> Self {
        Self { tools }
    }

    /// Creates a registry with every platform endpoint registered.
    pub fn from_config(config: Arc<ApiConfig>) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(config: Arc<ApiConfig>, transport: Arc<dyn HttpTransport>) -> Self {
        let tools = get_all_with_transport(config, transport);
        tracing::info!("registered {} platform tools", tools.len());
        Self::new(tools)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.iter().find(|tool| tool.descriptor().name == name)
    }

    /// Descriptors of all tools, in registration order.
    pub fn list(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(|tool| tool.descriptor()).collect()
    }

    /// Tool-protocol listing entries, in registration order.
    pub fn list_tools(&self) -> Vec<McpTool> {
        self.tools
            .iter()
            .map(|tool| McpTool::from_descriptor(&tool.descriptor(), tool.annotations()))
            .collect()
    }

    /// Invokes a tool by name. Omitted arguments are treated as an empty
    /// object; every failure comes back as an error result.
    pub async fn call(&self, name: &str, arguments: Option<serde_json::Value>) -> CallToolResult {
        let Some(tool) = self.get(name) else {
            tracing::warn!("call for unknown tool: {name}");
            return CallToolResult::error(format!("unknown tool: {name}"));
        };
        let args = arguments.unwrap_or_else(|| serde_json::Value::Object(Default::default()));
        tool.call(args).await
    }

    pub async fn dispatch(&self, params: CallToolParams) -> CallToolResult {
        self.call(&params.name, params.arguments).await
    }
}
