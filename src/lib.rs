//! Tool adapters for a realtime messaging platform's REST API.
//!
//! The crate exposes every platform operation as a tool that an agent host
//! can enumerate and invoke by name. Each tool validates its arguments,
//! performs one HTTP call and returns a single text payload.
//!
//! # Architecture
//!
//! - `config`: base URL and credential shared by every tool
//! - `models`: request and response records of the REST API
//! - `http`: injected HTTP transport and its reqwest implementation
//! - `core`: tool descriptors and parameter declarations
//! - `tools`: the generic endpoint adapter, the endpoint table and the registry
//! - `mcp`: tool-protocol shapes handed to the host

pub mod config;
pub mod core;
pub mod http;
pub mod mcp;
pub mod models;
pub mod tools;

#[cfg(test)]
mod testing;

pub use config::{ApiConfig, ConfigError};
pub use http::{HttpTransport, ReqwestTransport};
pub use tools::{get_all, get_all_with_transport, Tool, ToolError, ToolRegistry};

/// Default filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "realtime_mcp=debug,info";

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`.
///
/// Stdout is left alone for the tool protocol. Calling this more than once,
/// or after the host installed its own subscriber, is a no-op.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
