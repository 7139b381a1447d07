//! Tool registry and the platform endpoint adapters.
//!
//! This module provides:
//! - The `Tool` trait every adapter implements
//! - A single generic adapter (`EndpointTool`) driven by a declarative table
//! - The registry the host runtime enumerates
//!
//! # Tool Lifecycle
//!
//! 1. Host picks a tool by name from the registry
//! 2. Adapter validates the argument object
//! 3. Adapter builds and sends one HTTP request
//! 4. Response is decoded and returned as a text result
//!
//! # Module Structure
//!
//! - `types`: Tool trait and ToolError
//! - `endpoint`: Endpoint table entry and the EndpointTool adapter
//! - `endpoints`: the table itself, one module per API area
//! - `registry`: ordered registry, lookup and call dispatch
//!
//! # Adding New Tools
//!
//! 1. Describe the operation as an `Endpoint` in the matching `endpoints` module
//! 2. Add it to `endpoints::all()` in the position it should be listed
//! 3. Add request/response records to `models` if the operation needs new ones

pub use endpoint::{Endpoint, EndpointTool};
pub use registry::{get_all, get_all_with_transport, ToolRegistry};
pub use types::{Tool, ToolError};

mod endpoint;
pub mod endpoints;
mod registry;
mod types;
