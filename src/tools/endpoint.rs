//! Generic REST endpoint adapter.
//!
//! Every platform operation is an [`Endpoint`] table entry: method, path
//! template, declared parameters, and the typed records used to encode the
//! request body and decode a successful response. [`EndpointTool`] binds an
//! entry to the shared config and transport and turns it into a [`Tool`].

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::core::tool::{ParamLocation, ParamType, ToolDescriptor, ToolParam};
use crate::http::{HttpMethod, HttpRequest, HttpTransport};
use crate::mcp::ToolAnnotations;
use crate::models::ErrorResponse;
use crate::tools::types::{Tool, ToolError};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Converts the argument object into the serialized request body.
pub type BodyEncoder = fn(&serde_json::Value) -> Result<Vec<u8>, ToolError>;

/// Renders a successful response body. `Ok(None)` means the body did not
/// match the expected record.
pub type ResponseRenderer = fn(&str) -> Result<Option<String>, ToolError>;

// ============================================================================
// Endpoint table entry
// ============================================================================

#[derive(Clone)]
pub struct Endpoint {
    name: &'static str,
    description: &'static str,
    method: HttpMethod,
    path: &'static str,
    params: Vec<ToolParam>,
    body: Option<BodyEncoder>,
    render: ResponseRenderer,
}

impl Endpoint {
    /// Successful responses decode as [`ErrorResponse`] unless
    /// [`Endpoint::returns`] picks another record.
    pub fn new(
        method: HttpMethod,
        path: &'static str,
        name: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            description,
            method,
            path,
            params: Vec::new(),
            body: None,
            render: render_success::<ErrorResponse>,
        }
    }

    pub fn get(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(HttpMethod::Get, path, name, description)
    }

    pub fn post(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(HttpMethod::Post, path, name, description)
    }

    pub fn put(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(HttpMethod::Put, path, name, description)
    }

    pub fn patch(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(HttpMethod::Patch, path, name, description)
    }

    pub fn delete(name: &'static str, path: &'static str, description: &'static str) -> Self {
        Self::new(HttpMethod::Delete, path, name, description)
    }

    /// Declares a required string path parameter substituted for `{name}`.
    pub fn path_param(self, name: &str, description: &str) -> Self {
        self.param(name, ParamType::String, ParamLocation::Path, true, description)
    }

    /// Declares an optional query parameter. Query order follows declaration
    /// order.
    pub fn query(self, name: &str, ty: ParamType, description: &str) -> Self {
        self.param(name, ty, ParamLocation::Query, false, description)
    }

    /// Declares a field of the request body record.
    pub fn field(self, name: &str, ty: ParamType, required: bool, description: &str) -> Self {
        self.param(name, ty, ParamLocation::Body, required, description)
    }

    /// Sends the argument object as a `T` request body.
    pub fn body<T>(mut self) -> Self
    where
        T: DeserializeOwned + Serialize,
    {
        self.body = Some(encode_body::<T>);
        self
    }

    /// Decodes successful responses as `T`.
    pub fn returns<T>(mut self) -> Self
    where
        T: DeserializeOwned + Serialize,
    {
        self.render = render_success::<T>;
        self
    }

    fn param(
        mut self,
        name: &str,
        ty: ParamType,
        location: ParamLocation,
        required: bool,
        description: &str,
    ) -> Self {
        self.params.push(ToolParam {
            name: name.to_string(),
            ty,
            location,
            required,
            description: description.to_string(),
        });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    pub fn descriptor(&self) -> ToolDescriptor {
        ToolDescriptor {
            name: self.name.to_string(),
            description: self.description.to_string(),
            params: self.params.clone(),
        }
    }

    /// Encodes the request body for `args`, if this endpoint carries one.
    pub fn encode_body(&self, args: &serde_json::Value) -> Option<Result<Vec<u8>, ToolError>> {
        self.body.map(|encode| encode(args))
    }

    fn params_in(&self, location: ParamLocation) -> impl Iterator<Item = &ToolParam> {
        self.params
            .iter()
            .filter(move |param| param.location == location)
    }

    /// Builds `{base_url}{path}?{query}` from validated arguments.
    pub fn build_url(
        &self,
        base_url: &str,
        args: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<String, ToolError> {
        let mut path = self.path.to_string();
        for param in self.params_in(ParamLocation::Path) {
            let value = args
                .get(&param.name)
                .ok_or_else(|| ToolError::MissingParameter(param.name.clone()))?;
            if !param.ty.matches(value) {
                return Err(ToolError::InvalidParameterType(param.name.clone()));
            }
            path = path.replace(&format!("{{{}}}", param.name), &render_value(value));
        }

        let query: Vec<String> = self
            .params_in(ParamLocation::Query)
            .filter_map(|param| {
                args.get(&param.name)
                    .filter(|value| !value.is_null())
                    .map(|value| format!("{}={}", param.name, render_value(value)))
            })
            .collect();

        if query.is_empty() {
            Ok(format!("{base_url}{path}"))
        } else {
            Ok(format!("{base_url}{path}?{}", query.join("&")))
        }
    }
}

impl std::fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Endpoint")
            .field("name", &self.name)
            .field("method", &self.method)
            .field("path", &self.path)
            .field("params", &self.params)
            .field("has_body", &self.body.is_some())
            .finish()
    }
}

/// Strings render raw; everything else as its compact JSON text.
fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn encode_body<T>(args: &serde_json::Value) -> Result<Vec<u8>, ToolError>
where
    T: DeserializeOwned + Serialize,
{
    let record: T = serde_json::from_value(args.clone())
        .map_err(|e| ToolError::RequestConversion(e.to_string()))?;
    serde_json::to_vec(&record).map_err(|e| ToolError::RequestConversion(e.to_string()))
}

fn render_success<T>(body: &str) -> Result<Option<String>, ToolError>
where
    T: DeserializeOwned + Serialize,
{
    let Ok(record) = serde_json::from_str::<T>(body) else {
        return Ok(None);
    };
    serde_json::to_string_pretty(&record)
        .map(Some)
        .map_err(|e| ToolError::ResponseFormat(e.to_string()))
}

// ============================================================================
// Adapter
// ============================================================================

/// An [`Endpoint`] bound to the API configuration and an HTTP transport.
pub struct EndpointTool {
    endpoint: Endpoint,
    config: Arc<ApiConfig>,
    transport: Arc<dyn HttpTransport>,
}

impl EndpointTool {
    pub fn new(
        endpoint: Endpoint,
        config: Arc<ApiConfig>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            endpoint,
            config,
            transport,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Validates `args` and builds the outgoing request without sending it.
    pub fn build_request(&self, args: &serde_json::Value) -> Result<HttpRequest, ToolError> {
        let object = args.as_object().ok_or(ToolError::InvalidArguments)?;
        let url = self.endpoint.build_url(self.config.base_url(), object)?;

        let mut request = HttpRequest::new(self.endpoint.method, url);
        if let Some(body) = self.endpoint.encode_body(args) {
            request = request
                .header("Content-Type", JSON_CONTENT_TYPE)
                .body(body?);
        }
        if let Some(token) = self.config.basic_auth() {
            request = request.header("Authorization", format!("Basic {token}"));
        }
        Ok(request.header("Accept", JSON_CONTENT_TYPE))
    }
}

#[async_trait]
impl Tool for EndpointTool {
    fn descriptor(&self) -> ToolDescriptor {
        self.endpoint.descriptor()
    }

    fn annotations(&self) -> Option<ToolAnnotations> {
        Some(ToolAnnotations::for_method(self.endpoint.method))
    }

    async fn invoke(&self, args: serde_json::Value) -> Result<String, ToolError> {
        let request = self.build_request(&args)?;
        tracing::debug!(
            "{}: {} {}",
            self.endpoint.name,
            request.method,
            request.url
        );

        let response = self.transport.send(request).await?;
        let body = response.text();
        tracing::debug!(
            "{}: response status={}",
            self.endpoint.name,
            response.status
        );

        if response.status >= 400 {
            return Err(ToolError::Api {
                status: response.status,
                body,
            });
        }

        match (self.endpoint.render)(&body)? {
            Some(pretty) => Ok(pretty),
            None => {
                tracing::warn!(
                    "{}: response did not match the expected shape, returning raw body",
                    self.endpoint.name
                );
                Ok(body)
            }
        }
    }
}
