//! Test helpers: a recording fake transport and adapter builders.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::http::{HttpRequest, HttpResponse, HttpTransport, TransportError};
use crate::tools::{Endpoint, EndpointTool};

pub const BASE_URL: &str = "https://rest.example.test";

/// Records every request and answers with a canned response.
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    reply: Result<HttpResponse, TransportError>,
}

impl RecordingTransport {
    pub fn respond(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Ok(HttpResponse::new(status, body.as_bytes().to_vec())),
        })
    }

    pub fn fail(error: TransportError) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Err(error),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.reply.clone()
    }
}

pub fn config(credential: Option<&str>) -> Arc<ApiConfig> {
    Arc::new(ApiConfig::new(BASE_URL, credential.map(str::to_string)))
}

pub fn tool(endpoint: Endpoint, transport: &Arc<RecordingTransport>) -> EndpointTool {
    tool_with_credential(endpoint, transport, Some("dXNlcjpwYXNz"))
}

pub fn tool_with_credential(
    endpoint: Endpoint,
    transport: &Arc<RecordingTransport>,
    credential: Option<&str>,
) -> EndpointTool {
    EndpointTool::new(endpoint, config(credential), transport.clone())
}
