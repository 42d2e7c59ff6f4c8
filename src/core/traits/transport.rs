use crate::core::Result;
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde_json::Value;

/// Transport trait executing a single HTTP exchange
///
/// Implementations report network failures as errors and hand back every
/// response the server produced, successful or not. Deciding what counts as
/// success is left to the caller.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute the request and return the raw response
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;

    /// Get transport name
    fn name(&self) -> &str;
}

/// Outbound request description
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP verb
    pub method: Method,

    /// Absolute URL without query string
    pub url: String,

    /// Query parameters in insertion order
    pub query: Vec<(String, String)>,

    /// JSON body (None for bodiless requests)
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Look up a query parameter by name
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response returned by a transport
///
/// The body is kept as received; decoding it is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body as text for messages, invalid UTF-8 replaced
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
