// Recording transport for tests
//
// Captures every outbound request and replies with a canned response chosen
// by HTTP method. An optional delay lets tests drop a call while it is still
// in flight.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use products_client::core::{HttpRequest, HttpResponse, HttpTransport, Result};
use reqwest::{Method, StatusCode};
use serde_json::Value;

#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<HashMap<Method, HttpResponse>>,
    delay: Option<Duration>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Mock that waits `delay` before answering
    pub fn delayed(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            delay: Some(delay),
            ..Default::default()
        })
    }

    /// Reply to `method` with `200 OK` and the given JSON body
    pub fn with_json(self: Arc<Self>, method: Method, body: Value) -> Arc<Self> {
        self.with_response(method, StatusCode::OK, body.to_string())
    }

    /// Reply to `method` with an arbitrary status and raw body
    pub fn with_response(
        self: Arc<Self>,
        method: Method,
        status: StatusCode,
        body: impl Into<Vec<u8>>,
    ) -> Arc<Self> {
        self.responses
            .lock()
            .unwrap()
            .insert(method, HttpResponse::new(status, body));
        self
    }

    /// Every request seen so far, in arrival order
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// The single request seen so far; panics if there were zero or several
    pub fn single_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {:?}", requests);
        requests.into_iter().next().unwrap()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let method = request.method.clone();
        self.requests.lock().unwrap().push(request);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let response = self
            .responses
            .lock()
            .unwrap()
            .get(&method)
            .cloned()
            .unwrap_or_else(|| HttpResponse::new(StatusCode::NOT_IMPLEMENTED, "no canned response"));

        Ok(response)
    }

    fn name(&self) -> &str {
        "mock"
    }
}
