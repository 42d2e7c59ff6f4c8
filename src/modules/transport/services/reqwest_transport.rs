use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::TransportConfig;
use crate::core::{HttpRequest, HttpResponse, HttpTransport, Result};

/// reqwest-backed transport used in production
///
/// Timeouts, if any, come from `TransportConfig`; the product client itself
/// never imposes one.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a new transport from configuration
    ///
    /// # Arguments
    /// * `config` - Transport settings (user agent, optional timeout)
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!(
            method = %request.method,
            url = %request.url,
            query = ?request.query,
            has_body = request.body.is_some(),
            "Executing HTTP request"
        );

        let mut builder = self.client.request(request.method, &request.url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!(status = %status, bytes = body.len(), "Received HTTP response");

        Ok(HttpResponse::new(status, body.to_vec()))
    }

    fn name(&self) -> &str {
        "reqwest"
    }
}
