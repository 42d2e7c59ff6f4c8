use crate::core::{AppError, Result};
use std::env;
use std::time::Duration;

/// HTTP transport configuration for the products API
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl TransportConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
            user_agent: default_user_agent(),
        }
    }

    pub fn from_env() -> Result<Self> {
        let base_url = env::var("PRODUCTS_API_BASE_URL")
            .map_err(|_| AppError::configuration("PRODUCTS_API_BASE_URL not set"))?;

        let timeout = match env::var("HTTP_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    AppError::configuration("Invalid HTTP_TIMEOUT_SECS")
                })?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self {
            base_url,
            timeout,
            user_agent: env::var("HTTP_USER_AGENT").unwrap_or_else(|_| default_user_agent()),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(AppError::configuration(format!(
                "Base URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err(AppError::configuration("HTTP timeout must be greater than 0"));
        }

        Ok(())
    }
}

fn default_user_agent() -> String {
    format!("products-client/{}", env!("CARGO_PKG_VERSION"))
}
