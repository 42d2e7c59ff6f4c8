use std::sync::Arc;

use futures_util::future::try_join;
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use crate::config::TransportConfig;
use crate::core::{AppError, HttpRequest, HttpTransport, Result};
use crate::products::models::{CreateProductPayload, Product, UpdateProductPayload};
use crate::taxes::TaxCalculator;
use crate::transport::ReqwestTransport;

const PRODUCTS_PATH: [&str; 3] = ["api", "v1", "products"];

/// Client for the `/api/v1/products` resource
///
/// Every call issues exactly one request (two for `read_and_update`) and
/// resolves once. Nothing is cached or retried; errors from the transport or
/// the server are handed back untouched. Dropping a pending call discards its
/// result.
#[derive(Clone)]
pub struct ProductClient {
    transport: Arc<dyn HttpTransport>,
    base_url: Url,
    tax_calculator: TaxCalculator,
}

impl ProductClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `transport` - Transport executing the HTTP exchanges
    /// * `base_url` - API root, e.g. `https://api.escuelajs.co`
    pub fn new(transport: Arc<dyn HttpTransport>, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            AppError::configuration(format!("Invalid products API base URL '{}': {}", base_url, e))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(AppError::configuration(format!(
                "Products API base URL '{}' cannot carry a path",
                base_url
            )));
        }

        Ok(Self {
            transport,
            base_url,
            tax_calculator: TaxCalculator::new(),
        })
    }

    /// Create a client backed by `ReqwestTransport`
    pub fn from_config(config: &TransportConfig) -> Result<Self> {
        config.validate()?;
        let transport = ReqwestTransport::new(config)?;
        Self::new(Arc::new(transport), &config.base_url)
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// `GET /api/v1/products`, returned exactly as decoded
    pub async fn list_simple(&self) -> Result<Vec<Product>> {
        let request = HttpRequest::new(Method::GET, self.endpoint(None)?);
        self.send(request).await
    }

    /// `GET /api/v1/products` with derived taxes
    ///
    /// `limit` and `offset` are only sent when both are given. Pagination is
    /// left to the server.
    pub async fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Vec<Product>> {
        let mut request = HttpRequest::new(Method::GET, self.endpoint(None)?);
        if let (Some(limit), Some(offset)) = (limit, offset) {
            request = request.with_query("limit", limit).with_query("offset", offset);
        }

        let mut products: Vec<Product> = self.send(request).await?;
        self.tax_calculator.apply(&mut products);

        info!(count = products.len(), ?limit, ?offset, "Listed products with taxes");
        Ok(products)
    }

    /// `GET /api/v1/products/{id}`
    pub async fn get(&self, id: &str) -> Result<Product> {
        let request = HttpRequest::new(Method::GET, self.endpoint(Some(id))?);
        self.send(request).await
    }

    /// `POST /api/v1/products`
    pub async fn create(&self, payload: &CreateProductPayload) -> Result<Product> {
        let request = HttpRequest::new(Method::POST, self.endpoint(None)?)
            .with_body(serde_json::to_value(payload)?);

        let product: Product = self.send(request).await?;
        info!(product_id = %product.id(), "Product created");
        Ok(product)
    }

    /// `PUT /api/v1/products/{id}` with a partial body
    pub async fn update(&self, id: &str, payload: &UpdateProductPayload) -> Result<Product> {
        let request = HttpRequest::new(Method::PUT, self.endpoint(Some(id))?)
            .with_body(serde_json::to_value(payload)?);

        let product: Product = self.send(request).await?;
        info!(product_id = %product.id(), "Product updated");
        Ok(product)
    }

    /// `DELETE /api/v1/products/{id}`, resolving to the server's confirmation
    pub async fn delete(&self, id: &str) -> Result<bool> {
        let request = HttpRequest::new(Method::DELETE, self.endpoint(Some(id))?);

        let deleted: bool = self.send(request).await?;
        info!(product_id = %id, deleted, "Product delete acknowledged");
        Ok(deleted)
    }

    /// Read a product and update it concurrently
    ///
    /// Both requests are in flight at the same time; the pair is
    /// `(state read, state after update)`. The first failure wins.
    pub async fn read_and_update(
        &self,
        id: &str,
        payload: &UpdateProductPayload,
    ) -> Result<(Product, Product)> {
        try_join(self.get(id), self.update(id, payload)).await
    }

    /// Build `{base}/api/v1/products[/{id}]`, percent-encoding the id
    fn endpoint(&self, id: Option<&str>) -> Result<String> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                AppError::configuration("Products API base URL cannot carry a path")
            })?;
            segments.pop_if_empty().extend(PRODUCTS_PATH);

            if let Some(id) = id {
                if id.trim().is_empty() {
                    return Err(AppError::validation("Product id must not be empty"));
                }
                segments.push(id);
            }
        }

        Ok(url.into())
    }

    async fn send<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T> {
        let method = request.method.clone();
        let url = request.url.clone();

        debug!(
            method = %method,
            url = %url,
            transport = self.transport.name(),
            "Sending products API request"
        );

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                error!(method = %method, url = %url, error = %e, "Products API request failed");
                return Err(e);
            }
        };

        if !response.is_success() {
            error!(
                method = %method,
                url = %url,
                status = %response.status,
                "Products API returned an error status"
            );
            return Err(AppError::status(response.status, response.body_text()));
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            error!(method = %method, url = %url, error = %e, "Failed to decode products API response");
            AppError::Json(e)
        })
    }
}

impl std::fmt::Debug for ProductClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductClient")
            .field("base_url", &self.base_url.as_str())
            .field("transport", &self.transport.name())
            .finish()
    }
}
