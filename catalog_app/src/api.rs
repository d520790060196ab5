//! REST client for the catalog backend.

use std::rc::Rc;

use async_trait::async_trait;
use reqwest::{Response, Url};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::CatalogConfig;
use crate::error::{ApiError, ClientError, Result};
use crate::product::{ErrorBody, HealthReport, NewProduct, Product};

/// The four backend calls the page makes.
///
/// Futures are not `Send`: in the browser they run on the single event loop.
#[async_trait(?Send)]
pub trait CatalogApi {
    /// `GET /health`. The response status is not inspected.
    async fn health(&self) -> Result<HealthReport>;

    /// `GET /products`. Only the body decides success.
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// `POST /products`.
    async fn create_product(&self, product: &NewProduct) -> Result<()>;

    /// `DELETE /products/{id}`.
    async fn delete_product(&self, id: i64) -> Result<()>;
}

#[async_trait(?Send)]
impl<T: CatalogApi + ?Sized> CatalogApi for Rc<T> {
    async fn health(&self) -> Result<HealthReport> {
        (**self).health().await
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        (**self).list_products().await
    }

    async fn create_product(&self, product: &NewProduct) -> Result<()> {
        (**self).create_product(product).await
    }

    async fn delete_product(&self, id: i64) -> Result<()> {
        (**self).delete_product(id).await
    }
}

#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    http: reqwest::Client,
    /// Absolute base without a trailing slash.
    base: String,
}

impl HttpCatalogApi {
    /// Builds a client for an absolute base URL such as `http://localhost:8000/api`.
    pub fn new(base: &str) -> std::result::Result<Self, ClientError> {
        Self::with_client(base, reqwest::Client::builder().build()?)
    }

    pub fn with_client(base: &str, http: reqwest::Client) -> std::result::Result<Self, ClientError> {
        let url = Url::parse(base).map_err(|err| ClientError::InvalidBaseUrl {
            base: base.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self {
            http,
            base: url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Builds a client from configuration, resolving a relative base against the page origin.
    pub fn from_config(config: &CatalogConfig) -> std::result::Result<Self, ClientError> {
        if !config.is_relative() {
            return Self::new(&config.api_base);
        }
        let origin = page_origin().ok_or_else(|| ClientError::NoWindow(config.api_base.clone()))?;
        Self::new(&format!("{origin}{}", config.api_base))
    }

    #[cfg(test)]
    fn base(&self) -> &str {
        &self.base
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

/// Ok responses pass; anything else must carry a JSON error body.
async fn accept(response: Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body: Value = response.json().await?;
    Err(ApiError::Rejected {
        status: status.as_u16(),
        detail: ErrorBody::from_json(&body).message(),
    })
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    #[instrument(skip(self))]
    async fn health(&self) -> Result<HealthReport> {
        let url = self.endpoint("health");
        debug!(%url, "checking backend health");
        let body: Value = self.http.get(url).send().await?.json().await?;
        // a `null` body has no fields to read at all
        if body.is_null() {
            return Err(ApiError::Decode("health response body is null".to_string()));
        }
        Ok(HealthReport::from_json(&body))
    }

    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>> {
        let url = self.endpoint("products");
        debug!(%url, "fetching products");
        let products: Vec<Product> = self.http.get(url).send().await?.json().await?;
        debug!(count = products.len(), "products fetched");
        Ok(products)
    }

    #[instrument(skip(self, product), fields(name = %product.name))]
    async fn create_product(&self, product: &NewProduct) -> Result<()> {
        let url = self.endpoint("products");
        debug!(%url, "creating product");
        let response = self.http.post(url).json(product).send().await?;
        accept(response).await
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, id: i64) -> Result<()> {
        let url = self.endpoint(&format!("products/{id}"));
        debug!(%url, "deleting product");
        let response = self.http.delete(url).send().await?;
        accept(response).await
    }
}
