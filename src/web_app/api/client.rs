// web_app/api/client.rs - reqwest client for the FakeStore REST API
//
// reqwest compiles to the browser fetch API on wasm32 and to hyper natively,
// so the same client serves the hydrated pages and the native test suites.

use reqwest::{Client, Response};
use url::Url;

use super::ProductApi;
use crate::web_app::config::StoreConfig;
use crate::web_app::error::{StoreError, StoreResult};
use crate::web_app::model::{Product, ProductDraft, ProductId};

#[derive(Clone, Debug)]
pub struct FakeStoreClient {
    client: Client,
    base_url: Url,
}

impl FakeStoreClient {
    /// Create a client rooted at `base_url` (e.g. `https://fakestoreapi.com`)
    pub fn new(base_url: &str) -> StoreResult<Self> {
        // Trailing slash so the base path survives segment joins
        let base_url = Url::parse(&format!("{}/", base_url.trim().trim_end_matches('/')))?;
        if base_url.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        Self::new(&config.api_base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL from path segments (each one percent-encoded)
    pub fn endpoint(&self, segments: &[&str]) -> StoreResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// Map non-success statuses to `StoreError::Status`
fn check_status(response: Response, operation: &'static str) -> StoreResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        tracing::warn!("{} returned status {}", operation, status);
        Err(StoreError::Status {
            operation,
            status: status.as_u16(),
        })
    }
}

impl ProductApi for FakeStoreClient {
    async fn list_category(&self, category: &str) -> StoreResult<Vec<Product>> {
        let url = self.endpoint(&["products", "category", category])?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let products: Vec<Product> = check_status(response, "list products")?.json().await?;

        tracing::info!("Fetched {} products in category '{}'", products.len(), category);
        Ok(products)
    }

    async fn get_product(&self, id: ProductId) -> StoreResult<Product> {
        let url = self.endpoint(&["products", &id.to_string()])?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        Ok(check_status(response, "get product")?.json().await?)
    }

    async fn create_product(&self, draft: &ProductDraft) -> StoreResult<Product> {
        let url = self.endpoint(&["products"])?;
        tracing::debug!("POST {}", url);

        let response = self.client.post(url).json(draft).send().await?;
        let created: Product = check_status(response, "create product")?.json().await?;

        tracing::info!("Created product {} ('{}')", created.id, created.title);
        Ok(created)
    }

    async fn update_product(&self, id: ProductId, draft: &ProductDraft) -> StoreResult<Product> {
        let url = self.endpoint(&["products", &id.to_string()])?;
        tracing::debug!("PUT {}", url);

        let response = self.client.put(url).json(draft).send().await?;
        let updated: Product = check_status(response, "update product")?.json().await?;

        tracing::info!("Updated product {} ('{}')", id, updated.title);
        Ok(updated)
    }

    async fn delete_product(&self, id: ProductId) -> StoreResult<()> {
        let url = self.endpoint(&["products", &id.to_string()])?;
        tracing::debug!("DELETE {}", url);

        let response = self.client.delete(url).send().await?;
        check_status(response, "delete product")?;

        tracing::info!("Deleted product {}", id);
        Ok(())
    }
}
