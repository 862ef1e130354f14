// web_app/api/mod.rs - Remote product API
//
// The remote API owns every record. `ProductApi` is the seam the view state
// talks to; `FakeStoreClient` is the HTTP implementation used by the pages.
// Tests substitute recording fakes.

pub mod client;

pub use client::FakeStoreClient;

use crate::web_app::error::StoreResult;
use crate::web_app::model::{Product, ProductDraft, ProductId};

/// Operations the storefront performs against the remote API
///
/// The futures are not required to be `Send`: in the browser they run on the
/// single-threaded executor behind `spawn_local`.
#[allow(async_fn_in_trait)]
pub trait ProductApi {
    /// `GET /products/category/{category}`
    async fn list_category(&self, category: &str) -> StoreResult<Vec<Product>>;

    /// `GET /products/{id}`
    async fn get_product(&self, id: ProductId) -> StoreResult<Product>;

    /// `POST /products`
    async fn create_product(&self, draft: &ProductDraft) -> StoreResult<Product>;

    /// `PUT /products/{id}`
    async fn update_product(&self, id: ProductId, draft: &ProductDraft) -> StoreResult<Product>;

    /// `DELETE /products/{id}`; the response body is ignored
    async fn delete_product(&self, id: ProductId) -> StoreResult<()>;
}
