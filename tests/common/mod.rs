// common/mod.rs - Shared test utilities
//
// RecordingApi is an in-memory ProductApi that records every request it
// receives, so flow tests can assert exactly which calls were made.

#![allow(dead_code)]

use std::cell::RefCell;

use falsedisk_store::fixtures::products::electronics_catalogue;
use falsedisk_store::web_app::api::ProductApi;
use falsedisk_store::web_app::error::{StoreError, StoreResult};
use falsedisk_store::web_app::model::{Product, ProductDraft, ProductId, Rating};

/// Identifier the fake assigns to created products
pub const CREATED_ID: ProductId = 21;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    List(String),
    Get(ProductId),
    Create(ProductDraft),
    Update(ProductId, ProductDraft),
    Delete(ProductId),
}

pub struct RecordingApi {
    catalogue: Vec<Product>,
    fail_status: Option<u16>,
    calls: RefCell<Vec<Call>>,
}

impl RecordingApi {
    /// Serves the electronics fixture catalogue
    pub fn new() -> Self {
        Self {
            catalogue: electronics_catalogue(),
            fail_status: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Answers every request with the given status
    pub fn failing(status: u16) -> Self {
        Self {
            fail_status: Some(status),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call, operation: &'static str) -> StoreResult<()> {
        self.calls.borrow_mut().push(call);
        match self.fail_status {
            Some(status) => Err(StoreError::Status { operation, status }),
            None => Ok(()),
        }
    }
}

/// The record the API echoes back for a draft
pub fn echo(id: ProductId, draft: &ProductDraft) -> Product {
    Product {
        id,
        title: draft.title.clone(),
        price: draft.price,
        description: draft.description.clone(),
        image: draft.image.clone(),
        category: draft.category.clone().unwrap_or_default(),
        rating: Rating::default(),
    }
}

impl ProductApi for RecordingApi {
    async fn list_category(&self, category: &str) -> StoreResult<Vec<Product>> {
        self.record(Call::List(category.to_string()), "list products")?;
        Ok(self
            .catalogue
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn get_product(&self, id: ProductId) -> StoreResult<Product> {
        self.record(Call::Get(id), "get product")?;
        self.catalogue
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::Status { operation: "get product", status: 404 })
    }

    async fn create_product(&self, draft: &ProductDraft) -> StoreResult<Product> {
        self.record(Call::Create(draft.clone()), "create product")?;
        Ok(echo(CREATED_ID, draft))
    }

    async fn update_product(&self, id: ProductId, draft: &ProductDraft) -> StoreResult<Product> {
        self.record(Call::Update(id, draft.clone()), "update product")?;
        Ok(echo(id, draft))
    }

    async fn delete_product(&self, id: ProductId) -> StoreResult<()> {
        self.record(Call::Delete(id), "delete product")
    }
}
