// web_app/model/mod.rs - Product data exchanged with the remote API
//
// These structs mirror the FakeStore JSON shapes. The remote API owns the
// records; the client never assigns identifiers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Server-assigned product identifier
pub type ProductId = i32;

/// Product as returned by the remote API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    // Sent as a JSON number; accepted as number or string
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub description: String,
    pub image: String,
    // Create/update echoes leave these out
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: Rating,
}

impl Product {
    /// Price formatted for display, e.g. `$109.95`
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }
}

/// Aggregate review score
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score (0.0 to 5.0)
    pub rate: f64,
    /// Number of reviews
    pub count: u32,
}

impl Rating {
    pub fn reviews_label(&self) -> String {
        format!("({} reviews)", self.count)
    }
}

/// Payload for create and update requests
///
/// Never carries an identifier: create lets the server assign one and
/// update addresses the record through the URL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub description: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}
