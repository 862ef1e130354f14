// web_app/state/listing.rs - Listing synchronization and search filtering
//
// The listing keeps the last successful fetch as its base collection and
// derives the visible products from (base collection, query). The derived
// view is rebuilt on every change and never edited in place.

use crate::web_app::api::ProductApi;
use crate::web_app::error::StoreResult;
use crate::web_app::model::Product;

/// Products shown by the listing page
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListingState {
    /// The one fetch issued on mount has not resolved yet
    #[default]
    Loading,
    /// Base collection from the last fetch (empty after a failed fetch)
    Ready(Vec<Product>),
}

impl ListingState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ListingState::Loading)
    }

    /// Base collection; empty while loading
    pub fn products(&self) -> &[Product] {
        match self {
            ListingState::Loading => &[],
            ListingState::Ready(products) => products,
        }
    }
}

/// Whether a query narrows the listing (blank queries do not)
pub fn is_searching(query: &str) -> bool {
    !query.trim().is_empty()
}

/// Case-insensitive substring match on title or description
///
/// A blank query returns the base collection unchanged, order preserved.
pub fn filter_products(base: &[Product], query: &str) -> Vec<Product> {
    if !is_searching(query) {
        return base.to_vec();
    }

    let needle = query.to_lowercase();
    base.iter()
        .filter(|product| matches_query(product, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercase
fn matches_query(product: &Product, needle: &str) -> bool {
    product.title.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

/// Query text carried by the `search` URL parameter
pub fn query_from_param(param: Option<String>) -> String {
    param.unwrap_or_default()
}

/// Resolve the mount fetch into a base collection
///
/// Failures are logged and read as "no products" rather than surfaced.
pub fn settle_fetch(result: StoreResult<Vec<Product>>) -> ListingState {
    match result {
        Ok(products) => ListingState::Ready(products),
        Err(e) => {
            tracing::error!("Error fetching products: {}", e);
            ListingState::Ready(Vec::new())
        }
    }
}

/// Issue the single read request for `category` and settle it
pub async fn load_listing<A: ProductApi>(api: &A, category: &str) -> ListingState {
    settle_fetch(api.list_category(category).await)
}

/// e.g. `2 products found for "phone"`
pub fn results_summary(count: usize, query: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    if is_searching(query) {
        format!("{} product{} found for \"{}\"", count, plural, query)
    } else {
        format!("{} product{} found", count, plural)
    }
}

/// Message for an empty filtered view
pub fn empty_message(query: &str) -> String {
    if is_searching(query) {
        format!("No products match \"{}\". Try searching something else.", query)
    } else {
        "No products available at the moment.".to_string()
    }
}
