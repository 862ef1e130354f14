// web_app/routes.rs - Route paths and href builders
//
// The search query lives only in the listing URL, so every link into the
// listing is built here to keep the `search` parameter encoding in one place.

use url::form_urlencoded;

use crate::web_app::model::ProductId;

pub const HOME: &str = "/";
pub const LISTING: &str = "/products";
pub const ADD_PRODUCT: &str = "/add-product";
pub const EDIT_PRODUCT: &str = "/edit-product";

/// Query parameter holding the listing search text
pub const SEARCH_PARAM: &str = "search";

fn with_search(path: String, query: &str) -> String {
    if query.is_empty() {
        return path;
    }
    let encoded: String = form_urlencoded::Serializer::new(String::new())
        .append_pair(SEARCH_PARAM, query)
        .finish();
    format!("{}?{}", path, encoded)
}

/// `/products`, with `?search=` only when the query is non-empty
pub fn listing_href(query: &str) -> String {
    with_search(LISTING.to_string(), query)
}

/// `/products/{id}`, preserving the current search
pub fn detail_href(id: ProductId, query: &str) -> String {
    with_search(format!("{}/{}", LISTING, id), query)
}

pub fn edit_href(id: ProductId) -> String {
    format!("{}/{}", EDIT_PRODUCT, id)
}

/// Parse an identifier taken from a route parameter
pub fn parse_product_id(raw: &str) -> Option<ProductId> {
    raw.trim().parse().ok()
}
