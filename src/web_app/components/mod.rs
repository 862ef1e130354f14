// web_app/components/mod.rs - UI components module
//
// This module contains all Leptos UI components for the application.
//
// Structure:
// - common.rs: Reusable atomic components (Button, Modal, Loading, etc.)
// - nav.rs: Site navigation bar
// - search.rs: Search-related components (SearchBar, SearchSummary)
// - product.rs: Product display components (ProductCard, ProductDetail)
// - form.rs: Product form inputs
// - deletion.rs: Delete action with its confirmation prompt

pub mod common;
pub mod nav;
pub mod search;
pub mod product;
pub mod form;
pub mod deletion;

// Re-export commonly used components for convenience
pub use common::*;
pub use nav::*;
pub use search::*;
pub use product::*;
pub use form::*;
pub use deletion::*;
