// web_app/pages/mod.rs - Page components module
//
// This module contains page-level Leptos components:
// - HomePage: Landing page
// - ListingsPage / ProductOverlay: Product listing and its detail modal route
// - AddProductPage / EditProductPage: Product form pages
// - NotFound: Fallback with a redirect countdown

pub mod home;
pub mod listings;
pub mod product_form;
pub mod not_found;

// Re-export page components
pub use home::HomePage;
pub use listings::{ListingsPage, ProductOverlay};
pub use product_form::{AddProductPage, EditProductPage};
pub use not_found::NotFound;
