// web_app/mod.rs - Root module for the FalseDisk storefront
//
// Architecture:
// - model/: Product data types exchanged with the remote API
// - config.rs: Store configuration (API base URL, category, timings)
// - error.rs: Error taxonomy for remote calls and form validation
// - api/: ProductApi trait and the reqwest-backed FakeStore client
// - routes.rs: Route paths and href builders
// - state/: Framework-free view state (listing, selection, form, deletion, timers)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;
pub mod config;
pub mod error;
pub mod api;
pub mod routes;
pub mod state;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
