// lib.rs - Root module for the falsedisk_store library
//
// The library is compiled twice by cargo-leptos: once natively for the SSR
// host (feature "ssr") and once to WASM for hydration (feature "hydrate").
// Without either feature only the framework-free state logic, API client
// and fixtures are built, which is what the test suites link against.

#![recursion_limit = "256"]

/// Sample catalogue data shared by unit and integration tests
pub mod fixtures;

/// The storefront application
pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// WASM entry point: hydrates the server-rendered shell.
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
