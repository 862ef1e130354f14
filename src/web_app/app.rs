// web_app/app.rs - Root application component
//
// This is the entry point for the Leptos application.
// It sets up routing, shared context, and the component tree.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::components::NavBar;
use crate::web_app::config::StoreConfig;
use crate::web_app::model::Product;
use crate::web_app::pages::{
    AddProductPage, EditProductPage, HomePage, ListingsPage, NotFound, ProductOverlay,
};

/// Record handed from the detail modal to the edit page
///
/// Only a hint: the edit page uses it when its id matches the route and
/// fetches the product otherwise (deep links, reloads).
#[derive(Clone, Copy)]
pub struct EditHint(pub RwSignal<Option<Product>>);

/// Root application component
///
/// Sets up:
/// - Meta tags
/// - Store configuration and the edit hint as context
/// - Router with routes (the detail modal is a child of the listing)
#[component]
pub fn App() -> impl IntoView {
    // Provide meta context for <Title>, <Meta>, etc.
    provide_meta_context();

    // Same compile-time configuration on the server and in the browser
    provide_context(StoreConfig::default());
    provide_context(EditHint(RwSignal::new(None)));

    view! {
        <Title text="FalseDisk" />
        <Meta name="description" content="An online computer store offering the latest & greatest in FakeTech" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/falsedisk_store.css" />

        <Router>
            <NavBar />
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <ParentRoute path=path!("/products") view=ListingsPage>
                        <Route path=path!("") view=|| () />
                        <Route path=path!(":id") view=ProductOverlay />
                    </ParentRoute>
                    <Route path=path!("/add-product") view=AddProductPage />
                    <Route path=path!("/edit-product/:id") view=EditProductPage />
                </Routes>
            </main>
        </Router>
    }
}
