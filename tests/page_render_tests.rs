// tests/page_render_tests.rs - Server rendering of pages and components
//
// Runs with the `ssr` feature: every view is built inside its own owner and
// rendered to HTML the way the host renders a first request. Effects do not
// run on the server, so pages show their initial state (e.g. the listing
// before its fetch settles).

#![recursion_limit = "256"]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use falsedisk_store::fixtures::products::sample_product;
use falsedisk_store::web_app::app::App;
use falsedisk_store::web_app::components::*;
use falsedisk_store::web_app::pages::product_form::ProductFormView;
use falsedisk_store::web_app::state::{scoped_task, Cancel, ScheduledTask};
use leptos::prelude::*;
use leptos_meta::ServerMetaContext;
use leptos_router::components::Router;
use leptos_router::location::RequestUrl;

// Helper to render a view inside a fresh owner for the given request path
fn render<V, F>(path: &str, f: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| {
        let (meta, _output) = ServerMetaContext::new();
        provide_context(meta);
        provide_context(RequestUrl::new(path));
        f().to_html()
    })
}

fn render_app(path: &str) -> String {
    render(path, || view! { <App /> })
}

#[test]
fn test_home_page_render() {
    let html = render_app("/");
    assert!(html.contains("Welcome to FalseDisk"));
    assert!(html.contains("Shop Now"));
    assert!(html.contains("Fastest Gear"));
}

#[test]
fn test_nav_bar_render() {
    let html = render("/", || view! { <Router><NavBar /></Router> });
    assert!(html.contains("FalseDisk"));
    assert!(html.contains("href=\"/add-product\""));
    assert!(html.contains("placeholder=\"Search products...\""));
}

#[test]
fn test_listings_page_renders_loading_first() {
    let html = render_app("/products?search=ssd");
    assert!(html.contains("Product Listings"));
    assert!(html.contains("Loading products..."));
    // Nothing is filtered or counted before the collection arrives
    assert!(!html.contains("found"));
}

#[test]
fn test_product_overlay_route_keeps_listing_mounted() {
    let html = render_app("/products/14");
    // The overlay is a child route; the listing renders around it
    assert!(html.contains("Product Listings"));
    // No product is selected until the collection has loaded
    assert!(!html.contains("role=\"dialog\""));
}

#[test]
fn test_add_product_page_render() {
    let html = render_app("/add-product");
    assert!(html.contains("Add New Product"));
    assert!(html.contains("Product Title"));
    assert!(html.contains("Image URL"));
    assert!(html.contains("Back to Products"));
    assert!(!html.contains("Danger Zone"));
}

#[test]
fn test_edit_product_page_resolves_record_first() {
    let html = render_app("/edit-product/3");
    assert!(html.contains("Loading product..."));
    assert!(!html.contains("Update Product"));
}

#[test]
fn test_product_form_view_edit_mode() {
    let html = render("/edit-product/3", || {
        view! {
            <Router>
                <ProductFormView record=Some(sample_product(3)) />
            </Router>
        }
    });
    assert!(html.contains("Edit Product"));
    assert!(html.contains("Update Product"));
    assert!(html.contains("Danger Zone"));
    assert!(html.contains("Delete Product"));
}

#[test]
fn test_not_found_render() {
    let html = render_app("/no-such-page");
    assert!(html.contains("404 - Page Not Found"));
    assert!(html.contains("5 seconds"));
    assert!(html.contains("Go to Home Now"));
}

#[test]
fn test_delete_product_starts_closed() {
    let html = render("/edit-product/3", || {
        view! { <DeleteProduct product_id=3 on_deleted=Callback::new(|_: ()| ()) /> }
    });
    assert!(html.contains("Delete Product"));
    assert!(!html.contains("Are you sure"));
}

#[test]
fn test_modal_wrapper_render() {
    let html = render("/products/3", || {
        view! {
            <ModalWrapper on_close=Callback::new(|_: ()| ()) title="Product Details">
                <p>"Body"</p>
            </ModalWrapper>
        }
    });
    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains("Product Details"));
    assert!(html.contains("title=\"Close\""));
    assert!(html.contains("<p>Body</p>"));
}

#[test]
fn test_product_detail_render() {
    let html = render("/products/3", || view! { <ProductDetail product=sample_product(3) /> });
    assert!(html.contains("Sample Device 3"));
    assert!(html.contains("href=\"/edit-product/3\""));
    assert!(html.contains("href=\"/add-product\""));
}

#[derive(Clone, Default)]
struct CountingHandle(Arc<AtomicU32>);

impl Cancel for CountingHandle {
    fn cancel(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn test_pending_redirect_cleared_when_view_is_left() {
    let handle = CountingHandle::default();
    let owner = Owner::new();

    owner.with(|| {
        let redirect = scoped_task::<CountingHandle>();
        // A save succeeded and scheduled the redirect
        let _ = redirect.try_update_value(|task| task.replace(ScheduledTask::new(handle.clone())));
    });
    assert_eq!(handle.0.load(Ordering::SeqCst), 0);

    owner.cleanup();
    assert_eq!(handle.0.load(Ordering::SeqCst), 1);
}

#[test]
fn test_empty_redirect_slot_cleans_up_quietly() {
    let owner = Owner::new();
    owner.with(|| {
        let _ = scoped_task::<CountingHandle>();
    });
    owner.cleanup();
}
