// web_app/pages/listings.rs - Product listing page and detail overlay
//
// State management:
// - ListingsPage owns the base collection (fetched once per mount)
// - The search query is derived from the `search` URL parameter only
// - The visible products are a memo over (base collection, query)
// - ProductOverlay is the `/products/:id` child route; it owns the modal
//   selection so leaving the route drops the selection with it
//
// The listing stays mounted while the overlay opens and closes, so the
// fetch is not repeated when moving between `/products` and
// `/products/:id`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};

use crate::web_app::api::FakeStoreClient;
use crate::web_app::components::{
    EmptyResults, Loading, ModalWrapper, ProductDetail, ProductGrid, SearchSummary,
};
use crate::web_app::config::StoreConfig;
use crate::web_app::routes::{listing_href, parse_product_id, SEARCH_PARAM};
use crate::web_app::state::listing::{load_listing, query_from_param};
use crate::web_app::state::{filter_products, ListingState, Selection};

/// Listing state shared with the detail overlay
#[derive(Clone, Copy)]
struct ListingContext {
    listing: RwSignal<ListingState>,
    query: Memo<String>,
}

/// Product listing page
#[component]
pub fn ListingsPage() -> impl IntoView {
    let config = use_context::<StoreConfig>().unwrap_or_default();
    let query_map = use_query_map();

    let query = Memo::new(move |_| {
        query_from_param(query_map.with(|params| params.get(SEARCH_PARAM)))
    });
    let listing = RwSignal::new(ListingState::Loading);
    let visible = Memo::new(move |_| {
        listing.with(|state| query.with(|q| filter_products(state.products(), q)))
    });

    provide_context(ListingContext { listing, query });

    // Single fetch per mount; effects only run in the browser
    Effect::new(move || {
        let api = match FakeStoreClient::from_config(&config) {
            Ok(api) => api,
            Err(e) => {
                tracing::error!("Error fetching products: {}", e);
                listing.set(ListingState::Ready(Vec::new()));
                return;
            }
        };
        let category = config.category.clone();

        spawn_local(async move {
            let state = load_listing(&api, &category).await;
            // Dropped if the page was left before the response arrived
            let _ = listing.try_set(state);
        });
    });

    let products = Signal::from(visible);
    let query_signal = Signal::from(query);
    let count = Signal::derive(move || visible.with(|v| v.len()));

    view! {
        <div class="min-h-screen bg-gray-50">
            <header class="bg-white border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                    <h1 class="text-3xl font-bold text-gray-900">"Product Listings"</h1>
                    <p class="text-gray-600 mt-2">"Explore the range of FalseDisk electronics"</p>
                </div>
            </header>

            <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <Show
                    when=move || !listing.with(|state| state.is_loading())
                    fallback=|| view! { <Loading message="Loading products..." /> }
                >
                    <SearchSummary query=query_signal count=count />
                    <Show
                        when=move || { count.get() > 0 }
                        fallback=move || view! { <EmptyResults query=query_signal /> }
                    >
                        <ProductGrid products=products query=query_signal />
                    </Show>
                </Show>
            </main>

            <Outlet />
        </div>
    }
}

/// Detail modal for `/products/:id`
///
/// Selects the product from the base collection once it has loaded. An
/// identifier that is not in the collection leaves the modal closed.
#[component]
pub fn ProductOverlay() -> impl IntoView {
    let Some(ctx) = use_context::<ListingContext>() else {
        tracing::warn!("Product overlay rendered outside the listing page");
        return ().into_any();
    };
    let params = use_params_map();
    let navigate = use_navigate();
    let selection = RwSignal::new(Selection::default());

    Effect::new(move || {
        let id = params
            .with(|p| p.get("id"))
            .and_then(|raw| parse_product_id(&raw));
        ctx.listing.with(|state| {
            if let (Some(id), false) = (id, state.is_loading()) {
                selection.update(|s| {
                    s.select(id, state.products());
                });
            }
        });
    });

    // Closing the modal returns to the listing with the same search
    Effect::new(move |was_open: Option<bool>| {
        let open = selection.with(|s| s.is_open());
        if was_open == Some(true) && !open {
            navigate(&listing_href(&ctx.query.get_untracked()), Default::default());
        }
        open
    });

    let on_close = Callback::new(move |_: ()| selection.update(|s| s.close()));

    view! {
        {move || selection.with(|s| s.visible_product().cloned()).map(|product| view! {
            <ModalWrapper on_close=on_close title="Product Details">
                <ProductDetail product=product />
            </ModalWrapper>
        })}
    }
    .into_any()
}
