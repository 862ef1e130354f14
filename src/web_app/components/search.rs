// web_app/components/search.rs - Search-related UI components
//
// These components handle the search interface including:
// - SearchBar: Navigation bar input that writes the query into the URL
// - SearchSummary: Result count line with a Clear Search action
//
// The listing reads its query back from the URL, so neither component
// holds the query beyond what is being typed.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::web_app::routes::{listing_href, LISTING, SEARCH_PARAM};
use crate::web_app::state::listing::{is_searching, query_from_param, results_summary};

/// Search bar component
///
/// Submitting navigates to the listing with the entered text as its
/// `search` parameter.
#[component]
pub fn SearchBar() -> impl IntoView {
    let query_map = use_query_map();
    let navigate = use_navigate();

    // Local state for the input (allows typing without touching the URL on every keystroke)
    let local_query = RwSignal::new(query_from_param(
        query_map.with_untracked(|params| params.get(SEARCH_PARAM)),
    ));

    // Sync local with the URL when it changes (e.g. Clear Search)
    Effect::new(move || {
        local_query.set(query_from_param(query_map.with(|params| params.get(SEARCH_PARAM))));
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let query = local_query.get_untracked();
        navigate(&listing_href(query.trim()), Default::default());
    };

    view! {
        <form on:submit=on_submit class="w-full md:w-80" role="search">
            <div class="relative">
                <div class="absolute inset-y-0 left-0 pl-3 flex items-center pointer-events-none">
                    <span class="text-gray-400">"🔍"</span>
                </div>
                <input
                    type="search"
                    placeholder="Search products..."
                    class="w-full pl-10 pr-4 py-2 border border-gray-200 rounded-lg \
                           focus:ring-4 focus:ring-blue-100 focus:border-blue-500 \
                           outline-none transition-all text-gray-900"
                    prop:value=move || local_query.get()
                    on:input=move |ev| local_query.set(event_target_value(&ev))
                />
            </div>
        </form>
    }
}

/// Result count line shown above the grid
#[component]
pub fn SearchSummary(
    query: Signal<String>,
    /// Number of products currently displayed
    count: Signal<usize>,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between mb-6">
            <span class="text-sm text-gray-600 font-medium">
                {move || results_summary(count.get(), &query.get())}
            </span>
            <Show when=move || is_searching(&query.get())>
                <a
                    href=LISTING
                    class="text-sm px-3 py-1 bg-blue-50 text-blue-700 rounded-full hover:bg-blue-100 transition-colors"
                >
                    "Clear Search ✕"
                </a>
            </Show>
        </div>
    }
}
