// web_app/components/nav.rs - Site navigation bar

use leptos::prelude::*;

use super::search::SearchBar;
use crate::web_app::routes::{ADD_PRODUCT, HOME, LISTING};

/// Top navigation: brand, page links and the product search box
#[component]
pub fn NavBar() -> impl IntoView {
    let link_class = "px-3 py-2 rounded-lg text-gray-600 hover:text-blue-600 hover:bg-blue-50 \
                      transition-colors font-medium";

    view! {
        <nav class="bg-white shadow-sm border-b border-gray-200 sticky top-0 z-40">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-3 flex flex-col md:flex-row md:items-center gap-3">
                <a href=HOME class="flex items-center gap-2 mr-6">
                    <span class="text-2xl">"💾"</span>
                    <span class="text-xl font-bold text-gray-900 tracking-tight">"FalseDisk"</span>
                </a>

                <div class="flex gap-1 flex-1">
                    <a href=HOME class=link_class>"Home"</a>
                    <a href=LISTING class=link_class>"Products"</a>
                    <a href=ADD_PRODUCT class=link_class>"Add Product"</a>
                </div>

                <SearchBar />
            </div>
        </nav>
    }
}
