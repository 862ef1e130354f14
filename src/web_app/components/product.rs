// web_app/components/product.rs - Product display components
//
// Components for displaying products including:
// - ProductCard: Grid card for the listing
// - ProductGrid: Grid layout for multiple products
// - EmptyResults: Shown when the listing has nothing to display
// - ProductDetail: Full product detail view (rendered inside the modal)

use leptos::prelude::*;

use super::common::{Badge, StarRating};
use crate::web_app::app::EditHint;
use crate::web_app::model::Product;
use crate::web_app::routes::{detail_href, edit_href, ADD_PRODUCT, LISTING};
use crate::web_app::state::listing::{empty_message, is_searching};

/// Shorten `text` to at most `max_chars` characters
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", text[..cut].trim_end()),
        None => text.to_string(),
    }
}

/// Product card for the listing grid
///
/// The details link keeps the current search so closing the modal returns
/// to the same filtered view.
#[component]
pub fn ProductCard(
    product: Product,
    /// Current search text
    query: Signal<String>,
) -> impl IntoView {
    let product_id = product.id;
    let price_display = product.price_label();
    let description_preview = preview(&product.description, 100);

    view! {
        <div class="group bg-white rounded-xl shadow-sm hover:shadow-xl \
                    transition-all duration-300 border border-gray-100 \
                    flex flex-col h-full overflow-hidden">
            <div class="h-48 bg-white flex items-center justify-center p-4">
                <img
                    src=product.image.clone()
                    alt=product.title.clone()
                    class="max-h-full object-contain group-hover:scale-105 transition-transform"
                />
            </div>

            <div class="p-5 flex flex-col flex-1">
                <div class="flex justify-between items-start mb-3">
                    <StarRating rating=product.rating.rate />
                    <span class="text-lg font-bold text-blue-600 bg-blue-50 px-2 py-1 rounded-lg">
                        {price_display}
                    </span>
                </div>

                <h3 class="font-bold text-gray-900 mb-2 line-clamp-2 group-hover:text-blue-600 transition-colors">
                    {product.title.clone()}
                </h3>

                <p class="text-gray-600 text-sm mb-4 flex-1">{description_preview}</p>

                <div class="flex gap-2 pt-3 border-t border-gray-100">
                    <a
                        href=move || detail_href(product_id, &query.get())
                        class="flex-1 text-center px-3 py-2 bg-blue-600 text-white rounded-lg \
                               hover:bg-blue-700 transition-colors text-sm font-medium"
                    >
                        "Details"
                    </a>
                    // Cart is not implemented; the control is intentionally inert
                    <button
                        type="button"
                        class="flex-1 px-3 py-2 bg-white text-gray-700 rounded-lg border border-gray-300 \
                               hover:bg-gray-50 transition-colors text-sm font-medium"
                    >
                        "Add to Cart"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Grid of product cards
#[component]
pub fn ProductGrid(
    products: Signal<Vec<Product>>,
    query: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6">
            <For
                each=move || products.get()
                key=|product| product.id
                children=move |product| view! { <ProductCard product=product query=query /> }
            />
        </div>
    }
}

/// Empty-state message with a way back to the full listing
#[component]
pub fn EmptyResults(query: Signal<String>) -> impl IntoView {
    view! {
        <div class="text-center py-20 bg-white rounded-2xl border border-dashed border-gray-300">
            <div class="text-6xl mb-4 opacity-50">"🔍"</div>
            <h3 class="text-xl font-medium text-gray-900 mb-4">
                {move || empty_message(&query.get())}
            </h3>
            <Show when=move || is_searching(&query.get())>
                <a
                    href=LISTING
                    class="inline-block px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
                >
                    "Clear Search"
                </a>
            </Show>
        </div>
    }
}

/// Product detail view
///
/// Full product information display, shown inside the detail modal. The
/// edit action hands the record to the edit page so it can skip the fetch.
#[component]
pub fn ProductDetail(product: Product) -> impl IntoView {
    let hint = use_context::<EditHint>();
    let edit_link = edit_href(product.id);
    let price_display = product.price_label();
    let reviews = product.rating.reviews_label();
    let has_category = !product.category.is_empty();
    let category = product.category.clone();
    let record = product.clone();

    let on_edit = move |_| {
        if let Some(EditHint(slot)) = hint {
            slot.set(Some(record.clone()));
        }
    };

    view! {
        <div class="space-y-8">
            <div class="flex flex-col md:flex-row gap-6">
                <div class="w-full md:w-1/3 aspect-square bg-white rounded-xl flex items-center justify-center p-4 border border-gray-100">
                    <img src=product.image.clone() alt=product.title.clone() class="max-h-full object-contain" />
                </div>

                <div class="flex-1 space-y-4">
                    <h2 class="text-2xl font-bold text-gray-900">{product.title.clone()}</h2>

                    <div class="flex items-center gap-3">
                        <StarRating rating=product.rating.rate />
                        <span class="text-sm text-gray-500">{reviews}</span>
                    </div>

                    <div class="text-3xl font-bold text-gray-900">{price_display}</div>

                    {has_category.then(|| view! { <Badge variant="blue">{category}</Badge> })}

                    <p class="text-gray-600 leading-relaxed">{product.description.clone()}</p>
                </div>
            </div>

            <div class="flex justify-end gap-3 pt-6 border-t border-gray-100">
                <a
                    href=ADD_PRODUCT
                    class="px-4 py-2 bg-white text-gray-700 rounded-lg border border-gray-300 hover:bg-gray-50 font-medium"
                >
                    "Add Product"
                </a>
                <a
                    href=edit_link
                    on:click=on_edit
                    class="px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium"
                >
                    "Edit Product"
                </a>
            </div>
        </div>
    }
}
