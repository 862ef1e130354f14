// web_app/pages/product_form.rs - Add and edit product pages
//
// Both pages render ProductFormView; the edit page first resolves the record
// (from the detail view's hint, or by fetching it). A successful save shows
// the acknowledgment and schedules one redirect to the listing. The redirect
// timer is owned by the form view and cleared when the view is left.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::web_app::api::{FakeStoreClient, ProductApi};
use crate::web_app::app::EditHint;
use crate::web_app::components::{DeleteProduct, ErrorDisplay, FormField, Loading, SuccessDisplay};
use crate::web_app::config::StoreConfig;
use crate::web_app::error::Field;
use crate::web_app::model::Product;
use crate::web_app::routes::{parse_product_id, LISTING};
use crate::web_app::state::{scoped_task, send_draft, take_hint, ProductForm, ScheduledTask, SubmitStatus};

/// `/add-product`
#[component]
pub fn AddProductPage() -> impl IntoView {
    view! { <ProductFormView record=None /> }
}

/// `/edit-product/:id`
#[component]
pub fn EditProductPage() -> impl IntoView {
    let config = use_context::<StoreConfig>().unwrap_or_default();
    let hint = use_context::<EditHint>();
    let params = use_params_map();

    // None while the record is being resolved
    let record = RwSignal::new(None::<Result<Product, String>>);

    Effect::new(move || {
        let Some(id) = params
            .with(|p| p.get("id"))
            .and_then(|raw| parse_product_id(&raw))
        else {
            record.set(Some(Err("Invalid product id".to_string())));
            return;
        };

        let cached = hint
            .and_then(|EditHint(slot)| slot.try_update_untracked(|cached| take_hint(id, cached)))
            .flatten();
        if let Some(product) = cached {
            record.set(Some(Ok(product)));
            return;
        }

        record.set(None);
        let api = match FakeStoreClient::from_config(&config) {
            Ok(api) => api,
            Err(e) => {
                record.set(Some(Err(e.to_string())));
                return;
            }
        };
        spawn_local(async move {
            let result = api.get_product(id).await.map_err(|e| {
                tracing::error!("Error fetching product {}: {}", id, e);
                format!("Could not load product {}: {}", id, e)
            });
            let _ = record.try_set(Some(result));
        });
    });

    view! {
        {move || match record.get() {
            None => view! { <Loading message="Loading product..." /> }.into_any(),
            Some(Err(e)) => view! {
                <div class="max-w-2xl mx-auto px-4 py-12">
                    <ErrorDisplay error=e />
                </div>
            }
            .into_any(),
            Some(Ok(product)) => view! { <ProductFormView record=Some(product) /> }.into_any(),
        }}
    }
}

/// Create/edit form
///
/// Edit mode exactly when `record` is supplied.
#[component]
pub fn ProductFormView(record: Option<Product>) -> impl IntoView {
    let config = use_context::<StoreConfig>().unwrap_or_default();
    let navigate = use_navigate();

    let form = RwSignal::new(ProductForm::new(record.as_ref()));
    let mode = form.with_untracked(|f| f.mode());
    // Leaving the form clears a pending redirect
    let redirect = scoped_task::<TimeoutHandle>();
    let deleted = RwSignal::new(false);

    let delay = config.redirect_delay;
    let submit_navigate = navigate.clone();
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(draft) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        let api = match FakeStoreClient::from_config(&config) {
            Ok(api) => api,
            Err(e) => {
                form.update(|f| {
                    f.finish_submit(Err(e));
                });
                return;
            }
        };

        let navigate = submit_navigate.clone();
        spawn_local(async move {
            let result = send_draft(&api, mode, &draft).await;
            if !form.try_update(|f| f.finish_submit(result)).unwrap_or(false) {
                return;
            }
            match set_timeout_with_handle(move || navigate(LISTING, Default::default()), delay) {
                Ok(handle) => {
                    tracing::debug!("Redirecting to {} in {:?}", LISTING, delay);
                    let _ = redirect.try_update_value(|task| task.replace(ScheduledTask::new(handle)));
                }
                Err(e) => tracing::error!("Could not schedule redirect: {:?}", e),
            }
        });
    };

    // Navigate away once the delete has gone through
    Effect::new(move || {
        if deleted.get() {
            navigate(LISTING, Default::default());
        }
    });

    let busy = move || form.with(|f| f.status().is_busy());

    view! {
        <div class="min-h-screen bg-gray-50 py-10">
            <div class="max-w-2xl mx-auto px-4">
                <div class="bg-white rounded-2xl shadow-sm border border-gray-100 p-8">
                    <h1 class="text-2xl font-bold text-gray-900 mb-6">{mode.heading()}</h1>

                    {move || match form.with(|f| f.status().clone()) {
                        SubmitStatus::Saved(message) => Some(view! {
                            <div class="mb-6"><SuccessDisplay message=message /></div>
                        }.into_any()),
                        SubmitStatus::Failed(message) => Some(view! {
                            <div class="mb-6"><ErrorDisplay error=message /></div>
                        }.into_any()),
                        SubmitStatus::Idle | SubmitStatus::Busy => None,
                    }}

                    <form on:submit=on_submit class="space-y-5" novalidate=true>
                        <FormField form=form field=Field::Title placeholder="e.g. Portable SSD 1TB" />
                        <FormField form=form field=Field::Price input_type="number" placeholder="0.00" />
                        <FormField form=form field=Field::Description multiline=true />
                        <FormField form=form field=Field::Image input_type="url" placeholder="https://" />

                        <div class="flex items-center justify-between pt-4">
                            <a href=LISTING class="text-gray-600 hover:text-gray-900 font-medium">
                                "Back to Products"
                            </a>
                            <div class="flex gap-3">
                                <a
                                    href=LISTING
                                    class="px-6 py-2 bg-white text-gray-700 rounded-lg border border-gray-300 \
                                           hover:bg-gray-50 font-medium shadow-sm"
                                >
                                    "Cancel"
                                </a>
                                <button
                                    type="submit"
                                    disabled=busy
                                    class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 \
                                           disabled:bg-gray-400 disabled:cursor-not-allowed font-semibold shadow-sm"
                                >
                                    {move || if busy() { mode.busy_label() } else { mode.submit_label() }}
                                </button>
                            </div>
                        </div>
                    </form>
                </div>

                {record.map(|product| view! {
                    <div class="bg-white rounded-2xl shadow-sm border border-red-100 p-8 mt-6">
                        <h2 class="text-lg font-bold text-gray-900 mb-2">"Danger Zone"</h2>
                        <p class="text-sm text-gray-600 mb-4">"Remove this product from the store."</p>
                        <DeleteProduct
                            product_id=product.id
                            on_deleted=Callback::new(move |_: ()| deleted.set(true))
                        />
                    </div>
                })}
            </div>
        </div>
    }
}
