// web_app/components/deletion.rs - Delete action with confirmation

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::common::{Button, ModalWrapper, SecondaryButton};
use crate::web_app::api::{FakeStoreClient, ProductApi};
use crate::web_app::config::StoreConfig;
use crate::web_app::model::ProductId;
use crate::web_app::state::DeletePrompt;

/// Delete button that asks for confirmation first
///
/// Confirming issues one delete request. The prompt closes whatever the
/// outcome; `on_deleted` runs only when the request succeeded.
#[component]
pub fn DeleteProduct(
    product_id: ProductId,
    /// Called after a successful delete (typically to navigate away)
    on_deleted: Callback<()>,
) -> impl IntoView {
    let config = use_context::<StoreConfig>().unwrap_or_default();
    let prompt = RwSignal::new(DeletePrompt::default());
    let deleting = Signal::derive(move || prompt.with(|p| p.is_deleting()));

    let open = Callback::new(move |_: ()| prompt.update(|p| p.open()));
    let cancel = Callback::new(move |_: ()| prompt.update(|p| p.cancel()));

    let confirm = Callback::new(move |_: ()| {
        if !prompt.try_update(|p| p.begin()).unwrap_or(false) {
            return;
        }

        let api = match FakeStoreClient::from_config(&config) {
            Ok(api) => api,
            Err(e) => {
                prompt.update(|p| {
                    p.finish(&Err(e));
                });
                return;
            }
        };

        spawn_local(async move {
            let result = api.delete_product(product_id).await;
            // The page may be gone by the time the request settles
            if prompt.try_update(|p| p.finish(&result)).unwrap_or(false) {
                on_deleted.run(());
            }
        });
    });

    view! {
        <Button on_click=open color="bg-red-600 hover:bg-red-700">
            "Delete Product"
        </Button>

        <Show when=move || prompt.with(|p| p.is_open())>
            <ModalWrapper on_close=cancel title="Delete Product" width="max-w-md">
                <p class="text-gray-700 mb-6">
                    "Are you sure you want to delete this product? This action cannot be undone."
                </p>
                <div class="flex justify-end gap-3">
                    <SecondaryButton on_click=cancel disabled=deleting>
                        "Cancel"
                    </SecondaryButton>
                    <Button on_click=confirm disabled=deleting color="bg-red-600 hover:bg-red-700">
                        {move || prompt.with(|p| p.confirm_label())}
                    </Button>
                </div>
            </ModalWrapper>
        </Show>
    }
}
