// web_app/components/form.rs - Product form inputs
//
// Each input reads and writes one field of the shared ProductForm signal.
// Fields are highlighted only after a rejected submit attempt; a rejected
// submit shows no message.

use leptos::prelude::*;

use crate::web_app::error::Field;
use crate::web_app::state::ProductForm;

fn input_class(invalid: bool) -> &'static str {
    if invalid {
        "w-full px-4 py-2 border-2 border-red-400 bg-red-50 rounded-lg outline-none \
         focus:ring-4 focus:ring-red-100"
    } else {
        "w-full px-4 py-2 border border-gray-300 rounded-lg outline-none \
         focus:ring-4 focus:ring-blue-100 focus:border-blue-500"
    }
}

/// Labelled input bound to one form field
#[component]
pub fn FormField(
    form: RwSignal<ProductForm>,
    field: Field,
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Render a textarea instead of a single-line input
    #[prop(default = false)]
    multiline: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.fields.get(field).to_string());
    let invalid = move || form.with(|f| f.field_error(field).is_some());
    let on_input = move |ev: leptos::web_sys::Event| form.update(|f| f.fields.set(field, event_target_value(&ev)));

    let control = if multiline {
        view! {
            <textarea
                rows="4"
                placeholder=placeholder
                class=move || input_class(invalid())
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type
                step=(input_type == "number").then_some("0.01")
                min=(input_type == "number").then_some("0")
                placeholder=placeholder
                class=move || input_class(invalid())
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <label class="block">
            <span class="block text-sm font-medium text-gray-700 mb-1">{field.label()}</span>
            {control}
        </label>
    }
}
