//! Field Input Component
//!
//! One form control for a `FieldSpec`: a text/number/password input, or a
//! select fed from the matching lookup table.

use leptos::prelude::*;
use shkola_api::{FieldKind, FieldSpec};

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FieldInput(
    spec: FieldSpec,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let placeholder = if spec.required {
        format!("{} *", spec.label)
    } else {
        spec.label.to_string()
    };

    match spec.kind {
        FieldKind::Reference(reference) => {
            let store = use_app_store();
            let options = move || store.lookups().with(|l| l.get(reference).options());
            view! {
                <select
                    class="field-input"
                    title=spec.label
                    prop:value=move || value.get()
                    on:change=move |ev| on_change.run(event_target_value(&ev))
                >
                    <option value="" selected=move || value.get().is_empty()>
                        {format!("{}: не выбрано", spec.label)}
                    </option>
                    {move || {
                        options()
                            .into_iter()
                            .map(|(id, name)| {
                                let id = id.to_string();
                                let selected = id.clone();
                                view! {
                                    <option value=id selected=move || value.get() == selected>
                                        {name}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            }
            .into_any()
        }
        kind => {
            let input_type = match kind {
                FieldKind::Phone => "tel",
                FieldKind::Number => "number",
                FieldKind::Secret => "password",
                _ => "text",
            };
            view! {
                <input
                    class="field-input"
                    type=input_type
                    placeholder=placeholder
                    title=spec.label
                    prop:value=move || value.get()
                    on:input=move |ev| on_change.run(event_target_value(&ev))
                />
            }
            .into_any()
        }
    }
}
