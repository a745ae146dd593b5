//! Marks Filter Panel
//!
//! Students, teachers and subjects as checklists, a mark range and a time
//! window. "Применить" turns the draft into the marks filter.

use leptos::prelude::*;
use shkola_api::domain::{EntityId, MarkFilter, MarkFilterDraft};
use shkola_api::notification::Notification;
use shkola_api::Reference;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn IdChecklist(reference: Reference, draft: RwSignal<MarkFilterDraft>) -> impl IntoView {
    let store = use_app_store();

    let ids = move |d: &MarkFilterDraft| -> Vec<EntityId> {
        match reference {
            Reference::Student => d.student_ids.clone(),
            Reference::Teacher => d.teacher_ids.clone(),
            _ => d.subject_ids.clone(),
        }
    };
    let toggle = move |id: EntityId, on: bool| {
        draft.update(|d| {
            let list = match reference {
                Reference::Student => &mut d.student_ids,
                Reference::Teacher => &mut d.teacher_ids,
                _ => &mut d.subject_ids,
            };
            list.retain(|x| *x != id);
            if on {
                list.push(id);
            }
        });
    };

    view! {
        <fieldset class="checklist">
            <legend>{reference.label()}</legend>
            {move || {
                store
                    .lookups()
                    .with(|l| l.get(reference).options())
                    .into_iter()
                    .map(|(id, name)| view! {
                        <label>
                            <input
                                type="checkbox"
                                prop:checked=move || draft.with(|d| ids(d).contains(&id))
                                on:change=move |ev| toggle(id, event_target_checked(&ev))
                            />
                            {name}
                        </label>
                    })
                    .collect_view()
            }}
        </fieldset>
    }
}

#[component]
pub fn MarksFilterPanel(filter: RwSignal<MarkFilter>) -> impl IntoView {
    let ctx = use_app_context();
    let draft = RwSignal::new(MarkFilterDraft::default());

    let text_input = move |label: &'static str,
                           input_type: &'static str,
                           get: fn(&MarkFilterDraft) -> &String,
                           set: fn(&mut MarkFilterDraft, String)| {
        view! {
            <label class="filter-field">
                {label}
                <input
                    type=input_type
                    prop:value=move || draft.with(|d| get(d).clone())
                    on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
                />
            </label>
        }
    };

    let on_apply = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let offset = *chrono::Local::now().offset();
        match draft.with_untracked(|d| d.apply(offset)) {
            Ok(applied) => filter.set(applied),
            Err(err) => ctx.notify(Notification::error(err.user_message("Invalid filter."))),
        }
    };

    let on_reset = move |_| {
        draft.set(MarkFilterDraft::default());
        filter.set(MarkFilter::default());
    };

    view! {
        <form class="marks-filter" on:submit=on_apply>
            <IdChecklist reference=Reference::Student draft=draft />
            <IdChecklist reference=Reference::Teacher draft=draft />
            <IdChecklist reference=Reference::Subject draft=draft />
            {text_input("Оценка от", "number", |d| &d.least, |d, v| d.least = v)}
            {text_input("Оценка до", "number", |d| &d.most, |d, v| d.most = v)}
            {text_input("После", "datetime-local", |d| &d.after, |d, v| d.after = v)}
            {text_input("До", "datetime-local", |d| &d.before, |d, v| d.before = v)}
            <button type="submit">"Применить"</button>
            <button type="button" on:click=on_reset>"Сбросить"</button>
        </form>
    }
}
