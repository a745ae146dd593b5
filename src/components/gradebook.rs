//! Gradebook Component
//!
//! Pick a subject, see every student's marks in it, and put a new mark
//! next to any student. New marks are stamped with the signed-in teacher.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shkola_api::domain::{EntityId, MarkFilter, Marks, Students};
use shkola_api::gradebook::{new_mark, GradebookState, GradebookView};
use shkola_api::notification::Notification;
use shkola_api::screen::Mutation;
use shkola_api::Reference;

use super::FieldInput;
use crate::commands;
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Gradebook() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (subject, set_subject) = signal(String::new());
    let state = RwSignal::new(GradebookState::default());
    let (fetch, set_fetch) = signal(0u32);

    let subject_id = Memo::new(move |_| state.with(|s| s.subject_id()));

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        spawn_local(async move {
            let result = commands::list::<Students>(&Default::default()).await;
            state.try_update(|s| s.students_loaded(result));
        });
    });

    Effect::new(move |_| {
        let _ = fetch.get();
        let Some(id) = subject_id.get() else {
            return;
        };
        spawn_local(async move {
            let result = commands::list::<Marks>(&MarkFilter::for_subject(id)).await;
            state.try_update(|s| s.marks_loaded(id, result));
        });
    });

    let pick_subject = move |raw: String| {
        let id = raw.trim().parse::<EntityId>().ok();
        set_subject.set(raw);
        state.update(|s| s.select_subject(id));
    };

    let give_mark = move |student_id: EntityId, raw: String| {
        let payload = store
            .session()
            .with_untracked(|session| new_mark(session, subject_id.get_untracked(), student_id, &raw));
        let payload = match payload {
            Ok(payload) => payload,
            Err(err) => {
                ctx.notify(Notification::error(
                    err.user_message(&Mutation::Create.fallback_message::<Marks>()),
                ));
                return;
            }
        };
        spawn_local(async move {
            match commands::create::<Marks>(&payload).await {
                Ok(_) => {
                    ctx.notify(Notification::operation_successful());
                    set_fetch.update(|n| *n += 1);
                }
                Err(err) => ctx.notify(Notification::error(
                    err.user_message(&Mutation::Create.fallback_message::<Marks>()),
                )),
            }
        });
    };

    let subject_field = shkola_api::FieldSpec::required(
        "subject_id",
        "Предмет",
        shkola_api::FieldKind::Reference(Reference::Subject),
    );

    let table = move || match state.with(|s| s.view()) {
        GradebookView::NoSubject => view! { <p class="empty">"Выберите предмет."</p> }.into_any(),
        GradebookView::Loading => view! { <p class="loading">"Загрузка…"</p> }.into_any(),
        GradebookView::Failed(message) => view! { <p class="error">"Ошибка. " {message}</p> }.into_any(),
        GradebookView::Rows(rows) => view! {
            <table class="resource-table">
                <thead>
                    <tr><th>"Ученик"</th><th>"Оценки"</th><th></th></tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.clone()
                        key=|row| (row.student_id, row.marks.clone())
                        children=move |row| {
                            let (draft, set_draft) = signal(String::new());
                            let student_id = row.student_id;
                            view! {
                                <tr>
                                    <td>{row.student}</td>
                                    <td>{row.marks}</td>
                                    <td>
                                        <form
                                            class="mark-entry"
                                            on:submit=move |ev: web_sys::SubmitEvent| {
                                                ev.prevent_default();
                                                give_mark(student_id, draft.get_untracked());
                                                set_draft.set(String::new());
                                            }
                                        >
                                            <input
                                                type="number"
                                                min="2"
                                                max="5"
                                                prop:value=move || draft.get()
                                                on:input=move |ev| set_draft.set(event_target_value(&ev))
                                            />
                                            <button type="submit">"+"</button>
                                        </form>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        }
        .into_any(),
    };

    view! {
        <section class="gradebook">
            <h2>"Журнал"</h2>
            <FieldInput
                spec=subject_field
                value=subject
                on_change=Callback::new(pick_subject)
            />
            {table}
        </section>
    }
}
