//! Class Roster Popup
//!
//! Students of one class, fetched when the class is picked.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shkola_api::domain::{Entity, EntityId, Student, StudentFilter, Students};

use crate::commands;

#[derive(Clone, PartialEq)]
enum Roster {
    Loading,
    Loaded(Vec<Student>),
    Failed(String),
}

#[component]
pub fn ClassRoster(
    class_id: ReadSignal<Option<EntityId>>,
    set_class_id: WriteSignal<Option<EntityId>>,
) -> impl IntoView {
    let (roster, set_roster) = signal(Roster::Loading);

    Effect::new(move |_| {
        let Some(id) = class_id.get() else {
            return;
        };
        set_roster.set(Roster::Loading);
        spawn_local(async move {
            let state = match commands::list::<Students>(&StudentFilter::in_class(id)).await {
                Ok(students) => Roster::Loaded(students),
                Err(err) => Roster::Failed(err.to_string()),
            };
            // a later pick may have replaced this one
            if class_id.try_get_untracked().flatten() == Some(id) {
                set_roster.set(state);
            }
        });
    });

    view! {
        <Show when=move || class_id.get().is_some()>
            <div class="popup-backdrop" on:click=move |_| set_class_id.set(None)>
                <div class="popup" on:click=|ev| ev.stop_propagation()>
                    <h3>"Ученики класса"</h3>
                    {move || match roster.get() {
                        Roster::Loading => view! { <p class="loading">"Загрузка…"</p> }.into_any(),
                        Roster::Failed(message) => view! { <p class="error">"Ошибка. " {message}</p> }.into_any(),
                        Roster::Loaded(students) if students.is_empty() => {
                            view! { <p class="empty">"Пусто"</p> }.into_any()
                        }
                        Roster::Loaded(students) => view! {
                            <ol>
                                {students
                                    .iter()
                                    .map(|s| view! { <li>{s.display_name()}</li> })
                                    .collect_view()}
                            </ol>
                        }
                        .into_any(),
                    }}
                    <button on:click=move |_| set_class_id.set(None)>"Закрыть"</button>
                </div>
            </div>
        </Show>
    }
}
