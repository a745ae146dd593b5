//! Profile Page Component
//!
//! The signed-in user as `auth/me` reported them.

use leptos::prelude::*;
use shkola_api::lookup::MISSING;
use shkola_api::Reference;

use super::use_lookups;
use crate::store::{store_profile, use_app_store, AppStateStoreFields};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = use_app_store();
    use_lookups(vec![Reference::Subject, Reference::Room]);

    move || match store_profile(&store) {
        None => view! { <p class="empty">"Вы не авторизованы."</p> }.into_any(),
        Some(profile) => {
            let subject = profile.subject_id;
            let room = profile.room_id;
            let rows = vec![
                ("Фамилия", profile.last_name.clone()),
                ("Имя", profile.first_name.clone()),
                ("Отчество", profile.middle_name.clone().unwrap_or_default()),
                ("Телефон", profile.phone.clone().unwrap_or_default()),
                ("Роль", profile.role.label().to_string()),
                (
                    "Работает с",
                    profile
                        .employed_at
                        .map(|at| at.format("%d.%m.%Y").to_string())
                        .unwrap_or_else(|| MISSING.to_string()),
                ),
            ];
            view! {
                <section class="profile">
                    <h2>"Профиль"</h2>
                    <dl>
                        {rows
                            .into_iter()
                            .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                            .collect_view()}
                        <Show when=move || subject.is_some()>
                            <dt>"Предмет"</dt>
                            <dd>{move || store.lookups().with(|l| l.display(Reference::Subject, subject))}</dd>
                        </Show>
                        <Show when=move || room.is_some()>
                            <dt>"Кабинет"</dt>
                            <dd>{move || store.lookups().with(|l| l.display(Reference::Room, room))}</dd>
                        </Show>
                    </dl>
                </section>
            }
            .into_any()
        }
    }
}
