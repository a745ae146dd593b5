//! Header Component
//!
//! Navigation links allowed for the current role, the signed-in name and
//! the logout button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;
use shkola_api::nav::header_links;
use shkola_api::notification::Notification;

use crate::commands;
use crate::context::use_app_context;
use crate::store::{store_profile, store_role, store_sign_out, use_app_store};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let on_logout = move |_| {
        spawn_local(async move {
            if let Err(err) = commands::logout().await {
                warn!("logout failed: {}", err);
                ctx.notify(Notification::error(err.user_message("Failed to sign out.")));
                return;
            }
            store_sign_out(&store);
            ctx.navigate(shkola_api::nav::Route::Home);
        });
    };

    view! {
        <header class="app-header">
            <span class="brand">"АИС ШКОЛА"</span>
            <nav>
                {move || {
                    let role = store_role(&store);
                    header_links(role.as_ref())
                        .into_iter()
                        .map(|route| {
                            let active = move || ctx.route.get() == route;
                            view! {
                                <a
                                    href=format!("#{}", route.path())
                                    class:active=active
                                    on:click=move |ev| {
                                        ev.prevent_default();
                                        ctx.navigate(route);
                                    }
                                >
                                    {route.title()}
                                </a>
                            }
                        })
                        .collect_view()
                }}
            </nav>
            {move || store_profile(&store).map(|profile| view! {
                <span class="user">
                    <span class="user-name">{profile.short_name()}</span>
                    <button class="logout-btn" on:click=on_logout>"Выйти"</button>
                </span>
            })}
        </header>
    }
}
