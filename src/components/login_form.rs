//! Login Form Component
//!
//! Phone + password. On success the profile is loaded and the session
//! store updated; on failure the server's message is shown and the field
//! it names is highlighted.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};
use shkola_api::domain::Credentials;
use shkola_api::nav::Route;
use shkola_api::notification::Notification;

use crate::commands;
use crate::context::use_app_context;
use crate::store::{store_sign_in, use_app_store};

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (phone, set_phone) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (bad_field, set_bad_field) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let credentials = Credentials::new(phone.get_untracked().trim(), password.get_untracked());
        set_pending.set(true);
        set_bad_field.set(None);

        spawn_local(async move {
            let result = match commands::login(&credentials).await {
                Ok(()) => commands::me().await,
                Err(err) => Err(err),
            };
            set_pending.set(false);
            match result {
                Ok(profile) => {
                    info!("profile loaded for role {}", profile.role);
                    store_sign_in(&store, profile);
                    set_password.set(String::new());
                    ctx.notify(Notification::operation_successful());
                    ctx.navigate(Route::Home);
                }
                Err(err) => {
                    warn!("login failed: {}", err);
                    set_bad_field.set(err.field().map(str::to_string));
                    ctx.notify(Notification::error(err.user_message("Failed to sign in.")));
                }
            }
        });
    };

    let invalid = move |field: &'static str| move || bad_field.get().as_deref() == Some(field);

    view! {
        <section class="login">
            <h2>"Авторизация"</h2>
            <form class="login-form" on:submit=on_submit>
                <input
                    type="tel"
                    placeholder="Телефон"
                    class:invalid=invalid("phone")
                    prop:value=move || phone.get()
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Пароль"
                    class:invalid=invalid("password")
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || pending.get()>"Войти"</button>
            </form>
        </section>
    }
}
