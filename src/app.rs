//! АИС ШКОЛА Frontend App
//!
//! Loads the session, then renders the header, the notification bar and
//! whichever page the URL hash names. Pages the role may not open fall
//! back to the homepage.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{debug, info};
use reactive_stores::Store;
use shkola_api::nav::Route;

use crate::commands;
use crate::components::{
    ClassesPage, Header, HomePage, LoginForm, MarksPage, NotificationBar, ProfilePage, RoomsPage,
    SettingsPage, StudentsPage, SubjectsPage, TeachersPage,
};
use crate::context::AppContext;
use crate::store::{store_role, store_sign_in, store_sign_out, AppState, AppStateStoreFields};

fn current_hash_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Route::from_path(&hash))
        .unwrap_or(Route::Home)
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let route = signal(current_hash_route());
    let notification = signal(None);
    let reload_trigger = signal(0u32);
    let store = Store::new(AppState::default());

    // Provide context to all children
    let ctx = AppContext::new(route, notification, reload_trigger);
    provide_context(ctx);
    provide_context(store);

    // Back button and typed URLs
    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        ctx.sync_route(current_hash_route());
    });

    // Who is signed in, once on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::me().await {
                Ok(profile) => {
                    info!("session restored for {}", profile.role);
                    store_sign_in(&store, profile);
                }
                Err(err) => {
                    debug!("no session: {}", err);
                    store_sign_out(&store);
                }
            }
        });
    });

    let page = move || {
        if !store.session_checked().get() {
            return view! { <p class="loading">"Загрузка…"</p> }.into_any();
        }
        let role = store_role(&store);
        let route = ctx.route.get();
        let route = if route.allows(role.as_ref()) { route } else { Route::Home };
        match route {
            Route::Home => view! { <HomePage /> }.into_any(),
            Route::Auth => view! { <LoginForm /> }.into_any(),
            Route::Profile => view! { <ProfilePage /> }.into_any(),
            Route::Classes => view! { <ClassesPage /> }.into_any(),
            Route::Subjects => view! { <SubjectsPage /> }.into_any(),
            Route::Rooms => view! { <RoomsPage /> }.into_any(),
            Route::Teachers => view! { <TeachersPage /> }.into_any(),
            Route::Students => view! { <StudentsPage /> }.into_any(),
            Route::Marks => view! { <MarksPage /> }.into_any(),
            Route::Settings => view! { <SettingsPage /> }.into_any(),
        }
    };

    view! {
        <div class="app-layout">
            <Header />
            <NotificationBar />
            <main class="main-content">{page}</main>
        </div>
    }
}
