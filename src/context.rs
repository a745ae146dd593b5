//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use log::debug;
use shkola_api::nav::Route;
use shkola_api::notification::Notification;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
    /// Notification bar content - read
    pub notification: ReadSignal<Option<Notification>>,
    /// Notification bar content - write
    set_notification: WriteSignal<Option<Notification>>,
    /// Bumped after any mutation so lookup tables re-fetch - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after any mutation so lookup tables re-fetch - write
    set_reload_trigger: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        notification: (ReadSignal<Option<Notification>>, WriteSignal<Option<Notification>>),
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            notification: notification.0,
            set_notification: notification.1,
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
        }
    }

    /// Switch page and keep the URL hash in step
    pub fn navigate(&self, route: Route) {
        debug!("navigate to {}", route.path());
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(route.path());
        }
        self.set_route.set(route);
    }

    /// Follow a hash change made outside the app (back button, typed URL)
    pub fn sync_route(&self, route: Route) {
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }

    pub fn notify(&self, notification: Notification) {
        self.set_notification.set(Some(notification));
    }

    pub fn dismiss(&self) {
        self.set_notification.set(None);
    }

    /// Trigger a reload of lookup tables
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
