//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use shkola_api::domain::{Profile, Role};
use shkola_api::lookup::{Lookup, Lookups};
use shkola_api::session::Session;
use shkola_api::Reference;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Who is signed in
    pub session: Session,
    /// Whether the initial `auth/me` call has finished
    pub session_checked: bool,
    /// Id → name tables for foreign-key columns
    pub lookups: Lookups,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_sign_in(store: &AppStore, profile: Profile) {
    store.session().write().sign_in(profile);
    store.session_checked().set(true);
}

pub fn store_sign_out(store: &AppStore) {
    store.session().write().sign_out();
    store.session_checked().set(true);
}

/// Current role, tracked
pub fn store_role(store: &AppStore) -> Option<Role> {
    store.session().with(|s| s.role().cloned())
}

pub fn store_profile(store: &AppStore) -> Option<Profile> {
    store.session().with(|s| s.profile.clone())
}

pub fn store_set_lookup(store: &AppStore, reference: Reference, lookup: Lookup) {
    store.lookups().write().insert(reference, lookup);
}
