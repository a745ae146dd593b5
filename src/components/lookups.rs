//! Lookup Loading
//!
//! Fetches the id → name tables a screen needs into the global store. Each
//! table loads independently and re-loads after any mutation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::warn;
use shkola_api::lookup::Lookup;
use shkola_api::Reference;

use crate::commands;
use crate::context::use_app_context;
use crate::store::{store_set_lookup, use_app_store};

pub fn use_lookups(references: Vec<Reference>) {
    let ctx = use_app_context();
    let store = use_app_store();

    for reference in references {
        Effect::new(move |_| {
            let _ = ctx.reload_trigger.get();
            spawn_local(async move {
                match commands::load_lookup(reference).await {
                    Ok(lookup) => store_set_lookup(&store, reference, lookup),
                    Err(err) => {
                        warn!("lookup {:?} failed: {}", reference, err);
                        store_set_lookup(&store, reference, Lookup::empty());
                    }
                }
            });
        });
    }
}
