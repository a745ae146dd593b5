//! Home Page Component
//!
//! Navigation cards for every page the current role may open.

use leptos::prelude::*;
use shkola_api::nav::home_cards;

use crate::context::use_app_context;
use crate::store::{store_role, use_app_store};

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <section class="home">
            <h1>"АИС ШКОЛА"</h1>
            <div class="cards">
                {move || {
                    let role = store_role(&store);
                    home_cards(role.as_ref())
                        .into_iter()
                        .map(|route| view! {
                            <button class="card" on:click=move |_| ctx.navigate(route)>
                                {route.card_title()}
                            </button>
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
