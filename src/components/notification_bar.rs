//! Notification Bar Component
//!
//! Shows the latest notification; hides itself after `AUTO_HIDE_MS` or on click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shkola_api::notification::AUTO_HIDE_MS;

use crate::context::use_app_context;

#[component]
pub fn NotificationBar() -> impl IntoView {
    let ctx = use_app_context();
    // each shown notification gets a ticket; only the latest one may hide the bar
    let (ticket, set_ticket) = signal(0u32);

    Effect::new(move |_| {
        if ctx.notification.get().is_none() {
            return;
        }
        let mine = ticket.get_untracked() + 1;
        set_ticket.set(mine);
        spawn_local(async move {
            TimeoutFuture::new(AUTO_HIDE_MS).await;
            if ticket.try_get_untracked() == Some(mine) {
                ctx.dismiss();
            }
        });
    });

    move || {
        ctx.notification.get().map(|note| {
            let class = if note.is_error() {
                "notification notification-error"
            } else {
                "notification notification-success"
            };
            view! {
                <div class=class role="status" on:click=move |_| ctx.dismiss()>
                    <span>{note.message.clone()}</span>
                    <button class="notification-close">"×"</button>
                </div>
            }
        })
    }
}
