//! Resource Page
//!
//! The CRUD table every resource screen is built from: the list, inline
//! row editing, delete with confirmation and a create form underneath.
//! All state lives in one `ResourceScreen`; this module only wires its
//! transitions to events and network calls.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shkola_api::domain::{Entity, EntityId};
use shkola_api::screen::{LoadState, Mutation, ResourceScreen, RowMode};
use shkola_api::ApiResult;

use super::{use_lookups, DeleteConfirmButton, FieldInput};
use crate::columns::ResourceView;
use crate::commands;
use crate::context::{use_app_context, AppContext};
use crate::store::{use_app_store, AppStateStoreFields};

/// Handle to one screen's state, shared by its rows and forms
struct Screen<R: ResourceView> {
    state: RwSignal<ResourceScreen<R>>,
    fetch: RwSignal<u32>,
    ctx: AppContext,
}

impl<R: ResourceView> Clone for Screen<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: ResourceView> Copy for Screen<R> {}

impl<R: ResourceView> Screen<R> {
    fn refetch(&self) {
        self.fetch.update(|n| *n += 1);
    }

    /// Hand the screen's notification to the global bar
    fn publish(&self) {
        let note = self
            .state
            .try_update(|s| {
                let note = s.notification().cloned();
                s.dismiss_notification();
                note
            })
            .flatten();
        if let Some(note) = note {
            self.ctx.notify(note);
        }
    }

    fn reject(&self, mutation: Mutation, err: shkola_api::ApiError) {
        self.state.update(|s| {
            s.fail(mutation, &err);
        });
        self.publish();
    }

    fn settle(&self, refetch: bool) {
        self.publish();
        if refetch {
            self.refetch();
            self.ctx.reload();
        }
    }

    fn save(&self, id: EntityId) {
        let this = *self;
        match self.state.with_untracked(|s| s.edit_payload(id)) {
            Err(err) => self.reject(Mutation::Update, err),
            Ok(payload) => spawn_local(async move {
                let result: ApiResult<()> = commands::update::<R>(id, &payload).await.map(|_| ());
                let refetch = this
                    .state
                    .try_update(|s| s.save_finished(id, result))
                    .unwrap_or(false);
                this.settle(refetch);
            }),
        }
    }

    fn create(&self) {
        let this = *self;
        match self.state.with_untracked(|s| s.create_payload()) {
            Err(err) => self.reject(Mutation::Create, err),
            Ok(payload) => spawn_local(async move {
                let result: ApiResult<()> = commands::create::<R>(&payload).await.map(|_| ());
                let refetch = this
                    .state
                    .try_update(|s| s.create_finished(result))
                    .unwrap_or(false);
                this.settle(refetch);
            }),
        }
    }

    fn delete(&self, id: EntityId) {
        let this = *self;
        spawn_local(async move {
            let result = commands::delete::<R>(id).await;
            let refetch = this
                .state
                .try_update(|s| s.delete_finished(result))
                .unwrap_or(false);
            this.settle(refetch);
        });
    }
}

/// Full CRUD screen for `R`.
///
/// `filter` drives the list; every change re-fetches. `on_select` makes
/// rows clickable (the class roster hangs off it).
pub fn resource_page<R: ResourceView>(
    filter: Signal<R::Filter>,
    on_select: Option<Callback<EntityId>>,
) -> impl IntoView {
    let ctx = use_app_context();
    use_lookups(R::references());

    let screen = Screen::<R> {
        state: RwSignal::new(ResourceScreen::new(filter.get_untracked())),
        fetch: RwSignal::new(0),
        ctx,
    };

    Effect::new(move |_| {
        let _ = screen.fetch.get();
        let current = filter.get();
        screen.state.update(|s| {
            s.set_filter(current.clone());
            s.fetch_started();
        });
        spawn_local(async move {
            let result = commands::list::<R>(&current).await;
            screen.state.try_update(|s| s.list_loaded(result));
        });
    });

    let load = Memo::new(move |_| screen.state.with(|s| s.load_state().clone()));
    let ids = Memo::new(move |_| {
        screen
            .state
            .with(|s| s.rows().iter().map(|r| r.id()).collect::<Vec<_>>())
    });

    view! {
        <section class="resource-page">
            <h2>{R::TITLE}</h2>
            {move || match load.get() {
                LoadState::Loading => view! { <p class="loading">"Загрузка…"</p> }.into_any(),
                LoadState::Failed(message) => view! {
                    <p class="error">"Ошибка. " {message}</p>
                }.into_any(),
                LoadState::Ready => view! {
                    <table class="resource-table">
                        <thead>
                            <tr>
                                {R::headers().iter().map(|h| view! { <th>{*h}</th> }).collect_view()}
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || ids.get()
                                key=|id| *id
                                children=move |id| resource_row(screen, id, on_select)
                            />
                        </tbody>
                    </table>
                    <Show when=move || ids.with(|ids| ids.is_empty())>
                        <p class="empty">"Пусто"</p>
                    </Show>
                }.into_any(),
            }}
            {create_form(screen)}
        </section>
    }
}

fn resource_row<R: ResourceView>(
    screen: Screen<R>,
    id: EntityId,
    on_select: Option<Callback<EntityId>>,
) -> impl IntoView {
    let store = use_app_store();
    let record = Memo::new(move |_| screen.state.with(|s| s.row(id).cloned()));
    let mode = Memo::new(move |_| screen.state.with(|s| s.row_mode(id)));
    let span = R::headers().len();

    let on_row_click = move |_| {
        if let Some(select) = on_select {
            if mode.get_untracked() == RowMode::Viewing {
                select.run(id);
            }
        }
    };

    view! {
        <tr class:selectable=on_select.is_some() on:click=on_row_click>
            {move || match mode.get() {
                RowMode::Viewing => {
                    let cells = record.get().map(|r| R::cells(&r)).unwrap_or_default();
                    cells
                        .into_iter()
                        .map(|cell| {
                            view! { <td>{move || store.lookups().with(|l| cell.render(l))}</td> }
                        })
                        .collect_view()
                        .into_any()
                }
                RowMode::Editing => view! {
                    <td colspan=span class="row-editor">
                        {R::fields()
                            .iter()
                            .map(|spec| {
                                let key = spec.key;
                                let value = Signal::derive(move || {
                                    screen.state.with(|s| {
                                        s.edit_buffer(id).map(|b| b.get(key).to_string()).unwrap_or_default()
                                    })
                                });
                                let on_change = Callback::new(move |v: String| {
                                    screen.state.update(|s| s.edit_field(id, key, v))
                                });
                                view! { <FieldInput spec=*spec value=value on_change=on_change /> }
                            })
                            .collect_view()}
                    </td>
                }
                .into_any(),
            }}
            <td class="row-actions" on:click=|ev| ev.stop_propagation()>
                {move || match mode.get() {
                    RowMode::Viewing => view! {
                        <button
                            class="edit-btn"
                            on:click=move |_| {
                                screen.state.update(|s| {
                                    s.start_edit(id);
                                });
                            }
                        >
                            "Изменить"
                        </button>
                        <DeleteConfirmButton on_confirm=move |_| screen.delete(id) />
                    }
                    .into_any(),
                    RowMode::Editing => view! {
                        <button class="save-btn" on:click=move |_| screen.save(id)>"Сохранить"</button>
                        <button
                            class="cancel-btn"
                            on:click=move |_| screen.state.update(|s| s.cancel_edit(id))
                        >
                            "Отмена"
                        </button>
                    }
                    .into_any(),
                }}
            </td>
        </tr>
    }
}

fn create_form<R: ResourceView>(screen: Screen<R>) -> impl IntoView {
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        screen.create();
    };

    view! {
        <form class="create-form" on:submit=on_submit>
            <h3>"Добавить"</h3>
            {R::fields()
                .iter()
                .map(|spec| {
                    let key = spec.key;
                    let value = Signal::derive(move || {
                        screen.state.with(|s| s.create_form().get(key).to_string())
                    });
                    let on_change = Callback::new(move |v: String| {
                        screen.state.update(|s| s.create_field(key, v))
                    });
                    view! { <FieldInput spec=*spec value=value on_change=on_change /> }
                })
                .collect_view()}
            <button type="submit">"Создать"</button>
        </form>
    }
}
