//! Resource Pages
//!
//! One page per resource, each a `resource_page` plus whatever extras the
//! resource needs.

use leptos::prelude::*;
use shkola_api::domain::{Classes, EntityId, MarkFilter, Marks, Rooms, Students, Subjects, Teachers};

use super::{resource_page, ClassRoster, Gradebook, MarksFilterPanel};

#[component]
pub fn ClassesPage() -> impl IntoView {
    let (roster, set_roster) = signal::<Option<EntityId>>(None);
    let on_select = Callback::new(move |id: EntityId| set_roster.set(Some(id)));

    view! {
        {resource_page::<Classes>(Signal::stored(Default::default()), Some(on_select))}
        <ClassRoster class_id=roster set_class_id=set_roster />
    }
}

#[component]
pub fn SubjectsPage() -> impl IntoView {
    resource_page::<Subjects>(Signal::stored(Default::default()), None)
}

#[component]
pub fn RoomsPage() -> impl IntoView {
    resource_page::<Rooms>(Signal::stored(Default::default()), None)
}

#[component]
pub fn TeachersPage() -> impl IntoView {
    resource_page::<Teachers>(Signal::stored(Default::default()), None)
}

#[component]
pub fn StudentsPage() -> impl IntoView {
    resource_page::<Students>(Signal::stored(Default::default()), None)
}

#[component]
pub fn MarksPage() -> impl IntoView {
    let filter = RwSignal::new(MarkFilter::default());

    view! {
        <MarksFilterPanel filter=filter />
        {resource_page::<Marks>(filter.into(), None)}
        <Gradebook />
    }
}

/// Subjects, classes and rooms side by side
#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="settings">
            <SubjectsPage />
            <ClassesPage />
            <RoomsPage />
        </div>
    }
}
