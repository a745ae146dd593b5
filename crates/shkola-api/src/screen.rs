//! Resource Screen State
//!
//! Everything one CRUD screen remembers between renders:
//! - the load state and the last fetched rows
//! - the current filter
//! - per-row edit buffers (a row is editing while it has one)
//! - the create-form buffer
//! - the last notification
//!
//! Transitions are plain methods so the UI can apply them around its own
//! awaits; the async `submit_*` helpers chain them for callers that own the
//! screen outright.

use std::collections::BTreeMap;

use log::{error, info};

use crate::client::ResourceClient;
use crate::domain::{Entity, EntityId};
use crate::error::{ApiError, ApiResult};
use crate::notification::Notification;
use crate::resource::{DraftMode, FieldValues, Resource};
use crate::transport::Transport;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Initial fetch in flight
    Loading,
    Ready,
    /// Last list fetch failed; the screen shows only this message
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowMode {
    Viewing,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Update,
    Delete,
}

impl Mutation {
    fn verb(&self) -> &'static str {
        match self {
            Mutation::Create => "create",
            Mutation::Update => "update",
            Mutation::Delete => "delete",
        }
    }

    /// Generic message when the server gave none: "Failed to create class."
    pub fn fallback_message<R: Resource>(&self) -> String {
        format!("Failed to {} {}.", self.verb(), R::NOUN)
    }
}

pub struct ResourceScreen<R: Resource> {
    load: LoadState,
    rows: Vec<R::Record>,
    filter: R::Filter,
    edits: BTreeMap<EntityId, FieldValues>,
    create_form: FieldValues,
    notification: Option<Notification>,
}

impl<R: Resource> Clone for ResourceScreen<R> {
    fn clone(&self) -> Self {
        Self {
            load: self.load.clone(),
            rows: self.rows.clone(),
            filter: self.filter.clone(),
            edits: self.edits.clone(),
            create_form: self.create_form.clone(),
            notification: self.notification.clone(),
        }
    }
}

impl<R: Resource> Default for ResourceScreen<R> {
    fn default() -> Self {
        Self::new(R::Filter::default())
    }
}

impl<R: Resource> ResourceScreen<R> {
    pub fn new(filter: R::Filter) -> Self {
        Self {
            load: LoadState::Loading,
            rows: Vec::new(),
            filter,
            edits: BTreeMap::new(),
            create_form: FieldValues::new(),
            notification: None,
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn rows(&self) -> &[R::Record] {
        &self.rows
    }

    pub fn row(&self, id: EntityId) -> Option<&R::Record> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn filter(&self) -> &R::Filter {
        &self.filter
    }

    pub fn create_form(&self) -> &FieldValues {
        &self.create_form
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn row_mode(&self, id: EntityId) -> RowMode {
        if self.edits.contains_key(&id) {
            RowMode::Editing
        } else {
            RowMode::Viewing
        }
    }

    pub fn edit_buffer(&self, id: EntityId) -> Option<&FieldValues> {
        self.edits.get(&id)
    }

    // ========================
    // Fetching
    // ========================

    pub fn set_filter(&mut self, filter: R::Filter) {
        self.filter = filter;
    }

    /// Rows stay visible while a re-fetch is in flight.
    pub fn fetch_started(&mut self) {
        if self.load != LoadState::Ready {
            self.load = LoadState::Loading;
        }
    }

    pub fn list_loaded(&mut self, result: ApiResult<Vec<R::Record>>) {
        match result {
            Ok(rows) => {
                self.edits.retain(|id, _| rows.iter().any(|r| r.id() == *id));
                self.rows = rows;
                self.load = LoadState::Ready;
            }
            Err(err) => {
                error!("[{}] list failed: {}", R::PATH, err);
                self.load = LoadState::Failed(err.to_string());
            }
        }
    }

    // ========================
    // Row editing
    // ========================

    /// Open row `id` for editing, seeded from its displayed value.
    /// A row already in edit mode keeps its buffer.
    pub fn start_edit(&mut self, id: EntityId) -> bool {
        if self.edits.contains_key(&id) {
            return true;
        }
        match self.rows.iter().find(|r| r.id() == id) {
            Some(record) => {
                self.edits.insert(id, R::draft(record));
                true
            }
            None => false,
        }
    }

    pub fn edit_field(&mut self, id: EntityId, key: &str, value: impl Into<String>) {
        if let Some(buffer) = self.edits.get_mut(&id) {
            buffer.set(key, value);
        }
    }

    pub fn cancel_edit(&mut self, id: EntityId) {
        self.edits.remove(&id);
    }

    pub fn edit_payload(&self, id: EntityId) -> ApiResult<R::Payload> {
        let buffer = self
            .edits
            .get(&id)
            .ok_or_else(|| ApiError::Validation(format!("Запись #{} не редактируется.", id)))?;
        R::payload(buffer, DraftMode::Update)
    }

    /// Apply the outcome of an update. Returns whether to re-fetch.
    pub fn save_finished(&mut self, id: EntityId, result: ApiResult<()>) -> bool {
        match result {
            Ok(()) => {
                self.edits.remove(&id);
                self.succeed(Mutation::Update)
            }
            Err(err) => self.fail(Mutation::Update, &err),
        }
    }

    // ========================
    // Create form
    // ========================

    pub fn create_field(&mut self, key: &str, value: impl Into<String>) {
        self.create_form.set(key, value);
    }

    pub fn create_payload(&self) -> ApiResult<R::Payload> {
        R::payload(&self.create_form, DraftMode::Create)
    }

    /// Apply the outcome of a create. Returns whether to re-fetch.
    pub fn create_finished(&mut self, result: ApiResult<()>) -> bool {
        match result {
            Ok(()) => {
                self.create_form = FieldValues::new();
                self.succeed(Mutation::Create)
            }
            Err(err) => self.fail(Mutation::Create, &err),
        }
    }

    // ========================
    // Delete
    // ========================

    /// Apply the outcome of a delete. Returns whether to re-fetch.
    pub fn delete_finished(&mut self, result: ApiResult<bool>) -> bool {
        match result {
            Ok(true) => self.succeed(Mutation::Delete),
            Ok(false) => self.fail(
                Mutation::Delete,
                &ApiError::Rejected("server refused the delete".to_string()),
            ),
            Err(err) => self.fail(Mutation::Delete, &err),
        }
    }

    // ========================
    // Notifications
    // ========================

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    /// Record a failed mutation. Never asks for a re-fetch.
    pub fn fail(&mut self, mutation: Mutation, err: &ApiError) -> bool {
        error!("[{}] {} failed: {}", R::PATH, mutation.verb(), err);
        let message = err.user_message(&mutation.fallback_message::<R>());
        self.notification = Some(Notification::error(message));
        false
    }

    fn succeed(&mut self, mutation: Mutation) -> bool {
        info!("[{}] {} succeeded", R::PATH, mutation.verb());
        self.notification = Some(Notification::operation_successful());
        true
    }

    // ========================
    // Async helpers
    // ========================

    pub async fn refresh<T: Transport>(&mut self, client: &ResourceClient<R, T>) {
        self.fetch_started();
        let result = client.list(&self.filter).await;
        self.list_loaded(result);
    }

    pub async fn submit_edit<T: Transport>(&mut self, client: &ResourceClient<R, T>, id: EntityId) {
        let payload = match self.edit_payload(id) {
            Ok(payload) => payload,
            Err(err) => {
                self.fail(Mutation::Update, &err);
                return;
            }
        };
        let result = client.update(id, &payload).await.map(|_| ());
        if self.save_finished(id, result) {
            self.refresh(client).await;
        }
    }

    pub async fn submit_create<T: Transport>(&mut self, client: &ResourceClient<R, T>) {
        let payload = match self.create_payload() {
            Ok(payload) => payload,
            Err(err) => {
                self.fail(Mutation::Create, &err);
                return;
            }
        };
        let result = client.create(&payload).await.map(|_| ());
        if self.create_finished(result) {
            self.refresh(client).await;
        }
    }

    pub async fn submit_delete<T: Transport>(&mut self, client: &ResourceClient<R, T>, id: EntityId) {
        let result = client.delete(id).await;
        if self.delete_finished(result) {
            self.refresh(client).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Class, Classes};

    fn ready_screen() -> ResourceScreen<Classes> {
        let mut screen = ResourceScreen::<Classes>::default();
        screen.list_loaded(Ok(vec![
            Class { id: 1, name: "5А".to_string() },
            Class { id: 2, name: "5Б".to_string() },
        ]));
        screen
    }

    #[test]
    fn test_starts_loading() {
        let screen = ResourceScreen::<Classes>::default();
        assert_eq!(screen.load_state(), &LoadState::Loading);
        assert!(screen.rows().is_empty());
    }

    #[test]
    fn test_refetch_keeps_ready() {
        let mut screen = ready_screen();
        screen.fetch_started();
        assert_eq!(screen.load_state(), &LoadState::Ready);
        assert_eq!(screen.rows().len(), 2);
    }

    #[test]
    fn test_edit_seeds_and_cancel_discards() {
        let mut screen = ready_screen();
        assert!(screen.start_edit(2));
        assert_eq!(screen.edit_buffer(2).unwrap().get("name"), "5Б");

        screen.edit_field(2, "name", "6Б");
        assert_eq!(screen.edit_buffer(2).unwrap().get("name"), "6Б");

        screen.cancel_edit(2);
        assert_eq!(screen.row_mode(2), RowMode::Viewing);
        assert_eq!(screen.row(2).unwrap().name, "5Б");

        // reopening seeds from the row again
        screen.start_edit(2);
        assert_eq!(screen.edit_buffer(2).unwrap().get("name"), "5Б");
    }

    #[test]
    fn test_rows_edit_independently() {
        let mut screen = ready_screen();
        screen.start_edit(1);
        screen.start_edit(2);
        screen.edit_field(1, "name", "11А");
        assert_eq!(screen.edit_buffer(1).unwrap().get("name"), "11А");
        assert_eq!(screen.edit_buffer(2).unwrap().get("name"), "5Б");
    }

    #[test]
    fn test_start_edit_twice_keeps_buffer() {
        let mut screen = ready_screen();
        screen.start_edit(1);
        screen.edit_field(1, "name", "typed");
        screen.start_edit(1);
        assert_eq!(screen.edit_buffer(1).unwrap().get("name"), "typed");
        assert!(!screen.start_edit(42));
    }

    #[test]
    fn test_failed_save_stays_editing() {
        let mut screen = ready_screen();
        screen.start_edit(1);
        screen.edit_field(1, "name", "дубль");
        let refetch = screen.save_finished(1, Err(ApiError::Status(500)));
        assert!(!refetch);
        assert_eq!(screen.row_mode(1), RowMode::Editing);
        assert_eq!(screen.edit_buffer(1).unwrap().get("name"), "дубль");
        let note = screen.notification().unwrap();
        assert!(note.is_error());
        assert_eq!(note.message, "Failed to update class.");
    }

    #[test]
    fn test_vanished_rows_drop_buffers() {
        let mut screen = ready_screen();
        screen.start_edit(1);
        screen.start_edit(2);
        screen.list_loaded(Ok(vec![Class { id: 2, name: "5Б".to_string() }]));
        assert_eq!(screen.row_mode(1), RowMode::Viewing);
        assert_eq!(screen.row_mode(2), RowMode::Editing);
    }

    #[test]
    fn test_list_failure_degrades_screen() {
        let mut screen = ready_screen();
        screen.list_loaded(Err(ApiError::Transport("offline".to_string())));
        assert!(matches!(screen.load_state(), LoadState::Failed(_)));
    }

    #[test]
    fn test_delete_refused_is_error() {
        let mut screen = ready_screen();
        assert!(!screen.delete_finished(Ok(false)));
        assert_eq!(screen.notification().unwrap().message, "Failed to delete class.");
        screen.dismiss_notification();
        assert!(screen.notification().is_none());
    }
}
