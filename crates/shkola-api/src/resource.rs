//! Resource Contract
//!
//! A `Resource` ties together the REST path, the record shape, the filter,
//! the mutation payload and the form fields of one entity type. The client,
//! the screen state machine and the UI are all generic over it.

use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::Entity;
use crate::error::{ApiError, ApiResult};
use crate::query::ToQuery;

/// Resource whose ids a form field points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Reference {
    Class,
    Subject,
    Room,
    Teacher,
    Student,
}

impl Reference {
    pub const ALL: [Reference; 5] = [
        Reference::Class,
        Reference::Subject,
        Reference::Room,
        Reference::Teacher,
        Reference::Student,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Reference::Class => "Класс",
            Reference::Subject => "Предмет",
            Reference::Room => "Кабинет",
            Reference::Teacher => "Учитель",
            Reference::Student => "Ученик",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Phone,
    Number,
    /// Write-only; never seeded from a record
    Secret,
    Reference(Reference),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: true,
        }
    }

    pub const fn optional(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
        }
    }
}

/// Whether a buffer is being turned into a create or an update payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftMode {
    Create,
    Update,
}

/// String-valued form buffer keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: BTreeMap<String, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn with_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value.to_string()),
            None => self,
        }
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn is_blank(&self) -> bool {
        self.values.values().all(|v| v.trim().is_empty())
    }

    pub fn optional_text(&self, key: &str) -> Option<String> {
        let value = self.get(key).trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    pub fn required_text(&self, key: &str, label: &str) -> ApiResult<String> {
        self.optional_text(key)
            .ok_or_else(|| ApiError::Validation(format!("Заполните поле «{}».", label)))
    }

    pub fn optional_number<N: std::str::FromStr>(&self, key: &str, label: &str) -> ApiResult<Option<N>> {
        match self.optional_text(key) {
            None => Ok(None),
            Some(raw) => raw.parse::<N>().map(Some).map_err(|_| {
                ApiError::Validation(format!("Поле «{}» должно быть числом.", label))
            }),
        }
    }

    pub fn required_number<N: std::str::FromStr>(&self, key: &str, label: &str) -> ApiResult<N> {
        self.optional_number(key, label)?
            .ok_or_else(|| ApiError::Validation(format!("Заполните поле «{}».", label)))
    }

    /// Secret fields: required when creating, omitted when left blank on update.
    pub fn secret(&self, key: &str, label: &str, mode: DraftMode) -> ApiResult<Option<String>> {
        match mode {
            DraftMode::Create => self.required_text(key, label).map(Some),
            DraftMode::Update => Ok(self.optional_text(key)),
        }
    }
}

/// One REST-backed entity type
pub trait Resource: Send + Sync + 'static {
    /// Endpoint path relative to the base URL, e.g. `classes`
    const PATH: &'static str;
    /// Singular noun for notifications, e.g. `class`
    const NOUN: &'static str;
    /// Page heading
    const TITLE: &'static str;

    type Record: Entity + Debug + PartialEq + DeserializeOwned + Send + Sync + 'static;
    type Filter: ToQuery + Debug + Clone + Default + PartialEq + Send + Sync + 'static;
    type Payload: Serialize + Debug + 'static;

    fn fields() -> &'static [FieldSpec];

    /// Seed an edit buffer from a displayed record
    fn draft(record: &Self::Record) -> FieldValues;

    /// Validate a buffer into a request payload
    fn payload(values: &FieldValues, mode: DraftMode) -> ApiResult<Self::Payload>;

    /// Related resources whose lookup tables the screen needs
    fn references() -> Vec<Reference> {
        let mut refs: Vec<Reference> = Self::fields()
            .iter()
            .filter_map(|f| match f.kind {
                FieldKind::Reference(r) => Some(r),
                _ => None,
            })
            .collect();
        refs.sort();
        refs.dedup();
        refs
    }

    fn item_path(id: crate::domain::EntityId) -> String {
        format!("{}/{}", Self::PATH, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_trims() {
        let values = FieldValues::new().with("name", "  ");
        let err = values.required_text("name", "Название").unwrap_err();
        assert_eq!(err, ApiError::Validation("Заполните поле «Название».".to_string()));

        let values = FieldValues::new().with("name", " 7В ");
        assert_eq!(values.required_text("name", "Название").unwrap(), "7В");
    }

    #[test]
    fn test_numbers() {
        let values = FieldValues::new().with("class_id", "12").with("room_id", "x");
        assert_eq!(values.required_number::<i32>("class_id", "Класс").unwrap(), 12);
        assert!(values.optional_number::<i32>("room_id", "Кабинет").is_err());
        assert_eq!(values.optional_number::<i32>("missing", "Нет").unwrap(), None);
        assert!(values.required_number::<i32>("missing", "Нет").is_err());
    }

    #[test]
    fn test_secret_depends_on_mode() {
        let blank = FieldValues::new();
        assert!(blank.secret("password", "Пароль", DraftMode::Create).is_err());
        assert_eq!(blank.secret("password", "Пароль", DraftMode::Update).unwrap(), None);

        let set = FieldValues::new().with("password", "hunter2");
        assert_eq!(
            set.secret("password", "Пароль", DraftMode::Update).unwrap(),
            Some("hunter2".to_string())
        );
    }

    #[test]
    fn test_blank_buffer() {
        assert!(FieldValues::new().is_blank());
        assert!(FieldValues::new().with("name", " ").is_blank());
        assert!(!FieldValues::new().with("name", "x").is_blank());
    }
}
