//! Class Resource
//!
//! A school class ("5А"); students belong to exactly one.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId, Paging};
use crate::error::ApiResult;
use crate::query::{QueryString, ToQuery};
use crate::resource::{DraftMode, FieldKind, FieldSpec, FieldValues, Resource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub id: EntityId,
    pub name: String,
}

impl Entity for Class {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassFilter {
    pub name: Option<String>,
    pub id: Option<EntityId>,
    pub paging: Paging,
}

impl ToQuery for ClassFilter {
    fn write_query(&self, query: &mut QueryString) {
        query.push_text("name", self.name.as_deref());
        query.push_opt("id", self.id);
        self.paging.write_query(query);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassPayload {
    pub name: String,
}

/// `classes` endpoint
pub struct Classes;

const FIELDS: &[FieldSpec] = &[FieldSpec::required("name", "Название", FieldKind::Text)];

impl Resource for Classes {
    const PATH: &'static str = "classes";
    const NOUN: &'static str = "class";
    const TITLE: &'static str = "Классы";

    type Record = Class;
    type Filter = ClassFilter;
    type Payload = ClassPayload;

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn draft(record: &Class) -> FieldValues {
        FieldValues::new().with("name", record.name.clone())
    }

    fn payload(values: &FieldValues, _mode: DraftMode) -> ApiResult<ClassPayload> {
        Ok(ClassPayload {
            name: values.required_text("name", "Название")?,
        })
    }
}
