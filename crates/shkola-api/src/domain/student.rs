//! Student Resource

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{full_name, Entity, EntityId, Paging};
use crate::error::ApiResult;
use crate::query::{QueryString, ToQuery};
use crate::resource::{DraftMode, FieldKind, FieldSpec, FieldValues, Reference, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub class_id: EntityId,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub enrolled_at: Option<DateTime<Utc>>,
}

impl Entity for Student {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        full_name(&[Some(self.first_name.as_str()), Some(self.last_name.as_str())])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFilter {
    pub name: Option<String>,
    pub id: Option<EntityId>,
    pub class_ids: Vec<EntityId>,
    pub paging: Paging,
}

impl StudentFilter {
    /// Everyone enrolled in one class
    pub fn in_class(class_id: EntityId) -> Self {
        Self {
            class_ids: vec![class_id],
            ..Default::default()
        }
    }
}

impl ToQuery for StudentFilter {
    fn write_query(&self, query: &mut QueryString) {
        query.push_text("name", self.name.as_deref());
        query.push_opt("id", self.id);
        query.push_all("class_ids", &self.class_ids);
        self.paging.write_query(query);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentPayload {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub class_id: EntityId,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// `students` endpoint
pub struct Students;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("last_name", "Фамилия", FieldKind::Text),
    FieldSpec::required("first_name", "Имя", FieldKind::Text),
    FieldSpec::optional("middle_name", "Отчество", FieldKind::Text),
    FieldSpec::required("class_id", "Класс", FieldKind::Reference(Reference::Class)),
    FieldSpec::required("phone", "Телефон", FieldKind::Phone),
    FieldSpec::optional("password", "Пароль", FieldKind::Secret),
];

impl Resource for Students {
    const PATH: &'static str = "students";
    const NOUN: &'static str = "student";
    const TITLE: &'static str = "Ученики";

    type Record = Student;
    type Filter = StudentFilter;
    type Payload = StudentPayload;

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn draft(record: &Student) -> FieldValues {
        FieldValues::new()
            .with("first_name", record.first_name.clone())
            .with("last_name", record.last_name.clone())
            .with_opt("middle_name", record.middle_name.clone())
            .with("class_id", record.class_id.to_string())
            .with_opt("phone", record.phone.clone())
    }

    fn payload(values: &FieldValues, mode: DraftMode) -> ApiResult<StudentPayload> {
        Ok(StudentPayload {
            first_name: values.required_text("first_name", "Имя")?,
            last_name: values.required_text("last_name", "Фамилия")?,
            middle_name: values.optional_text("middle_name"),
            class_id: values.required_number("class_id", "Класс")?,
            phone: values.required_text("phone", "Телефон")?,
            password: values.secret("password", "Пароль", mode)?,
        })
    }
}
