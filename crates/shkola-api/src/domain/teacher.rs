//! Teacher Resource
//!
//! Employees who teach one subject and may own a room.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{full_name, Entity, EntityId, Paging};
use super::profile::Role;
use crate::error::ApiResult;
use crate::query::{QueryString, ToQuery};
use crate::resource::{DraftMode, FieldKind, FieldSpec, FieldValues, Reference, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub phone: String,
    #[serde(default)]
    pub room_id: Option<EntityId>,
    pub subject_id: EntityId,
    #[serde(default)]
    pub employed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl Entity for Teacher {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        full_name(&[Some(self.first_name.as_str()), Some(self.last_name.as_str())])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherFilter {
    pub name: Option<String>,
    pub id: Option<EntityId>,
    pub subject_ids: Vec<EntityId>,
    pub room_ids: Vec<EntityId>,
    pub paging: Paging,
}

impl ToQuery for TeacherFilter {
    fn write_query(&self, query: &mut QueryString) {
        query.push_text("name", self.name.as_deref());
        query.push_opt("id", self.id);
        query.push_all("subject_ids", &self.subject_ids);
        query.push_all("room_ids", &self.room_ids);
        self.paging.write_query(query);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherPayload {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub phone: String,
    pub room_id: Option<EntityId>,
    pub subject_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// `teachers` endpoint
pub struct Teachers;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("last_name", "Фамилия", FieldKind::Text),
    FieldSpec::required("first_name", "Имя", FieldKind::Text),
    FieldSpec::optional("middle_name", "Отчество", FieldKind::Text),
    FieldSpec::required("phone", "Телефон", FieldKind::Phone),
    FieldSpec::required("subject_id", "Предмет", FieldKind::Reference(Reference::Subject)),
    FieldSpec::optional("room_id", "Кабинет", FieldKind::Reference(Reference::Room)),
    FieldSpec::optional("password", "Пароль", FieldKind::Secret),
];

impl Resource for Teachers {
    const PATH: &'static str = "teachers";
    const NOUN: &'static str = "teacher";
    const TITLE: &'static str = "Учителя";

    type Record = Teacher;
    type Filter = TeacherFilter;
    type Payload = TeacherPayload;

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn draft(record: &Teacher) -> FieldValues {
        FieldValues::new()
            .with("first_name", record.first_name.clone())
            .with("last_name", record.last_name.clone())
            .with_opt("middle_name", record.middle_name.clone())
            .with("phone", record.phone.clone())
            .with("subject_id", record.subject_id.to_string())
            .with_opt("room_id", record.room_id)
    }

    fn payload(values: &FieldValues, mode: DraftMode) -> ApiResult<TeacherPayload> {
        Ok(TeacherPayload {
            first_name: values.required_text("first_name", "Имя")?,
            last_name: values.required_text("last_name", "Фамилия")?,
            middle_name: values.optional_text("middle_name"),
            phone: values.required_text("phone", "Телефон")?,
            room_id: values.optional_number("room_id", "Кабинет")?,
            subject_id: values.required_number("subject_id", "Предмет")?,
            password: values.secret("password", "Пароль", mode)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher_json() -> &'static str {
        r#"{
            "id": 11,
            "first_name": "Мария",
            "last_name": "Кузнецова",
            "employed_at": "2019-09-01T00:00:00Z",
            "phone": "+79990001122",
            "mfa": false,
            "role": "Teacher",
            "subject_id": 3
        }"#
    }

    #[test]
    fn test_decodes_flattened_employee() {
        let teacher: Teacher = serde_json::from_str(teacher_json()).unwrap();
        assert_eq!(teacher.display_name(), "Мария Кузнецова");
        assert_eq!(teacher.room_id, None);
        assert_eq!(teacher.middle_name, None);
        assert_eq!(teacher.role, Some(Role::Teacher));
    }

    #[test]
    fn test_draft_leaves_password_blank() {
        let teacher: Teacher = serde_json::from_str(teacher_json()).unwrap();
        let draft = Teachers::draft(&teacher);
        assert_eq!(draft.get("subject_id"), "3");
        assert_eq!(draft.get("password"), "");

        let payload = Teachers::payload(&draft, DraftMode::Update).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_create_requires_password() {
        let teacher: Teacher = serde_json::from_str(teacher_json()).unwrap();
        let draft = Teachers::draft(&teacher);
        assert!(Teachers::payload(&draft, DraftMode::Create).is_err());

        let draft = draft.with("password", "s3cret");
        let payload = Teachers::payload(&draft, DraftMode::Create).unwrap();
        assert_eq!(payload.password.as_deref(), Some("s3cret"));
    }

    #[test]
    fn test_filter_arrays() {
        let filter = TeacherFilter {
            subject_ids: vec![3],
            room_ids: vec![10, 12],
            ..Default::default()
        };
        assert_eq!(
            filter.to_query().encode(),
            "subject_ids=3&room_ids=10&room_ids=12"
        );
    }
}
