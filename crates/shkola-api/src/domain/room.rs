//! Room Resource
//!
//! A classroom, optionally dedicated to one subject.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId, Paging};
use crate::error::ApiResult;
use crate::query::{QueryString, ToQuery};
use crate::resource::{DraftMode, FieldKind, FieldSpec, FieldValues, Reference, Resource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub subject_id: Option<EntityId>,
}

impl Entity for Room {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomFilter {
    pub name: Option<String>,
    pub id: Option<EntityId>,
    pub subject_ids: Vec<EntityId>,
    pub paging: Paging,
}

impl ToQuery for RoomFilter {
    fn write_query(&self, query: &mut QueryString) {
        query.push_text("name", self.name.as_deref());
        query.push_opt("id", self.id);
        query.push_all("subject_ids", &self.subject_ids);
        self.paging.write_query(query);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomPayload {
    pub name: String,
    pub subject_id: Option<EntityId>,
}

/// `rooms` endpoint
pub struct Rooms;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", "Название", FieldKind::Text),
    FieldSpec::optional("subject_id", "Предмет", FieldKind::Reference(Reference::Subject)),
];

impl Resource for Rooms {
    const PATH: &'static str = "rooms";
    const NOUN: &'static str = "room";
    const TITLE: &'static str = "Кабинеты";

    type Record = Room;
    type Filter = RoomFilter;
    type Payload = RoomPayload;

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn draft(record: &Room) -> FieldValues {
        FieldValues::new()
            .with("name", record.name.clone())
            .with_opt("subject_id", record.subject_id)
    }

    fn payload(values: &FieldValues, _mode: DraftMode) -> ApiResult<RoomPayload> {
        Ok(RoomPayload {
            name: values.required_text("name", "Название")?,
            subject_id: values.optional_number("subject_id", "Предмет")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_ids_repeat() {
        let filter = RoomFilter {
            subject_ids: vec![1, 4],
            ..Default::default()
        };
        assert_eq!(filter.to_query().encode(), "subject_ids=1&subject_ids=4");
    }

    #[test]
    fn test_missing_subject_decodes() {
        let room: Room = serde_json::from_str(r#"{"id":3,"name":"301"}"#).unwrap();
        assert_eq!(room.subject_id, None);
        assert_eq!(Rooms::draft(&room).get("subject_id"), "");
    }

    #[test]
    fn test_payload_serialises_null_subject() {
        let values = FieldValues::new().with("name", "Спортзал");
        let payload = Rooms::payload(&values, DraftMode::Create).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Спортзал", "subject_id": null }));
    }

    #[test]
    fn test_references_subject() {
        assert_eq!(Rooms::references(), vec![Reference::Subject]);
    }
}
