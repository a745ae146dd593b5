//! Subject Resource
//!
//! A taught subject; rooms and teachers are assigned to one.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId, Paging};
use crate::error::ApiResult;
use crate::query::{QueryString, ToQuery};
use crate::resource::{DraftMode, FieldKind, FieldSpec, FieldValues, Resource};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: EntityId,
    pub name: String,
}

impl Entity for Subject {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectFilter {
    pub name: Option<String>,
    pub id: Option<EntityId>,
    pub paging: Paging,
}

impl ToQuery for SubjectFilter {
    fn write_query(&self, query: &mut QueryString) {
        query.push_text("name", self.name.as_deref());
        query.push_opt("id", self.id);
        self.paging.write_query(query);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectPayload {
    pub name: String,
}

/// `subjects` endpoint
pub struct Subjects;

const FIELDS: &[FieldSpec] = &[FieldSpec::required("name", "Название", FieldKind::Text)];

impl Resource for Subjects {
    const PATH: &'static str = "subjects";
    const NOUN: &'static str = "subject";
    const TITLE: &'static str = "Предметы";

    type Record = Subject;
    type Filter = SubjectFilter;
    type Payload = SubjectPayload;

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn draft(record: &Subject) -> FieldValues {
        FieldValues::new().with("name", record.name.clone())
    }

    fn payload(values: &FieldValues, _mode: DraftMode) -> ApiResult<SubjectPayload> {
        Ok(SubjectPayload {
            name: values.required_text("name", "Название")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_filter_by_id() {
        let filter = SubjectFilter { id: Some(2), ..Default::default() };
        assert_eq!(filter.to_query().encode(), "id=2");
    }

    #[test]
    fn test_blank_name_rejected() {
        let values = FieldValues::new().with("name", "");
        let err = Subjects::payload(&values, DraftMode::Create).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
