//! Mark Resource
//!
//! A grade a teacher gave a student in a subject. Grades run from 2 to 5.

use std::ops::RangeInclusive;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId, Paging};
use crate::error::{ApiError, ApiResult};
use crate::query::{QueryString, ToQuery};
use crate::resource::{DraftMode, FieldKind, FieldSpec, FieldValues, Reference, Resource};

/// Grades the server accepts
pub const MARK_RANGE: RangeInclusive<i16> = 2..=5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    pub id: EntityId,
    pub mark: i16,
    pub student_id: EntityId,
    pub subject_id: EntityId,
    pub teacher_id: EntityId,
    pub time: DateTime<Utc>,
}

impl Entity for Mark {
    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> String {
        self.mark.to_string()
    }
}

impl Mark {
    pub fn validate(mark: i16) -> ApiResult<i16> {
        if MARK_RANGE.contains(&mark) {
            Ok(mark)
        } else {
            Err(ApiError::Validation(format!(
                "Оценка должна быть от {} до {}.",
                MARK_RANGE.start(),
                MARK_RANGE.end()
            )))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkFilter {
    pub student_ids: Vec<EntityId>,
    pub teacher_ids: Vec<EntityId>,
    pub subject_ids: Vec<EntityId>,
    pub least: Option<i16>,
    pub most: Option<i16>,
    pub after: Option<DateTime<Utc>>,
    pub before: Option<DateTime<Utc>>,
    pub paging: Paging,
}

impl MarkFilter {
    pub fn for_subject(subject_id: EntityId) -> Self {
        Self {
            subject_ids: vec![subject_id],
            ..Default::default()
        }
    }
}

impl ToQuery for MarkFilter {
    fn write_query(&self, query: &mut QueryString) {
        query.push_all("student_ids", &self.student_ids);
        // the server spells this key with a plural "teachers"
        query.push_all("teachers_ids", &self.teacher_ids);
        query.push_all("subject_ids", &self.subject_ids);
        query.push_opt("least", self.least);
        query.push_opt("most", self.most);
        query.push_time("after", self.after);
        query.push_time("before", self.before);
        self.paging.write_query(query);
    }
}

/// Filter panel contents before they are applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkFilterDraft {
    pub student_ids: Vec<EntityId>,
    pub teacher_ids: Vec<EntityId>,
    pub subject_ids: Vec<EntityId>,
    pub least: String,
    pub most: String,
    /// `datetime-local` input value (wall clock) or RFC 3339
    pub after: String,
    pub before: String,
}

impl MarkFilterDraft {
    /// Build the filter, dropping blank inputs. Wall-clock times are read
    /// in `offset`, the browser's zone.
    pub fn apply(&self, offset: FixedOffset) -> ApiResult<MarkFilter> {
        let values = FieldValues::new()
            .with("least", self.least.clone())
            .with("most", self.most.clone());
        Ok(MarkFilter {
            student_ids: self.student_ids.clone(),
            teacher_ids: self.teacher_ids.clone(),
            subject_ids: self.subject_ids.clone(),
            least: values.optional_number("least", "Оценка от")?,
            most: values.optional_number("most", "Оценка до")?,
            after: parse_time(&self.after, "После", offset)?,
            before: parse_time(&self.before, "До", offset)?,
            paging: Paging::default(),
        })
    }
}

fn parse_time(raw: &str, label: &str, offset: FixedOffset) -> ApiResult<Option<DateTime<Utc>>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(at.with_timezone(&Utc)));
    }
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .and_then(|naive| offset.from_local_datetime(&naive).single())
        .map(|at| Some(at.with_timezone(&Utc)))
        .ok_or_else(|| ApiError::Validation(format!("Поле «{}» должно быть датой.", label)))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkPayload {
    pub mark: i16,
    pub student_id: EntityId,
    pub subject_id: EntityId,
    /// Required when a principal grades on a teacher's behalf
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teacher_id: Option<EntityId>,
}

/// `marks` endpoint
pub struct Marks;

const FIELDS: &[FieldSpec] = &[
    FieldSpec::required("student_id", "Ученик", FieldKind::Reference(Reference::Student)),
    FieldSpec::required("subject_id", "Предмет", FieldKind::Reference(Reference::Subject)),
    FieldSpec::optional("teacher_id", "Учитель", FieldKind::Reference(Reference::Teacher)),
    FieldSpec::required("mark", "Оценка", FieldKind::Number),
];

impl Resource for Marks {
    const PATH: &'static str = "marks";
    const NOUN: &'static str = "mark";
    const TITLE: &'static str = "Оценки";

    type Record = Mark;
    type Filter = MarkFilter;
    type Payload = MarkPayload;

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn draft(record: &Mark) -> FieldValues {
        FieldValues::new()
            .with("mark", record.mark.to_string())
            .with("student_id", record.student_id.to_string())
            .with("subject_id", record.subject_id.to_string())
            .with("teacher_id", record.teacher_id.to_string())
    }

    fn payload(values: &FieldValues, _mode: DraftMode) -> ApiResult<MarkPayload> {
        let mark = values.required_number("mark", "Оценка")?;
        Ok(MarkPayload {
            mark: Mark::validate(mark)?,
            student_id: values.required_number("student_id", "Ученик")?,
            subject_id: values.required_number("subject_id", "Предмет")?,
            teacher_id: values.optional_number("teacher_id", "Учитель")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_filter_query() {
        let filter = MarkFilter {
            student_ids: vec![1, 2],
            teacher_ids: vec![9],
            subject_ids: vec![],
            least: Some(3),
            most: Some(5),
            after: Some(Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap()),
            before: None,
            paging: Paging::default(),
        };
        let query = filter.to_query();
        assert_eq!(query.values("student_ids"), vec!["1", "2"]);
        assert_eq!(query.values("teachers_ids"), vec!["9"]);
        assert!(query.values("subject_ids").is_empty());
        assert_eq!(query.values("least"), vec!["3"]);
        assert_eq!(query.values("most"), vec!["5"]);
        assert_eq!(query.values("after"), vec!["2024-01-10T00:00:00+00:00"]);
        assert!(query.values("before").is_empty());
    }

    #[test]
    fn test_range_validation() {
        assert!(Mark::validate(1).is_err());
        assert!(Mark::validate(6).is_err());
        for ok in 2..=5 {
            assert_eq!(Mark::validate(ok).unwrap(), ok);
        }
    }

    #[test]
    fn test_payload_rejects_out_of_range() {
        let values = FieldValues::new()
            .with("mark", "7")
            .with("student_id", "1")
            .with("subject_id", "2");
        assert!(Marks::payload(&values, DraftMode::Create).is_err());

        let values = values.with("mark", "4");
        let payload = Marks::payload(&values, DraftMode::Create).unwrap();
        assert_eq!(payload.teacher_id, None);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "mark": 4, "student_id": 1, "subject_id": 2 })
        );
    }

    #[test]
    fn test_draft_drops_blanks() {
        let draft = MarkFilterDraft {
            subject_ids: vec![2],
            least: " ".to_string(),
            most: "4".to_string(),
            after: "2024-01-10T08:30".to_string(),
            ..Default::default()
        };
        let filter = draft.apply(FixedOffset::east_opt(0).unwrap()).unwrap();
        assert_eq!(filter.least, None);
        assert_eq!(filter.most, Some(4));
        assert_eq!(filter.after, Some(Utc.with_ymd_and_hms(2024, 1, 10, 8, 30, 0).unwrap()));
        assert_eq!(filter.before, None);
        assert_eq!(filter.to_query().encode(), "subject_ids=2&most=4&after=2024-01-10T08%3A30%3A00%2B00%3A00");
    }

    #[test]
    fn test_draft_reads_wall_clock_in_browser_zone() {
        let moscow = FixedOffset::east_opt(3 * 3600).unwrap();
        let draft = MarkFilterDraft {
            after: "2024-01-10T08:30".to_string(),
            before: "2024-01-11T00:00:00Z".to_string(),
            ..Default::default()
        };
        let filter = draft.apply(moscow).unwrap();
        assert_eq!(filter.after, Some(Utc.with_ymd_and_hms(2024, 1, 10, 5, 30, 0).unwrap()));
        // explicit zones are kept as written
        assert_eq!(filter.before, Some(Utc.with_ymd_and_hms(2024, 1, 11, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_draft_rejects_garbage() {
        let draft = MarkFilterDraft {
            before: "вчера".to_string(),
            ..Default::default()
        };
        assert!(draft.apply(FixedOffset::east_opt(0).unwrap()).is_err());
        let draft = MarkFilterDraft {
            least: "два".to_string(),
            ..Default::default()
        };
        assert!(draft.apply(FixedOffset::east_opt(0).unwrap()).is_err());
    }

    #[test]
    fn test_decode_mark() {
        let mark: Mark = serde_json::from_str(
            r#"{"id":5,"mark":4,"student_id":1,"subject_id":2,"teacher_id":3,"time":"2024-03-01T09:15:00Z"}"#,
        )
        .unwrap();
        assert_eq!(mark.display_name(), "4");
        assert_eq!(Marks::draft(&mark).get("teacher_id"), "3");
    }
}
