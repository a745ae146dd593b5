//! Gradebook
//!
//! One subject at a time: every student with the marks they have in it,
//! and quick entry of a new mark stamped with the signed-in teacher.

use crate::domain::{Entity, EntityId, Mark, MarkPayload, Student};
use crate::error::{ApiError, ApiResult};
use crate::session::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradebookRow {
    pub student_id: EntityId,
    pub student: String,
    /// Marks in fetch order, joined with ", "
    pub marks: String,
}

/// One row per student, in student order.
pub fn rows(students: &[Student], marks: &[Mark]) -> Vec<GradebookRow> {
    students
        .iter()
        .map(|student| GradebookRow {
            student_id: student.id,
            student: student.display_name(),
            marks: marks
                .iter()
                .filter(|m| m.student_id == student.id)
                .map(|m| m.mark.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
enum Fetch<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

/// What the gradebook table should show right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradebookView {
    NoSubject,
    Loading,
    Failed(String),
    Rows(Vec<GradebookRow>),
}

/// Both fetches behind the gradebook. Marks belong to one subject; picking
/// another subject throws them away until its own marks arrive.
#[derive(Debug, Clone, PartialEq)]
pub struct GradebookState {
    students: Fetch<Vec<Student>>,
    subject_id: Option<EntityId>,
    marks: Fetch<Vec<Mark>>,
}

impl Default for GradebookState {
    fn default() -> Self {
        Self {
            students: Fetch::Loading,
            subject_id: None,
            marks: Fetch::Loading,
        }
    }
}

impl GradebookState {
    pub fn subject_id(&self) -> Option<EntityId> {
        self.subject_id
    }

    pub fn students_loaded(&mut self, result: ApiResult<Vec<Student>>) {
        self.students = match result {
            Ok(students) => Fetch::Loaded(students),
            Err(err) => Fetch::Failed(err.to_string()),
        };
    }

    pub fn select_subject(&mut self, subject_id: Option<EntityId>) {
        self.subject_id = subject_id;
        self.marks = Fetch::Loading;
    }

    /// Marks fetched for `subject_id`; ignored if another subject is picked by now.
    pub fn marks_loaded(&mut self, subject_id: EntityId, result: ApiResult<Vec<Mark>>) {
        if self.subject_id != Some(subject_id) {
            return;
        }
        self.marks = match result {
            Ok(marks) => Fetch::Loaded(marks),
            Err(err) => Fetch::Failed(err.to_string()),
        };
    }

    pub fn view(&self) -> GradebookView {
        if self.subject_id.is_none() {
            return GradebookView::NoSubject;
        }
        match (&self.students, &self.marks) {
            (Fetch::Failed(message), _) | (_, Fetch::Failed(message)) => {
                GradebookView::Failed(message.clone())
            }
            (Fetch::Loaded(students), Fetch::Loaded(marks)) => {
                GradebookView::Rows(rows(students, marks))
            }
            _ => GradebookView::Loading,
        }
    }
}

/// Build the payload for a mark typed into the gradebook.
pub fn new_mark(
    session: &Session,
    subject_id: Option<EntityId>,
    student_id: EntityId,
    raw_mark: &str,
) -> ApiResult<MarkPayload> {
    let teacher_id = session.teacher_id().ok_or_else(|| {
        ApiError::Validation("Оценки может ставить только учитель.".to_string())
    })?;
    let subject_id =
        subject_id.ok_or_else(|| ApiError::Validation("Выберите предмет.".to_string()))?;
    let mark = raw_mark
        .trim()
        .parse::<i16>()
        .map_err(|_| ApiError::Validation("Оценка должна быть числом.".to_string()))?;
    Ok(MarkPayload {
        mark: Mark::validate(mark)?,
        student_id,
        subject_id,
        teacher_id: Some(teacher_id),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Profile, Role};
    use chrono::{TimeZone, Utc};

    fn student(id: EntityId, first: &str, last: &str) -> Student {
        Student {
            id,
            first_name: first.to_string(),
            last_name: last.to_string(),
            middle_name: None,
            class_id: 1,
            phone: None,
            enrolled_at: None,
        }
    }

    fn mark(id: EntityId, student_id: EntityId, subject_id: EntityId, value: i16) -> Mark {
        Mark {
            id,
            mark: value,
            student_id,
            subject_id,
            teacher_id: 4,
            time: Utc.with_ymd_and_hms(2024, 2, 1, 10, 0, 0).unwrap(),
        }
    }

    fn session_as(role: Role) -> Session {
        let mut session = Session::default();
        session.sign_in(Profile {
            id: Some(4),
            first_name: "Ольга".to_string(),
            last_name: "Иванова".to_string(),
            middle_name: None,
            phone: None,
            role,
            employed_at: None,
            subject_id: Some(2),
            room_id: None,
        });
        session
    }

    #[test]
    fn test_rows_join_marks_per_student() {
        let students = vec![student(1, "Анна", "Смирнова"), student(2, "Пётр", "Орлов")];
        let marks = vec![mark(10, 1, 2, 5), mark(11, 1, 2, 4), mark(12, 3, 2, 2)];
        let rows = rows(&students, &marks);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].student, "Анна Смирнова");
        assert_eq!(rows[0].marks, "5, 4");
        assert_eq!(rows[1].marks, "");
    }

    #[test]
    fn test_students_failure_shows_error() {
        let mut state = GradebookState::default();
        state.select_subject(Some(2));
        state.students_loaded(Err(ApiError::Transport("offline".to_string())));
        state.marks_loaded(2, Ok(vec![mark(10, 1, 2, 5)]));
        assert_eq!(
            state.view(),
            GradebookView::Failed("Network error: offline".to_string())
        );
    }

    #[test]
    fn test_switching_subject_drops_old_marks() {
        let mut state = GradebookState::default();
        state.students_loaded(Ok(vec![student(1, "Анна", "Смирнова")]));
        state.select_subject(Some(2));
        state.marks_loaded(2, Ok(vec![mark(10, 1, 2, 5)]));
        assert!(matches!(&state.view(), GradebookView::Rows(rows) if rows[0].marks == "5"));

        state.select_subject(Some(3));
        assert_eq!(state.view(), GradebookView::Loading);

        // a late reply for the previous subject is ignored
        state.marks_loaded(2, Ok(vec![mark(11, 1, 2, 4)]));
        assert_eq!(state.view(), GradebookView::Loading);

        state.marks_loaded(3, Err(ApiError::Status(500)));
        assert!(matches!(state.view(), GradebookView::Failed(_)));
    }

    #[test]
    fn test_no_subject_picked() {
        let mut state = GradebookState::default();
        state.students_loaded(Ok(vec![]));
        assert_eq!(state.view(), GradebookView::NoSubject);
    }

    #[test]
    fn test_new_mark_needs_grading_role_and_subject() {
        assert!(new_mark(&Session::default(), Some(2), 1, "5").is_err());
        assert!(new_mark(&session_as(Role::Admin), Some(2), 1, "5").is_err());
        assert!(new_mark(&session_as(Role::Teacher), None, 1, "5").is_err());
        assert!(new_mark(&session_as(Role::Principal), Some(2), 1, "5").is_ok());
    }

    #[test]
    fn test_new_mark_validates_range() {
        let session = session_as(Role::Teacher);
        assert!(new_mark(&session, Some(2), 1, "1").is_err());
        assert!(new_mark(&session, Some(2), 1, "abc").is_err());

        let payload = new_mark(&session, Some(2), 1, " 3 ").unwrap();
        assert_eq!(payload.mark, 3);
        assert_eq!(payload.teacher_id, Some(4));
        assert_eq!(payload.subject_id, 2);
    }
}
