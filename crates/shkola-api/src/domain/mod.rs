//! Domain Layer
//!
//! Wire records, filters and payloads for every school resource, plus the
//! signed-in user's profile.

mod entity;
mod class;
mod subject;
mod room;
mod teacher;
mod student;
mod mark;
mod profile;

pub use entity::{Entity, EntityId, Paging};
pub use class::{Class, ClassFilter, ClassPayload, Classes};
pub use subject::{Subject, SubjectFilter, SubjectPayload, Subjects};
pub use room::{Room, RoomFilter, RoomPayload, Rooms};
pub use teacher::{Teacher, TeacherFilter, TeacherPayload, Teachers};
pub use student::{Student, StudentFilter, StudentPayload, Students};
pub use mark::{Mark, MarkFilter, MarkFilterDraft, MarkPayload, Marks, MARK_RANGE};
pub use profile::{Credentials, LoginResponse, Profile, Role};
