//! Table Columns
//!
//! How each resource renders as a table row. Foreign keys stay as ids here
//! and resolve through the lookup tables at render time.

use shkola_api::domain::{
    Class, Classes, EntityId, Mark, Marks, Room, Rooms, Student, Students, Subject, Subjects,
    Teacher, Teachers,
};
use shkola_api::lookup::{Lookups, MISSING};
use shkola_api::{Reference, Resource};

pub enum Cell {
    Text(String),
    Ref(Reference, Option<EntityId>),
}

impl Cell {
    fn opt(value: &Option<String>) -> Cell {
        Cell::Text(value.clone().unwrap_or_default())
    }

    pub fn render(&self, lookups: &Lookups) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Ref(reference, id) => lookups.display(*reference, *id),
        }
    }
}

pub trait ResourceView: Resource {
    fn headers() -> &'static [&'static str];
    fn cells(record: &Self::Record) -> Vec<Cell>;
}

impl ResourceView for Classes {
    fn headers() -> &'static [&'static str] {
        &["ID", "Название"]
    }

    fn cells(record: &Class) -> Vec<Cell> {
        vec![Cell::Text(record.id.to_string()), Cell::Text(record.name.clone())]
    }
}

impl ResourceView for Subjects {
    fn headers() -> &'static [&'static str] {
        &["ID", "Название"]
    }

    fn cells(record: &Subject) -> Vec<Cell> {
        vec![Cell::Text(record.id.to_string()), Cell::Text(record.name.clone())]
    }
}

impl ResourceView for Rooms {
    fn headers() -> &'static [&'static str] {
        &["ID", "Название", "Предмет"]
    }

    fn cells(record: &Room) -> Vec<Cell> {
        vec![
            Cell::Text(record.id.to_string()),
            Cell::Text(record.name.clone()),
            Cell::Ref(Reference::Subject, record.subject_id),
        ]
    }
}

impl ResourceView for Teachers {
    fn headers() -> &'static [&'static str] {
        &["ID", "Фамилия", "Имя", "Отчество", "Телефон", "Предмет", "Кабинет", "Принят"]
    }

    fn cells(record: &Teacher) -> Vec<Cell> {
        vec![
            Cell::Text(record.id.to_string()),
            Cell::Text(record.last_name.clone()),
            Cell::Text(record.first_name.clone()),
            Cell::opt(&record.middle_name),
            Cell::Text(record.phone.clone()),
            Cell::Ref(Reference::Subject, Some(record.subject_id)),
            Cell::Ref(Reference::Room, record.room_id),
            Cell::Text(
                record
                    .employed_at
                    .map(|at| at.format("%d.%m.%Y").to_string())
                    .unwrap_or_else(|| MISSING.to_string()),
            ),
        ]
    }
}

impl ResourceView for Students {
    fn headers() -> &'static [&'static str] {
        &["ID", "Фамилия", "Имя", "Отчество", "Класс", "Телефон"]
    }

    fn cells(record: &Student) -> Vec<Cell> {
        vec![
            Cell::Text(record.id.to_string()),
            Cell::Text(record.last_name.clone()),
            Cell::Text(record.first_name.clone()),
            Cell::opt(&record.middle_name),
            Cell::Ref(Reference::Class, Some(record.class_id)),
            Cell::opt(&record.phone),
        ]
    }
}

impl ResourceView for Marks {
    fn headers() -> &'static [&'static str] {
        &["ID", "Ученик", "Предмет", "Учитель", "Оценка", "Дата"]
    }

    fn cells(record: &Mark) -> Vec<Cell> {
        vec![
            Cell::Text(record.id.to_string()),
            Cell::Ref(Reference::Student, Some(record.student_id)),
            Cell::Ref(Reference::Subject, Some(record.subject_id)),
            Cell::Ref(Reference::Teacher, Some(record.teacher_id)),
            Cell::Text(record.mark.to_string()),
            Cell::Text(record.time.format("%d.%m.%Y %H:%M").to_string()),
        ]
    }
}
