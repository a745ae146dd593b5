//! Core Entity Trait
//!
//! Every record the API returns has a unique integer id and a name to show
//! wherever another record points at it.

use serde::{Deserialize, Serialize};

use crate::query::QueryString;

/// Server-assigned record id
pub type EntityId = i32;

pub trait Entity: Clone {
    fn id(&self) -> EntityId;

    /// Human-readable name used by lookup tables and selects
    fn display_name(&self) -> String;
}

/// `count` / `offset` window, passed to the server verbatim
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub count: Option<i64>,
    pub offset: Option<i64>,
}

impl Paging {
    pub fn window(count: i64, offset: i64) -> Self {
        Self {
            count: Some(count),
            offset: Some(offset),
        }
    }

    pub(crate) fn write_query(&self, query: &mut QueryString) {
        query.push_opt("count", self.count);
        query.push_opt("offset", self.offset);
    }
}

/// Joins name parts, skipping blanks: "Иванов Иван"
pub(crate) fn full_name(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paging_passthrough() {
        let mut query = QueryString::new();
        Paging::window(25, 50).write_query(&mut query);
        assert_eq!(query.encode(), "count=25&offset=50");

        let mut query = QueryString::new();
        Paging::default().write_query(&mut query);
        assert!(query.is_empty());
    }

    #[test]
    fn test_full_name_skips_blanks() {
        assert_eq!(full_name(&[Some("Анна"), None, Some(" Смирнова ")]), "Анна Смирнова");
        assert_eq!(full_name(&[Some(""), None]), "");
    }
}
