//! Lookup Tables
//!
//! Id → display-name maps for foreign-key columns. Each table is fetched on
//! its own; until it arrives cells show a placeholder, and ids it does not
//! contain show `N/A`.

use std::collections::BTreeMap;

use crate::domain::{Entity, EntityId};
use crate::resource::Reference;

pub const MISSING: &str = "N/A";
pub const PENDING: &str = "…";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lookup {
    names: BTreeMap<EntityId, String>,
    loaded: bool,
}

impl Lookup {
    pub fn from_records<E: Entity>(records: &[E]) -> Self {
        Self {
            names: records.iter().map(|r| (r.id(), r.display_name())).collect(),
            loaded: true,
        }
    }

    /// Loaded but empty: every id shows as missing
    pub fn empty() -> Self {
        Self {
            names: BTreeMap::new(),
            loaded: true,
        }
    }

    pub fn name(&self, id: EntityId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn display(&self, id: Option<EntityId>) -> String {
        if !self.loaded {
            return PENDING.to_string();
        }
        id.and_then(|id| self.name(id))
            .unwrap_or(MISSING)
            .to_string()
    }

    /// `(id, name)` pairs for a select, sorted by name
    pub fn options(&self) -> Vec<(EntityId, String)> {
        let mut options: Vec<_> = self.names.iter().map(|(id, n)| (*id, n.clone())).collect();
        options.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
        options
    }
}

/// One lookup per referenced resource
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lookups {
    tables: BTreeMap<Reference, Lookup>,
}

impl Lookups {
    pub fn insert(&mut self, reference: Reference, lookup: Lookup) {
        self.tables.insert(reference, lookup);
    }

    pub fn get(&self, reference: Reference) -> Lookup {
        self.tables.get(&reference).cloned().unwrap_or_default()
    }

    pub fn display(&self, reference: Reference, id: Option<EntityId>) -> String {
        match self.tables.get(&reference) {
            Some(table) => table.display(id),
            None => PENDING.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Subject;

    fn subjects() -> Vec<Subject> {
        vec![
            Subject { id: 1, name: "Физика".to_string() },
            Subject { id: 2, name: "Алгебра".to_string() },
        ]
    }

    #[test]
    fn test_pending_until_loaded() {
        let lookup = Lookup::default();
        assert_eq!(lookup.display(Some(1)), PENDING);
        assert_eq!(Lookup::empty().display(Some(1)), MISSING);
    }

    #[test]
    fn test_missing_id_is_na() {
        let lookup = Lookup::from_records(&subjects());
        assert_eq!(lookup.display(Some(1)), "Физика");
        assert_eq!(lookup.display(Some(99)), MISSING);
        assert_eq!(lookup.display(None), MISSING);
    }

    #[test]
    fn test_options_sorted_by_name() {
        let lookup = Lookup::from_records(&subjects());
        assert_eq!(
            lookup.options(),
            vec![(2, "Алгебра".to_string()), (1, "Физика".to_string())]
        );
    }

    #[test]
    fn test_lookups_by_reference() {
        let mut lookups = Lookups::default();
        assert_eq!(lookups.display(Reference::Subject, Some(1)), PENDING);
        lookups.insert(Reference::Subject, Lookup::from_records(&subjects()));
        assert_eq!(lookups.display(Reference::Subject, Some(2)), "Алгебра");
        assert_eq!(lookups.display(Reference::Subject, None), MISSING);
        assert_eq!(lookups.display(Reference::Class, Some(1)), PENDING);
    }
}
