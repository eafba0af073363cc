//! Category lookup tables (AI types and data layers).
//!
//! Each table is built once from catalog data and validated for unique,
//! well-formed ids. Lookups of an id that is not in the table fail closed to
//! a fixed "unknown" entry instead of producing missing fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::is_valid_id;
use crate::error::CatalogError;

/// Id of the fallback entry returned by [`CategoryTable::lookup`].
pub const UNKNOWN_CATEGORY_ID: &str = "unknown";

/// Which classification a category table holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKind {
    AiType,
    DataLayer,
}

impl CategoryKind {
    /// Singular label used in messages and table headers.
    pub fn label(self) -> &'static str {
        match self {
            Self::AiType => "AI type",
            Self::DataLayer => "data layer",
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Display metadata for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: String,
    #[serde(default)]
    pub icon: String,
}

impl Category {
    fn unknown() -> Self {
        Self {
            id: UNKNOWN_CATEGORY_ID.to_string(),
            name: "Unknown".to_string(),
            color: "#8b949e".to_string(),
            icon: "help-circle".to_string(),
        }
    }
}

/// Ordered, validated set of categories of one kind.
#[derive(Debug, Clone)]
pub struct CategoryTable {
    kind: CategoryKind,
    entries: Vec<Category>,
    unknown: Category,
}

impl CategoryTable {
    /// Build a table, rejecting duplicate or malformed ids.
    pub fn new(kind: CategoryKind, entries: Vec<Category>) -> Result<Self, CatalogError> {
        let label = kind.label();
        for (i, category) in entries.iter().enumerate() {
            if !is_valid_id(&category.id) || category.id == UNKNOWN_CATEGORY_ID {
                return Err(CatalogError::InvalidId {
                    kind: label,
                    id: category.id.clone(),
                });
            }
            if entries[..i].iter().any(|c| c.id == category.id) {
                return Err(CatalogError::DuplicateId {
                    kind: label,
                    id: category.id.clone(),
                });
            }
        }

        Ok(Self {
            kind,
            entries,
            unknown: Category::unknown(),
        })
    }

    pub fn kind(&self) -> CategoryKind {
        self.kind
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.entries.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Metadata for `id`, or the shared "unknown" entry.
    pub fn lookup(&self, id: &str) -> &Category {
        self.get(id).unwrap_or(&self.unknown)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(id: &str) -> Category {
        Category {
            id: id.to_string(),
            name: id.to_uppercase(),
            color: "#000000".to_string(),
            icon: String::new(),
        }
    }

    #[test]
    fn lookup_fails_closed_to_unknown() {
        let table = CategoryTable::new(CategoryKind::AiType, vec![category("nlp")]).unwrap();
        assert_eq!(table.lookup("nlp").name, "NLP");

        let missing = table.lookup("quantum");
        assert_eq!(missing.id, UNKNOWN_CATEGORY_ID);
        assert_eq!(missing.name, "Unknown");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = CategoryTable::new(
            CategoryKind::DataLayer,
            vec![category("gold"), category("gold")],
        );
        assert!(matches!(result, Err(CatalogError::DuplicateId { .. })));
    }

    #[test]
    fn rejects_reserved_unknown_id() {
        let result = CategoryTable::new(CategoryKind::AiType, vec![category("unknown")]);
        assert!(matches!(result, Err(CatalogError::InvalidId { .. })));
    }

    #[test]
    fn preserves_declaration_order() {
        let table = CategoryTable::new(
            CategoryKind::AiType,
            vec![category("ml"), category("nlp"), category("cv")],
        )
        .unwrap();
        let ids: Vec<&str> = table.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["ml", "nlp", "cv"]);
    }
}
