//! Typed errors for the catalog, filter, and view layers.
//!
//! Application surfaces (CLI, web handlers, config writes) wrap these in
//! `anyhow::Error`; the library itself only ever returns the variants below.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::CategoryKind;

// ---------------------------------------------------------------------------
// Catalog load / validation
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("malformed {kind} id '{id}' (expected lowercase slug)")]
    InvalidId { kind: &'static str, id: String },

    #[error("use case '{use_case}' references unknown {kind} '{id}'")]
    UnknownCategory {
        use_case: String,
        kind: CategoryKind,
        id: String,
    },

    #[error("use case '{use_case}' has invalid {field}: {value}")]
    InvalidValue {
        use_case: String,
        field: &'static str,
        value: f64,
    },
}

// ---------------------------------------------------------------------------
// Filter criteria parsing
// ---------------------------------------------------------------------------

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown status '{0}' (expected active, training, pending, or all)")]
    UnknownStatus(String),

    #[error("unknown sort key '{0}' (expected name, accuracy, cost_savings, or revenue)")]
    UnknownSortKey(String),

    #[error("unknown sort order '{0}' (expected asc or desc)")]
    UnknownSortOrder(String),
}

// ---------------------------------------------------------------------------
// View resolution
// ---------------------------------------------------------------------------

/// Kind of entity a navigation parameter failed to resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Department,
    UseCase,
    Tab,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Department => write!(f, "department"),
            Self::UseCase => write!(f, "use-case"),
            Self::Tab => write!(f, "tab"),
        }
    }
}

/// The single runtime failure of the dashboard: an id that does not resolve.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: EntityKind, id: String },
}

impl ViewError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_kind_and_id() {
        let err = ViewError::not_found(EntityKind::UseCase, "uc-999");
        assert_eq!(err.to_string(), "use-case 'uc-999' not found");
    }

    #[test]
    fn unknown_category_message() {
        let err = CatalogError::UnknownCategory {
            use_case: "uc-1".to_string(),
            kind: CategoryKind::DataLayer,
            id: "lakehouse".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "use case 'uc-1' references unknown data layer 'lakehouse'"
        );
    }
}
