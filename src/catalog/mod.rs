//! The use-case catalog: departments, their use cases, and the two category
//! lookup tables.
//!
//! A catalog is built exactly once at startup, either from the embedded
//! fixture data or from a TOML file with the same shape:
//!
//! ```toml
//! [[ai_types]]
//! id = "ml"
//! name = "Machine Learning"
//! color = "#58a6ff"
//!
//! [[departments]]
//! id = "fraud-detection"
//! name = "Fraud Detection"
//!
//! [[departments.use_cases]]
//! id = "card-fraud-scoring"
//! name = "Card Fraud Scoring"
//! status = "active"
//! ai_type = "ml"
//! data_layer = "gold"
//! accuracy = 94.2
//! ```
//!
//! Validation happens in [`Catalog::from_source`]; once constructed a
//! `Catalog` is immutable and every reference into it is `&`.

pub mod category;

use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

pub use category::{Category, CategoryKind, CategoryTable, UNKNOWN_CATEGORY_ID};

/// Fixture catalog compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("builtin.toml");

static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9-]*$").expect("id regex must compile"));

/// Whether `id` is a lowercase slug usable in URLs and CLI arguments.
pub fn is_valid_id(id: &str) -> bool {
    ID_RE.is_match(id)
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// Lifecycle status of a use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Active,
    Training,
    Pending,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Active, Status::Training, Status::Pending];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Training => "training",
            Self::Pending => "pending",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "active" => Some(Self::Active),
            "training" => Some(Self::Training),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Governance risk tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Risk {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// A single AI/ML application.
///
/// Numeric fields default to `0`, which reads as "not applicable": averages
/// skip zero entries and displays render them as `N/A`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseCase {
    pub id: String,
    pub name: String,
    pub status: Status,
    pub ai_type: String,
    pub data_layer: String,
    /// Model accuracy in percent (0–100).
    #[serde(default)]
    pub accuracy: f64,
    /// Annual cost savings, USD millions.
    #[serde(default)]
    pub cost_savings: f64,
    /// Annual revenue contribution, USD millions.
    #[serde(default)]
    pub revenue: f64,
    /// Productivity gain in percent.
    #[serde(default)]
    pub productivity: f64,
    /// Number of deployed models.
    #[serde(default)]
    pub models: u32,
    /// Capital invested, USD millions. Drives ROI.
    #[serde(default)]
    pub investment: f64,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub risk: Risk,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub use_cases: Vec<UseCase>,
}

fn default_color() -> String {
    "#58a6ff".to_string()
}

/// A use case together with the department that owns it.
#[derive(Debug, Clone, Copy)]
pub struct Entry<'a> {
    pub department: &'a Department,
    pub use_case: &'a UseCase,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Raw, unvalidated catalog as it appears on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSource {
    pub ai_types: Vec<Category>,
    pub data_layers: Vec<Category>,
    pub departments: Vec<Department>,
}

/// Validated, immutable catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    departments: Vec<Department>,
    ai_types: CategoryTable,
    data_layers: CategoryTable,
    /// use-case id -> (department index, use-case index)
    index: HashMap<String, (usize, usize)>,
}

impl Catalog {
    /// The embedded fixture catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Load from `path` when given, otherwise the embedded catalog.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::builtin()?,
        };
        tracing::info!(
            departments = catalog.departments.len(),
            use_cases = catalog.index.len(),
            source = %path
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "builtin".to_string()),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let source: CatalogSource = toml::from_str(content)?;
        Self::from_source(source)
    }

    /// Validate a raw catalog and build the lookup index.
    pub fn from_source(source: CatalogSource) -> Result<Self, CatalogError> {
        let ai_types = CategoryTable::new(CategoryKind::AiType, source.ai_types)?;
        let data_layers = CategoryTable::new(CategoryKind::DataLayer, source.data_layers)?;

        let mut index = HashMap::new();
        for (d, department) in source.departments.iter().enumerate() {
            if !is_valid_id(&department.id) {
                return Err(CatalogError::InvalidId {
                    kind: "department",
                    id: department.id.clone(),
                });
            }
            if source.departments[..d].iter().any(|o| o.id == department.id) {
                return Err(CatalogError::DuplicateId {
                    kind: "department",
                    id: department.id.clone(),
                });
            }

            for (u, use_case) in department.use_cases.iter().enumerate() {
                validate_use_case(use_case, &ai_types, &data_layers)?;
                if index.insert(use_case.id.clone(), (d, u)).is_some() {
                    return Err(CatalogError::DuplicateId {
                        kind: "use case",
                        id: use_case.id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            departments: source.departments,
            ai_types,
            data_layers,
            index,
        })
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    /// Resolve a use-case id to its record and owning department.
    pub fn use_case(&self, id: &str) -> Option<Entry<'_>> {
        let &(d, u) = self.index.get(id)?;
        let department = &self.departments[d];
        Some(Entry {
            department,
            use_case: &department.use_cases[u],
        })
    }

    /// Every use case in catalog order.
    pub fn entries(&self) -> impl Iterator<Item = Entry<'_>> {
        self.departments.iter().flat_map(|department| {
            department.use_cases.iter().map(move |use_case| Entry {
                department,
                use_case,
            })
        })
    }

    pub fn use_case_count(&self) -> usize {
        self.index.len()
    }

    pub fn ai_types(&self) -> &CategoryTable {
        &self.ai_types
    }

    pub fn data_layers(&self) -> &CategoryTable {
        &self.data_layers
    }

    pub fn categories(&self, kind: CategoryKind) -> &CategoryTable {
        match kind {
            CategoryKind::AiType => &self.ai_types,
            CategoryKind::DataLayer => &self.data_layers,
        }
    }
}

fn validate_use_case(
    use_case: &UseCase,
    ai_types: &CategoryTable,
    data_layers: &CategoryTable,
) -> Result<(), CatalogError> {
    if !is_valid_id(&use_case.id) {
        return Err(CatalogError::InvalidId {
            kind: "use case",
            id: use_case.id.clone(),
        });
    }
    if !ai_types.contains(&use_case.ai_type) {
        return Err(CatalogError::UnknownCategory {
            use_case: use_case.id.clone(),
            kind: CategoryKind::AiType,
            id: use_case.ai_type.clone(),
        });
    }
    if !data_layers.contains(&use_case.data_layer) {
        return Err(CatalogError::UnknownCategory {
            use_case: use_case.id.clone(),
            kind: CategoryKind::DataLayer,
            id: use_case.data_layer.clone(),
        });
    }

    let numbers = [
        ("accuracy", use_case.accuracy),
        ("cost_savings", use_case.cost_savings),
        ("revenue", use_case.revenue),
        ("productivity", use_case.productivity),
        ("investment", use_case.investment),
    ];
    for (field, value) in numbers {
        if !value.is_finite() || value < 0.0 || (field == "accuracy" && value > 100.0) {
            return Err(CatalogError::InvalidValue {
                use_case: use_case.id.clone(),
                field,
                value,
            });
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
