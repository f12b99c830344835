//! Ordered catalog of recognized placeholder names.

use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use template_primitives::PlaceholderName;
use thiserror::Error;

/// Version tag of the built-in catalog.
pub const BUILTIN_CATALOG_VERSION: &str = "1.0.0";

// Declaration order is the suggestion tie-break; do not sort.
const BUILTIN_ENTRIES: &[(&str, PlaceholderCategory, &str)] = &[
    ("NOMBRE", PlaceholderCategory::Customer, "Customer first name"),
    ("APELLIDO", PlaceholderCategory::Customer, "Customer last name"),
    ("EMPRESA", PlaceholderCategory::Customer, "Name of the customer's company"),
    ("PRODUCTO", PlaceholderCategory::Product, "Product or service name"),
    ("PLAN", PlaceholderCategory::Product, "Plan tier (Basic, Pro, Premium)"),
    ("PRECIO", PlaceholderCategory::Product, "Price of the product or plan"),
    ("BENEFICIO_1", PlaceholderCategory::Product, "First key benefit"),
    ("BENEFICIO_2", PlaceholderCategory::Product, "Second key benefit"),
    ("BENEFICIO_3", PlaceholderCategory::Product, "Third key benefit"),
    ("FECHA", PlaceholderCategory::System, "Current or specific date"),
    ("TELEFONO", PlaceholderCategory::Customer, "Customer phone number"),
    ("EMAIL", PlaceholderCategory::Customer, "Customer email address"),
    ("CIUDAD", PlaceholderCategory::Customer, "Customer city"),
    ("PAIS", PlaceholderCategory::Customer, "Customer country"),
    ("ROI", PlaceholderCategory::Sales, "Expected return on investment"),
    ("DESCUENTO", PlaceholderCategory::Sales, "Discount percentage or amount"),
    ("TIEMPO_PRUEBA", PlaceholderCategory::Sales, "Length of the trial period"),
];

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| {
    let entries = BUILTIN_ENTRIES
        .iter()
        .map(|&(name, category, description)| CatalogEntry {
            name: PlaceholderName::new(name).expect("built-in placeholder names are valid"),
            category,
            description: description.to_owned(),
        })
        .collect();

    Catalog {
        version: BUILTIN_CATALOG_VERSION.to_owned(),
        entries,
    }
});

/// Result alias for catalog construction.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while building a custom catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Entry name failed placeholder name validation.
    #[error(transparent)]
    InvalidName(#[from] template_primitives::Error),
    /// The same name was declared twice.
    #[error("placeholder `{name}` is already declared")]
    Duplicate {
        /// Name that was repeated.
        name: String,
    },
    /// Entry description was blank.
    #[error("placeholder `{name}` needs a description")]
    MissingDescription {
        /// Name of the entry lacking a description.
        name: String,
    },
    /// Catalog version was blank.
    #[error("catalog version cannot be empty")]
    EmptyVersion,
}

/// Semantic grouping used when presenting placeholders to authors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderCategory {
    /// Data about the contact receiving the message.
    Customer,
    /// Data about the offered product or plan.
    Product,
    /// Commercial terms.
    Sales,
    /// Values supplied by the system at send time.
    System,
}

impl PlaceholderCategory {
    /// All categories in display order.
    pub const ALL: [Self; 4] = [Self::Customer, Self::Product, Self::Sales, Self::System];

    /// Human-readable heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Customer => "Customer",
            Self::Product => "Product",
            Self::Sales => "Sales",
            Self::System => "System",
        }
    }
}

impl Display for PlaceholderCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A recognized placeholder with its description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    name: PlaceholderName,
    category: PlaceholderCategory,
    description: String,
}

impl CatalogEntry {
    /// Placeholder name.
    #[must_use]
    pub fn name(&self) -> &PlaceholderName {
        &self.name
    }

    /// Category the entry is listed under.
    #[must_use]
    pub fn category(&self) -> PlaceholderCategory {
        self.category
    }

    /// Human-readable description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Versioned, ordered set of recognized placeholders.
///
/// Deserialization goes through [`CatalogBuilder`], so stored catalogs get
/// the same duplicate and blank-field checks as hand-built ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogRecord")]
pub struct Catalog {
    version: String,
    entries: Vec<CatalogEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogRecord {
    version: String,
    entries: Vec<CatalogEntry>,
}

impl TryFrom<CatalogRecord> for Catalog {
    type Error = CatalogError;

    fn try_from(record: CatalogRecord) -> CatalogResult<Self> {
        record
            .entries
            .into_iter()
            .try_fold(Catalog::builder(record.version), |builder, entry| {
                builder.entry(entry.name.as_str(), entry.category, entry.description)
            })?
            .build()
    }
}

impl Catalog {
    /// Returns the shared built-in catalog.
    #[must_use]
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Starts building a custom catalog.
    #[must_use]
    pub fn builder(version: impl Into<String>) -> CatalogBuilder {
        CatalogBuilder {
            version: version.into(),
            entries: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Catalog version tag.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Entries in declared order.
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Iterates entry names in declared order.
    pub fn names(&self) -> impl Iterator<Item = &PlaceholderName> {
        self.entries.iter().map(CatalogEntry::name)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Returns true when `name` is a recognized placeholder.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the description of a recognized placeholder.
    #[must_use]
    pub fn describe(&self, name: &str) -> Option<&str> {
        self.get(name).map(CatalogEntry::description)
    }

    /// Groups entries by category.
    ///
    /// Categories follow [`PlaceholderCategory::ALL`]; empty categories are
    /// omitted and entries keep their declared order.
    #[must_use]
    pub fn by_category(&self) -> Vec<(PlaceholderCategory, Vec<&CatalogEntry>)> {
        PlaceholderCategory::ALL
            .into_iter()
            .filter_map(|category| {
                let entries: Vec<_> = self
                    .entries
                    .iter()
                    .filter(|entry| entry.category == category)
                    .collect();
                (!entries.is_empty()).then_some((category, entries))
            })
            .collect()
    }
}

/// Builder for [`Catalog`].
#[derive(Debug)]
pub struct CatalogBuilder {
    version: String,
    entries: Vec<CatalogEntry>,
    seen: HashSet<String>,
}

impl CatalogBuilder {
    /// Appends an entry; declaration order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidName`] for malformed names,
    /// [`CatalogError::Duplicate`] when the name was already added, and
    /// [`CatalogError::MissingDescription`] for a blank description.
    pub fn entry(
        mut self,
        name: &str,
        category: PlaceholderCategory,
        description: impl Into<String>,
    ) -> CatalogResult<Self> {
        let name = PlaceholderName::new(name)?;
        let description = description.into();
        if description.trim().is_empty() {
            return Err(CatalogError::MissingDescription { name: name.into() });
        }
        if !self.seen.insert(name.as_str().to_owned()) {
            return Err(CatalogError::Duplicate { name: name.into() });
        }

        self.entries.push(CatalogEntry {
            name,
            category,
            description,
        });
        Ok(self)
    }

    /// Finalises the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyVersion`] when the version tag is blank.
    pub fn build(self) -> CatalogResult<Catalog> {
        if self.version.trim().is_empty() {
            return Err(CatalogError::EmptyVersion);
        }
        Ok(Catalog {
            version: self.version,
            entries: self.entries,
        })
    }
}
