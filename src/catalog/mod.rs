//! # Diffusivity Catalog
//!
//! Every published dataset in the library, keyed by a stable identifier and
//! tagged with its host mineral. The catalog is assembled once and never
//! modified afterwards; [`Catalog::global`] hands out a shared instance.
//!
//! ```rust
//! use mantle_diffusivity::catalog::{Catalog, Mineral};
//! use mantle_diffusivity::record::Orientation;
//!
//! let catalog = Catalog::global()?;
//! let km98 = catalog.get("km98-slow")?;
//! assert_eq!(km98.celsius(Orientation::Z)?, &[900.0, 1000.0]);
//! assert!(catalog.by_mineral(Mineral::Olivine).count() > 10);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Some sources report diffusivities in cm²/s. Their values are converted to
//! m²/s here, at data entry, with the library's historical offset (see
//! [`crate::units::log10_cm2_to_m2`]).

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::record::{Diffusivities, PlotStyle};
use crate::units;

/// Build a [`PlotStyle`] from `key => value` pairs
macro_rules! style {
    ($($key:literal => $value:expr),* $(,)?) => {
        $crate::record::PlotStyle::new()$(.with($key, $value))*
    };
}

mod clinopyroxene;
mod error;
mod olivine;

pub use clinopyroxene::KunlunProfiles;
pub use error::CatalogError;

/// Default marker size of catalog styles
const MARKER_SIZE: i32 = 8;

/// Whether cm²/s sources use the historical `-2` shift instead of `-4`
const LEGACY_CM2_OFFSET: bool = true;

fn log_d_of(d: &[f64]) -> Vec<f64> {
    d.iter().map(|v| v.log10()).collect()
}

fn log_d_cm2(log_d: &[f64]) -> Vec<f64> {
    log_d
        .iter()
        .map(|&v| units::log10_cm2_to_m2(v, LEGACY_CM2_OFFSET))
        .collect()
}

/// Host mineral of a dataset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mineral {
    /// Clinopyroxene, mostly diopside
    Clinopyroxene,
    /// Olivine, including synthetic forsterite
    Olivine,
}

impl fmt::Display for Mineral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mineral::Clinopyroxene => write!(f, "clinopyroxene"),
            Mineral::Olivine => write!(f, "olivine"),
        }
    }
}

impl FromStr for Mineral {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clinopyroxene" | "cpx" | "diopside" => Ok(Mineral::Clinopyroxene),
            "olivine" | "ol" | "forsterite" => Ok(Mineral::Olivine),
            _ => Err(format!(
                "Unknown mineral '{}'. Valid options: clinopyroxene, olivine",
                s
            )),
        }
    }
}

/// One registered dataset
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// Stable identifier
    pub id: &'static str,
    /// Host mineral
    pub mineral: Mineral,
    /// The measurements
    pub record: Diffusivities,
}

/// Immutable registry of every dataset
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<&'static str, usize>,
}

static GLOBAL: OnceLock<Result<Catalog, CatalogError>> = OnceLock::new();

impl Catalog {
    /// Assemble the catalog from the built-in datasets
    pub fn build() -> Result<Self, CatalogError> {
        let mut entries = Vec::new();
        for (id, record) in clinopyroxene::records()? {
            entries.push(CatalogEntry {
                id,
                mineral: Mineral::Clinopyroxene,
                record,
            });
        }
        for (id, record) in olivine::records()? {
            entries.push(CatalogEntry {
                id,
                mineral: Mineral::Olivine,
                record,
            });
        }
        let catalog = Self::from_entries(entries)?;
        debug!("Catalog built with {} records", catalog.len());
        Ok(catalog)
    }

    /// Assemble a catalog from arbitrary entries, rejecting duplicate ids and invalid records
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            entry
                .record
                .validate()
                .map_err(|source| CatalogError::InvalidRecord {
                    id: entry.id.to_string(),
                    source,
                })?;
            if index.insert(entry.id, position).is_some() {
                return Err(CatalogError::DuplicateId(entry.id.to_string()));
            }
        }
        Ok(Self { entries, index })
    }

    /// Shared catalog, built on first access
    pub fn global() -> Result<&'static Catalog, CatalogError> {
        GLOBAL
            .get_or_init(Catalog::build)
            .as_ref()
            .map_err(|e| CatalogError::Initialization(e.to_string()))
    }

    /// Look up a record by identifier
    pub fn get(&self, id: &str) -> Result<&Diffusivities, CatalogError> {
        self.entry(id).map(|entry| &entry.record)
    }

    /// Look up a full entry by identifier
    pub fn entry(&self, id: &str) -> Result<&CatalogEntry, CatalogError> {
        self.index
            .get(id)
            .map(|&position| &self.entries[position])
            .ok_or_else(|| CatalogError::UnknownRecord(id.to_string()))
    }

    /// True when a record is registered under `id`
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Identifiers in registration order
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.id)
    }

    /// Entries in registration order
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Entries for one host mineral
    pub fn by_mineral(&self, mineral: Mineral) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(move |entry| entry.mineral == mineral)
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Neutral style for plotting data that has no dedicated entry
pub fn generic_style() -> PlotStyle {
    style! {
        "marker" => "s", "color" => "black", "alpha" => 0.5,
        "markersize" => MARKER_SIZE, "linestyle" => "none",
    }
}
