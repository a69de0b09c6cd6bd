//! # mantle-diffusivity - Diffusivities in Nominally Anhydrous Mantle Minerals
//!
//! `mantle_diffusivity` is a catalog of published diffusion experiments on
//! olivine and clinopyroxene, together with the tools used to compare them on
//! an Arrhenius plot.
//!
//! ## Key Features
//!
//! - **Arrhenius Fitting**: ordinary least-squares lines of log10 D against
//!   10⁴/T(K), sampled at 100 points over a configurable domain.
//!
//! - **Measurement Records**: per-axis temperature and diffusivity series with
//!   optional uncertainties, a record-wide default temperature list, and an
//!   opaque display style for external plotting.
//!
//! - **Catalog**: every dataset keyed by a stable identifier, built once on
//!   first access and shared read-only afterwards.
//!
//! - **Mechanisms**: named pools of measurements believed to share a
//!   rate-limiting process, fitted as a single line.
//!
//! - **Validation and Export**: structural and sanity checks over records, and
//!   CSV/JSON output of lines and measurements.
//!
//! ## Quick Start
//!
//! ```rust
//! use mantle_diffusivity::prelude::*;
//!
//! let catalog = Catalog::global()?;
//!
//! // Line through the KM98 fast-mechanism data along [100]
//! let record = catalog.get("km98-fast")?;
//! let line = record.fit_line(Orientation::X, &LineDomain::default())?;
//! assert_eq!(line.len(), 100);
//!
//! // One line through every measurement of the slow mechanism
//! let slow = Mechanism::Slow.fit(catalog)?;
//! let law = ArrheniusLaw::from_fit(&slow);
//! println!("Ea = {:.0} kJ/mol", law.activation_energy_kj_mol);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Ad-hoc Fits
//!
//! ```rust
//! use mantle_diffusivity::arrhenius::fit_line_with_domain;
//!
//! let line = fit_line_with_domain(&[700.0, 800.0], &[-14.0, -12.0], 8.0, 9.0)?;
//! assert_eq!(line.x()[0], 8.0);
//! assert_eq!(line.x()[99], 9.0);
//! # Ok::<(), mantle_diffusivity::arrhenius::FitError>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`units`]: temperature and diffusivity unit conversions
//! - [`arrhenius`]: observation sets, least-squares fitting, reported laws
//! - [`uncertainty`]: values with uncorrelated one-sigma errors
//! - [`record`]: measurement records and their builder
//! - [`catalog`]: the registry of published datasets
//! - [`mechanism`]: pooled multi-source fits
//! - [`validator`]: integrity checks and reports
//! - [`export`]: CSV and JSON writers
//!
//! ## Units
//!
//! Temperatures are in °C, diffusivities are log10 values in m²/s, and the
//! Arrhenius coordinate is `x = 10⁴ / (T + 273.15)`. Sources reported in cm²/s
//! are converted when the catalog is built; the fitter itself is unit-agnostic.

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod arrhenius;
pub mod catalog;
pub mod export;
pub mod mechanism;
pub mod record;
pub mod uncertainty;
pub mod units;
pub mod validator;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::arrhenius::{
        fit_arrhenius, fit_line, fit_line_in, fit_line_with_domain, ArrheniusLaw, FitError,
        FittedLine, LineDomain, LinearFit, ObservationSet,
    };
    pub use crate::catalog::{Catalog, CatalogEntry, CatalogError, KunlunProfiles, Mineral};
    pub use crate::export::{line_to_json, write_line_csv, ExportError};
    pub use crate::mechanism::{Mechanism, MechanismError, Pool};
    pub use crate::record::{Diffusivities, DiffusivitiesBuilder, Orientation, PlotStyle, RecordError};
    pub use crate::uncertainty::Uncertain;
    pub use crate::validator::{validate_catalog, ValidationReport};
}
