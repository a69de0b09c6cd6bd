//! # Diffusion Mechanisms
//!
//! Measurements believed to share one rate-limiting process are pooled across
//! studies and crystallographic axes before a single Arrhenius line is fitted
//! through them.
//!
//! ```rust
//! use mantle_diffusivity::arrhenius::LineDomain;
//! use mantle_diffusivity::catalog::Catalog;
//! use mantle_diffusivity::mechanism::Mechanism;
//!
//! let catalog = Catalog::global()?;
//! let line = Mechanism::Fast.fit_line(catalog, &LineDomain::default())?;
//! assert_eq!(line.len(), 100);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod pool;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::arrhenius::{FittedLine, LineDomain, LinearFit, ObservationSet};
use crate::catalog::Catalog;

pub use error::MechanismError;
pub use pool::{axis_lines, Pool};

/// Named pools of olivine hydrogen measurements
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mechanism {
    /// Bulk H in forsterite, Demouchy & Mackwell (2003), all axes
    Dm03,
    /// The [Mg] site in forsterite: DM03 plus the Padrón-Navarta 3220 cm⁻¹ band
    ForsteriteMg,
    /// Every forsterite measurement: DM03 and all Padrón-Navarta bands
    Forsterite,
    /// "Fast" proton-polaron mechanism: KM98 and DM06 fast data on all axes
    Fast,
    /// "Slow" vacancy mechanism: KM98 and DM06 slow data on all axes
    Slow,
}

impl Mechanism {
    /// Every named mechanism
    pub const ALL: [Mechanism; 5] = [
        Mechanism::Dm03,
        Mechanism::ForsteriteMg,
        Mechanism::Forsterite,
        Mechanism::Fast,
        Mechanism::Slow,
    ];

    /// Catalog identifiers pooled by this mechanism; every orientation of each is used
    pub fn sources(&self) -> &'static [&'static str] {
        match self {
            Mechanism::Dm03 => &["dm03"],
            Mechanism::ForsteriteMg => &["dm03", "pnav-mg"],
            Mechanism::Forsterite => &["dm03", "pnav-mg", "pnav-si", "pnav-si-ti", "pnav-ti"],
            Mechanism::Fast => &["km98-fast", "dm06-fast"],
            Mechanism::Slow => &["km98-slow", "dm06-slow"],
        }
    }

    /// Pool the source records into one observation set
    pub fn pool(&self, catalog: &Catalog) -> Result<Pool, MechanismError> {
        let mut pool = Pool::new();
        for id in self.sources() {
            pool.add_record(catalog.get(id)?)?;
        }
        Ok(pool)
    }

    /// Pooled observations
    pub fn observations(&self, catalog: &Catalog) -> Result<ObservationSet, MechanismError> {
        Ok(self.pool(catalog)?.into_observations())
    }

    /// Least-squares fit through the pooled observations
    pub fn fit(&self, catalog: &Catalog) -> Result<LinearFit, MechanismError> {
        Ok(self.observations(catalog)?.fit()?)
    }

    /// Fitted line through the pooled observations
    pub fn fit_line(
        &self,
        catalog: &Catalog,
        domain: &LineDomain,
    ) -> Result<FittedLine, MechanismError> {
        Ok(self.observations(catalog)?.fit_line(domain)?)
    }

    /// Accepted names, for error messages
    pub fn variants() -> &'static [&'static str] {
        &["dm03", "forsterite-mg", "forsterite", "fast", "slow"]
    }
}

impl fmt::Display for Mechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mechanism::Dm03 => write!(f, "dm03"),
            Mechanism::ForsteriteMg => write!(f, "forsterite-mg"),
            Mechanism::Forsterite => write!(f, "forsterite"),
            Mechanism::Fast => write!(f, "fast"),
            Mechanism::Slow => write!(f, "slow"),
        }
    }
}

impl FromStr for Mechanism {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dm03" => Ok(Mechanism::Dm03),
            "forsterite-mg" | "mg" => Ok(Mechanism::ForsteriteMg),
            "forsterite" | "fo" => Ok(Mechanism::Forsterite),
            "fast" => Ok(Mechanism::Fast),
            "slow" => Ok(Mechanism::Slow),
            _ => Err(format!(
                "Unknown mechanism '{}'. Valid options: {}",
                s,
                Mechanism::variants().join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrhenius::{fit_line, FitError};
    use crate::record::{Diffusivities, Orientation, RecordError};

    fn catalog() -> &'static Catalog {
        Catalog::global().unwrap()
    }

    #[test]
    fn test_pooled_sizes() {
        let sizes: Vec<usize> = Mechanism::ALL
            .iter()
            .map(|m| m.observations(catalog()).unwrap().len())
            .collect();
        assert_eq!(sizes, vec![16, 19, 28, 18, 10]);
    }

    #[test]
    fn test_fast_matches_manual_concatenation() {
        let km = catalog().get("km98-fast").unwrap();
        let dm = catalog().get("dm06-fast").unwrap();

        let mut celsius = Vec::new();
        let mut log_d = Vec::new();
        for record in [km, dm] {
            for axis in Orientation::AXES {
                celsius.extend_from_slice(record.celsius(axis).unwrap());
                log_d.extend_from_slice(record.log_d(axis).unwrap());
            }
        }

        let manual = fit_line(&celsius, &log_d).unwrap();
        let pooled = Mechanism::Fast
            .fit_line(catalog(), &LineDomain::default())
            .unwrap();
        assert_eq!(manual, pooled);
    }

    #[test]
    fn test_slow_uses_axis_specific_temperatures() {
        let set = Mechanism::Slow.observations(catalog()).unwrap();
        assert_eq!(
            set.celsius(),
            &[900.0, 1000.0, 900.0, 1000.0, 900.0, 1000.0, 900.0, 900.0, 1000.0, 900.0]
        );
    }

    #[test]
    fn test_pool_order_does_not_change_fit() {
        let km = catalog().get("km98-slow").unwrap();
        let dm = catalog().get("dm06-slow").unwrap();

        let mut forward = Pool::new();
        forward.add_record(km).unwrap().add_record(dm).unwrap();
        let mut backward = Pool::new();
        backward.add_record(dm).unwrap().add_record(km).unwrap();

        let a = forward.observations().fit().unwrap();
        let b = backward.observations().fit().unwrap();
        assert!((a.slope - b.slope).abs() < 1e-9);
        assert!((a.intercept - b.intercept).abs() < 1e-9);
        assert_eq!(forward.sources().len(), 6);
    }

    #[test]
    fn test_fast_mechanism_has_negative_slope() {
        let fit = Mechanism::Fast.fit(catalog()).unwrap();
        assert!(fit.slope < 0.0);
        assert_eq!(fit.count, 18);
    }

    #[test]
    fn test_axis_lines_for_km98() {
        let km = catalog().get("km98-fast").unwrap();
        let lines = axis_lines(km, &LineDomain::default()).unwrap();
        assert_eq!(lines.len(), 3);
        assert!(lines.contains_key(&Orientation::Y));
    }

    #[test]
    fn test_axis_lines_fail_on_single_point_axis() {
        let record = catalog().get("du-frane").unwrap();
        let err = axis_lines(record, &LineDomain::default()).unwrap_err();
        assert!(matches!(
            err,
            RecordError::Fit(FitError::InsufficientData { count: 1 })
        ));
    }

    #[test]
    fn test_pool_rejects_missing_axis() {
        let record = Diffusivities::builder("x only")
            .celsius_all([900.0])
            .log_d(Orientation::X, [-12.0])
            .build()
            .unwrap();
        let mut pool = Pool::new();
        assert!(pool.add_axis(&record, Orientation::Z).is_err());
        assert!(pool.observations().is_empty());
    }

    #[test]
    fn test_mechanism_names_roundtrip() {
        for mechanism in Mechanism::ALL {
            assert_eq!(mechanism.to_string().parse::<Mechanism>().unwrap(), mechanism);
        }
        assert!("medium".parse::<Mechanism>().is_err());
    }
}
