//! # Arrhenius Line Fitting
//!
//! Diffusivities measured at several temperatures are compared on an Arrhenius
//! plot: log10 D against inverse absolute temperature scaled by 10⁴. A
//! temperature-activated process is a straight line in these coordinates.
//!
//! ```rust
//! use mantle_diffusivity::arrhenius::fit_line;
//!
//! let line = fit_line(&[700.0, 800.0, 900.0], &[-14.0, -13.1, -12.2])?;
//! assert_eq!(line.len(), 100);
//! assert_eq!(line.x()[0], 6.0);
//! # Ok::<(), mantle_diffusivity::arrhenius::FitError>(())
//! ```
//!
//! Pooled datasets are assembled in an [`ObservationSet`] first, see
//! [`crate::mechanism`].

mod error;
mod fit;
mod law;
mod observation;


pub use error::FitError;
pub use fit::{
    fit_arrhenius, fit_line, fit_line_in, fit_line_with_domain, FittedLine, LineDomain,
    LinearFit, DEFAULT_DOMAIN_HIGH, DEFAULT_DOMAIN_LOW, SAMPLE_COUNT,
};
pub use law::ArrheniusLaw;
pub use observation::ObservationSet;
