//! # Measurement Records
//!
//! A [`Diffusivities`] record describes one published diffusivity dataset:
//! Celsius temperatures and log10 diffusivities (m²/s) keyed by
//! crystallographic [`Orientation`], optional one-sigma uncertainties, reported
//! Arrhenius laws and a [`PlotStyle`] for an external renderer.
//!
//! ```rust
//! use mantle_diffusivity::record::{Diffusivities, Orientation, PlotStyle};
//!
//! let record = Diffusivities::builder("slow mech., KM98")
//!     .celsius_all([900.0, 1000.0])
//!     .log_d(Orientation::X, [-13.994, -12.783])
//!     .log_d(Orientation::Y, [-14.17, -13.171])
//!     .style(PlotStyle::new().with("marker", "D").with("color", "green"))
//!     .build()?;
//!
//! assert_eq!(record.celsius(Orientation::Y)?, &[900.0, 1000.0]);
//! # Ok::<(), mantle_diffusivity::record::RecordError>(())
//! ```

mod diffusivities;
mod error;
mod orientation;
mod style;

#[cfg(test)]
mod tests;

pub use diffusivities::{AxisSeries, Diffusivities, DiffusivitiesBuilder};
pub use error::RecordError;
pub use orientation::Orientation;
pub use style::PlotStyle;
