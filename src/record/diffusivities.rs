use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::arrhenius::{ArrheniusLaw, FittedLine, LineDomain, ObservationSet};

use super::{Orientation, PlotStyle, RecordError};

/// Measurements along one orientation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisSeries {
    /// Axis-specific temperatures in Celsius; `None` falls back to the record's shared list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub celsius: Option<Vec<f64>>,

    /// log10 diffusivities in m²/s
    #[serde(default)]
    pub log_d: Vec<f64>,

    /// One-sigma uncertainty of each log10 diffusivity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_d_error: Option<Vec<f64>>,
}

/// One published diffusivity dataset.
///
/// Temperatures may be given per axis or once for the whole record
/// (`celsius_all`); an axis without its own list uses the shared one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diffusivities {
    description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    celsius_all: Option<Vec<f64>>,

    #[serde(default)]
    axes: BTreeMap<Orientation, AxisSeries>,

    /// Reported Arrhenius laws, where the source gives Ea and D0 directly
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    laws: BTreeMap<Orientation, ArrheniusLaw>,

    #[serde(default)]
    style: PlotStyle,
}

impl Diffusivities {
    /// Start building a record
    pub fn builder(description: impl Into<String>) -> DiffusivitiesBuilder {
        DiffusivitiesBuilder::new(description)
    }

    /// Free-text description, usually the dataset label and citation
    pub fn description(&self) -> &str {
        &self.description
    }

    /// First line of the description, for compact listings
    pub fn label(&self) -> &str {
        self.description.lines().next().unwrap_or("")
    }

    /// Temperatures shared by every axis without its own list
    pub fn celsius_all(&self) -> Option<&[f64]> {
        self.celsius_all.as_deref()
    }

    /// Display style for the external renderer
    pub fn style(&self) -> &PlotStyle {
        &self.style
    }

    /// Orientations that carry measurements, in storage order
    pub fn orientations(&self) -> impl Iterator<Item = Orientation> + '_ {
        self.axes.keys().copied()
    }

    /// True when the record carries no measurements at all
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Raw series for one orientation
    pub fn axis(&self, orientation: Orientation) -> Option<&AxisSeries> {
        self.axes.get(&orientation)
    }

    /// Temperatures for one orientation, after applying the shared default
    pub fn celsius(&self, orientation: Orientation) -> Result<&[f64], RecordError> {
        let series = self
            .axes
            .get(&orientation)
            .ok_or(RecordError::NoData(orientation))?;
        series
            .celsius
            .as_deref()
            .or(self.celsius_all.as_deref())
            .ok_or(RecordError::MissingTemperatures(orientation))
    }

    /// log10 diffusivities for one orientation
    pub fn log_d(&self, orientation: Orientation) -> Option<&[f64]> {
        self.axes.get(&orientation).map(|s| s.log_d.as_slice())
    }

    /// Uncertainties for one orientation, if reported
    pub fn log_d_error(&self, orientation: Orientation) -> Option<&[f64]> {
        self.axes
            .get(&orientation)
            .and_then(|s| s.log_d_error.as_deref())
    }

    /// Reported Arrhenius law for one orientation
    pub fn law(&self, orientation: Orientation) -> Option<&ArrheniusLaw> {
        self.laws.get(&orientation)
    }

    /// Orientations with a reported Arrhenius law
    pub fn laws(&self) -> impl Iterator<Item = (Orientation, &ArrheniusLaw)> + '_ {
        self.laws.iter().map(|(o, law)| (*o, law))
    }

    /// Paired observations along one orientation
    pub fn observations(&self, orientation: Orientation) -> Result<ObservationSet, RecordError> {
        let celsius = self.celsius(orientation)?;
        let log_d = self.log_d(orientation).unwrap_or_default();
        if celsius.len() != log_d.len() {
            return Err(RecordError::MisalignedSeries {
                orientation,
                celsius: celsius.len(),
                log_d: log_d.len(),
            });
        }
        Ok(ObservationSet::from_parallel(celsius.to_vec(), log_d.to_vec())?)
    }

    /// Observations of every orientation pooled into one set (x, y, z, then unoriented)
    pub fn all_observations(&self) -> Result<ObservationSet, RecordError> {
        let mut pooled = ObservationSet::new();
        for orientation in self.orientations() {
            pooled.append(&self.observations(orientation)?);
        }
        Ok(pooled)
    }

    /// Arrhenius line through the measurements along one orientation
    pub fn fit_line(
        &self,
        orientation: Orientation,
        domain: &LineDomain,
    ) -> Result<FittedLine, RecordError> {
        Ok(self.observations(orientation)?.fit_line(domain)?)
    }

    /// Check that every axis resolves to aligned temperature, diffusivity and error lists
    pub fn validate(&self) -> Result<(), RecordError> {
        for (&orientation, series) in &self.axes {
            if series.log_d.is_empty() {
                return Err(RecordError::MissingDiffusivities(orientation));
            }
            self.observations(orientation)?;
            if let Some(errors) = &series.log_d_error {
                if errors.len() != series.log_d.len() {
                    return Err(RecordError::MisalignedErrors {
                        orientation,
                        errors: errors.len(),
                        log_d: series.log_d.len(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON and validate
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let record: Self = serde_json::from_str(json)?;
        record.validate()?;
        Ok(record)
    }
}

/// Builder for [`Diffusivities`].
///
/// Cloning a partially configured builder is how records sharing a default
/// (for example one temperature list used by a whole study) are stamped out.
#[derive(Debug, Clone, Default)]
pub struct DiffusivitiesBuilder {
    record: Diffusivities,
}

impl DiffusivitiesBuilder {
    /// Create a builder with a description
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            record: Diffusivities {
                description: description.into(),
                ..Default::default()
            },
        }
    }

    /// Replace the description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.record.description = description.into();
        self
    }

    /// Set the temperature list shared by every axis without its own
    pub fn celsius_all(mut self, celsius: impl Into<Vec<f64>>) -> Self {
        self.record.celsius_all = Some(celsius.into());
        self
    }

    /// Set axis-specific temperatures
    pub fn celsius(mut self, orientation: Orientation, celsius: impl Into<Vec<f64>>) -> Self {
        self.series(orientation).celsius = Some(celsius.into());
        self
    }

    /// Set log10 diffusivities (m²/s) along an axis
    pub fn log_d(mut self, orientation: Orientation, log_d: impl Into<Vec<f64>>) -> Self {
        self.series(orientation).log_d = log_d.into();
        self
    }

    /// Set diffusivities (m²/s, linear) along an axis; stored as log10
    pub fn diffusivity(mut self, orientation: Orientation, d: &[f64]) -> Self {
        self.series(orientation).log_d = d.iter().map(|v| v.log10()).collect();
        self
    }

    /// Set one-sigma uncertainties of the log10 diffusivities along an axis
    pub fn log_d_error(mut self, orientation: Orientation, errors: impl Into<Vec<f64>>) -> Self {
        self.series(orientation).log_d_error = Some(errors.into());
        self
    }

    /// Attach a reported Arrhenius law to an axis
    pub fn law(mut self, orientation: Orientation, law: ArrheniusLaw) -> Self {
        self.record.laws.insert(orientation, law);
        self
    }

    /// Set the display style
    pub fn style(mut self, style: PlotStyle) -> Self {
        self.record.style = style;
        self
    }

    fn series(&mut self, orientation: Orientation) -> &mut AxisSeries {
        self.record.axes.entry(orientation).or_default()
    }

    /// Validate and return the record
    pub fn build(self) -> Result<Diffusivities, RecordError> {
        let record = self.record;
        record.validate()?;
        if record.celsius_all.is_some()
            && !record.is_empty()
            && record.axes.values().all(|s| s.celsius.is_some())
        {
            debug!(
                "Shared temperatures of '{}' are overridden on every axis",
                record.label()
            );
        }
        Ok(record)
    }
}
