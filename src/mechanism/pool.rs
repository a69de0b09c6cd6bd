use log::debug;
use std::collections::BTreeMap;

use crate::arrhenius::{FittedLine, LineDomain, ObservationSet};
use crate::record::{Diffusivities, Orientation, RecordError};

/// Accumulates observations from several records into one set.
///
/// Order of addition does not change the fitted line; each record's
/// temperatures stay paired with their own diffusivities.
#[derive(Debug, Clone, Default)]
pub struct Pool {
    observations: ObservationSet,
    sources: Vec<String>,
}

impl Pool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the measurements of one record along one orientation
    pub fn add_axis(
        &mut self,
        record: &Diffusivities,
        orientation: Orientation,
    ) -> Result<&mut Self, RecordError> {
        let set = record.observations(orientation)?;
        debug!(
            "Pooling {} point(s) from '{}' ({})",
            set.len(),
            record.label(),
            orientation
        );
        self.observations.append(&set);
        self.sources.push(format!("{} [{}]", record.label(), orientation));
        Ok(self)
    }

    /// Add the measurements of one record along every orientation it carries
    pub fn add_record(&mut self, record: &Diffusivities) -> Result<&mut Self, RecordError> {
        let orientations: Vec<Orientation> = record.orientations().collect();
        for orientation in orientations {
            self.add_axis(record, orientation)?;
        }
        Ok(self)
    }

    /// Pooled observations so far
    pub fn observations(&self) -> &ObservationSet {
        &self.observations
    }

    /// Labels of every contribution, in order of addition
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// Consume the pool into its observation set
    pub fn into_observations(self) -> ObservationSet {
        self.observations
    }
}

/// One fitted line per orientation of a record, for orientations with enough data
pub fn axis_lines(
    record: &Diffusivities,
    domain: &LineDomain,
) -> Result<BTreeMap<Orientation, FittedLine>, RecordError> {
    record
        .orientations()
        .map(|orientation| Ok((orientation, record.fit_line(orientation, domain)?)))
        .collect()
}
