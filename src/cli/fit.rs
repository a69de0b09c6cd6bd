use anyhow::{Context, Result};
use log::info;

use mantle_diffusivity::catalog::Catalog;

use super::output::{self, LineReport};
use super::{AxisSelection, LineOptions};

/// Fit an Arrhenius line through one axis of a record, or all axes pooled
pub fn run(id: String, axis: AxisSelection, options: LineOptions) -> Result<()> {
    let (domain, format) = options.resolve()?;
    let catalog = Catalog::global().context("Failed to load catalog")?;
    let record = catalog.get(&id)?;

    let observations = match axis {
        AxisSelection::One(orientation) => record.observations(orientation),
        AxisSelection::All => record.all_observations(),
    }
    .with_context(|| format!("Failed to collect observations of '{}' [{}]", id, axis))?;

    info!("Fitting {} observation(s) of '{}' [{}]", observations.len(), id, axis);
    let fit = observations
        .fit()
        .with_context(|| format!("Failed to fit '{}' [{}]", id, axis))?;

    let report = LineReport::fitted(format!("{} [{}]", id, axis), fit, domain)?;
    output::emit(&report, format, options.output.as_deref())
}
