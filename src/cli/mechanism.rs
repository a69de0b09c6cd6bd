use anyhow::{Context, Result};
use log::info;

use mantle_diffusivity::catalog::Catalog;
use mantle_diffusivity::mechanism::Mechanism;

use super::output::{self, LineReport};
use super::LineOptions;

/// Fit one line through every measurement pooled under a mechanism
pub fn run(mechanism: Mechanism, options: LineOptions) -> Result<()> {
    let (domain, format) = options.resolve()?;
    let catalog = Catalog::global().context("Failed to load catalog")?;

    let pool = mechanism
        .pool(catalog)
        .with_context(|| format!("Failed to pool mechanism '{}'", mechanism))?;
    for source in pool.sources() {
        info!("  {}", source);
    }
    info!(
        "Mechanism '{}': {} observation(s) from {} series",
        mechanism,
        pool.observations().len(),
        pool.sources().len()
    );

    let fit = pool
        .observations()
        .fit()
        .with_context(|| format!("Failed to fit mechanism '{}'", mechanism))?;

    let report = LineReport::fitted(format!("mechanism {}", mechanism), fit, domain)?;
    output::emit(&report, format, options.output.as_deref())
}
