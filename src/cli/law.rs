use anyhow::{Context, Result};

use mantle_diffusivity::catalog::Catalog;
use mantle_diffusivity::record::Orientation;

use super::output::{self, LineReport};
use super::LineOptions;

/// Sample the Arrhenius law reported with a record
pub fn run(id: String, orientation: Orientation, options: LineOptions) -> Result<()> {
    let (domain, format) = options.resolve()?;
    let catalog = Catalog::global().context("Failed to load catalog")?;
    let record = catalog.get(&id)?;

    let Some(law) = record.law(orientation) else {
        let available: Vec<String> = record.laws().map(|(o, _)| o.to_string()).collect();
        if available.is_empty() {
            anyhow::bail!("Record '{}' has no reported Arrhenius law", id);
        }
        anyhow::bail!(
            "Record '{}' has no reported law along {}. Available: {}",
            id,
            orientation,
            available.join(", ")
        );
    };

    let report = LineReport::from_law(format!("{} [{}] law", id, orientation), *law, domain)?;
    output::emit(&report, format, options.output.as_deref())
}
