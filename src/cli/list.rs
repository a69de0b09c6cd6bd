use anyhow::{Context, Result};

use mantle_diffusivity::catalog::{Catalog, Mineral};

/// List catalog records, optionally restricted to one mineral
pub fn run(mineral: Option<Mineral>) -> Result<()> {
    let catalog = Catalog::global().context("Failed to load catalog")?;

    let entries: Vec<_> = match mineral {
        Some(mineral) => catalog.by_mineral(mineral).collect(),
        None => catalog.iter().collect(),
    };

    let width = entries.iter().map(|e| e.id.len()).max().unwrap_or(2);
    println!("{:<width$}  {:<13}  {:<4}  Description", "ID", "Mineral", "Axes");
    for entry in &entries {
        let axes: String = entry.record.orientations().map(|o| o.code()).collect();
        println!(
            "{:<width$}  {:<13}  {:<4}  {}",
            entry.id,
            entry.mineral.to_string(),
            axes,
            entry.record.label()
        );
    }
    println!();
    println!("{} record(s)", entries.len());

    Ok(())
}
