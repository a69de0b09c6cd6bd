use anyhow::{Context, Result};
use std::io::{self, Write};

use mantle_diffusivity::catalog::Catalog;
use mantle_diffusivity::export;
use mantle_diffusivity::units;

/// Print one record: per-axis temperatures, diffusivities and uncertainties
pub fn run(id: String, json: bool, csv: bool) -> Result<()> {
    let catalog = Catalog::global().context("Failed to load catalog")?;
    let entry = catalog.entry(&id)?;
    let record = &entry.record;

    if json {
        println!("{}", record.to_json()?);
        return Ok(());
    }
    if csv {
        let mut out = io::stdout().lock();
        export::write_record_csv(record, &mut out).context("Failed to write CSV")?;
        return Ok(());
    }

    println!("{} ({})", entry.id, entry.mineral);
    println!("{}", "=".repeat(entry.id.len() + entry.mineral.to_string().len() + 3));
    println!("{}", record.description());
    println!();

    for orientation in record.orientations() {
        let celsius = record
            .celsius(orientation)
            .with_context(|| format!("Failed to resolve temperatures of {}", orientation))?;
        let log_d = record.log_d(orientation).unwrap_or_default();
        let errors = record.log_d_error(orientation);

        match orientation.miller_index() {
            Some(index) => println!("[{}] {}", orientation, index),
            None => println!("[{}]", orientation),
        }
        println!("  {:>9}  {:>8}  {:>9}  {:>7}", "T (°C)", "10⁴/T", "log10 D", "±");
        for (i, (&t, &d)) in celsius.iter().zip(log_d).enumerate() {
            let error = errors
                .and_then(|e| e.get(i))
                .map(|e| format!("{:.2}", e))
                .unwrap_or_default();
            println!(
                "  {:>9.1}  {:>8.4}  {:>9.4}  {:>7}",
                t,
                units::to_arrhenius_x(t),
                d,
                error
            );
        }
        if let Some(law) = record.law(orientation) {
            println!(
                "  Reported law: Ea = {} kJ/mol, log10 D0 = {}",
                law.activation_energy_kj_mol, law.log_d0
            );
        }
        println!();
    }

    if !record.style().is_empty() {
        let mut out = io::stdout().lock();
        write!(out, "Style:")?;
        for (key, value) in record.style().iter() {
            write!(out, " {}={}", key, value)?;
        }
        writeln!(out)?;
    }

    Ok(())
}
