use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use mantle_diffusivity::catalog::Catalog;
use mantle_diffusivity::validator::{validate_catalog, validate_record_file};

/// Validate the built-in catalog, or a record stored as JSON
pub fn run(file: Option<PathBuf>) -> Result<()> {
    let report = match file {
        Some(file) => {
            info!("Validating record file: {}", file.display());
            validate_record_file(&file)
                .with_context(|| format!("Failed to read record file: {}", file.display()))?
        }
        None => {
            info!("Validating built-in catalog");
            validate_catalog(Catalog::global().context("Failed to load catalog")?)
        }
    };

    // Use colorized output if available
    #[cfg(feature = "colorized_output")]
    {
        println!("{}", report.format_colored());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", report);
    }

    // Exit with error code if validation failed
    if report.has_failures() {
        std::process::exit(1);
    }

    Ok(())
}
