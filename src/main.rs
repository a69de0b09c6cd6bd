//! # diffusivity
//!
//! Command-line access to the mantle diffusivity catalog.
//!
//! ## Usage
//!
//! ```bash
//! # List olivine records
//! diffusivity list --mineral olivine
//!
//! # Fit KM98 fast-mechanism data along [010] and write CSV
//! diffusivity fit km98-fast --axis y --format csv --output km98-y.csv
//!
//! # Pooled mechanism line over a custom domain
//! diffusivity mechanism slow --low 7 --high 9
//!
//! # Check every record
//! diffusivity validate
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity
    cli::init_logging(cli.verbosity());

    cli::dispatch(cli)
}
