//! Rendering of fitted lines to stdout or a file.

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use mantle_diffusivity::arrhenius::{ArrheniusLaw, FittedLine, LineDomain, LinearFit};
use mantle_diffusivity::export;
use mantle_diffusivity::units;

use super::OutputFormat;

/// A sampled line with where it came from
#[derive(Debug, Serialize)]
pub struct LineReport {
    /// Record id and orientation, or mechanism name
    pub source: String,
    /// Least-squares statistics, for lines fitted to data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<LinearFit>,
    /// Arrhenius parameters of the line
    pub law: ArrheniusLaw,
    /// Sampled domain in 10⁴/T(K)
    pub domain: LineDomain,
    /// Sampled points
    pub line: FittedLine,
}

impl LineReport {
    /// Report for a line fitted to observations
    pub fn fitted(source: impl Into<String>, fit: LinearFit, domain: LineDomain) -> Result<Self> {
        Ok(Self {
            source: source.into(),
            law: ArrheniusLaw::from_fit(&fit),
            line: fit.sample(&domain).context("Failed to sample fitted line")?,
            fit: Some(fit),
            domain,
        })
    }

    /// Report for a reported Arrhenius law
    pub fn from_law(
        source: impl Into<String>,
        law: ArrheniusLaw,
        domain: LineDomain,
    ) -> Result<Self> {
        Ok(Self {
            source: source.into(),
            fit: None,
            line: law.line(&domain).context("Failed to sample Arrhenius law")?,
            law,
            domain,
        })
    }
}

/// Open the output file, or stdout when no path is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Write a line report in the requested format
pub fn emit(report: &LineReport, format: OutputFormat, path: Option<&Path>) -> Result<()> {
    let mut out = open_output(path)?;
    match format {
        OutputFormat::Csv => {
            export::write_line_csv(&report.line, &mut out).context("Failed to write CSV")?
        }
        OutputFormat::Json => {
            let json = export::to_json(report).context("Failed to serialize line")?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Table => write_table(report, &mut out)?,
    }
    out.flush()?;

    if let Some(path) = path {
        info!("Wrote {} ({}) to {}", report.source, format, path.display());
    }
    Ok(())
}

fn write_table(report: &LineReport, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "Source: {}", report.source)?;
    if let Some(fit) = &report.fit {
        writeln!(
            out,
            "Fit: {} points, slope {:.4}, intercept {:.4}, R² {:.4}",
            fit.count, fit.slope, fit.intercept, fit.r_squared
        )?;
    }
    writeln!(
        out,
        "Ea: {:.1} kJ/mol, log10 D0: {:.3} (m²/s)",
        report.law.activation_energy_kj_mol, report.law.log_d0
    )?;
    let (hot, cold) = report.domain.celsius_range();
    writeln!(
        out,
        "Domain: 10⁴/T = {} .. {} ({:.0} °C .. {:.0} °C)",
        report.domain.low, report.domain.high, hot, cold
    )?;
    writeln!(out)?;
    writeln!(out, "{:>8}  {:>9}  {:>9}", "10⁴/T", "T (°C)", "log10 D")?;
    for (x, y) in report.line.points() {
        writeln!(
            out,
            "{:>8.4}  {:>9.1}  {:>9.4}",
            x,
            units::from_arrhenius_x(x),
            y
        )?;
    }
    Ok(())
}
