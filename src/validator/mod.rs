//! # Catalog Validation
//!
//! Integrity checks for diffusivity records, whether they come from the
//! built-in catalog or from a JSON file written by hand.
//!
//! ## Validation Checklist
//!
//! 1. **Structure Check**: every orientation resolves to temperature, log D and
//!    uncertainty lists of the same length
//! 2. **Data Sanity**: temperatures above absolute zero, plausible log D values,
//!    non-negative uncertainties, and whether an Arrhenius line can be fitted
//!
//! Failures mean a record cannot be used; warnings flag data that is accepted
//! but unusual (single-temperature measurements, extreme values).
//!
//! ## Usage
//!
//! ```rust
//! use mantle_diffusivity::catalog::Catalog;
//! use mantle_diffusivity::validator::validate_catalog;
//!
//! let report = validate_catalog(Catalog::global()?);
//! assert!(!report.has_failures());
//! println!("{}", report);
//! # Ok::<(), mantle_diffusivity::catalog::CatalogError>(())
//! ```

use log::{debug, info, warn};
use std::fs;
use std::path::Path;

use crate::catalog::{Catalog, CatalogError};
use crate::record::Diffusivities;

pub use report::{RecordChecks, Severity, ValidationCheck, ValidationReport};

mod data;
mod report;
mod structure;

/// Validation error types
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// I/O error reading a record file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The record file is not a JSON record
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The built-in catalog could not be assembled
    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),
}

/// Run every check on one record and append the results to a report
pub fn check_record(id: &str, record: &Diffusivities, report: &mut ValidationReport) {
    // 1. Structure Check
    let usable = structure::check_structure(id, record, report);

    // 2. Data Sanity Check
    data::check_data_sanity(id, record, &usable, report);
}

/// Validate a single record
pub fn validate_record(id: &str, record: &Diffusivities) -> ValidationReport {
    let mut report = ValidationReport::new(id);
    check_record(id, record, &mut report);
    report
}

/// Validate every record of a catalog, one record report at a time
pub fn validate_catalog(catalog: &Catalog) -> ValidationReport {
    let mut report = ValidationReport::new(format!("built-in catalog ({} records)", catalog.len()));
    for entry in catalog.iter() {
        let record_report = validate_record(entry.id, &entry.record);
        debug!(
            "Validated '{}': {} check(s), worst {:?}",
            entry.id,
            record_report.checks.len(),
            record_report.worst()
        );
        report.merge(record_report);
    }

    info!(
        "Catalog validation: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        report.count(Severity::Failure)
    );
    for record in report.records() {
        if record.worst() == Severity::Failure {
            warn!(
                "Record '{}' failed {} check(s) on {:?}",
                record.id,
                record.count(Severity::Failure),
                record.problem_axes()
            );
        }
    }
    report
}

/// Validate a record stored as JSON.
///
/// The record is checked as written, without the validation applied by
/// [`Diffusivities::from_json`], so every problem shows up in the report.
pub fn validate_record_file(path: &Path) -> Result<ValidationReport, ValidationError> {
    let json = fs::read_to_string(path)?;
    let record: Diffusivities = serde_json::from_str(&json)?;
    let id = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let mut report = ValidationReport::new(path.display().to_string());
    check_record(&id, &record, &mut report);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Orientation;
    use super::report::CheckScope;
    use std::io::Write;

    fn sample_report() -> ValidationReport {
        let mut report = ValidationReport::new("test records");
        let x = CheckScope::axis("km98", Orientation::X);
        report.add_check(x.pass("series aligned"));
        report.add_check(x.warn("Arrhenius fit", "1 point(s); reported as a single measurement"));
        report.add_check(CheckScope::axis("dm03", Orientation::Unoriented).pass("series aligned"));
        let empty = CheckScope::record("empty");
        report.add_check(empty.fail("measurements present", "Record carries no orientation"));
        report.add_check(CheckScope::axis("km98", Orientation::Z).pass("series aligned"));
        report
    }

    #[test]
    fn test_validation_report_display() {
        let output = format!("{}", sample_report());
        assert!(output.contains("Diffusivity Catalog Validation Report"));
        assert!(output.contains("Source: test records"));
        assert!(output.contains("⚠ km98: 2/3 checks passed"));
        assert!(output.contains("    ⚠ [x] Arrhenius fit: 1 point(s); reported as a single"));
        assert!(output.contains("✓ dm03: 1/1 checks passed"));
        assert!(output.contains("✗ empty: 0/1 checks passed"));
        assert!(output.contains("    ✗ measurements present: Record carries no orientation"));
        assert!(output.contains("Records: 1 clean, 1 with warnings, 1 failing"));
        assert!(output.contains("Checks: 3 passed, 1 warnings, 1 failed"));
        assert!(output.contains("Validation FAILED"));
        // Passing checks are summarized, not listed
        assert!(!output.contains("series aligned"));
    }

    #[test]
    fn test_checks_grouped_by_record_and_axis() {
        let report = sample_report();
        let records = report.records();
        let ids: Vec<&str> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, ["km98", "dm03", "empty"]);

        let km98 = &records[0];
        assert_eq!(km98.checks.len(), 3);
        assert_eq!(km98.worst(), Severity::Warning);
        assert_eq!(km98.problem_axes(), vec![Orientation::X]);
        assert_eq!(records[2].worst(), Severity::Failure);
        assert!(records[2].problem_axes().is_empty());

        let z: Vec<_> = report.axis_checks("km98", Orientation::Z).collect();
        assert_eq!(z.len(), 1);
        assert_eq!(z[0].severity, Severity::Pass);
        assert_eq!(report.worst(), Severity::Failure);
    }

    #[test]
    fn test_merged_record_reports() {
        let mut merged = ValidationReport::new("merged");
        merged.merge(sample_report());
        merged.merge(ValidationReport::new("nothing"));
        assert_eq!(merged.checks.len(), 5);
        assert_eq!(merged.records().len(), 3);
        assert_eq!(merged.source, "merged");
        assert!(merged.to_string().contains("Validation FAILED"));
        assert_eq!(ValidationReport::new("empty").worst(), Severity::Pass);
    }

    #[test]
    fn test_builtin_catalog_has_no_failures() {
        let catalog = Catalog::global().unwrap();
        let report = validate_catalog(catalog);
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "{:?}", failures);
        assert_eq!(report.records().len(), catalog.len());
        assert!(report.count(Severity::Pass) > catalog.len());
    }

    #[test]
    fn test_single_temperature_record_warns() {
        let record = Diffusivities::builder("one temperature")
            .celsius_all([900.0])
            .log_d(Orientation::X, [-11.3])
            .build()
            .unwrap();
        let report = validate_record("single", &record);
        assert!(!report.has_failures());
        assert_eq!(report.worst(), Severity::Warning);
        assert!(report
            .axis_checks("single", Orientation::X)
            .any(|c| c.check == "Arrhenius fit" && c.severity == Severity::Warning));
    }

    #[test]
    fn test_implausible_values() {
        let record = Diffusivities::builder("hot and fast")
            .celsius(Orientation::Unoriented, [1500.0, 2500.0])
            .log_d(Orientation::Unoriented, [-3.0, -2.5])
            .log_d_error(Orientation::Unoriented, [0.1, -0.1])
            .build()
            .unwrap();
        let report = validate_record("odd", &record);
        assert_eq!(report.count(Severity::Failure), 1);
        assert_eq!(report.count(Severity::Warning), 2);
        let failed: Vec<_> = report.failures().map(|c| c.check).collect();
        assert_eq!(failed, ["uncertainties"]);
    }

    #[test]
    fn test_misaligned_record_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "description": "broken",
                "axes": {{
                    "x": {{ "celsius": [900.0, 1000.0], "log_d": [-12.0] }},
                    "y": {{ "log_d": [-12.5] }}
                }}
            }}"#
        )
        .unwrap();

        let report = validate_record_file(file.path()).unwrap();
        assert_eq!(report.count(Severity::Failure), 2);
        assert_eq!(report.count(Severity::Pass), 0);

        let records = report.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].problem_axes(), vec![Orientation::X, Orientation::Y]);
    }

    #[test]
    fn test_record_file_not_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            validate_record_file(file.path()),
            Err(ValidationError::JsonError(_))
        ));
    }
}
