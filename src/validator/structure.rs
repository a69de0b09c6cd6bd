use crate::record::{Diffusivities, Orientation};

use super::report::CheckScope;
use super::ValidationReport;

const MEASUREMENTS: &str = "measurements present";
const ALIGNED: &str = "series aligned";

/// Step 1: every axis resolves to aligned temperature, diffusivity and error lists.
///
/// Returns the orientations whose series are usable by the data checks.
pub(crate) fn check_structure(
    id: &str,
    record: &Diffusivities,
    report: &mut ValidationReport,
) -> Vec<Orientation> {
    if record.is_empty() {
        report.add_check(
            CheckScope::record(id).fail(MEASUREMENTS, "Record carries no orientation"),
        );
        return Vec::new();
    }

    let mut usable = Vec::new();
    for orientation in record.orientations() {
        let scope = CheckScope::axis(id, orientation);
        let log_d = record.log_d(orientation).unwrap_or_default();
        if log_d.is_empty() {
            report.add_check(scope.fail(ALIGNED, "No log D values"));
            continue;
        }

        let celsius = match record.celsius(orientation) {
            Ok(celsius) => celsius,
            Err(e) => {
                report.add_check(scope.fail(ALIGNED, e.to_string()));
                continue;
            }
        };

        if celsius.len() != log_d.len() {
            report.add_check(scope.fail(
                ALIGNED,
                format!(
                    "{} temperature(s) for {} log D value(s)",
                    celsius.len(),
                    log_d.len()
                ),
            ));
            continue;
        }

        if let Some(errors) = record.log_d_error(orientation) {
            if errors.len() != log_d.len() {
                report.add_check(scope.fail(
                    ALIGNED,
                    format!(
                        "{} uncertainty value(s) for {} log D value(s)",
                        errors.len(),
                        log_d.len()
                    ),
                ));
                continue;
            }
        }

        report.add_check(scope.pass(ALIGNED));
        usable.push(orientation);
    }
    usable
}
