use crate::arrhenius::FitError;
use crate::record::{Diffusivities, Orientation};
use crate::units::CELSIUS_TO_KELVIN;

use super::report::CheckScope;
use super::ValidationReport;

/// Experiments above this temperature are unusual for mantle minerals
const MAX_PLAUSIBLE_CELSIUS: f64 = 2000.0;

/// Range of log10 D (m²/s) spanned by solid-state diffusion in silicates
const PLAUSIBLE_LOG_D: std::ops::RangeInclusive<f64> = -25.0..=-5.0;

/// Step 2: semantic checks on the values of every usable axis
pub(crate) fn check_data_sanity(
    id: &str,
    record: &Diffusivities,
    orientations: &[Orientation],
    report: &mut ValidationReport,
) {
    for &orientation in orientations {
        let scope = CheckScope::axis(id, orientation);
        let (Ok(celsius), Some(log_d)) = (record.celsius(orientation), record.log_d(orientation))
        else {
            continue;
        };

        check_temperatures(scope, celsius, report);
        check_log_d(scope, log_d, report);
        if let Some(errors) = record.log_d_error(orientation) {
            check_uncertainties(scope, errors, report);
        }
        check_fit_ability(scope, record, orientation, report);
    }

    for (orientation, law) in record.laws() {
        let scope = CheckScope::axis(id, orientation);
        if !law.activation_energy_kj_mol.is_finite() || !law.log_d0.is_finite() {
            report.add_check(scope.fail("reported law", "Non-finite Ea or log D0"));
        } else if law.activation_energy_kj_mol <= 0.0 {
            report.add_check(scope.warn(
                "reported law",
                format!(
                    "Non-positive activation energy ({} kJ/mol)",
                    law.activation_energy_kj_mol
                ),
            ));
        } else {
            report.add_check(scope.pass("reported law"));
        }
    }
}

fn check_temperatures(scope: CheckScope<'_>, celsius: &[f64], report: &mut ValidationReport) {
    const NAME: &str = "temperature range";
    if let Some(bad) = celsius
        .iter()
        .find(|t| !t.is_finite() || **t <= -CELSIUS_TO_KELVIN)
    {
        report.add_check(scope.fail(
            NAME,
            format!("Temperature {} °C is not physical", bad),
        ));
        return;
    }

    let max = celsius.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max > MAX_PLAUSIBLE_CELSIUS {
        report.add_check(scope.warn(
            NAME,
            format!("Maximum temperature {} °C exceeds {} °C", max, MAX_PLAUSIBLE_CELSIUS),
        ));
    } else {
        report.add_check(scope.pass(NAME));
    }
}

fn check_log_d(scope: CheckScope<'_>, log_d: &[f64], report: &mut ValidationReport) {
    const NAME: &str = "log D plausibility";
    if log_d.iter().any(|v| !v.is_finite()) {
        report.add_check(scope.fail(NAME, "Non-finite log D value"));
        return;
    }

    let outliers: Vec<f64> = log_d
        .iter()
        .copied()
        .filter(|v| !PLAUSIBLE_LOG_D.contains(v))
        .collect();
    if outliers.is_empty() {
        report.add_check(scope.pass(NAME));
    } else {
        report.add_check(scope.warn(
            NAME,
            format!(
                "{} value(s) outside [{}, {}]: {:?}",
                outliers.len(),
                PLAUSIBLE_LOG_D.start(),
                PLAUSIBLE_LOG_D.end(),
                outliers
            ),
        ));
    }
}

fn check_uncertainties(scope: CheckScope<'_>, errors: &[f64], report: &mut ValidationReport) {
    const NAME: &str = "uncertainties";
    if errors.iter().any(|e| !e.is_finite() || *e < 0.0) {
        report.add_check(scope.fail(
            NAME,
            "Uncertainties must be finite and non-negative",
        ));
    } else {
        report.add_check(scope.pass(NAME));
    }
}

fn check_fit_ability(
    scope: CheckScope<'_>,
    record: &Diffusivities,
    orientation: Orientation,
    report: &mut ValidationReport,
) {
    const NAME: &str = "Arrhenius fit";
    let result = record
        .observations(orientation)
        .map_err(|e| e.to_string())
        .and_then(|set| set.fit().map_err(|e| (e, set.len())).map_err(describe));

    match result {
        Ok(fit) if fit.slope < 0.0 => report.add_check(scope.pass(NAME)),
        Ok(fit) => report.add_check(scope.warn(
            NAME,
            format!("Diffusivity does not increase with temperature (slope {:.3})", fit.slope),
        )),
        Err(message) => report.add_check(scope.warn(NAME, message)),
    }
}

fn describe((error, count): (FitError, usize)) -> String {
    match error {
        FitError::InsufficientData { .. } => {
            format!("{} point(s); reported as a single measurement", count)
        }
        FitError::NumericDegeneracy { .. } => {
            format!("{} points at a single temperature; no line can be fitted", count)
        }
        other => other.to_string(),
    }
}
