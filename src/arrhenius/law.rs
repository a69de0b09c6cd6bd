use serde::{Deserialize, Serialize};

use crate::units::{self, ARRHENIUS_SCALE, GAS_CONSTANT_KJ_MOL_K};

use super::fit::{LineDomain, LinearFit};
use super::{FitError, FittedLine};

/// Reported Arrhenius relation `D = D0 · exp(-Ea / RT)`.
///
/// In Arrhenius coordinates this is the straight line
/// `log10 D = log10 D0 - Ea · x / (10⁴ · R · ln 10)` with `x = 10⁴/T(K)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrheniusLaw {
    /// Activation energy in kJ/mol
    pub activation_energy_kj_mol: f64,
    /// log10 of the pre-exponential factor D0 in m²/s
    pub log_d0: f64,
}

impl ArrheniusLaw {
    /// Create a law from an activation energy (kJ/mol) and log10 D0 (m²/s)
    pub fn new(activation_energy_kj_mol: f64, log_d0: f64) -> Self {
        Self {
            activation_energy_kj_mol,
            log_d0,
        }
    }

    /// Recover Ea and D0 from a line fitted in Arrhenius coordinates
    pub fn from_fit(fit: &LinearFit) -> Self {
        Self {
            activation_energy_kj_mol: -fit.slope * Self::slope_scale(),
            log_d0: fit.intercept,
        }
    }

    fn slope_scale() -> f64 {
        ARRHENIUS_SCALE * GAS_CONSTANT_KJ_MOL_K * std::f64::consts::LN_10
    }

    /// Slope of the law in log10 D per unit of 10⁴/T(K)
    pub fn slope(&self) -> f64 {
        -self.activation_energy_kj_mol / Self::slope_scale()
    }

    /// log10 D at an Arrhenius x-coordinate
    pub fn log_d_at_x(&self, x: f64) -> f64 {
        self.log_d0 + self.slope() * x
    }

    /// log10 D at a Celsius temperature
    pub fn log_d_at(&self, celsius: f64) -> f64 {
        self.log_d_at_x(units::to_arrhenius_x(celsius))
    }

    /// log10 D for each temperature in a list
    pub fn log_d_series(&self, celsius: &[f64]) -> Vec<f64> {
        celsius.iter().map(|&c| self.log_d_at(c)).collect()
    }

    /// Sample the law over a domain, in the same form as a fitted line
    pub fn line(&self, domain: &LineDomain) -> Result<FittedLine, FitError> {
        let domain = domain.validated()?;
        let x = domain.samples();
        let y = x.iter().map(|&xi| self.log_d_at_x(xi)).collect();
        FittedLine::from_parts(x, y)
    }
}
