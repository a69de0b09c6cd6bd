use log::debug;
use serde::{Deserialize, Serialize};

use crate::units::{self, CELSIUS_TO_KELVIN};

use super::FitError;

/// Number of samples in every fitted line
pub const SAMPLE_COUNT: usize = 100;

/// Default lower bound of the plotting domain, 10⁴/T(K)
pub const DEFAULT_DOMAIN_LOW: f64 = 6.0;

/// Default upper bound of the plotting domain, 10⁴/T(K)
pub const DEFAULT_DOMAIN_HIGH: f64 = 10.0;

/// Closed x-range, in 10⁴/T(K), over which fitted lines are sampled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineDomain {
    /// Lower bound (inclusive)
    pub low: f64,
    /// Upper bound (inclusive)
    pub high: f64,
}

impl Default for LineDomain {
    fn default() -> Self {
        Self {
            low: DEFAULT_DOMAIN_LOW,
            high: DEFAULT_DOMAIN_HIGH,
        }
    }
}

impl LineDomain {
    /// Create a domain, rejecting non-finite or non-increasing bounds.
    ///
    /// The span must also be wide enough that every sample lands on a
    /// distinct, increasing x.
    pub fn new(low: f64, high: f64) -> Result<Self, FitError> {
        if !low.is_finite() || !high.is_finite() || low >= high || !(high - low).is_finite() {
            return Err(FitError::InvalidDomain { low, high });
        }
        let samples = linspace(low, high, SAMPLE_COUNT);
        if !samples.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(FitError::InvalidDomain { low, high });
        }
        Ok(Self { low, high })
    }

    /// Re-check bounds of a domain built field by field (e.g. deserialized)
    pub fn validated(&self) -> Result<Self, FitError> {
        Self::new(self.low, self.high)
    }

    /// [`SAMPLE_COUNT`] evenly spaced samples from `low` to `high`, both included
    pub fn samples(&self) -> Vec<f64> {
        linspace(self.low, self.high, SAMPLE_COUNT)
    }

    /// Temperature range in Celsius covered by this domain (hot end first)
    pub fn celsius_range(&self) -> (f64, f64) {
        (
            units::from_arrhenius_x(self.low),
            units::from_arrhenius_x(self.high),
        )
    }
}

/// Evenly spaced samples over a closed interval.
///
/// The final sample is pinned to `high` so the upper endpoint is exact.
pub(crate) fn linspace(low: f64, high: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![low],
        _ => {
            let step = (high - low) / (count - 1) as f64;
            let mut samples: Vec<f64> = (0..count).map(|i| low + step * i as f64).collect();
            samples[count - 1] = high;
            samples
        }
    }
}

/// Least-squares straight line of log10 D against 10⁴/T(K)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    /// Change in log10 D per unit of 10⁴/T(K)
    pub slope: f64,
    /// log10 D extrapolated to 10⁴/T = 0
    pub intercept: f64,
    /// Number of observations behind the fit
    pub count: usize,
    /// Coefficient of determination
    pub r_squared: f64,
}

impl LinearFit {
    /// Ordinary least-squares fit of `y` on `x` (residuals in y only)
    pub fn from_points(x: &[f64], y: &[f64]) -> Result<Self, FitError> {
        if x.len() != y.len() {
            return Err(FitError::ShapeMismatch {
                celsius: x.len(),
                log_d: y.len(),
            });
        }
        let count = x.len();
        if count < 2 {
            return Err(FitError::InsufficientData { count });
        }

        #[allow(clippy::float_cmp)]
        if x.iter().all(|&xi| xi == x[0]) {
            return Err(FitError::NumericDegeneracy { count });
        }

        let n = count as f64;
        let mean_x = x.iter().sum::<f64>() / n;
        let mean_y = y.iter().sum::<f64>() / n;

        let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
        for (&xi, &yi) in x.iter().zip(y) {
            let dx = xi - mean_x;
            let dy = yi - mean_y;
            sxx += dx * dx;
            sxy += dx * dy;
            syy += dy * dy;
        }

        // Spread below rounding noise of the mean is treated as a single temperature.
        let noise = f64::EPSILON * mean_x.abs();
        if sxx.is_nan() || sxx <= n * noise * noise {
            return Err(FitError::NumericDegeneracy { count });
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;
        let ss_res: f64 = x
            .iter()
            .zip(y)
            .map(|(&xi, &yi)| {
                let r = yi - (slope * xi + intercept);
                r * r
            })
            .sum();
        let r_squared = if syy > 0.0 { 1.0 - ss_res / syy } else { 1.0 };
        if !slope.is_finite() || !intercept.is_finite() || r_squared.is_nan() {
            return Err(FitError::Overflow { count });
        }

        Ok(Self {
            slope,
            intercept,
            count,
            r_squared,
        })
    }

    /// Predicted log10 D at an Arrhenius x-coordinate
    pub fn evaluate(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Predicted log10 D at a Celsius temperature
    pub fn evaluate_celsius(&self, celsius: f64) -> f64 {
        self.evaluate(units::to_arrhenius_x(celsius))
    }

    /// Sample the fitted line over a domain
    pub fn sample(&self, domain: &LineDomain) -> Result<FittedLine, FitError> {
        let x = domain.samples();
        let y = x.iter().map(|&xi| self.evaluate(xi)).collect();
        FittedLine::from_parts(x, y)
    }
}

/// A straight line sampled in Arrhenius coordinates, ready for overlay plotting
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FittedLine {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl FittedLine {
    /// Sample positions in 10⁴/T(K)
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Predicted log10 D at each sample
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True when the line holds no samples
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Consume the line into its `(x, y)` sequences
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.x, self.y)
    }

    /// Assemble a line, rejecting samples that left the finite range
    pub(crate) fn from_parts(x: Vec<f64>, y: Vec<f64>) -> Result<Self, FitError> {
        debug_assert_eq!(x.len(), y.len());
        if !y.iter().all(|v| v.is_finite()) {
            return Err(FitError::Overflow { count: x.len() });
        }
        Ok(Self { x, y })
    }
}

/// Check every pair for finite values above absolute zero
pub(crate) fn check_observations(celsius: &[f64], log_d: &[f64]) -> Result<(), FitError> {
    for (index, (&c, &d)) in celsius.iter().zip(log_d).enumerate() {
        if !c.is_finite() || !d.is_finite() || c <= -CELSIUS_TO_KELVIN {
            return Err(FitError::NonFiniteObservation {
                index,
                celsius: c,
                log_d: d,
            });
        }
    }
    Ok(())
}

/// Fit log10 D against 10⁴/T(K) for paired Celsius temperatures and log10 diffusivities
pub fn fit_arrhenius(celsius: &[f64], log_d: &[f64]) -> Result<LinearFit, FitError> {
    if celsius.len() != log_d.len() {
        return Err(FitError::ShapeMismatch {
            celsius: celsius.len(),
            log_d: log_d.len(),
        });
    }
    if celsius.len() < 2 {
        return Err(FitError::InsufficientData {
            count: celsius.len(),
        });
    }
    check_observations(celsius, log_d)?;

    let tx: Vec<f64> = celsius.iter().map(|&c| units::to_arrhenius_x(c)).collect();
    let fit = LinearFit::from_points(&tx, log_d)?;
    debug!(
        "Arrhenius fit over {} points: slope={:.4}, intercept={:.4}, r²={:.4}",
        fit.count, fit.slope, fit.intercept, fit.r_squared
    );
    Ok(fit)
}

/// Fit an Arrhenius line and sample it over the default 6–10 domain
pub fn fit_line(celsius: &[f64], log_d: &[f64]) -> Result<FittedLine, FitError> {
    fit_line_in(celsius, log_d, &LineDomain::default())
}

/// Fit an Arrhenius line and sample it over `[domain_low, domain_high]`
pub fn fit_line_with_domain(
    celsius: &[f64],
    log_d: &[f64],
    domain_low: f64,
    domain_high: f64,
) -> Result<FittedLine, FitError> {
    let domain = LineDomain::new(domain_low, domain_high)?;
    fit_line_in(celsius, log_d, &domain)
}

/// Fit an Arrhenius line and sample it over a prepared domain
pub fn fit_line_in(
    celsius: &[f64],
    log_d: &[f64],
    domain: &LineDomain,
) -> Result<FittedLine, FitError> {
    let domain = domain.validated()?;
    fit_arrhenius(celsius, log_d)?.sample(&domain)
}
