//! Values with a reported one-sigma uncertainty.
//!
//! Measurements such as `-13.2 ± 0.2` (log10 D) are combined under the
//! assumption that their errors are uncorrelated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A nominal value with its standard deviation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Uncertain {
    /// Nominal value
    pub value: f64,
    /// One-sigma standard deviation
    pub std_dev: f64,
}

impl Uncertain {
    /// Create a value with uncertainty
    pub const fn new(value: f64, std_dev: f64) -> Self {
        Self { value, std_dev }
    }

    /// Arithmetic mean of uncorrelated values.
    ///
    /// The standard deviation of the mean is `sqrt(Σσ²) / n`. Returns `None`
    /// for an empty slice.
    pub fn mean(values: &[Uncertain]) -> Option<Uncertain> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let value = values.iter().map(|v| v.value).sum::<f64>() / n;
        let variance: f64 = values.iter().map(|v| v.std_dev * v.std_dev).sum();
        Some(Uncertain::new(value, variance.sqrt() / n))
    }
}

impl fmt::Display for Uncertain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} ± {:.*}", p, self.value, p, self.std_dev),
            None => write!(f, "{} ± {}", self.value, self.std_dev),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_propagates_uncorrelated_error() {
        let values = [
            Uncertain::new(-13.1, 0.3),
            Uncertain::new(-13.3, 0.4),
            Uncertain::new(-13.4, 0.2),
        ];
        let mean = Uncertain::mean(&values).unwrap();
        assert!((mean.value - (-13.266_666_666_666_667)).abs() < 1e-12);
        let expected_sigma = (0.09f64 + 0.16 + 0.04).sqrt() / 3.0;
        assert!((mean.std_dev - expected_sigma).abs() < 1e-12);
    }

    #[test]
    fn test_mean_of_empty_slice() {
        assert!(Uncertain::mean(&[]).is_none());
    }

    #[test]
    fn test_display_with_precision() {
        let v = Uncertain::new(-13.2, 0.2);
        assert_eq!(format!("{:.1}", v), "-13.2 ± 0.2");
    }
}
