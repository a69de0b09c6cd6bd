//! Property tests for the Arrhenius fitter.

use mantle_diffusivity::arrhenius::{fit_line_with_domain, FitError, SAMPLE_COUNT};
use mantle_diffusivity::units;
use proptest::prelude::*;

/// Distinct temperatures (°C) paired with log10 D values
fn observations() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::btree_set(400u32..1600, 2..20).prop_flat_map(|temps| {
        let celsius: Vec<f64> = temps.into_iter().map(f64::from).collect();
        let n = celsius.len();
        (Just(celsius), prop::collection::vec(-20.0f64..-8.0, n))
    })
}

fn domain() -> impl Strategy<Value = (f64, f64)> {
    (4.0f64..9.0, 0.1f64..6.0).prop_map(|(low, width)| (low, low + width))
}

proptest! {
    /// The sampled line always has 100 strictly increasing points spanning the domain
    #[test]
    fn test_sampling_shape((celsius, log_d) in observations(), (low, high) in domain()) {
        let line = fit_line_with_domain(&celsius, &log_d, low, high).unwrap();

        prop_assert_eq!(line.len(), SAMPLE_COUNT);
        prop_assert_eq!(line.y().len(), SAMPLE_COUNT);
        prop_assert_eq!(line.x()[0], low);
        prop_assert_eq!(line.x()[SAMPLE_COUNT - 1], high);
        prop_assert!(line.x().windows(2).all(|w| w[1] > w[0]));

        let step = (high - low) / (SAMPLE_COUNT - 1) as f64;
        for w in line.x().windows(2) {
            prop_assert!(((w[1] - w[0]) - step).abs() < 1e-9);
        }
    }

    /// Shuffling observation pairs does not change the fitted line
    #[test]
    fn test_permutation_invariance(
        (celsius, log_d) in observations(),
        seed in any::<u64>(),
    ) {
        let mut pairs: Vec<(f64, f64)> = celsius.iter().copied().zip(log_d.iter().copied()).collect();
        // Deterministic rotation plus reversal driven by the seed
        let k = (seed as usize) % pairs.len();
        pairs.rotate_left(k);
        if seed % 2 == 1 {
            pairs.reverse();
        }
        let (shuffled_c, shuffled_d): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();

        let a = fit_line_with_domain(&celsius, &log_d, 6.0, 10.0).unwrap();
        let b = fit_line_with_domain(&shuffled_c, &shuffled_d, 6.0, 10.0).unwrap();
        for (ya, yb) in a.y().iter().zip(b.y()) {
            prop_assert!((ya - yb).abs() < 1e-8);
        }
    }

    /// Data lying exactly on a line is recovered
    #[test]
    fn test_collinear_data_recovered(
        slope in -3.0f64..-0.1,
        intercept in -8.0f64..0.0,
        (celsius, _) in observations(),
    ) {
        let log_d: Vec<f64> = celsius
            .iter()
            .map(|&t| intercept + slope * units::to_arrhenius_x(t))
            .collect();
        let line = fit_line_with_domain(&celsius, &log_d, 6.0, 10.0).unwrap();
        for (x, y) in line.points() {
            prop_assert!((y - (intercept + slope * x)).abs() < 1e-6);
        }
    }

    /// Mismatched lengths are always rejected
    #[test]
    fn test_shape_mismatch(
        celsius in prop::collection::vec(400.0f64..1600.0, 0..10),
        extra in 1usize..5,
    ) {
        let log_d = vec![-12.0; celsius.len() + extra];
        let err = fit_line_with_domain(&celsius, &log_d, 6.0, 10.0).unwrap_err();
        prop_assert_eq!(
            err,
            FitError::ShapeMismatch { celsius: celsius.len(), log_d: celsius.len() + extra }
        );
    }
}
