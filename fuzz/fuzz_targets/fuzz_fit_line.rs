#![no_main]

use libfuzzer_sys::fuzz_target;
use mantle_diffusivity::arrhenius::{fit_line_with_domain, SAMPLE_COUNT};

fuzz_target!(|data: &[u8]| {
    // Interpret the input as f64 values: two domain bounds, then (celsius, log_d) pairs
    let values: Vec<f64> = data
        .chunks_exact(8)
        .map(|chunk| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            f64::from_le_bytes(bytes)
        })
        .collect();
    if values.len() < 2 {
        return;
    }

    let (low, high) = (values[0], values[1]);
    let (celsius, log_d): (Vec<f64>, Vec<f64>) = values[2..]
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .unzip();

    // Any input must produce either a well-formed line or an error, never a panic
    if let Ok(line) = fit_line_with_domain(&celsius, &log_d, low, high) {
        assert_eq!(line.len(), SAMPLE_COUNT);
        assert_eq!(line.x()[0], low);
        assert_eq!(line.x()[SAMPLE_COUNT - 1], high);
        assert!(line.x().windows(2).all(|pair| pair[0] < pair[1]));
        assert!(line.y().iter().all(|v| v.is_finite()));
    }
});
