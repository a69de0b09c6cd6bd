#![no_main]

use libfuzzer_sys::fuzz_target;
use mantle_diffusivity::arrhenius::LineDomain;
use mantle_diffusivity::record::Diffusivities;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    // Records that pass validation must be safe to query on every axis
    if let Ok(record) = Diffusivities::from_json(json) {
        let domain = LineDomain::default();
        for orientation in record.orientations() {
            let _ = record.observations(orientation);
            let _ = record.fit_line(orientation, &domain);
        }
        let _ = record.all_observations();
    }
});
