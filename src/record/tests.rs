use super::*;
use crate::arrhenius::{ArrheniusLaw, FitError, LineDomain};
use std::str::FromStr;

fn dm06_slow() -> Diffusivities {
    Diffusivities::builder("slow mech., DM06")
        .celsius_all([900.0])
        .diffusivity(Orientation::X, &[5e-13])
        .celsius(Orientation::Y, [900.0, 1000.0])
        .diffusivity(Orientation::Y, &[5e-14, 3e-13])
        .diffusivity(Orientation::Z, &[1e-12])
        .build()
        .unwrap()
}

#[test]
fn test_shared_temperatures_fill_missing_axes() {
    let record = dm06_slow();

    assert_eq!(record.celsius(Orientation::X).unwrap(), &[900.0]);
    assert_eq!(record.celsius(Orientation::Y).unwrap(), &[900.0, 1000.0]);
    assert_eq!(record.celsius(Orientation::Z).unwrap(), &[900.0]);
    assert!((record.log_d(Orientation::X).unwrap()[0] - (5e-13f64).log10()).abs() < 1e-12);
}

#[test]
fn test_pooled_observations_keep_axis_order() {
    let pooled = dm06_slow().all_observations().unwrap();
    assert_eq!(pooled.celsius(), &[900.0, 900.0, 1000.0, 900.0]);
    assert_eq!(pooled.len(), 4);
}

#[test]
fn test_missing_axis_is_reported() {
    let record = dm06_slow();
    assert!(matches!(
        record.observations(Orientation::Unoriented),
        Err(RecordError::NoData(Orientation::Unoriented))
    ));
}

#[test]
fn test_missing_temperatures_rejected() {
    let err = Diffusivities::builder("no temps")
        .log_d(Orientation::Z, [-12.0])
        .build()
        .unwrap_err();
    assert!(matches!(err, RecordError::MissingTemperatures(Orientation::Z)));
}

#[test]
fn test_misaligned_series_rejected() {
    let err = Diffusivities::builder("bad")
        .celsius(Orientation::X, [700.0, 750.0])
        .log_d(Orientation::X, [-12.0])
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        RecordError::MisalignedSeries {
            orientation: Orientation::X,
            celsius: 2,
            log_d: 1
        }
    ));
}

#[test]
fn test_misaligned_errors_rejected() {
    let err = Diffusivities::builder("bad errors")
        .celsius_all([1000.0])
        .log_d(Orientation::X, [-13.0])
        .log_d_error(Orientation::X, [0.1, 0.2])
        .build()
        .unwrap_err();
    assert!(matches!(err, RecordError::MisalignedErrors { .. }));
}

#[test]
fn test_temperatures_without_diffusivities_rejected() {
    let err = Diffusivities::builder("temps only")
        .celsius(Orientation::Y, [900.0])
        .build()
        .unwrap_err();
    assert!(matches!(err, RecordError::MissingDiffusivities(Orientation::Y)));
}

#[test]
fn test_cloned_builder_shares_default_temperatures() {
    let study = Diffusivities::builder("").celsius_all([1000.0, 900.0, 800.0]);

    let mg = study
        .clone()
        .description("forsterite, [Mg]")
        .log_d(Orientation::Unoriented, [-12.66, -13.7, -14.29])
        .build()
        .unwrap();
    let si = study
        .description("forsterite, [Si]")
        .celsius(Orientation::Unoriented, [1000.0, 1100.0, 1200.0])
        .log_d(Orientation::Unoriented, [-15.66, -14.17, -13.02])
        .build()
        .unwrap();

    assert_eq!(
        mg.celsius(Orientation::Unoriented).unwrap(),
        &[1000.0, 900.0, 800.0]
    );
    assert_eq!(
        si.celsius(Orientation::Unoriented).unwrap(),
        &[1000.0, 1100.0, 1200.0]
    );
}

#[test]
fn test_fit_line_single_point_axis() {
    let record = dm06_slow();
    let err = record
        .fit_line(Orientation::X, &LineDomain::default())
        .unwrap_err();
    assert!(matches!(
        err,
        RecordError::Fit(FitError::InsufficientData { count: 1 })
    ));
    assert_eq!(
        record
            .fit_line(Orientation::Y, &LineDomain::default())
            .unwrap()
            .len(),
        100
    );
}

#[test]
fn test_json_roundtrip() {
    let record = Diffusivities::builder("fast mech., KM98")
        .celsius_all([1000.0, 1000.0, 900.0, 900.0, 800.0])
        .log_d(Orientation::X, [-9.5634, -9.3928, -9.9876, -10.3970, -10.8071])
        .log_d_error(Orientation::X, [0.1, 0.1, 0.1, 0.1, 0.1])
        .law(Orientation::X, ArrheniusLaw::new(145.0, -4.0))
        .style(PlotStyle::new().with("marker", "d").with("markersize", 8))
        .build()
        .unwrap();

    let json = record.to_json().unwrap();
    let restored = Diffusivities::from_json(&json).unwrap();
    assert_eq!(restored, record);
    assert_eq!(restored.law(Orientation::X).unwrap().activation_energy_kj_mol, 145.0);
}

#[test]
fn test_from_json_validates() {
    let json = r#"{"description": "broken", "axes": {"x": {"celsius": [900.0], "log_d": [-12.0, -13.0]}}}"#;
    assert!(matches!(
        Diffusivities::from_json(json),
        Err(RecordError::MisalignedSeries { .. })
    ));
}

#[test]
fn test_label_is_first_description_line() {
    let record = Diffusivities::builder("Kunlun diopside\nbulk H, QFM")
        .build()
        .unwrap();
    assert_eq!(record.label(), "Kunlun diopside");
    assert!(record.is_empty());
}

#[test]
fn test_orientation_parsing() {
    assert_eq!(Orientation::from_str("a").unwrap(), Orientation::X);
    assert_eq!(Orientation::from_str("[010]").unwrap(), Orientation::Y);
    assert_eq!(Orientation::from_str("Z").unwrap(), Orientation::Z);
    assert_eq!(Orientation::from_str("u").unwrap(), Orientation::Unoriented);
    assert!(Orientation::from_str("w").is_err());
    assert_eq!(Orientation::Y.to_string(), "y");
    assert_eq!(Orientation::Z.miller_index(), Some("[001]"));
    for orientation in Orientation::ALL {
        let code = orientation.code().to_string();
        assert_eq!(Orientation::from_str(&code).unwrap(), orientation);
    }
}

#[test]
fn test_orientation_default_styles() {
    assert_eq!(
        Orientation::X.marker_style().get("fillstyle"),
        Some(&serde_json::Value::from("left"))
    );
    assert_eq!(
        Orientation::Z.line_style().get("linestyle"),
        Some(&serde_json::Value::from(":"))
    );
}

#[test]
fn test_style_merge_overrides() {
    let base = PlotStyle::new()
        .with("color", "black")
        .with("marker", "D")
        .with("alpha", 0.5);
    let red = base.merged(&PlotStyle::new().with("color", "red"));

    assert_eq!(red.get("color"), Some(&serde_json::Value::from("red")));
    assert_eq!(red.get("marker"), Some(&serde_json::Value::from("D")));
    assert_eq!(red.len(), 3);
    assert_eq!(base.get("color"), Some(&serde_json::Value::from("black")));
}
