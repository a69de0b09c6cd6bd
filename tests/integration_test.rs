//! End-to-end tests: catalog lookup, pooled mechanism fits and export to disk.

use mantle_diffusivity::prelude::*;
use mantle_diffusivity::export::{to_json, write_line_csv_file, write_record_csv};
use mantle_diffusivity::validator::validate_record_file;
use std::fs;
use tempfile::tempdir;

fn read_csv(path: &std::path::Path) -> Vec<(f64, f64)> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["x", "y"]);
    reader
        .records()
        .map(|r| {
            let r = r.unwrap();
            (r[0].parse().unwrap(), r[1].parse().unwrap())
        })
        .collect()
}

/// A mechanism line written to CSV reads back as the same 100 points
#[test]
fn test_mechanism_line_to_csv_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fast.csv");

    let catalog = Catalog::global().unwrap();
    let line = Mechanism::Fast
        .fit_line(catalog, &LineDomain::default())
        .unwrap();
    write_line_csv_file(&line, &path).unwrap();

    let rows = read_csv(&path);
    assert_eq!(rows.len(), 100);
    assert_eq!(rows[0].0, 6.0);
    assert_eq!(rows[99].0, 10.0);
    for ((x, y), (lx, ly)) in rows.iter().zip(line.points()) {
        assert_eq!(*x, lx);
        assert_eq!(*y, ly);
    }
}

/// Pooling DM03 with the Padrón-Navarta [Mg] band changes the line
#[test]
fn test_forsterite_pools_differ() {
    let catalog = Catalog::global().unwrap();
    let domain = LineDomain::new(7.0, 9.0).unwrap();

    let dm03 = Mechanism::Dm03.fit_line(catalog, &domain).unwrap();
    let mg = Mechanism::ForsteriteMg.fit_line(catalog, &domain).unwrap();
    let all = Mechanism::Forsterite.fit_line(catalog, &domain).unwrap();

    assert_eq!(dm03.x(), mg.x());
    assert_ne!(dm03.y(), mg.y());
    assert_ne!(mg.y(), all.y());
}

/// A record's pooled fit matches fitting the concatenated per-axis data
#[test]
fn test_record_pooled_fit_matches_manual() {
    let catalog = Catalog::global().unwrap();
    let record = catalog.get("dm03").unwrap();

    let mut celsius = Vec::new();
    let mut log_d = Vec::new();
    for orientation in record.orientations() {
        celsius.extend_from_slice(record.celsius(orientation).unwrap());
        log_d.extend_from_slice(record.log_d(orientation).unwrap());
    }

    let pooled = record.all_observations().unwrap().fit().unwrap();
    let manual = fit_arrhenius(&celsius, &log_d).unwrap();
    assert_eq!(pooled, manual);
    assert_eq!(pooled.count, 16);
}

/// Reported KM98 laws and the fit through the KM98 data agree in sign and magnitude
#[test]
fn test_km98_reported_law_vs_data() {
    let catalog = Catalog::global().unwrap();
    let record = catalog.get("km98-fast").unwrap();

    let law = record.law(Orientation::X).unwrap();
    let fit = record.observations(Orientation::X).unwrap().fit().unwrap();
    let fitted = ArrheniusLaw::from_fit(&fit);

    assert!(law.slope() < 0.0);
    assert!(fit.slope < 0.0);
    assert!((law.log_d_at(900.0) - fitted.log_d_at(900.0)).abs() < 1.0);
}

/// A record exported as JSON validates cleanly when read back from disk
#[test]
fn test_record_json_roundtrip_through_validator() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("km98-slow.json");

    let catalog = Catalog::global().unwrap();
    let record = catalog.get("km98-slow").unwrap();
    fs::write(&path, record.to_json().unwrap()).unwrap();

    let restored = Diffusivities::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(&restored, record);

    let report = validate_record_file(&path).unwrap();
    assert!(!report.has_failures(), "{}", report);
}

/// Every catalog record can be written as CSV measurements
#[test]
fn test_every_record_exports() {
    let catalog = Catalog::global().unwrap();
    for entry in catalog.iter() {
        let mut buffer = Vec::new();
        write_record_csv(&entry.record, &mut buffer).unwrap();
        let rows = String::from_utf8(buffer).unwrap().lines().count();
        let points = entry.record.all_observations().unwrap().len();
        assert_eq!(rows, points + 1, "{}", entry.id);
    }
}

/// The whole catalog validates without failures
#[test]
fn test_catalog_validation() {
    let report = validate_catalog(Catalog::global().unwrap());
    assert!(!report.has_failures(), "{}", report);
    assert!(report.to_string().contains("Diffusivity Catalog Validation Report"));
}

/// Fit statistics serialize alongside the line
#[test]
fn test_fit_json() {
    let fit = fit_arrhenius(&[900.0, 1000.0], &[-13.994, -12.783]).unwrap();
    let json = to_json(&fit).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["count"], 2);
    assert!(value["slope"].as_f64().unwrap() < 0.0);

    let line = fit.sample(&LineDomain::default()).unwrap();
    let json = line_to_json(&line).unwrap();
    assert!(json.contains("\"x\""));
}
