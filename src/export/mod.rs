//! # Export
//!
//! Fitted lines and observation sets are written as CSV (header plus one row
//! per point) or JSON. Writers take any [`std::io::Write`], so the same code
//! serves files, stdout and in-memory buffers.
//!
//! ```rust
//! use mantle_diffusivity::arrhenius::fit_line;
//! use mantle_diffusivity::export::write_line_csv;
//!
//! let line = fit_line(&[700.0, 800.0], &[-14.0, -12.0])?;
//! let mut buffer = Vec::new();
//! write_line_csv(&line, &mut buffer)?;
//! assert!(buffer.starts_with(b"x,y\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;

use log::debug;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::arrhenius::{FittedLine, ObservationSet};
use crate::record::{Diffusivities, Orientation};
use crate::units;

pub use error::ExportError;

#[derive(Serialize)]
struct LineRow {
    x: f64,
    y: f64,
}

#[derive(Serialize)]
struct ObservationRow {
    celsius: f64,
    x: f64,
    log_d: f64,
}

#[derive(Serialize)]
struct RecordRow {
    orientation: Orientation,
    celsius: f64,
    x: f64,
    log_d: f64,
    log_d_error: Option<f64>,
}

/// Write a fitted line as `x,y` rows with a header
pub fn write_line_csv<W: Write>(line: &FittedLine, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (x, y) in line.points() {
        csv_writer.serialize(LineRow { x, y })?;
    }
    csv_writer.flush()?;
    debug!("Wrote {} line points as CSV", line.len());
    Ok(())
}

/// Write observations as `celsius,x,log_d` rows with a header
pub fn write_observations_csv<W: Write>(
    observations: &ObservationSet,
    writer: W,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for (celsius, log_d) in observations.iter() {
        csv_writer.serialize(ObservationRow {
            celsius,
            x: units::to_arrhenius_x(celsius),
            log_d,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write every measurement of a record, one row per point, with its orientation
pub fn write_record_csv<W: Write>(record: &Diffusivities, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for orientation in record.orientations() {
        let observations = record.observations(orientation)?;
        let errors = record.log_d_error(orientation);
        for (i, (celsius, log_d)) in observations.iter().enumerate() {
            csv_writer.serialize(RecordRow {
                orientation,
                celsius,
                x: units::to_arrhenius_x(celsius),
                log_d,
                log_d_error: errors.and_then(|e| e.get(i).copied()),
            })?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

/// Serialize a fitted line to pretty JSON (`{"x": [...], "y": [...]}`)
pub fn line_to_json(line: &FittedLine) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(line)?)
}

/// Serialize any exportable value to pretty JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write a fitted line to a CSV file
pub fn write_line_csv_file<P: AsRef<Path>>(line: &FittedLine, path: P) -> Result<(), ExportError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_line_csv(line, &mut writer)?;
    writer.flush()?;
    debug!("Line written to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrhenius::{fit_line, fit_line_with_domain};

    #[test]
    fn test_line_csv_layout() {
        let line = fit_line_with_domain(&[700.0, 800.0], &[-14.0, -12.0], 8.0, 9.0).unwrap();
        let mut buffer = Vec::new();
        write_line_csv(&line, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 101);
        assert_eq!(lines[0], "x,y");
        assert!(lines[1].starts_with("8.0,"));
        assert!(lines[100].starts_with("9.0,"));
    }

    #[test]
    fn test_line_json_has_both_series() {
        let line = fit_line(&[700.0, 800.0], &[-14.0, -12.0]).unwrap();
        let json = line_to_json(&line).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["x"].as_array().unwrap().len(), 100);
        assert_eq!(value["y"].as_array().unwrap().len(), 100);
    }

    #[test]
    fn test_observations_csv() {
        let set = ObservationSet::from_parallel(vec![726.85], vec![-12.5]).unwrap();
        let mut buffer = Vec::new();
        write_observations_csv(&set, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut rows = text.lines();
        assert_eq!(rows.next(), Some("celsius,x,log_d"));
        let row: Vec<f64> = rows
            .next()
            .unwrap()
            .split(',')
            .map(|v| v.parse().unwrap())
            .collect();
        assert!((row[1] - 10.0).abs() < 1e-9);
        assert_eq!(row[2], -12.5);
    }

    #[test]
    fn test_record_csv_includes_orientation_and_errors() {
        let record = Diffusivities::builder("test")
            .celsius_all([900.0, 1000.0])
            .log_d(Orientation::X, [-13.0, -12.0])
            .log_d_error(Orientation::X, [0.1, 0.2])
            .log_d(Orientation::Z, [-12.5, -11.5])
            .build()
            .unwrap();
        let mut buffer = Vec::new();
        write_record_csv(&record, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows[0], "orientation,celsius,x,log_d,log_d_error");
        assert_eq!(rows.len(), 5);
        assert!(rows[1].starts_with("x,900.0,"));
        assert!(rows[2].ends_with(",0.2"));
        assert!(rows[3].starts_with("z,"));
        assert!(rows[4].ends_with(','));
    }
}
