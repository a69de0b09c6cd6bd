//! Output formats for fitted lines and records.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// How results are written to stdout or the output file
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary and aligned columns (default)
    #[default]
    Table,
    /// `x,y` rows with a header
    Csv,
    /// Pretty-printed JSON including the fit statistics
    Json,
}

impl OutputFormat {
    /// Returns all available format names.
    pub fn variants() -> &'static [&'static str] {
        &["table", "csv", "json"]
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" | "text" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown format '{}'. Valid options: {}",
                s,
                OutputFormat::variants().join(", ")
            )),
        }
    }
}
