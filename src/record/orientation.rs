use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::PlotStyle;

/// Crystallographic direction along which a diffusivity was measured
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Parallel to x, [100]
    X,
    /// Parallel to y, [010]
    Y,
    /// Parallel to z, [001]
    Z,
    /// Bulk or unoriented measurement
    Unoriented,
}

impl Orientation {
    /// All orientations in storage order
    pub const ALL: [Orientation; 4] = [
        Orientation::X,
        Orientation::Y,
        Orientation::Z,
        Orientation::Unoriented,
    ];

    /// The three crystallographic axes
    pub const AXES: [Orientation; 3] = [Orientation::X, Orientation::Y, Orientation::Z];

    /// Miller-index notation, if the orientation is an axis
    pub fn miller_index(&self) -> Option<&'static str> {
        match self {
            Orientation::X => Some("[100]"),
            Orientation::Y => Some("[010]"),
            Orientation::Z => Some("[001]"),
            Orientation::Unoriented => None,
        }
    }

    /// Single-letter code used in compact listings
    pub fn code(&self) -> char {
        match self {
            Orientation::X => 'x',
            Orientation::Y => 'y',
            Orientation::Z => 'z',
            Orientation::Unoriented => 'u',
        }
    }

    /// Default marker fill used when plotting points of this orientation
    pub fn marker_style(&self) -> PlotStyle {
        let fill = match self {
            Orientation::X => "left",
            Orientation::Y => "bottom",
            Orientation::Z => "right",
            Orientation::Unoriented => "none",
        };
        PlotStyle::new().with("fillstyle", fill)
    }

    /// Default line style used when plotting fits of this orientation
    pub fn line_style(&self) -> PlotStyle {
        let dash = match self {
            Orientation::X => "--",
            Orientation::Y => "-.",
            Orientation::Z => ":",
            Orientation::Unoriented => "-",
        };
        PlotStyle::new().with("linestyle", dash)
    }

    /// Accepted spellings, for error messages
    pub fn variants() -> &'static [&'static str] {
        &["x", "y", "z", "unoriented"]
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::X => write!(f, "x"),
            Orientation::Y => write!(f, "y"),
            Orientation::Z => write!(f, "z"),
            Orientation::Unoriented => write!(f, "unoriented"),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "x" | "a" | "[100]" | "100" => Ok(Orientation::X),
            "y" | "b" | "[010]" | "010" => Ok(Orientation::Y),
            "z" | "c" | "[001]" | "001" => Ok(Orientation::Z),
            "u" | "unoriented" | "bulk" => Ok(Orientation::Unoriented),
            _ => Err(format!(
                "Unknown orientation '{}'. Valid options: {}",
                s,
                Orientation::variants().join(", ")
            )),
        }
    }
}
