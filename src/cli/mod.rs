use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use mantle_diffusivity::arrhenius::LineDomain;
use mantle_diffusivity::catalog::Mineral;
use mantle_diffusivity::mechanism::Mechanism;
use mantle_diffusivity::record::Orientation;

mod fit;
mod kunlun;
mod law;
mod list;
mod mechanism;
mod show;
mod validate;

mod config;
mod format;
mod output;

pub use config::Config;
pub use format::OutputFormat;

/// Diffusivity catalog and Arrhenius fitting for mantle minerals
#[derive(Parser)]
#[command(name = "diffusivity")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for line-producing commands.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    /// Summary and aligned columns
    Table,
    /// `x,y` rows with a header
    Csv,
    /// JSON with fit statistics
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// One orientation, or every orientation of a record pooled together
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSelection {
    /// A single orientation
    One(Orientation),
    /// All orientations pooled
    All,
}

impl fmt::Display for AxisSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisSelection::One(orientation) => write!(f, "{}", orientation),
            AxisSelection::All => write!(f, "all"),
        }
    }
}

impl FromStr for AxisSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(AxisSelection::All);
        }
        s.parse::<Orientation>()
            .map(AxisSelection::One)
            .map_err(|_| {
                format!(
                    "Unknown axis '{}'. Valid options: {}, all",
                    s,
                    Orientation::variants().join(", ")
                )
            })
    }
}

/// Sampling and output options shared by the line-producing commands
#[derive(Args, Clone, Debug, Default)]
pub struct LineOptions {
    /// Lower bound of the sampled domain, in 10⁴/T(K) (default: 6.0)
    #[arg(long, value_name = "X", allow_negative_numbers = true)]
    low: Option<f64>,

    /// Upper bound of the sampled domain, in 10⁴/T(K) (default: 10.0)
    #[arg(long, value_name = "X", allow_negative_numbers = true)]
    high: Option<f64>,

    /// Output format (table, csv, json)
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Load defaults from a TOML config file (default: ./diffusivity.toml if present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

impl LineOptions {
    /// Merge flags with the config file: flags win, then file, then defaults
    pub fn resolve(&self) -> Result<(LineDomain, OutputFormat)> {
        let config = Config::load(self.config.as_deref())?;
        let domain = config.domain(self.low, self.high)?;
        let format = config.format(self.format.map(OutputFormat::from));
        Ok((domain, format))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog records
    List {
        /// Only records of this mineral (clinopyroxene/cpx, olivine/ol)
        #[arg(short, long)]
        mineral: Option<Mineral>,
    },

    /// Show the measurements of one record
    Show {
        /// Record identifier, as printed by `list`
        #[arg(value_name = "ID")]
        id: String,

        /// Print the record as JSON
        #[arg(long, conflicts_with = "csv")]
        json: bool,

        /// Print one CSV row per measurement
        #[arg(long)]
        csv: bool,
    },

    /// Fit an Arrhenius line through a record
    Fit {
        /// Record identifier, as printed by `list`
        #[arg(value_name = "ID")]
        id: String,

        /// Orientation to fit (x, y, z, u), or all orientations pooled
        #[arg(short, long, default_value = "all")]
        axis: AxisSelection,

        #[command(flatten)]
        options: LineOptions,
    },

    /// Fit one line through a pooled diffusion mechanism
    Mechanism {
        /// Mechanism (dm03, forsterite-mg, forsterite, fast, slow)
        #[arg(value_name = "NAME")]
        mechanism: Mechanism,

        #[command(flatten)]
        options: LineOptions,
    },

    /// Sample the Arrhenius law reported with a record
    Law {
        /// Record identifier, as printed by `list`
        #[arg(value_name = "ID")]
        id: String,

        /// Orientation of the reported law (x, y, z, u)
        #[arg(short, long)]
        axis: Orientation,

        #[command(flatten)]
        options: LineOptions,
    },

    /// Validate the catalog, or a record stored as JSON
    Validate {
        /// JSON record file (validates the built-in catalog when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Show the Kunlun diopside profile fits and their averages
    Kunlun,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List { mineral } => list::run(mineral),
        Commands::Show { id, json, csv } => show::run(id, json, csv),
        Commands::Fit { id, axis, options } => fit::run(id, axis, options),
        Commands::Mechanism { mechanism, options } => mechanism::run(mechanism, options),
        Commands::Law { id, axis, options } => law::run(id, axis, options),
        Commands::Validate { file } => validate::run(file),
        Commands::Kunlun => kunlun::run(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_fit_command() {
        let cli = Cli::try_parse_from([
            "diffusivity", "-vv", "fit", "km98-fast", "--axis", "b", "--low", "7", "-f", "csv",
        ])
        .unwrap();
        assert_eq!(cli.verbosity(), 2);
        match cli.command {
            Commands::Fit { id, axis, options } => {
                assert_eq!(id, "km98-fast");
                assert_eq!(axis, AxisSelection::One(Orientation::Y));
                assert_eq!(options.low, Some(7.0));
                assert_eq!(options.high, None);
                assert!(matches!(options.format, Some(FormatArg::Csv)));
            }
            _ => panic!("expected fit command"),
        }
    }

    #[test]
    fn test_fit_axis_defaults_to_all() {
        let cli = Cli::try_parse_from(["diffusivity", "fit", "dm03"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Fit { axis: AxisSelection::All, .. }
        ));
    }

    #[test]
    fn test_parse_mechanism_and_mineral() {
        let cli = Cli::try_parse_from(["diffusivity", "mechanism", "forsterite-mg"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Mechanism { mechanism: Mechanism::ForsteriteMg, .. }
        ));

        let cli = Cli::try_parse_from(["diffusivity", "list", "--mineral", "cpx"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List { mineral: Some(Mineral::Clinopyroxene) }
        ));

        assert!(Cli::try_parse_from(["diffusivity", "mechanism", "medium"]).is_err());
    }

    #[test]
    fn test_show_flags_conflict() {
        assert!(Cli::try_parse_from(["diffusivity", "show", "dm03", "--json", "--csv"]).is_err());
    }

    #[test]
    fn test_axis_selection_parsing() {
        assert_eq!("ALL".parse::<AxisSelection>().unwrap(), AxisSelection::All);
        assert_eq!(
            "[001]".parse::<AxisSelection>().unwrap(),
            AxisSelection::One(Orientation::Z)
        );
        assert!("w".parse::<AxisSelection>().is_err());
        assert_eq!(AxisSelection::One(Orientation::Unoriented).to_string(), "unoriented");
    }
}
