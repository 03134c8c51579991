//! CLI argument definitions for the catalog tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use cine_core::{PipelineOptions, SchemaChoice};
use cine_ingest::MAX_CSV_FILE_SIZE;

#[derive(Parser)]
#[command(
    name = "cine",
    version,
    about = "Film and series catalog pipeline",
    long_about = "Clean, deduplicate and validate a film/series catalog CSV and derive\n\
                  the aggregate views behind the catalog charts.\n\n\
                  Reads both the raw scraped layout and the pre-cleaned layout."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow trace events for individual rows (dropped, replaced, rejected).
    #[arg(long = "log-rows", global = true)]
    pub log_rows: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load a catalog and print its report and headline views.
    Summary(LoadArgs),

    /// Write records, views and report as JSON.
    Export(ExportArgs),

    /// Filter by minimum rating and genre.
    Explore(ExploreArgs),

    /// Convert a raw catalog into the pre-cleaned layout.
    Clean(CleanArgs),

    /// List every genre in the clean set.
    Genres(LoadArgs),
}

#[derive(Args)]
pub struct LoadArgs {
    /// Catalog CSV file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Input layout (detected from the headers by default).
    #[arg(long = "schema", value_enum, default_value = "auto")]
    pub schema: SchemaArg,

    /// Year used to reject implausible future release years.
    #[arg(
        long = "current-year",
        value_name = "YEAR",
        value_parser = clap::value_parser!(i32).range(1900..=9999)
    )]
    pub current_year: Option<i32>,
}

impl LoadArgs {
    pub fn options(&self) -> PipelineOptions {
        let options = PipelineOptions::new().with_schema(self.schema.into());
        match self.current_year {
            Some(year) => options.with_current_year(year),
            None => options,
        }
    }
}

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Output file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ExploreArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Minimum rating, inclusive.
    #[arg(long = "min-rating", default_value_t = 0.0)]
    pub min_rating: f64,

    /// Genre to keep, or "all".
    #[arg(long = "genre", default_value = "all")]
    pub genre: String,

    /// Print the result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct CleanArgs {
    /// Raw catalog CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Output file (default: <CSV stem>_clean.csv next to the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Refuse inputs larger than this many bytes.
    #[arg(long = "max-file-size", value_name = "BYTES", default_value_t = MAX_CSV_FILE_SIZE)]
    pub max_file_size: u64,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemaArg {
    Auto,
    Legacy,
    Cleaned,
}

impl From<SchemaArg> for SchemaChoice {
    fn from(arg: SchemaArg) -> Self {
        match arg {
            SchemaArg::Auto => SchemaChoice::Auto,
            SchemaArg::Legacy => SchemaChoice::Legacy,
            SchemaArg::Cleaned => SchemaChoice::Cleaned,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_load_args_to_options() {
        let cli = Cli::parse_from([
            "cine",
            "summary",
            "n_movies.csv",
            "--schema",
            "cleaned",
            "--current-year",
            "2024",
        ]);
        let Command::Summary(args) = cli.command else {
            panic!("expected summary");
        };
        let options = args.options();
        assert_eq!(options.schema, SchemaChoice::Cleaned);
        assert_eq!(options.current_year, Some(2024));
    }

    #[test]
    fn test_current_year_out_of_range() {
        for year in ["1899", "10000", "2147483647"] {
            let result = Cli::try_parse_from([
                "cine",
                "summary",
                "n_movies.csv",
                "--current-year",
                year,
            ]);
            assert!(result.is_err(), "year {year}");
        }
    }

    #[test]
    fn test_explore_defaults() {
        let cli = Cli::parse_from(["cine", "explore", "n_movies.csv", "--log-rows"]);
        assert!(cli.log_rows);
        let Command::Explore(args) = cli.command else {
            panic!("expected explore");
        };
        assert_eq!(args.min_rating, 0.0);
        assert_eq!(args.genre, "all");
        assert!(!args.json);
    }
}
