//! Catalog pipeline CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use cine_aggregate::{ExploreQuery, GenreFilter};
use cine_cli::commands::{run_clean, run_export, run_load};
use cine_cli::logging::{LogConfig, LogFormat, init_logging};

mod cli;
mod summary;

use crate::cli::{Cli, Command, ExploreArgs, LogFormatArg, LogLevelArg};
use crate::summary::{print_clean, print_explore, print_genres, print_summary};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli.command) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Summary(args) => {
            let catalog = run_load(&args.csv, args.options())?;
            print_summary(&catalog);
        }
        Command::Export(args) => {
            let catalog = run_load(&args.load.csv, args.load.options())?;
            run_export(&catalog, args.output.as_deref())?;
        }
        Command::Explore(args) => run_explore(&args)?,
        Command::Clean(args) => {
            let result = run_clean(&args.input, args.output.as_deref(), args.max_file_size)?;
            print_clean(&result);
        }
        Command::Genres(args) => {
            let catalog = run_load(&args.csv, args.options())?;
            print_genres(&catalog.views().genre_options);
        }
    }
    Ok(())
}

fn run_explore(args: &ExploreArgs) -> Result<()> {
    let catalog = run_load(&args.load.csv, args.load.options())?;
    let query = ExploreQuery::new(args.min_rating, GenreFilter::parse(&args.genre));
    let view = catalog.explore(&query);
    if args.json {
        let json = serde_json::to_string_pretty(&view).context("serialize explore view")?;
        println!("{json}");
    } else {
        print_explore(&query, &view);
    }
    Ok(())
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_rows = cli.log_rows;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
