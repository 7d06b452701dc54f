//! farmgeo CLI - Command-line interface
//!
//! Measures farm boundary polygons, derives missing farm sizes and farmer
//! statuses from exported registration records, and reports hectare totals.
//! Results are written to stdout as JSON; logs go to stderr and the log file.

mod commands;
mod error;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::area::StrategyArg;
use commands::config::ConfigCommands;
use error::CliError;
use runner::CliRunner;

#[derive(Parser)]
#[command(name = "farmgeo")]
#[command(version = farmgeo::VERSION)]
#[command(about = "Farm boundary geometry and registration tooling", long_about = None)]
struct Cli {
    /// Configuration file (default: ~/.farmgeo/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Measure a boundary polygon (GeoJSON Polygon or coordinate ring)
    Area {
        /// JSON file to read ('-' for stdin)
        file: PathBuf,

        /// Area strategy (default from config)
        #[arg(long, value_enum)]
        strategy: Option<StrategyArg>,
    },

    /// Check that a boundary is a well-formed GeoJSON Polygon
    Validate {
        /// JSON file to read ('-' for stdin)
        file: PathBuf,
    },

    /// Fill in farm sizes derived from boundary polygons
    Resolve {
        /// JSON file of farm records ('-' for stdin)
        file: PathBuf,
    },

    /// Total hectares across a set of farms
    Total {
        /// JSON file of farm records ('-' for stdin)
        file: PathBuf,
    },

    /// Derive farmer statuses from farm counts
    Status {
        /// JSON file of farmer records with farmCount ('-' for stdin)
        file: PathBuf,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Cli {
        config,
        verbose,
        command,
    } = cli;

    match command {
        // Config commands must work even when the file itself is broken,
        // so they never load it through the runner.
        Commands::Config(command) => commands::config::run(config, command),
        Commands::Area { file, strategy } => {
            let runner = CliRunner::new(config, verbose)?;
            commands::area::run(&runner, &file, strategy)
        }
        Commands::Validate { file } => {
            let runner = CliRunner::new(config, verbose)?;
            commands::validate::run(&runner, &file)
        }
        Commands::Resolve { file } => {
            let runner = CliRunner::new(config, verbose)?;
            commands::resolve::run(&runner, &file)
        }
        Commands::Total { file } => {
            let runner = CliRunner::new(config, verbose)?;
            commands::total::run(&runner, &file)
        }
        Commands::Status { file } => {
            let runner = CliRunner::new(config, verbose)?;
            commands::status::run(&runner, &file)
        }
    }
}
