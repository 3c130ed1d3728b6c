use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// How option 2 writes the database to stdout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The `Name:/Sex:/Age:/Job:` file format
    #[default]
    Text,
    /// A JSON array of records
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "staffdb", bin_name = "staffdb", version)]
#[command(about = "Interactive employee database", long_about = None)]
pub struct Cli {
    /// Database file to load at startup
    pub database: Option<PathBuf>,

    /// Write the database to this file on exit
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Listing format for "Print database to screen"
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Config file (defaults to the platform config directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
