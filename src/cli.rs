use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chartshape")]
#[command(about = "Classify the shape pattern of a set of ecliptic positions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify a set of positions into a shape pattern
    Classify {
        /// JSON file holding an array of {name, longitude} objects ("-" for stdin)
        input: Option<PathBuf>,

        /// Additional position as NAME=DEG (repeatable)
        #[arg(short, long = "position", value_name = "NAME=DEG")]
        positions: Vec<String>,

        /// Output format (defaults to the config file's choice, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .chartshape.toml)
        #[arg(short, long, env = "CHARTSHAPE_CONFIG")]
        config: Option<PathBuf>,

        /// Largest span classified as a Bundle
        #[arg(long)]
        bundle_max_span: Option<f64>,

        /// Largest span classified as a Bowl
        #[arg(long)]
        bowl_max_span: Option<f64>,

        /// Minimum combined gap around a Bucket handle
        #[arg(long)]
        bucket_min_gap: Option<f64>,

        /// Gap that splits Seesaw clusters
        #[arg(long)]
        seesaw_min_gap: Option<f64>,

        /// Disable colors
        #[arg(long)]
        plain: bool,
    },

    /// Write a default .chartshape.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
        }
    }
}

/// Map `-v` occurrences to a log level filter
pub fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}
