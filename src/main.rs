use anyhow::Result;
use chartshape::cli::{log_level, Cli, Commands};
use chartshape::commands::{ClassifyConfig, ThresholdOverrides};
use chartshape::formatting::{ColorMode, FormattingConfig};
use clap::Parser;

// Main orchestrator function
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Classify {
            input,
            positions,
            format,
            output,
            config,
            bundle_max_span,
            bowl_max_span,
            bucket_min_gap,
            seesaw_min_gap,
            plain,
        } => {
            let classify_config = ClassifyConfig {
                input,
                positions,
                format: format.map(Into::into),
                output,
                config,
                overrides: ThresholdOverrides {
                    bundle_max_span,
                    bowl_max_span,
                    bucket_min_gap,
                    seesaw_min_gap,
                },
                formatting: create_formatting_config(plain),
            };
            chartshape::commands::handle_classify(classify_config)
        }
        Commands::Init { force } => chartshape::commands::init_config(force),
    }
}

// Side effect: RUST_LOG wins over -v when set
fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(log_level(verbosity))
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::new(ColorMode::Never)
    } else {
        FormattingConfig::from_env()
    }
}
