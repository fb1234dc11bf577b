use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::config::{self, ChartshapeConfig, ShapeDetectionConfig};
use crate::core::PlanetPosition;
use crate::formatting::FormattingConfig;
use crate::io::{self, OutputFormat};
use crate::shapes::classify_with_config;

/// Everything the classify command needs, resolved from CLI arguments
#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    pub input: Option<PathBuf>,
    pub positions: Vec<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub overrides: ThresholdOverrides,
    pub formatting: FormattingConfig,
}

/// Threshold flags that take precedence over the config file
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThresholdOverrides {
    pub bundle_max_span: Option<f64>,
    pub bowl_max_span: Option<f64>,
    pub bucket_min_gap: Option<f64>,
    pub seesaw_min_gap: Option<f64>,
}

impl ThresholdOverrides {
    // Pure function: layer the overrides onto a base config
    pub fn apply(&self, base: ShapeDetectionConfig) -> ShapeDetectionConfig {
        ShapeDetectionConfig {
            bundle_max_span: self.bundle_max_span.unwrap_or(base.bundle_max_span),
            bowl_max_span: self.bowl_max_span.unwrap_or(base.bowl_max_span),
            bucket_min_gap: self.bucket_min_gap.unwrap_or(base.bucket_min_gap),
            seesaw_min_gap: self.seesaw_min_gap.unwrap_or(base.seesaw_min_gap),
            ..base
        }
    }
}

pub fn handle_classify(config: ClassifyConfig) -> Result<()> {
    let file_config = load_file_config(config.config.as_ref())?;
    let shape_config = config.overrides.apply(file_config.shape_config());
    shape_config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid thresholds: {}", e))?;

    let positions = gather_positions(config.input.as_ref(), &config.positions)?;
    log::info!("Classifying {} positions", positions.len());

    let pattern = classify_with_config(&positions, &shape_config)?;

    let format = resolve_format(config.format, &file_config);
    let formatting = resolve_formatting(config.formatting, &file_config);
    let sink: Box<dyn Write> = match config.output {
        Some(ref path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    let mut writer = io::create_writer(sink, format, formatting);
    writer.write_pattern(&pattern, &positions)?;

    if let Some(path) = config.output {
        log::info!("Wrote {} result to {}", pattern.pattern_type, path.display());
    }
    Ok(())
}

fn load_file_config(explicit: Option<&PathBuf>) -> Result<ChartshapeConfig> {
    match explicit {
        Some(path) => config::load_config_from_path(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(config::load_config()),
    }
}

/// Combine file input and `NAME=DEG` flags, file entries first
pub fn gather_positions(input: Option<&PathBuf>, args: &[String]) -> Result<Vec<PlanetPosition>> {
    let mut positions = match input {
        Some(path) => io::read_positions_from_path(path)?,
        None => Vec::new(),
    };
    for arg in args {
        positions.push(io::parse_position_arg(arg)?);
    }
    Ok(positions)
}

// Pure function: CLI flag, then config file, then terminal
fn resolve_format(flag: Option<OutputFormat>, file_config: &ChartshapeConfig) -> OutputFormat {
    flag.or_else(|| {
        file_config.default_format().and_then(|name| {
            let parsed = OutputFormat::parse(name);
            if parsed.is_none() {
                log::warn!("Unknown default_format '{}' in config, using terminal", name);
            }
            parsed
        })
    })
    .unwrap_or(OutputFormat::Terminal)
}

// Pure function: an explicit use_color = false in the config disables colors
fn resolve_formatting(cli: FormattingConfig, file_config: &ChartshapeConfig) -> FormattingConfig {
    match file_config.output.as_ref().and_then(|o| o.use_color) {
        Some(false) => FormattingConfig::plain(),
        _ => cli,
    }
}
