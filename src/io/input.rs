use std::io::Read;
use std::path::Path;

use crate::core::{Error, PlanetPosition, Result, ResultExt};

/// Parse a `NAME=DEG` argument, e.g. `Sun=127.5` or `Moon=-12`.
pub fn parse_position_arg(arg: &str) -> Result<PlanetPosition> {
    let (name, degrees) = arg
        .split_once('=')
        .ok_or_else(|| Error::Input(format!("expected NAME=DEG, got '{}'", arg)))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(Error::Input(format!("missing body name in '{}'", arg)));
    }

    let longitude = degrees
        .trim()
        .parse::<f64>()
        .map_err(|e| Error::Input(format!("invalid longitude in '{}': {}", arg, e)))?;

    Ok(PlanetPosition::new(name, longitude))
}

/// Read a JSON array of positions
pub fn read_positions<R: Read>(reader: R) -> Result<Vec<PlanetPosition>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read positions from a JSON file, or stdin when `path` is `-`
pub fn read_positions_from_path(path: &Path) -> Result<Vec<PlanetPosition>> {
    if path.as_os_str() == "-" {
        log::debug!("Reading positions from stdin");
        return read_positions(std::io::stdin().lock()).context("reading positions from stdin");
    }

    let file = std::fs::File::open(path)?;
    read_positions(std::io::BufReader::new(file))
        .context(format!("reading positions from {}", path.display()))
}
