pub mod input;
pub mod output;

use std::path::Path;

pub use input::{parse_position_arg, read_positions, read_positions_from_path};
pub use output::{create_writer, JsonWriter, OutputFormat, OutputWriter, TerminalWriter};

/// Write `content` to `path`, replacing any existing file
pub fn write_file(path: &Path, content: &str) -> crate::core::Result<()> {
    std::fs::write(path, content)?;
    Ok(())
}
