use crate::core::{PlanetPosition, ShapePattern};
use crate::formatting::{formatter_for, percent_bar, FormattingConfig, OutputFormatter};
use crate::geometry::normalize;
use std::io::Write;

const BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_pattern(
        &mut self,
        pattern: &ShapePattern,
        positions: &[PlanetPosition],
    ) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_pattern(
        &mut self,
        pattern: &ShapePattern,
        _positions: &[PlanetPosition],
    ) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(pattern)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self {
            writer,
            formatter: formatter_for(formatting),
        }
    }

    fn write_header(&mut self, pattern: &ShapePattern) -> anyhow::Result<()> {
        let f = &self.formatter;
        writeln!(self.writer, "{}", f.header("Chart Shape"))?;
        writeln!(self.writer, "{}", f.dim("==========="))?;
        writeln!(
            self.writer,
            "{} {}",
            f.bold("Pattern:"),
            f.pattern(&pattern.display_label())
        )?;
        writeln!(
            self.writer,
            "{} {:.0}%",
            f.bold("Confidence:"),
            pattern.confidence * 100.0
        )?;
        writeln!(self.writer, "{}", pattern.description)?;
        writeln!(
            self.writer,
            "{} {}",
            f.bold("Keywords:"),
            f.info(&pattern.keywords.join(", "))
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_geometry(&mut self, pattern: &ShapePattern) -> anyhow::Result<()> {
        let f = &self.formatter;
        writeln!(self.writer, "{}", f.header("Geometry"))?;
        writeln!(self.writer, "  Span:           {:>7.2}°", pattern.span)?;
        writeln!(self.writer, "  Widest gap:     {:>7.2}°", pattern.max_gap)?;
        writeln!(self.writer, "  Void midpoint:  {:>7.2}°", pattern.void_midpoint)?;

        let edges = [
            ("Leading body:", &pattern.leading_planet),
            ("Trailing body:", &pattern.trailing_planet),
        ];
        for (label, name) in edges {
            if let Some(name) = name {
                writeln!(self.writer, "  {:<15} {}", label, name)?;
            }
        }
        if !pattern.handle_planets.is_empty() {
            writeln!(
                self.writer,
                "  {:<15} {}",
                "Handle:",
                f.warning(&pattern.handle_planets.join(", "))
            )?;
        }
        for (i, cluster) in pattern.clusters.iter().enumerate() {
            writeln!(
                self.writer,
                "  Cluster {}:      {} ({:.1}° wide, centred {:.1}°)",
                i + 1,
                cluster.members.join(", "),
                cluster.width(),
                cluster.center()
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_bodies(&mut self, positions: &[PlanetPosition]) -> anyhow::Result<()> {
        let mut sorted: Vec<&PlanetPosition> = positions.iter().collect();
        sorted.sort_by(|a, b| normalize(a.longitude).total_cmp(&normalize(b.longitude)));

        writeln!(self.writer, "{}", self.formatter.header("Bodies"))?;
        for pos in sorted {
            let marker = if pos.is_retrograde() { " R" } else { "" };
            writeln!(
                self.writer,
                "  {:<12} {:>7.2}°{}",
                pos.name,
                normalize(pos.longitude),
                marker
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_distributions(&mut self, pattern: &ShapePattern) -> anyhow::Result<()> {
        let h = pattern.hemispheres;
        let e = pattern.elements;
        let m = pattern.modalities;
        let sections: [(&str, Vec<(&str, f64)>); 3] = [
            (
                "Hemispheres",
                vec![
                    ("North", h.north),
                    ("South", h.south),
                    ("East", h.east),
                    ("West", h.west),
                ],
            ),
            (
                "Elements",
                vec![
                    ("Fire", e.fire),
                    ("Earth", e.earth),
                    ("Air", e.air),
                    ("Water", e.water),
                ],
            ),
            (
                "Modalities",
                vec![
                    ("Cardinal", m.cardinal),
                    ("Fixed", m.fixed),
                    ("Mutable", m.mutable),
                ],
            ),
        ];

        for (title, rows) in sections {
            writeln!(self.writer, "{}", self.formatter.header(title))?;
            for (label, percent) in rows {
                writeln!(
                    self.writer,
                    "  {:<9} {} {:>5.1}%",
                    label,
                    self.formatter.dim(&percent_bar(percent, BAR_WIDTH)),
                    percent
                )?;
            }
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_pattern(
        &mut self,
        pattern: &ShapePattern,
        positions: &[PlanetPosition],
    ) -> anyhow::Result<()> {
        self.write_header(pattern)?;
        self.write_geometry(pattern)?;
        self.write_bodies(positions)?;
        self.write_distributions(pattern)?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer<'a, W: Write + 'a>(
    writer: W,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::classify;

    fn sample() -> (ShapePattern, Vec<PlanetPosition>) {
        let positions = vec![
            PlanetPosition::new("Sun", 10.0),
            PlanetPosition::new("Moon", 20.0),
            PlanetPosition::new("Mercury", 30.0).with_speed(-0.5),
            PlanetPosition::new("Venus", 40.0),
        ];
        (classify(&positions).unwrap(), positions)
    }

    #[test]
    fn test_json_writer_emits_pattern_type() {
        let (pattern, positions) = sample();
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_pattern(&pattern, &positions)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["type"], "Bundle");
        assert_eq!(value["span"], 30.0);
        assert_eq!(value["leading_planet"], "Sun");
        assert!(value.get("handle_planet").is_none());
    }

    #[test]
    fn test_terminal_writer_plain_output() {
        let (pattern, positions) = sample();
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, FormattingConfig::plain())
            .write_pattern(&pattern, &positions)
            .unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("Pattern: Bundle"));
        assert!(text.contains("Leading body:   Sun"));
        assert!(text.contains("Mercury"));
        assert!(text.contains("° R"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse("markdown"), None);
    }
}
