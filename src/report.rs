//! Reporters translate an analysis into console text.
use std::io::Write;

use derive_builder::Builder;

use crate::analysis::Analysis;
use crate::error::ReportError;

pub trait Reporter {
    fn report(&self, analysis: &Analysis, writer: &mut impl Write) -> Result<(), ReportError>;
}

/// Plain-text reporter: one line per biconnected component, then the articulation points, then
/// the bridges.
#[derive(Debug, Clone, Builder)]
pub struct TextReporter {
    /// Optional heading line, e.g. the name of the analysed file.
    #[builder(setter(into, strip_option), default)]
    pub heading: Option<String>,
    #[builder(default = "true")]
    pub show_articulations: bool,
    #[builder(default = "true")]
    pub show_bridges: bool,
}

impl Default for TextReporter {
    fn default() -> Self {
        Self {
            heading: None,
            show_articulations: true,
            show_bridges: true,
        }
    }
}

impl Reporter for TextReporter {
    fn report(&self, analysis: &Analysis, writer: &mut impl Write) -> Result<(), ReportError> {
        if let Some(heading) = &self.heading {
            writeln!(writer, "=== {} ===", heading)?;
        }

        for (number, component) in analysis.components.iter().enumerate() {
            write!(writer, "biconnected component {}:", number + 1)?;
            for edge in component {
                write!(writer, " {}", edge)?;
            }
            writeln!(writer)?;
        }

        if self.show_articulations {
            if analysis.articulations.is_empty() {
                writeln!(writer, "articulation points: none")?;
            } else {
                writeln!(
                    writer,
                    "articulation points: {}",
                    analysis.articulations.join(" ")
                )?;
            }
        }

        if self.show_bridges {
            if analysis.bridges.is_empty() {
                writeln!(writer, "bridges: none")?;
            } else {
                let bridges: Vec<String> =
                    analysis.bridges.iter().map(|edge| edge.to_string()).collect();
                writeln!(writer, "bridges: {}", bridges.join(" "))?;
            }
        }

        Ok(())
    }
}
