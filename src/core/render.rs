//! Renderer module
//!
//! Renders a Report to the plain-text report layout or to JSON

use crate::core::model::ElementKind;
use crate::core::report::Report;
use std::fmt::Write as _;
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::with_pretty(format, false),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    pub fn render(&self, report: &Report) -> String {
        match self.config.format {
            OutputFormat::Text => self.render_text(report),
            OutputFormat::Json => self.render_json(report),
        }
    }

    /// Render to a writer
    pub fn render_to<W: Write>(&self, report: &Report, mut writer: W) -> std::io::Result<()> {
        let output = self.render(report);
        writer.write_all(output.as_bytes())?;
        writer.flush()
    }

    fn render_text(&self, report: &Report) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "Total {}: {}.", report.label(), report.total());

        match report {
            // Lines may contain spaces, so each one gets its own row
            Report::Natural {
                kind: ElementKind::Line,
                data,
                ..
            } => {
                output.push_str("Sorted data:\n");
                for element in data {
                    let _ = writeln!(output, "{}", element);
                }
            }
            Report::Natural { data, .. } => {
                let joined = data
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join(" ");
                let _ = writeln!(output, "Sorted data: {}", joined);
            }
            Report::ByCount { entries, .. } => {
                for entry in entries {
                    let _ = writeln!(
                        output,
                        "{}: {} time(s), {}%",
                        entry.value, entry.count, entry.percentage
                    );
                }
            }
        }

        output
    }

    fn render_json(&self, report: &Report) -> String {
        let mut output = if self.config.pretty {
            serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
        } else {
            serde_json::to_string(report).unwrap_or_else(|_| "{}".to_string())
        };
        output.push('\n');
        output
    }
}
