use libimagelist::Report;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

const VALID_HEADER: &str = "************* VALID IMAGES *************";
const INVALID_HEADER: &str = "************* INVALID IMAGES *************";

/// Control colored diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<&str> for ColorChoice {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }
}

/// Check if we should use colors in diagnostics
///
/// Diagnostics are written to stderr, so `Auto` checks stderr for a terminal.
pub fn should_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    }
}

/// Build the error line printed before a fatal exit
pub fn error_line(choice: ColorChoice, message: &str) -> String {
    if should_color(choice) {
        format!("{} {}", "✗".red().bold(), message)
    } else {
        format!("✗ {}", message)
    }
}

/// Print an error message with optional coloring
pub fn error(choice: ColorChoice, message: &str) {
    eprintln!("{}", error_line(choice, message));
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable pretty format
    Pretty,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "yaml" | "yml" => OutputFormat::Yaml,
            _ => OutputFormat::Pretty,
        }
    }
}

/// Trait for types that can be formatted for CLI output
pub trait Formattable: Serialize {
    /// Format the type for pretty (human-readable) output
    fn format_pretty(&self) -> String;
}

impl Formattable for Report {
    /// One image per line. In validation mode the valid and invalid lists are
    /// printed under their own headers, separated by a blank line.
    fn format_pretty(&self) -> String {
        let Some(invalid) = &self.invalid else {
            return self.valid.join("\n");
        };

        let mut lines: Vec<&str> = Vec::with_capacity(self.valid.len() + invalid.len() + 3);
        lines.push(VALID_HEADER);
        lines.extend(self.valid.iter().map(String::as_str));
        lines.push("");
        lines.push(INVALID_HEADER);
        lines.extend(invalid.iter().map(String::as_str));
        lines.join("\n")
    }
}

/// Format a single item for output
pub fn format_output<T: Formattable>(item: &T, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Pretty => Ok(item.format_pretty()),
        OutputFormat::Json => serde_json::to_string_pretty(item)
            .map_err(|e| format!("Failed to serialize to JSON: {}", e)),
        OutputFormat::Yaml => {
            serde_yaml::to_string(item).map_err(|e| format!("Failed to serialize to YAML: {}", e))
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
