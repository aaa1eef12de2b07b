//! Output formats for composition records
//!
//! - `json`: compact JSON, the gold corpus shape
//! - `json-pretty`: indented JSON
//! - `yaml`: YAML mapping
//! - `simple`: one `component: 80% polyamide, 20% elastane` line per component

use crate::label::model::CompositionRecord;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    JsonPretty,
    Yaml,
    Simple,
}

/// Errors while selecting or producing an output format
#[derive(Debug)]
pub enum FormatError {
    UnknownFormat(String),
    Serialization(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnknownFormat(name) => write!(
                f,
                "Unknown output format '{}' (expected one of: {})",
                name,
                OutputFormat::NAMES.join(", ")
            ),
            FormatError::Serialization(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for FormatError {}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["json", "json-pretty", "yaml", "simple"];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::JsonPretty => "json-pretty",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Simple => "simple",
        }
    }

    pub fn render(&self, record: &CompositionRecord) -> Result<String, FormatError> {
        match self {
            OutputFormat::Json => serde_json::to_string(record)
                .map_err(|e| FormatError::Serialization(e.to_string())),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(record)
                .map_err(|e| FormatError::Serialization(e.to_string())),
            OutputFormat::Yaml => serde_yaml::to_string(record)
                .map_err(|e| FormatError::Serialization(e.to_string())),
            OutputFormat::Simple => Ok(render_simple(record)),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "json-pretty" => Ok(OutputFormat::JsonPretty),
            "yaml" => Ok(OutputFormat::Yaml),
            "simple" => Ok(OutputFormat::Simple),
            other => Err(FormatError::UnknownFormat(other.to_string())),
        }
    }
}

fn render_simple(record: &CompositionRecord) -> String {
    record
        .iter()
        .map(|(component, materials)| {
            let items = materials
                .iter()
                .map(|m| format!("{}% {}", m.proportion, m.material))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: {}", component, items)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
