//! Output formats
//!
//! Renderings of an analyzed [Document]:
//!
//! - `json`: the section array with camelCase fields, readable back with [from_json]
//! - `yaml`: the same structure as YAML
//! - `outline`: an indented, human-readable tree
//!
//! Outline example:
//!
//! ```text
//! {Header} 1-3
//!   $FileVersion = "2.1"
//! GCAUConfigurationData 4-7
//!   CHANNEL_1
//!     !Type = "Analog"
//!     Gain = "1.25"
//! BOM 8-10
//!   PartNumber = "GCAU-4410"
//! ```

use crate::agc::ast::Document;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown format '{0}' (expected json, yaml or outline)")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
    Outline,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Json, Format::Yaml, Format::Outline];

    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Yaml => "yaml",
            Format::Outline => "outline",
        }
    }
}

impl FromStr for Format {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}

/// Render a document in the given format. `pretty` only affects JSON.
pub fn render(doc: &Document, format: Format, pretty: bool) -> Result<String, FormatError> {
    match format {
        Format::Json => to_json(doc, pretty),
        Format::Yaml => to_yaml(doc),
        Format::Outline => Ok(to_outline(doc)),
    }
}

pub fn to_json(doc: &Document, pretty: bool) -> Result<String, FormatError> {
    let json = if pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    Ok(json)
}

/// Read back a document written by [to_json]. No analysis rules are re-checked.
pub fn from_json(json: &str) -> Result<Document, FormatError> {
    Ok(serde_json::from_str(json)?)
}

pub fn to_yaml(doc: &Document) -> Result<String, FormatError> {
    Ok(serde_yaml::to_string(doc)?)
}

pub fn to_outline(doc: &Document) -> String {
    let mut output = String::new();
    for section in doc {
        output.push_str(&format!(
            "{} {}-{}\n",
            section.name(),
            section.start_line,
            section.end_line
        ));
        for tag in &section.meta_tags {
            output.push_str(&format!("  {}\n", tag));
        }
        for object in &section.objects {
            output.push_str(&format!("  {}\n", object.name));
            for attribute in &object.attributes {
                output.push_str(&format!("    {}\n", attribute));
            }
        }
        for entry in &section.data {
            output.push_str(&format!("  {}\n", entry));
        }
    }
    output
}
