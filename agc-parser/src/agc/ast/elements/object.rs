//! Object element
//!
//! Objects live in the GCAU sections and are written one attribute per line:
//!
//! ```text
//! CHANNEL_1.!Type = "Analog"
//! CHANNEL_1.Gain = "1.25"
//! ```
//!
//! All lines naming the same object within a section feed the same entry, in order of
//! appearance. A `!` before the attribute name marks it read-only. Attribute names are unique
//! per object.

use crate::agc::locating::search;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectEntry {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub name: String,
    pub value: String,
    pub read_only: bool,
    pub line: usize,
}

impl ObjectEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Look up an attribute by name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        search::find_first(&self.attributes, name, |attr| attr.name.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }
}

impl Attribute {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        read_only: bool,
        line: usize,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            read_only,
            line,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.read_only { "!" } else { "" };
        write!(f, "{}{} = \"{}\"", marker, self.name, self.value)
    }
}
