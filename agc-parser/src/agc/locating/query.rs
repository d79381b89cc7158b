//! Locator queries
//!
//! A query names a section and at most one refinement. Refinements are considered in this
//! order, the first one present wins:
//!
//! 1. `meta_tag`: every meta tag of the section with that name
//! 2. `data_key`: every data entry of the section with that key
//! 3. `object`: the object with that name, or with `attribute` one of its attributes
//!
//! Without a refinement the section itself is returned. Without a section the primary
//! `GCAUConfigurationData` section is searched.

use crate::agc::lexing::SectionMarker;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub section: Option<String>,
    pub meta_tag: Option<String>,
    pub data_key: Option<String>,
    pub object: Option<String>,
    pub attribute: Option<String>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(mut self, name: impl Into<String>) -> Self {
        self.section = Some(name.into());
        self
    }

    pub fn meta_tag(mut self, name: impl Into<String>) -> Self {
        self.meta_tag = Some(name.into());
        self
    }

    pub fn data_key(mut self, name: impl Into<String>) -> Self {
        self.data_key = Some(name.into());
        self
    }

    pub fn object(mut self, name: impl Into<String>) -> Self {
        self.object = Some(name.into());
        self
    }

    /// Only meaningful together with [Query::object]
    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.attribute = Some(name.into());
        self
    }

    /// The section name this query resolves against.
    pub fn section_name(&self) -> &str {
        self.section
            .as_deref()
            .unwrap_or(SectionMarker::PRIMARY.as_str())
    }
}
