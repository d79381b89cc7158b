//! Document element
//!
//! The whole analyzed file: the header section followed by the six recognized sections in
//! order of appearance. A document only comes out of a successful analysis, so every
//! recognized marker is present exactly once and every section is closed.
//!
//! Serializes as a plain array of sections.

use super::section::Section;
use crate::agc::locating::{locate, search, Located, Query};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    pub(crate) fn from_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The implicit first section. `None` only for a hand-built empty document.
    pub fn header(&self) -> Option<&Section> {
        self.sections.first().filter(|section| section.is_header())
    }

    /// Section by exact name (`{Header}` for the header)
    pub fn section(&self, name: &str) -> Option<&Section> {
        search::find_first(&self.sections, name, |section| section.name())
    }

    pub fn locate(&self, query: &Query) -> Option<Located<'_>> {
        locate(query, self)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
