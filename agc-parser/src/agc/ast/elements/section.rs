//! Section element
//!
//! A named, line-bounded region of the file. Recognized sections span from their
//! `$Marker = "Start"` line to their `$Marker = "End"` line, both inclusive. The header starts
//! at line 1 and ends right before the first recognized section opens.
//!
//! The marker fixes what the section may hold: only meta tags for the header, objects for the
//! two GCAU sections, data entries for everything else. Meta tags are legal everywhere.
//!
//! Serialized lists are omitted when empty, except the header's `metaTags`, which is always
//! written.

use super::data::DataEntry;
use super::meta_tag::MetaTag;
use super::object::ObjectEntry;
use crate::agc::lexing::{ContentKind, SectionMarker};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(rename = "name")]
    pub marker: SectionMarker,
    pub start_line: usize,
    pub end_line: usize,
    #[serde(default)]
    pub meta_tags: Vec<MetaTag>,
    #[serde(default)]
    pub objects: Vec<ObjectEntry>,
    #[serde(default)]
    pub data: Vec<DataEntry>,
}

impl Section {
    pub fn new(marker: SectionMarker, start_line: usize, end_line: usize) -> Self {
        Self {
            marker,
            start_line,
            end_line,
            meta_tags: Vec::new(),
            objects: Vec::new(),
            data: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.marker.as_str()
    }

    pub fn content_kind(&self) -> ContentKind {
        self.marker.content_kind()
    }

    pub fn is_header(&self) -> bool {
        self.marker.is_header()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}-{}]",
            self.marker, self.start_line, self.end_line
        )
    }
}

impl Serialize for Section {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let with_meta_tags = self.is_header() || !self.meta_tags.is_empty();
        let with_objects = !self.objects.is_empty();
        let with_data = !self.data.is_empty();
        let len = 3 + [with_meta_tags, with_objects, with_data]
            .into_iter()
            .filter(|present| *present)
            .count();

        let mut state = serializer.serialize_struct("Section", len)?;
        state.serialize_field("name", &self.marker)?;
        state.serialize_field("startLine", &self.start_line)?;
        state.serialize_field("endLine", &self.end_line)?;
        if with_meta_tags {
            state.serialize_field("metaTags", &self.meta_tags)?;
        }
        if with_objects {
            state.serialize_field("objects", &self.objects)?;
        }
        if with_data {
            state.serialize_field("data", &self.data)?;
        }
        state.end()
    }
}
