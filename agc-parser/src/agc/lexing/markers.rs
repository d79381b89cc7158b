//! Section markers
//!
//! The six recognized marker names plus the implicit header. A marker fixes the content kind
//! of its section: the two GCAU data sections carry objects, the header carries only meta
//! tags and every other marker carries key/value data.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a section of an AGC document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SectionMarker {
    /// The unnamed section preceding the first marker
    #[serde(rename = "{Header}")]
    Header,
    #[serde(rename = "GCAUConfigurationData")]
    GcauConfigurationData,
    #[serde(rename = "GCAUCalibrationData")]
    GcauCalibrationData,
    #[serde(rename = "BOM")]
    Bom,
    #[serde(rename = "TestAdditionalTests")]
    TestAdditionalTests,
    #[serde(rename = "SPReTPReOptions")]
    SpReTpReOptions,
    #[serde(rename = "EquationAdditionals")]
    EquationAdditionals,
}

/// What a section may contain besides meta tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// Meta tags only (the header)
    MetaOnly,
    /// `OBJECT.attribute = "value"` lines
    Objects,
    /// `key = "value"` lines
    Data,
}

impl SectionMarker {
    /// The recognized markers, in the order they are validated.
    pub const RECOGNIZED: [SectionMarker; 6] = [
        SectionMarker::GcauConfigurationData,
        SectionMarker::GcauCalibrationData,
        SectionMarker::Bom,
        SectionMarker::TestAdditionalTests,
        SectionMarker::SpReTpReOptions,
        SectionMarker::EquationAdditionals,
    ];

    /// Section searched by the locator when a query names none.
    pub const PRIMARY: SectionMarker = SectionMarker::GcauConfigurationData;

    /// The literal name used in AGC files.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionMarker::Header => "{Header}",
            SectionMarker::GcauConfigurationData => "GCAUConfigurationData",
            SectionMarker::GcauCalibrationData => "GCAUCalibrationData",
            SectionMarker::Bom => "BOM",
            SectionMarker::TestAdditionalTests => "TestAdditionalTests",
            SectionMarker::SpReTpReOptions => "SPReTPReOptions",
            SectionMarker::EquationAdditionals => "EquationAdditionals",
        }
    }

    /// Resolve a recognized marker from an identifier. Case-sensitive; the header is never
    /// returned since it has no control line.
    pub fn from_name(name: &str) -> Option<SectionMarker> {
        Self::RECOGNIZED
            .into_iter()
            .find(|marker| marker.as_str() == name)
    }

    pub fn content_kind(&self) -> ContentKind {
        match self {
            SectionMarker::Header => ContentKind::MetaOnly,
            SectionMarker::GcauConfigurationData | SectionMarker::GcauCalibrationData => {
                ContentKind::Objects
            }
            _ => ContentKind::Data,
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, SectionMarker::Header)
    }
}

impl fmt::Display for SectionMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
