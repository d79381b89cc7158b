//! # agc-parser
//!
//! Analyzer and locator for AGC files.
//!
//! An AGC file is a line-oriented description of calibration and configuration data. It
//! starts with an implicit header holding `$Tag = "value"` meta tags, followed by six
//! marker sections, each opened by `$Marker = "Start"` and closed by `$Marker = "End"`:
//!
//! ```text
//! $FileVersion = "2.1"
//!
//! $GCAUConfigurationData = "Start"
//! CHANNEL_1.!Type = "Analog"
//! CHANNEL_1.Gain = "1.25"
//! $GCAUConfigurationData = "End"
//!
//! $BOM = "Start"
//! PartNumber = "GCAU-4410"
//! $BOM = "End"
//! ```
//!
//! File Layout
//!
//! src/agc
//!   ├── lexing      markers and per-line grammar classification
//!   ├── parsing     the analyzer state machine producing a [Document](agc::ast::Document)
//!   ├── ast         the document tree and analysis errors
//!   ├── locating    read-only queries over a document
//!   ├── loader      reading sources and running the analyzer
//!   ├── formats     JSON / YAML / outline renderings of a document
//!   └── testing     fluent assertions used by the test suites
//!
//! Analysis is a single forward pass and fails on the first violation, see
//! [analyze](agc::parsing::analyze).

pub mod agc;

pub use agc::ast::{
    AnalysisError, Attribute, DataEntry, Document, ErrorCategory, MetaTag, ObjectEntry, Section,
};
pub use agc::lexing::{ContentKind, SectionMarker};
pub use agc::locating::{locate, Located, Query};
pub use agc::parsing::{analyze, analyze_str};
