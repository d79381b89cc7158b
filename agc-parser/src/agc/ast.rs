//! Document tree
//!
//! The result of analyzing an AGC file: an ordered list of sections, the header first, each
//! holding its meta tags and either objects or data entries.
//!
//! Every record carries the 1-based line it came from. The tree is built once by the analyzer
//! and never mutated afterwards; it serializes with camelCase field names (`startLine`,
//! `metaTags`, `readOnly`, ...).

pub mod elements;
pub mod error;

pub use elements::{Attribute, DataEntry, Document, MetaTag, ObjectEntry, Section};
pub use error::{AnalysisError, ErrorCategory};
