//! Lexing
//!
//!     AGC is strictly line based: every line belongs to exactly one category and nothing
//!     spans lines. Lexing therefore has two parts, the fixed set of section markers and the
//!     per-line classification against the grammars of the format.
//!
//!     See [classify_line](line_classification::classify_line) for the categories and their
//!     ordering.

pub mod line_classification;
pub mod markers;

pub use line_classification::{
    classify_line, control_action, match_key_value, match_object_attribute, split_lines,
    ControlAction, KeyValueLine, Line, ObjectAttributeLine,
};
pub use markers::{ContentKind, SectionMarker};
