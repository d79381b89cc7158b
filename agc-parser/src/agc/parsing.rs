//! Parsing
//!
//!     Turns the lines of an AGC file into a [Document](crate::agc::ast::Document) in one
//!     forward pass. The [analyzer] holds the section state machine, the [cursor] the state
//!     it moves through.

pub mod analyzer;
pub mod cursor;

pub use analyzer::{analyze, analyze_str, Analyzer};
pub use cursor::Cursor;
