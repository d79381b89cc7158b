//! Line Classification
//!
//! Determines what a single AGC line is. Classification follows this order:
//! 1. Comment lines (a `#` in the first column)
//! 2. Blank lines (whitespace only)
//! 3. Meta lines (`$Identifier = "value"`), which include section control lines
//! 4. Content lines, anything else
//!
//! Content lines have two grammars, object-attribute (`OBJECT.[!]attribute = "value"`) and
//! key-value (`key = "value"`). Every object-attribute line is also a valid key-value line, so
//! which grammar applies depends on the section the line sits in; the analyzer picks one with
//! [match_object_attribute] or [match_key_value].

use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_LINE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*$").unwrap());

static META_LINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\$([A-Za-z0-9_]+)\s*=\s*"(.*)"\s*$"#).unwrap());

static OBJECT_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^([A-Z][A-Z0-9_]*)\.(!?)([A-Za-z][A-Za-z0-9]*)\s*=\s*"(.*)"\s*$"#).unwrap()
});

static KEY_VALUE_LINE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^(\S+)\s*=\s*"(.*)"\s*$"#).unwrap());

/// A classified line, borrowing from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Comment,
    Blank,
    /// `$name = "value"`, a generic meta tag or a section control line
    Meta { name: &'a str, value: &'a str },
    /// Any other line; its grammar depends on the enclosing section
    Content(&'a str),
}

impl Line<'_> {
    /// Comments and blank lines carry nothing and never affect section state.
    pub fn is_ignorable(&self) -> bool {
        matches!(self, Line::Comment | Line::Blank)
    }
}

/// `OBJECT.[!]attribute = "value"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectAttributeLine<'a> {
    pub object: &'a str,
    pub attribute: &'a str,
    pub read_only: bool,
    pub value: &'a str,
}

/// `key = "value"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValueLine<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

/// What a meta line does when its identifier is a recognized marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Start,
    End,
}

/// Classify a single line of an AGC file.
pub fn classify_line(line: &str) -> Line<'_> {
    if line.starts_with('#') {
        return Line::Comment;
    }
    if BLANK_LINE_REGEX.is_match(line) {
        return Line::Blank;
    }
    if let Some(caps) = META_LINE_REGEX.captures(line) {
        let (_, [name, value]) = caps.extract();
        return Line::Meta { name, value };
    }
    Line::Content(line)
}

/// Match a content line against the object-attribute grammar.
pub fn match_object_attribute(line: &str) -> Option<ObjectAttributeLine<'_>> {
    let caps = OBJECT_LINE_REGEX.captures(line)?;
    let (_, [object, marker, attribute, value]) = caps.extract();
    Some(ObjectAttributeLine {
        object,
        attribute,
        read_only: marker == "!",
        value,
    })
}

/// Match a content line against the key-value grammar.
pub fn match_key_value(line: &str) -> Option<KeyValueLine<'_>> {
    let caps = KEY_VALUE_LINE_REGEX.captures(line)?;
    let (_, [key, value]) = caps.extract();
    Some(KeyValueLine { key, value })
}

/// Split source text into lines the way AGC files are read: on `\n`, dropping one trailing
/// `\r` per line. A trailing newline yields a final empty line, which counts towards the
/// line total.
pub fn split_lines(source: &str) -> impl Iterator<Item = &str> {
    source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// `Start` and `End` are matched case-insensitively; any other value is no control action.
pub fn control_action(value: &str) -> Option<ControlAction> {
    if value.eq_ignore_ascii_case("start") {
        Some(ControlAction::Start)
    } else if value.eq_ignore_ascii_case("end") {
        Some(ControlAction::End)
    } else {
        None
    }
}
