//! Meta tag element
//!
//! `$Name = "value"` lines whose name is not a section marker. Names may repeat within a
//! section and every occurrence is kept.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaTag {
    pub name: String,
    pub value: String,
    pub line: usize,
}

impl MetaTag {
    pub fn new(name: impl Into<String>, value: impl Into<String>, line: usize) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            line,
        }
    }
}

impl fmt::Display for MetaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${} = \"{}\"", self.name, self.value)
    }
}
