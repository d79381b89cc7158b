//! Analysis errors
//!
//! The analyzer stops at the first violation and reports it as an [AnalysisError]: the 1-based
//! line, a category and a message naming the offending identifier and the enclosing section.
//! Categories keep the two-letter codes used by existing AGC tooling and test files.

use crate::agc::lexing::SectionMarker;
use std::fmt;
use thiserror::Error;

/// Category of an analysis failure, identified by a two-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    UnexpectedClosingSection,
    DuplicateAttribute,
    DuplicateSection,
    MissingClosingSection,
    MissingSection,
    UnexpectedOpeningSection,
    UnexpectedKey,
    UnexpectedLine,
    UnexpectedMetaTag,
    UnexpectedObject,
}

impl ErrorCategory {
    pub const ALL: [ErrorCategory; 10] = [
        ErrorCategory::UnexpectedClosingSection,
        ErrorCategory::DuplicateAttribute,
        ErrorCategory::DuplicateSection,
        ErrorCategory::MissingClosingSection,
        ErrorCategory::MissingSection,
        ErrorCategory::UnexpectedOpeningSection,
        ErrorCategory::UnexpectedKey,
        ErrorCategory::UnexpectedLine,
        ErrorCategory::UnexpectedMetaTag,
        ErrorCategory::UnexpectedObject,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ErrorCategory::UnexpectedClosingSection => "CS",
            ErrorCategory::DuplicateAttribute => "DA",
            ErrorCategory::DuplicateSection => "DS",
            ErrorCategory::MissingClosingSection => "MC",
            ErrorCategory::MissingSection => "MS",
            ErrorCategory::UnexpectedOpeningSection => "OS",
            ErrorCategory::UnexpectedKey => "UK",
            ErrorCategory::UnexpectedLine => "UL",
            ErrorCategory::UnexpectedMetaTag => "UM",
            ErrorCategory::UnexpectedObject => "UO",
        }
    }

    pub fn from_code(code: &str) -> Option<ErrorCategory> {
        Self::ALL.into_iter().find(|category| category.code() == code)
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// First rule violation found while analyzing an AGC file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// A Start line while the current section is still open
    #[error("unexpected opening section \"{name}\" in section \"{section}\"")]
    UnexpectedOpeningSection {
        line: usize,
        name: SectionMarker,
        section: SectionMarker,
    },

    /// An End line naming a section other than the current one
    #[error("unexpected closing section \"{name}\" in section \"{section}\"")]
    UnexpectedClosingSection {
        line: usize,
        name: SectionMarker,
        section: SectionMarker,
    },

    #[error("duplicate attribute \"{attribute}\" for object \"{object}\" in section \"{section}\"")]
    DuplicateAttribute {
        line: usize,
        attribute: String,
        object: String,
        section: SectionMarker,
    },

    /// Reported at the Start line of the second occurrence
    #[error("section {section} is duplicate")]
    DuplicateSection { line: usize, section: SectionMarker },

    /// Input ended while a section was still open
    #[error("missing closing section \"{section}\"")]
    MissingClosingSection { line: usize, section: SectionMarker },

    #[error("section {section} not found")]
    MissingSection { line: usize, section: SectionMarker },

    #[error("unexpected object \"{object}\" in closed section \"{section}\"")]
    UnexpectedObject {
        line: usize,
        object: String,
        section: SectionMarker,
    },

    #[error("unexpected key \"{key}\" in closed section \"{section}\"")]
    UnexpectedKey {
        line: usize,
        key: String,
        section: SectionMarker,
    },

    /// The line matches no grammar allowed in its section
    #[error("unexpected line in section \"{section}\": \"{text}\"")]
    UnexpectedLine {
        line: usize,
        text: String,
        section: SectionMarker,
    },

    #[error("unexpected meta tag \"{name}\" in closed section \"{section}\"")]
    UnexpectedMetaTag {
        line: usize,
        name: String,
        section: SectionMarker,
    },
}

impl AnalysisError {
    /// 1-based line that triggered the error
    pub fn line(&self) -> usize {
        match self {
            AnalysisError::UnexpectedOpeningSection { line, .. }
            | AnalysisError::UnexpectedClosingSection { line, .. }
            | AnalysisError::DuplicateAttribute { line, .. }
            | AnalysisError::DuplicateSection { line, .. }
            | AnalysisError::MissingClosingSection { line, .. }
            | AnalysisError::MissingSection { line, .. }
            | AnalysisError::UnexpectedObject { line, .. }
            | AnalysisError::UnexpectedKey { line, .. }
            | AnalysisError::UnexpectedLine { line, .. }
            | AnalysisError::UnexpectedMetaTag { line, .. } => *line,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalysisError::UnexpectedOpeningSection { .. } => {
                ErrorCategory::UnexpectedOpeningSection
            }
            AnalysisError::UnexpectedClosingSection { .. } => {
                ErrorCategory::UnexpectedClosingSection
            }
            AnalysisError::DuplicateAttribute { .. } => ErrorCategory::DuplicateAttribute,
            AnalysisError::DuplicateSection { .. } => ErrorCategory::DuplicateSection,
            AnalysisError::MissingClosingSection { .. } => ErrorCategory::MissingClosingSection,
            AnalysisError::MissingSection { .. } => ErrorCategory::MissingSection,
            AnalysisError::UnexpectedObject { .. } => ErrorCategory::UnexpectedObject,
            AnalysisError::UnexpectedKey { .. } => ErrorCategory::UnexpectedKey,
            AnalysisError::UnexpectedLine { .. } => ErrorCategory::UnexpectedLine,
            AnalysisError::UnexpectedMetaTag { .. } => ErrorCategory::UnexpectedMetaTag,
        }
    }

    /// The section the cursor pointed at when the error was raised
    pub fn section(&self) -> SectionMarker {
        match self {
            AnalysisError::UnexpectedOpeningSection { section, .. }
            | AnalysisError::UnexpectedClosingSection { section, .. }
            | AnalysisError::DuplicateAttribute { section, .. }
            | AnalysisError::DuplicateSection { section, .. }
            | AnalysisError::MissingClosingSection { section, .. }
            | AnalysisError::MissingSection { section, .. }
            | AnalysisError::UnexpectedObject { section, .. }
            | AnalysisError::UnexpectedKey { section, .. }
            | AnalysisError::UnexpectedLine { section, .. }
            | AnalysisError::UnexpectedMetaTag { section, .. } => *section,
        }
    }
}

/// Format the lines around an error, marking the offending one with `>>`.
///
/// Shows 2 lines before and 2 lines after. Line numbers are 1-based.
pub fn format_source_context(lines: &[&str], line: usize) -> String {
    let error_index = line.saturating_sub(1);
    let start = error_index.saturating_sub(2);
    let end = (error_index + 3).min(lines.len());

    let mut context = String::new();
    for (index, text) in lines.iter().enumerate().take(end).skip(start) {
        let marker = if index == error_index { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, index + 1, text));
    }
    context
}
