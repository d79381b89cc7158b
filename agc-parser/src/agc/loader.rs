//! Document loading utilities
//!
//! `DocumentLoader` reads AGC source text from a file or a string and runs the analyzer on
//! it. It is used by the command-line tool and by tests.
//!
//! # Example
//!
//! ```rust
//! use agc_parser::agc::loader::DocumentLoader;
//! use agc_parser::agc::locating::Query;
//!
//! let loader = DocumentLoader::from_path("calibration.agc")?;
//! let doc = loader.analyze()?;
//! let gain = doc.locate(&Query::new().object("CHANNEL_1").attribute("Gain"));
//! ```

use crate::agc::ast::{AnalysisError, Document};
use crate::agc::lexing::split_lines;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Error that can occur when loading documents
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {}: {}", .0.line(), .0)]
    Analysis(#[from] AnalysisError),
}

impl LoaderError {
    /// The analysis failure, if that is what this is
    pub fn analysis(&self) -> Option<&AnalysisError> {
        match self {
            LoaderError::Analysis(error) => Some(error),
            LoaderError::Io { .. } => None,
        }
    }
}

/// Source text of one AGC file, ready to be analyzed.
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: String,
    path: Option<PathBuf>,
}

impl DocumentLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = source.len(), "loaded source");
        Ok(DocumentLoader {
            source,
            path: Some(path.to_path_buf()),
        })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
            path: None,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// The file this source was read from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The source split into lines as the analyzer numbers them
    pub fn lines(&self) -> Vec<&str> {
        split_lines(&self.source).collect()
    }

    /// Analyze the source into a Document
    pub fn analyze(&self) -> Result<Document, LoaderError> {
        Ok(crate::agc::parsing::analyze(split_lines(&self.source))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agc::ast::ErrorCategory;
    use std::io::Write;

    #[test]
    fn test_from_string_lines() {
        let loader = DocumentLoader::from_string("$A = \"1\"\r\n# c\n");
        assert_eq!(loader.lines(), vec!["$A = \"1\"", "# c", ""]);
        assert!(loader.path().is_none());
    }

    #[test]
    fn test_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "$BOM = \"Start\"").unwrap();

        let loader = DocumentLoader::from_path(file.path()).unwrap();
        assert_eq!(loader.path(), Some(file.path()));

        let error = loader.analyze().unwrap_err();
        let analysis = error.analysis().unwrap();
        assert_eq!(analysis.category(), ErrorCategory::MissingClosingSection);
        assert_eq!(analysis.line(), 2);
        assert!(error.to_string().starts_with("line 2: missing closing section"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let error = DocumentLoader::from_path("/definitely/not/here.agc").unwrap_err();
        assert!(matches!(error, LoaderError::Io { .. }));
        assert!(error.analysis().is_none());
        assert!(error.to_string().contains("/definitely/not/here.agc"));
    }
}
