//! Testing utilities
//!
//! Fluent assertions over analyzed documents, used by the unit and integration tests:
//!
//! ```rust,ignore
//! assert_document(&doc)
//!     .section_count(7)
//!     .section("BOM", |bom| {
//!         bom.lines(8, 10).data_count(1).data(0, "PartNumber", "GCAU-4410");
//!     });
//! ```
//!
//! Failures panic with the path of the element that did not match.

mod assertions;

pub use assertions::{DocumentAssertion, ObjectAssertion, SectionAssertion};

use crate::agc::ast::Document;

/// Create an assertion builder for a document
pub fn assert_document(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}
