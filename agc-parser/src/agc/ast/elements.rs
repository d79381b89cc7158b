//! Element types of the document tree

pub mod data;
pub mod document;
pub mod meta_tag;
pub mod object;
pub mod section;

pub use data::DataEntry;
pub use document::Document;
pub use meta_tag::MetaTag;
pub use object::{Attribute, ObjectEntry};
pub use section::Section;
