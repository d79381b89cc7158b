//! Document, section and object assertions

use crate::agc::ast::{Document, ObjectEntry, Section};

pub struct DocumentAssertion<'a> {
    pub(crate) doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of sections, header included
    pub fn section_count(self, expected: usize) -> Self {
        let names: Vec<&str> = self.doc.iter().map(|section| section.name()).collect();
        assert_eq!(
            self.doc.len(),
            expected,
            "Expected {} sections, found {}: [{}]",
            expected,
            self.doc.len(),
            names.join(", ")
        );
        self
    }

    /// Assert section names in document order
    pub fn section_names(self, expected: &[&str]) -> Self {
        let names: Vec<&str> = self.doc.iter().map(|section| section.name()).collect();
        assert_eq!(names, expected, "Section names differ");
        self
    }

    /// Assert on a section by name
    pub fn section<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(SectionAssertion<'a>),
    {
        let section = self
            .doc
            .section(name)
            .unwrap_or_else(|| panic!("Section {} not found", name));
        assertion(SectionAssertion {
            section,
            context: name.to_string(),
        });
        self
    }

    /// Assert on the header section
    pub fn header<F>(self, assertion: F) -> Self
    where
        F: FnOnce(SectionAssertion<'a>),
    {
        let section = self.doc.header().expect("Document has no header section");
        assertion(SectionAssertion {
            section,
            context: "{Header}".to_string(),
        });
        self
    }

    /// Assert section ranges are ordered and do not overlap
    pub fn ranges_disjoint(self) -> Self {
        for pair in self.doc.sections().windows(2) {
            assert!(
                pair[0].end_line < pair[1].start_line,
                "{} ends at {} but {} starts at {}",
                pair[0].name(),
                pair[0].end_line,
                pair[1].name(),
                pair[1].start_line
            );
        }
        self
    }
}

pub struct SectionAssertion<'a> {
    pub(crate) section: &'a Section,
    pub(crate) context: String,
}

impl<'a> SectionAssertion<'a> {
    /// Assert the start and end lines (1-based, inclusive)
    pub fn lines(self, start: usize, end: usize) -> Self {
        assert_eq!(
            (self.section.start_line, self.section.end_line),
            (start, end),
            "{}: Expected lines {}-{}",
            self.context,
            start,
            end
        );
        self
    }

    pub fn meta_tag_count(self, expected: usize) -> Self {
        assert_eq!(
            self.section.meta_tags.len(),
            expected,
            "{}: Expected {} meta tags, found {:?}",
            self.context,
            expected,
            self.section.meta_tags
        );
        self
    }

    /// Assert the meta tag at an index has the given name and value
    pub fn meta_tag(self, index: usize, name: &str, value: &str) -> Self {
        let tag = self.section.meta_tags.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Meta tag index {} out of bounds ({} tags)",
                self.context,
                index,
                self.section.meta_tags.len()
            )
        });
        assert_eq!(
            (tag.name.as_str(), tag.value.as_str()),
            (name, value),
            "{}.metaTags[{}]",
            self.context,
            index
        );
        self
    }

    pub fn data_count(self, expected: usize) -> Self {
        assert_eq!(
            self.section.data.len(),
            expected,
            "{}: Expected {} data entries, found {:?}",
            self.context,
            expected,
            self.section.data
        );
        self
    }

    /// Assert the data entry at an index has the given key and value
    pub fn data(self, index: usize, key: &str, value: &str) -> Self {
        let entry = self.section.data.get(index).unwrap_or_else(|| {
            panic!(
                "{}: Data index {} out of bounds ({} entries)",
                self.context,
                index,
                self.section.data.len()
            )
        });
        assert_eq!(
            (entry.name.as_str(), entry.value.as_str()),
            (key, value),
            "{}.data[{}]",
            self.context,
            index
        );
        self
    }

    pub fn object_count(self, expected: usize) -> Self {
        let names: Vec<&str> = self
            .section
            .objects
            .iter()
            .map(|object| object.name.as_str())
            .collect();
        assert_eq!(
            names.len(),
            expected,
            "{}: Expected {} objects, found [{}]",
            self.context,
            expected,
            names.join(", ")
        );
        self
    }

    /// Assert on an object by name
    pub fn object<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(ObjectAssertion<'a>),
    {
        let object = self
            .section
            .objects
            .iter()
            .find(|object| object.name == name)
            .unwrap_or_else(|| panic!("{}: Object {} not found", self.context, name));
        assertion(ObjectAssertion {
            object,
            context: format!("{}.{}", self.context, name),
        });
        self
    }
}

pub struct ObjectAssertion<'a> {
    pub(crate) object: &'a ObjectEntry,
    pub(crate) context: String,
}

impl ObjectAssertion<'_> {
    pub fn attribute_count(self, expected: usize) -> Self {
        assert_eq!(
            self.object.attributes.len(),
            expected,
            "{}: Expected {} attributes",
            self.context,
            expected
        );
        self
    }

    /// Assert an attribute's value and read-only flag
    pub fn attribute(self, name: &str, value: &str, read_only: bool) -> Self {
        let attribute = self
            .object
            .attribute(name)
            .unwrap_or_else(|| panic!("{}: Attribute {} not found", self.context, name));
        assert_eq!(
            (attribute.value.as_str(), attribute.read_only),
            (value, read_only),
            "{}.{}",
            self.context,
            name
        );
        self
    }
}
