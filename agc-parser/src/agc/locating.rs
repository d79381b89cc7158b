//! Locating
//!
//! Read-only lookups into an analyzed [Document]: a section, its meta tags or data entries by
//! name, an object, or one attribute of an object. Absence is an ordinary outcome and is
//! returned as `None`.

pub mod query;
pub mod search;

pub use query::Query;

use crate::agc::ast::{Attribute, DataEntry, Document, MetaTag, ObjectEntry, Section};
use serde::Serialize;

/// What a [Query] resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Located<'a> {
    Section(&'a Section),
    /// All meta tags sharing the requested name, in file order
    MetaTags(Vec<&'a MetaTag>),
    /// All data entries sharing the requested key, in file order
    Data(Vec<&'a DataEntry>),
    Object(&'a ObjectEntry),
    Attribute(&'a Attribute),
}

impl<'a> Located<'a> {
    pub fn as_section(&self) -> Option<&'a Section> {
        match self {
            Located::Section(section) => Some(*section),
            _ => None,
        }
    }

    pub fn as_meta_tags(&self) -> Option<&[&'a MetaTag]> {
        match self {
            Located::MetaTags(tags) => Some(tags.as_slice()),
            _ => None,
        }
    }

    pub fn as_data(&self) -> Option<&[&'a DataEntry]> {
        match self {
            Located::Data(entries) => Some(entries.as_slice()),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&'a ObjectEntry> {
        match self {
            Located::Object(object) => Some(*object),
            _ => None,
        }
    }

    pub fn as_attribute(&self) -> Option<&'a Attribute> {
        match self {
            Located::Attribute(attribute) => Some(*attribute),
            _ => None,
        }
    }
}

/// Resolve a query against a document.
pub fn locate<'a>(query: &Query, document: &'a Document) -> Option<Located<'a>> {
    let section = document.section(query.section_name())?;

    if let Some(name) = &query.meta_tag {
        let tags = search::find_all(&section.meta_tags, name.as_str(), |tag| tag.name.as_str());
        return non_empty(tags).map(Located::MetaTags);
    }

    if let Some(key) = &query.data_key {
        let entries = search::find_all(&section.data, key.as_str(), |entry| entry.name.as_str());
        return non_empty(entries).map(Located::Data);
    }

    if let Some(name) = &query.object {
        let object = search::find_first(&section.objects, name.as_str(), |object| {
            object.name.as_str()
        })?;
        return match &query.attribute {
            Some(attribute) => object.attribute(attribute).map(Located::Attribute),
            None => Some(Located::Object(object)),
        };
    }

    Some(Located::Section(section))
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agc::parsing::analyze_str;

    const SOURCE: &str = r#"$FileVersion = "2.1"
$GCAUConfigurationData = "Start"
$Revision = "7"
$Revision = "8"
CHANNEL_1.!Type = "Analog"
CHANNEL_1.Gain = "1.25"
$GCAUConfigurationData = "End"
$GCAUCalibrationData = "Start"
PROBE_A.Gain = "0.5"
$GCAUCalibrationData = "End"
$BOM = "Start"
PartNumber = "GCAU-4410"
PartNumber = "GCAU-4411"
$BOM = "End"
$TestAdditionalTests = "Start"
$TestAdditionalTests = "End"
$SPReTPReOptions = "Start"
$SPReTPReOptions = "End"
$EquationAdditionals = "Start"
$EquationAdditionals = "End""#;

    fn document() -> Document {
        analyze_str(SOURCE).expect("fixture to analyze")
    }

    #[test]
    fn test_section_only_query() {
        let doc = document();
        let located = locate(&Query::new().section("BOM"), &doc).unwrap();
        let section = located.as_section().unwrap();
        assert_eq!(section.name(), "BOM");
        assert_eq!((section.start_line, section.end_line), (11, 14));
    }

    #[test]
    fn test_default_section_is_configuration_data() {
        let doc = document();
        let located = locate(&Query::new(), &doc).unwrap();
        assert_eq!(located.as_section().unwrap().name(), "GCAUConfigurationData");
    }

    #[test]
    fn test_unknown_section_is_absent() {
        let doc = document();
        assert_eq!(locate(&Query::new().section("foo"), &doc), None);
        assert_eq!(locate(&Query::new().section("bom"), &doc), None);
    }

    #[test]
    fn test_meta_tags_return_all_matches() {
        let doc = document();
        let located = locate(&Query::new().meta_tag("Revision"), &doc).unwrap();
        let values: Vec<&str> = located
            .as_meta_tags()
            .unwrap()
            .iter()
            .map(|tag| tag.value.as_str())
            .collect();
        assert_eq!(values, vec!["7", "8"]);
    }

    #[test]
    fn test_header_meta_tags() {
        let doc = document();
        let located = locate(
            &Query::new().section("{Header}").meta_tag("FileVersion"),
            &doc,
        )
        .unwrap();
        assert_eq!(located.as_meta_tags().unwrap()[0].line, 1);
    }

    #[test]
    fn test_data_keys_return_all_matches() {
        let doc = document();
        let located = locate(&Query::new().section("BOM").data_key("PartNumber"), &doc).unwrap();
        let lines: Vec<usize> = located
            .as_data()
            .unwrap()
            .iter()
            .map(|entry| entry.line)
            .collect();
        assert_eq!(lines, vec![12, 13]);
    }

    #[test]
    fn test_meta_tag_takes_precedence() {
        let doc = document();
        let query = Query::new()
            .meta_tag("Revision")
            .data_key("PartNumber")
            .object("CHANNEL_1");
        assert!(locate(&query, &doc).unwrap().as_meta_tags().is_some());

        let missing = Query::new().meta_tag("Nope").object("CHANNEL_1");
        assert_eq!(locate(&missing, &doc), None);
    }

    #[test]
    fn test_object_and_attribute() {
        let doc = document();
        let object = locate(&Query::new().object("CHANNEL_1"), &doc).unwrap();
        assert_eq!(object.as_object().unwrap().attributes.len(), 2);

        let attribute = locate(&Query::new().object("CHANNEL_1").attribute("Type"), &doc).unwrap();
        let attribute = attribute.as_attribute().unwrap();
        assert!(attribute.read_only);
        assert_eq!(attribute.value, "Analog");
    }

    #[test]
    fn test_missing_object_or_attribute_is_absent() {
        let doc = document();
        assert_eq!(locate(&Query::new().object("NOPE"), &doc), None);
        assert_eq!(
            locate(&Query::new().object("CHANNEL_1").attribute("Nope"), &doc),
            None
        );
        assert_eq!(
            locate(
                &Query::new().section("GCAUCalibrationData").object("CHANNEL_1"),
                &doc
            ),
            None
        );
    }

    #[test]
    fn test_attribute_without_object_returns_section() {
        let doc = document();
        let located = locate(&Query::new().attribute("Gain"), &doc).unwrap();
        assert!(located.as_section().is_some());
    }
}
