//! Analyzer
//!
//! The section state machine. Each line is classified and then checked against the section
//! the [Cursor] points at:
//!
//! - `$Marker = "Start"` opens a new section, unless the current one is still open
//! - `$Marker = "End"` closes the current section, which must carry that name
//! - any other `$Tag = "value"` is a meta tag of the current section
//! - content lines must follow the grammar of the current section (objects or key/value);
//!   the header accepts none
//!
//! Once a section is closed every meta tag or content line is rejected until the next Start
//! line. After the last line the open section (if any) is reported, then every recognized
//! marker must have occurred exactly once.
//!
//! The first violation aborts the analysis. Nothing is returned for partially valid input.

use super::cursor::Cursor;
use crate::agc::ast::{
    AnalysisError, Attribute, DataEntry, Document, MetaTag, ObjectEntry, Section,
};
use crate::agc::lexing::{
    classify_line, control_action, match_key_value, match_object_attribute, split_lines,
    ContentKind, ControlAction, Line, SectionMarker,
};
use tracing::{debug, trace};

/// Analyze the lines of an AGC file.
pub fn analyze<I>(lines: I) -> Result<Document, AnalysisError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut analyzer = Analyzer::new();
    for line in lines {
        analyzer.feed(line.as_ref())?;
    }
    analyzer.finish()
}

/// Analyze AGC source text, see [split_lines] for how lines are counted.
pub fn analyze_str(source: &str) -> Result<Document, AnalysisError> {
    analyze(split_lines(source))
}

/// A section under construction. Only the section under the cursor can have an unresolved end.
#[derive(Debug)]
struct SectionBuilder {
    marker: SectionMarker,
    start_line: usize,
    end_line: Option<usize>,
    meta_tags: Vec<MetaTag>,
    objects: Vec<ObjectEntry>,
    data: Vec<DataEntry>,
}

impl SectionBuilder {
    fn header() -> Self {
        Self::opened(SectionMarker::Header, 1).with_end(1)
    }

    fn opened(marker: SectionMarker, start_line: usize) -> Self {
        Self {
            marker,
            start_line,
            end_line: None,
            meta_tags: Vec::new(),
            objects: Vec::new(),
            data: Vec::new(),
        }
    }

    fn with_end(mut self, end_line: usize) -> Self {
        self.end_line = Some(end_line);
        self
    }

    fn build(self) -> Section {
        let mut section = Section::new(
            self.marker,
            self.start_line,
            self.end_line.unwrap_or(self.start_line),
        );
        section.meta_tags = self.meta_tags;
        section.objects = self.objects;
        section.data = self.data;
        section
    }
}

/// Incremental analyzer: feed lines in order, then [finish](Analyzer::finish).
#[derive(Debug)]
pub struct Analyzer {
    sections: Vec<SectionBuilder>,
    cursor: Cursor,
    line_count: usize,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            sections: vec![SectionBuilder::header()],
            cursor: Cursor::InHeader,
            line_count: 0,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Number of lines fed so far; also the number of the last line.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Process the next line.
    pub fn feed(&mut self, text: &str) -> Result<(), AnalysisError> {
        self.line_count += 1;
        let line = self.line_count;
        let classified = classify_line(text);
        trace!(line, ?classified, cursor = ?self.cursor, "classified line");

        if classified.is_ignorable() {
            return Ok(());
        }
        if self.cursor == Cursor::InHeader {
            self.current_mut().end_line = Some(line - 1);
        }

        let result = match classified {
            Line::Meta { name, value } => match SectionMarker::from_name(name) {
                Some(marker) => self.control(marker, value, line),
                None => self.meta_tag(name, value, line),
            },
            Line::Content(content) => match self.current().marker.content_kind() {
                ContentKind::Objects => self.object_attribute(content, line),
                ContentKind::Data => self.key_value(content, line),
                ContentKind::MetaOnly => Err(self.unexpected_line(content, line)),
            },
            Line::Comment | Line::Blank => Ok(()),
        };
        if let Err(error) = &result {
            debug!(line, category = %error.category(), "analysis failed: {}", error);
        }
        result
    }

    /// Validate the end of input and produce the document.
    pub fn finish(self) -> Result<Document, AnalysisError> {
        let last_line = self.line_count;

        if let Cursor::Open(_) = self.cursor {
            return Err(AnalysisError::MissingClosingSection {
                line: last_line,
                section: self.current().marker,
            });
        }

        let markers = std::iter::once(SectionMarker::Header).chain(SectionMarker::RECOGNIZED);
        for marker in markers {
            let mut occurrences = self
                .sections
                .iter()
                .filter(|section| section.marker == marker);
            if occurrences.next().is_none() {
                return Err(AnalysisError::MissingSection {
                    line: last_line,
                    section: marker,
                });
            }
            if let Some(duplicate) = occurrences.next() {
                return Err(AnalysisError::DuplicateSection {
                    line: duplicate.start_line,
                    section: marker,
                });
            }
        }

        debug!(
            sections = self.sections.len(),
            lines = last_line,
            "analysis complete"
        );
        Ok(Document::from_sections(
            self.sections.into_iter().map(SectionBuilder::build).collect(),
        ))
    }

    fn current(&self) -> &SectionBuilder {
        &self.sections[self.cursor.index()]
    }

    fn current_mut(&mut self) -> &mut SectionBuilder {
        let index = self.cursor.index();
        &mut self.sections[index]
    }

    /// A meta line naming a recognized marker
    fn control(
        &mut self,
        marker: SectionMarker,
        value: &str,
        line: usize,
    ) -> Result<(), AnalysisError> {
        match control_action(value) {
            Some(ControlAction::Start) => {
                if !self.cursor.accepts_start() {
                    return Err(AnalysisError::UnexpectedOpeningSection {
                        line,
                        name: marker,
                        section: self.current().marker,
                    });
                }
                self.sections.push(SectionBuilder::opened(marker, line));
                self.cursor = Cursor::Open(self.sections.len() - 1);
                debug!(line, section = %marker, "section opened");
            }
            Some(ControlAction::End) => {
                let current = self.current().marker;
                if current != marker {
                    return Err(AnalysisError::UnexpectedClosingSection {
                        line,
                        name: marker,
                        section: current,
                    });
                }
                self.current_mut().end_line = Some(line);
                self.cursor = Cursor::Closed(self.cursor.index());
                debug!(line, section = %marker, "section closed");
            }
            None => {
                debug!(line, section = %marker, value, "ignoring marker line without control value");
            }
        }
        Ok(())
    }

    fn meta_tag(&mut self, name: &str, value: &str, line: usize) -> Result<(), AnalysisError> {
        if self.cursor.is_closed() {
            return Err(AnalysisError::UnexpectedMetaTag {
                line,
                name: name.to_string(),
                section: self.current().marker,
            });
        }
        self.current_mut()
            .meta_tags
            .push(MetaTag::new(name, value, line));
        Ok(())
    }

    fn object_attribute(&mut self, text: &str, line: usize) -> Result<(), AnalysisError> {
        let parsed = match_object_attribute(text).ok_or_else(|| self.unexpected_line(text, line))?;
        let section = self.current().marker;
        if self.cursor.is_closed() {
            return Err(AnalysisError::UnexpectedObject {
                line,
                object: parsed.object.to_string(),
                section,
            });
        }

        let objects = &mut self.current_mut().objects;
        let index = match objects.iter().position(|object| object.name == parsed.object) {
            Some(index) => index,
            None => {
                objects.push(ObjectEntry::new(parsed.object));
                objects.len() - 1
            }
        };
        let object = &mut objects[index];
        if object.has_attribute(parsed.attribute) {
            return Err(AnalysisError::DuplicateAttribute {
                line,
                attribute: parsed.attribute.to_string(),
                object: object.name.clone(),
                section,
            });
        }
        object.attributes.push(Attribute::new(
            parsed.attribute,
            parsed.value,
            parsed.read_only,
            line,
        ));
        Ok(())
    }

    fn key_value(&mut self, text: &str, line: usize) -> Result<(), AnalysisError> {
        let parsed = match_key_value(text).ok_or_else(|| self.unexpected_line(text, line))?;
        if self.cursor.is_closed() {
            return Err(AnalysisError::UnexpectedKey {
                line,
                key: parsed.key.to_string(),
                section: self.current().marker,
            });
        }
        self.current_mut()
            .data
            .push(DataEntry::new(parsed.key, parsed.value, line));
        Ok(())
    }

    fn unexpected_line(&self, text: &str, line: usize) -> AnalysisError {
        AnalysisError::UnexpectedLine {
            line,
            text: text.to_string(),
            section: self.current().marker,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agc::ast::ErrorCategory;

    /// The six recognized sections, each empty and properly closed.
    fn closed_sections() -> Vec<String> {
        SectionMarker::RECOGNIZED
            .iter()
            .flat_map(|marker| {
                [
                    format!("${} = \"Start\"", marker),
                    format!("${} = \"End\"", marker),
                ]
            })
            .collect()
    }

    fn analyze_err(lines: &[&str]) -> AnalysisError {
        analyze(lines).expect_err("analysis to fail")
    }

    #[test]
    fn test_minimal_document() {
        let doc = analyze(closed_sections()).unwrap();
        assert_eq!(doc.len(), 7);
        assert!(doc.sections()[0].is_header());
        for (section, marker) in doc.sections()[1..].iter().zip(SectionMarker::RECOGNIZED) {
            assert_eq!(section.marker, marker);
        }
    }

    #[test]
    fn test_start_on_first_line_leaves_header_ending_at_zero() {
        let doc = analyze(closed_sections()).unwrap();
        let header = doc.header().unwrap();
        assert_eq!((header.start_line, header.end_line), (1, 0));
        assert!(header.meta_tags.is_empty());
    }

    #[test]
    fn test_header_bounds_follow_meta_tags() {
        let mut lines = vec![
            "# leading comment".to_string(),
            "$FileVersion = \"2.1\"".to_string(),
            String::new(),
            "$Author = \"bench 4\"".to_string(),
            String::new(),
        ];
        lines.extend(closed_sections());
        let doc = analyze(&lines).unwrap();

        let header = doc.header().unwrap();
        assert_eq!(header.start_line, 1);
        assert_eq!(header.end_line, 5);
        assert_eq!(header.meta_tags.len(), 2);
        assert_eq!(header.meta_tags[1].line, 4);
        assert_eq!(doc.sections()[1].start_line, 6);
    }

    #[test]
    fn test_section_bounds_are_inclusive() {
        let doc = analyze(closed_sections()).unwrap();
        let bom = doc.section("BOM").unwrap();
        assert_eq!((bom.start_line, bom.end_line), (5, 6));
    }

    #[test]
    fn test_double_start_is_unexpected_opening() {
        let error = analyze_err(&[
            "$GCAUConfigurationData = \"Start\"",
            "$GCAUConfigurationData = \"Start\"",
        ]);
        assert_eq!(error.category(), ErrorCategory::UnexpectedOpeningSection);
        assert_eq!(error.line(), 2);
        assert!(error.to_string().contains("GCAUConfigurationData"));
    }

    #[test]
    fn test_start_inside_other_open_section() {
        let error = analyze_err(&["$BOM = \"Start\"", "x = \"1\"", "$GCAUCalibrationData = \"start\""]);
        assert_eq!(
            error,
            AnalysisError::UnexpectedOpeningSection {
                line: 3,
                name: SectionMarker::GcauCalibrationData,
                section: SectionMarker::Bom,
            }
        );
    }

    #[test]
    fn test_mismatched_end_is_unexpected_closing() {
        let error = analyze_err(&["$BOM = \"Start\"", "$EquationAdditionals = \"End\""]);
        assert_eq!(error.category(), ErrorCategory::UnexpectedClosingSection);
        assert_eq!(error.line(), 2);
    }

    #[test]
    fn test_end_in_header_is_unexpected_closing() {
        let error = analyze_err(&["$Tag = \"v\"", "$BOM = \"END\""]);
        assert_eq!(
            error,
            AnalysisError::UnexpectedClosingSection {
                line: 2,
                name: SectionMarker::Bom,
                section: SectionMarker::Header,
            }
        );
    }

    #[test]
    fn test_repeated_end_re_resolves_bounds() {
        let mut lines = closed_sections();
        lines.insert(6, "$BOM = \"End\"".to_string());
        let doc = analyze(&lines).unwrap();
        assert_eq!(doc.section("BOM").unwrap().end_line, 7);
    }

    #[test]
    fn test_marker_with_other_value_is_ignored() {
        let mut lines = closed_sections();
        lines.insert(5, "$BOM = \"Pending\"".to_string());
        let doc = analyze(&lines).unwrap();
        let bom = doc.section("BOM").unwrap();
        assert!(bom.meta_tags.is_empty());
        assert_eq!((bom.start_line, bom.end_line), (5, 7));
    }

    #[test]
    fn test_key_after_end_is_rejected() {
        let error = analyze_err(&["$BOM = \"Start\"", "$BOM = \"End\"", "", "Part = \"1\""]);
        assert_eq!(
            error,
            AnalysisError::UnexpectedKey {
                line: 4,
                key: "Part".to_string(),
                section: SectionMarker::Bom,
            }
        );
    }

    #[test]
    fn test_object_after_end_is_rejected() {
        let error = analyze_err(&[
            "$GCAUCalibrationData = \"Start\"",
            "$GCAUCalibrationData = \"End\"",
            "PROBE.Gain = \"1\"",
        ]);
        assert_eq!(error.category(), ErrorCategory::UnexpectedObject);
        assert_eq!(error.line(), 3);
    }

    #[test]
    fn test_meta_tag_after_end_is_rejected() {
        let error = analyze_err(&["$BOM = \"Start\"", "$BOM = \"End\"", "$Note = \"late\""]);
        assert_eq!(error.category(), ErrorCategory::UnexpectedMetaTag);
        assert_eq!(error.line(), 3);
    }

    #[test]
    fn test_comments_after_end_are_fine() {
        let mut lines = closed_sections();
        lines.insert(6, "# between sections".to_string());
        lines.insert(7, "   ".to_string());
        assert!(analyze(&lines).is_ok());
    }

    #[test]
    fn test_syntax_is_checked_before_closed_state() {
        let error = analyze_err(&["$BOM = \"Start\"", "$BOM = \"End\"", "garbage"]);
        assert_eq!(error.category(), ErrorCategory::UnexpectedLine);
    }

    #[test]
    fn test_duplicate_attribute() {
        let error = analyze_err(&[
            "$GCAUConfigurationData = \"Start\"",
            "OBJ1.attrA = \"1\"",
            "OBJ2.attrA = \"1\"",
            "OBJ1.attrA = \"2\"",
        ]);
        assert_eq!(
            error,
            AnalysisError::DuplicateAttribute {
                line: 4,
                attribute: "attrA".to_string(),
                object: "OBJ1".to_string(),
                section: SectionMarker::GcauConfigurationData,
            }
        );
    }

    #[test]
    fn test_read_only_marker_does_not_make_attribute_distinct() {
        let error = analyze_err(&[
            "$GCAUConfigurationData = \"Start\"",
            "OBJ1.!attrA = \"1\"",
            "OBJ1.attrA = \"2\"",
        ]);
        assert_eq!(error.category(), ErrorCategory::DuplicateAttribute);
    }

    #[test]
    fn test_objects_collect_attributes_across_lines() {
        let mut lines = closed_sections();
        lines.splice(
            1..1,
            [
                "CH_1.!Type = \"Analog\"".to_string(),
                "CH_2.Type = \"Digital\"".to_string(),
                "CH_1.Gain = \"1.25\"".to_string(),
            ],
        );
        let doc = analyze(&lines).unwrap();
        let section = doc.section("GCAUConfigurationData").unwrap();
        assert_eq!(section.objects.len(), 2);
        let ch1 = &section.objects[0];
        assert_eq!(ch1.name, "CH_1");
        assert_eq!(ch1.attributes.len(), 2);
        assert!(ch1.attributes[0].read_only);
        assert_eq!(ch1.attributes[1].line, 4);
    }

    #[test]
    fn test_key_value_in_object_section_is_unexpected_line() {
        let error = analyze_err(&["$GCAUConfigurationData = \"Start\"", "gain = \"1\""]);
        assert_eq!(
            error,
            AnalysisError::UnexpectedLine {
                line: 2,
                text: "gain = \"1\"".to_string(),
                section: SectionMarker::GcauConfigurationData,
            }
        );
    }

    #[test]
    fn test_object_line_in_data_section_is_data() {
        let mut lines = closed_sections();
        lines.insert(5, "CH_1.Gain = \"2\"".to_string());
        let doc = analyze(&lines).unwrap();
        let bom = doc.section("BOM").unwrap();
        assert_eq!(bom.data[0].name, "CH_1.Gain");
        assert!(bom.objects.is_empty());
    }

    #[test]
    fn test_content_in_header_is_unexpected_line() {
        let error = analyze_err(&["$Tag = \"v\"", "key = \"value\""]);
        assert_eq!(error.category(), ErrorCategory::UnexpectedLine);
        assert_eq!(error.section(), SectionMarker::Header);
    }

    #[test]
    fn test_missing_closing_section() {
        let error = analyze_err(&["$BOM = \"Start\"", "a = \"1\"", ""]);
        assert_eq!(
            error,
            AnalysisError::MissingClosingSection {
                line: 3,
                section: SectionMarker::Bom,
            }
        );
    }

    #[test]
    fn test_missing_section() {
        let lines: Vec<String> = closed_sections()
            .into_iter()
            .filter(|line| !line.contains("TestAdditionalTests"))
            .collect();
        let error = analyze(&lines).unwrap_err();
        assert_eq!(
            error,
            AnalysisError::MissingSection {
                line: 10,
                section: SectionMarker::TestAdditionalTests,
            }
        );
    }

    #[test]
    fn test_duplicate_section_reports_second_start() {
        let mut lines = closed_sections();
        lines.push("$BOM = \"Start\"".to_string());
        lines.push("$BOM = \"End\"".to_string());
        let error = analyze(&lines).unwrap_err();
        assert_eq!(
            error,
            AnalysisError::DuplicateSection {
                line: 13,
                section: SectionMarker::Bom,
            }
        );
    }

    #[test]
    fn test_empty_input_misses_first_marker() {
        let error = analyze(Vec::<String>::new()).unwrap_err();
        assert_eq!(
            error,
            AnalysisError::MissingSection {
                line: 0,
                section: SectionMarker::GcauConfigurationData,
            }
        );
    }

    #[test]
    fn test_analyze_str_counts_trailing_newline() {
        let error = analyze_str("$BOM = \"Start\"\r\n").unwrap_err();
        assert_eq!(error.category(), ErrorCategory::MissingClosingSection);
        assert_eq!(error.line(), 2);
    }

    #[test]
    fn test_incremental_feeding() {
        let mut analyzer = Analyzer::new();
        analyzer.feed("$BOM = \"Start\"").unwrap();
        assert_eq!(analyzer.cursor(), Cursor::Open(1));
        analyzer.feed("$BOM = \"End\"").unwrap();
        assert_eq!(analyzer.cursor(), Cursor::Closed(1));
        assert_eq!(analyzer.line_count(), 2);
    }
}
