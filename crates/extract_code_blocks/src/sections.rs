// crates/extract_code_blocks/src/sections.rs

use crate::error::ExtractError;
use crate::lines::{is_blank, is_control_line, is_underline};

/// Name given to content that precedes any sub-heading, or to the whole
/// region when the page uses no sub-headings at all.
pub const DEFAULT_SECTION: &str = "main";

/// Partitions the examples region into named sub-sections, in discovery
/// order. A sub-heading is a content line at column zero whose next line is
/// an underline at least as long as the trimmed heading text; the heading
/// and its underline are excluded from the section's content. Boundaries
/// come from heading structure only; a fence marker never ends a section.
///
/// A repeated sub-section name is rejected: the page is malformed and
/// merging or overwriting would silently mis-attribute examples.
pub fn split_sections<'a>(
    lines: &[&'a str],
) -> Result<Vec<(String, Vec<&'a str>)>, ExtractError> {
    let mut sections: Vec<(String, Vec<&'a str>)> = Vec::new();
    let mut name: Option<String> = None;
    let mut current: Vec<&'a str> = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if is_sub_heading(line, lines.get(i + 1).copied()) {
            push_section(&mut sections, name.take(), std::mem::take(&mut current))?;
            name = Some(line.trim().to_string());
            i += 2;
            continue;
        }
        current.push(line);
        i += 1;
    }
    push_section(&mut sections, name, current)?;
    Ok(sections)
}

fn is_sub_heading(line: &str, next: Option<&str>) -> bool {
    if is_blank(line) || is_control_line(line) || is_underline(line) {
        return false;
    }
    if !line.starts_with(|c: char| !c.is_whitespace()) {
        return false;
    }
    match next {
        Some(underline) => {
            is_underline(underline) && underline.trim_end().len() >= line.trim().len()
        }
        None => false,
    }
}

fn push_section<'a>(
    sections: &mut Vec<(String, Vec<&'a str>)>,
    name: Option<String>,
    lines: Vec<&'a str>,
) -> Result<(), ExtractError> {
    let name = match name {
        Some(name) => name,
        // Unnamed content only counts when there is something in it.
        None if lines.iter().any(|line| !is_blank(line)) => DEFAULT_SECTION.to_string(),
        None => return Ok(()),
    };
    if sections.iter().any(|(existing, _)| *existing == name) {
        return Err(ExtractError::DuplicateSection(name));
    }
    sections.push((name, lines));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sections_in_discovery_order() {
        let lines = [
            "Example 1",
            "~~~~~~~~~",
            "",
            "first body",
            "",
            "Example 2",
            "~~~~~~~~~",
            "",
            "second body",
        ];
        let sections = split_sections(&lines).unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].0, "Example 1");
        assert_eq!(sections[0].1, vec!["", "first body", ""]);
        assert_eq!(sections[1].0, "Example 2");
        assert_eq!(sections[1].1, vec!["", "second body"]);
    }

    #[test]
    fn test_no_sub_heading_is_one_default_section() {
        let lines = ["prose", "", "   code()"];
        let sections = split_sections(&lines).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].0, DEFAULT_SECTION);
        assert_eq!(sections[0].1, vec!["prose", "", "   code()"]);
    }

    #[test]
    fn test_preamble_before_first_sub_heading() {
        let lines = ["intro text", "", "Scenario", "--------", "body"];
        let sections = split_sections(&lines).unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].0, DEFAULT_SECTION);
        assert_eq!(sections[0].1, vec!["intro text", ""]);
        assert_eq!(sections[1].0, "Scenario");
    }

    #[test]
    fn test_blank_preamble_is_dropped() {
        let lines = ["", "", "Scenario", "--------", "body"];
        let sections = split_sections(&lines).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].0, "Scenario");
    }

    #[test]
    fn test_short_underline_does_not_start_a_section() {
        // Underline shorter than the heading text: not a sub-heading.
        let lines = ["A longer heading", "----", "body"];
        let sections = split_sections(&lines).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].0, DEFAULT_SECTION);
        assert_eq!(sections[0].1.len(), 3);
    }

    #[test]
    fn test_duplicate_section_name_is_an_error() {
        let lines = ["Example", "~~~~~~~", "a", "Example", "~~~~~~~", "b"];
        let err = split_sections(&lines).unwrap_err();
        assert_eq!(err, ExtractError::DuplicateSection("Example".to_string()));
    }

    #[test]
    fn test_directive_line_is_not_a_heading() {
        let lines = [".. note::", "--------", "body"];
        let sections = split_sections(&lines).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].0, DEFAULT_SECTION);
    }

    #[test]
    fn test_empty_input_yields_no_sections() {
        let sections = split_sections(&[]).unwrap();
        assert!(sections.is_empty());
    }
}
