// crates/extract_code_blocks/src/lib.rs

//! Pulls fenced code samples out of the examples region of an operator
//! reference page. The scan is line-by-line over an in-memory buffer:
//! locate the examples heading, split what follows into named sub-sections,
//! and read an indentation-delimited block after every fence marker. Block
//! content is opaque text; nothing here understands the sample's language.

mod block;
mod error;
mod lines;
mod sections;

pub use block::{read_block, CodeBlock};
pub use error::ExtractError;
pub use lines::{indent_width, is_blank, is_control_line, is_underline, LineCursor};
pub use sections::{split_sections, DEFAULT_SECTION};

use rst_markers::{CODE_BLOCK_MARKER, EXAMPLES_HEADINGS, HEADING_SKIP};

/// Extracts every code block from the document text, grouped by sub-section
/// name in discovery order. Purely a function of the input: running it twice
/// yields identical results.
///
/// # Errors
///
/// `MissingExamplesHeading` when no line trims to an examples heading,
/// `TabIndentation` when leading whitespace contains a tab, and
/// `DuplicateSection` when a sub-section heading repeats.
pub fn extract_code_blocks(text: &str) -> Result<Vec<(String, Vec<CodeBlock>)>, ExtractError> {
    let all_lines: Vec<&str> = text.lines().collect();
    reject_tab_indentation(&all_lines)?;

    let heading = all_lines
        .iter()
        .position(|line| EXAMPLES_HEADINGS.contains(&line.trim()))
        .ok_or(ExtractError::MissingExamplesHeading)?;
    // Fixed skip: the heading line, its underline, and the blank separator.
    let body_start = (heading + HEADING_SKIP).min(all_lines.len());
    let body = &all_lines[body_start..];

    let mut result = Vec::new();
    for (name, section) in split_sections(body)? {
        let mut blocks = Vec::new();
        let mut cursor = LineCursor::new(&section);
        while let Some(line) = cursor.advance() {
            if line.trim().starts_with(CODE_BLOCK_MARKER) {
                blocks.push(read_block(&mut cursor));
            }
        }
        result.push((name, blocks));
    }
    Ok(result)
}

fn reject_tab_indentation(lines: &[&str]) -> Result<(), ExtractError> {
    for (idx, line) in lines.iter().enumerate() {
        let leading = &line[..line.len() - line.trim_start().len()];
        if leading.contains('\t') {
            return Err(ExtractError::TabIndentation { line: idx + 1 });
        }
    }
    Ok(())
}
