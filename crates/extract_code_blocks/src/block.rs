// crates/extract_code_blocks/src/block.rs

use crate::lines::{indent_width, is_blank, is_control_line, LineCursor};

/// One fenced code sample: its lines verbatim (internal blank lines
/// included) plus the indentation level of its first content line.
/// Immutable once the reader returns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlock {
    pub indent: usize,
    pub lines: Vec<String>,
}

impl CodeBlock {
    /// A block with zero lines. Fences with nothing after them produce one.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The block as file content: dedented by the reference indent, trailing
    /// blank lines dropped, terminated with a newline.
    pub fn render(&self) -> String {
        let mut lines: Vec<&str> = self
            .lines
            .iter()
            .map(|line| {
                if is_blank(line) {
                    ""
                } else {
                    &line[self.indent.min(indent_width(line))..]
                }
            })
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            return String::new();
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// Reads one code block. The cursor must sit on the line immediately after a
/// fence marker. Directive options and blank separators before the content
/// are discarded; the first content line fixes the block's indent; lines are
/// then consumed while blank or at least that indented. The first line that
/// is neither is left unconsumed for the caller's scan loop.
///
/// Never fails: a fence with no content left in the input yields a zero-line
/// block, which callers filter at the example level.
pub fn read_block(cursor: &mut LineCursor<'_>) -> CodeBlock {
    cursor.skip_while(|line| is_control_line(line) || is_blank(line));
    let first = match cursor.peek() {
        Some(line) => line,
        None => return CodeBlock::default(),
    };
    let indent = indent_width(first);
    let mut lines = Vec::new();
    while let Some(line) = cursor.peek() {
        if is_blank(line) || indent_width(line) >= indent {
            lines.push(line.to_string());
            cursor.advance();
        } else {
            break;
        }
    }
    CodeBlock { indent, lines }
}
