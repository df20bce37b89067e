// crates/extract_code_blocks/src/lines.rs

use once_cell::sync::Lazy;
use regex::Regex;
use rst_markers::{DIRECTIVE_PREFIX, UNDERLINE_CHARS};

// Directive field options: ":copyable: false", ":caption: Output".
static FIELD_OPTION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^:[A-Za-z][A-Za-z0-9_-]*:").unwrap());

/// Number of leading space characters. A whitespace-only line's width is the
/// count of all its characters. Tabs are never counted; documents containing
/// tab indentation are rejected before any width is taken.
pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|&c| c == ' ').count()
}

/// True when the line carries no content at all.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// True when the trimmed line is a directive or a directive field option,
/// markup that must be skipped rather than treated as example content.
pub fn is_control_line(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with(DIRECTIVE_PREFIX) || trimmed == ".." || FIELD_OPTION_LINE.is_match(trimmed)
}

/// True when the line is a sub-heading underline: flush against column zero
/// and made of a single recognized punctuation character repeated.
pub fn is_underline(line: &str) -> bool {
    if indent_width(line) != 0 {
        return false;
    }
    let trimmed = line.trim_end();
    let mut chars = trimmed.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return false,
    };
    trimmed.len() >= 2 && UNDERLINE_CHARS.contains(first) && chars.all(|c| c == first)
}

/// An explicit index cursor over an immutable line slice. Consuming a prefix
/// advances the position; the underlying storage is never mutated, so a
/// caller and a callee can hand the cursor back and forth mid-scan.
#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: &'a [&'a str],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self { lines, pos: 0 }
    }

    /// The next unconsumed line, without consuming it.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Consumes and returns the next line.
    pub fn advance(&mut self) -> Option<&'a str> {
        let line = self.peek();
        if line.is_some() {
            self.pos += 1;
        }
        line
    }

    /// Consumes lines while the predicate holds. Single pass: the first line
    /// failing the predicate is left unconsumed and nothing beyond it is
    /// inspected.
    pub fn skip_while<P: Fn(&str) -> bool>(&mut self, pred: P) {
        while let Some(line) = self.peek() {
            if !pred(line) {
                break;
            }
            self.pos += 1;
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }
}
