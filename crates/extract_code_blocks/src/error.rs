// crates/extract_code_blocks/src/error.rs

use std::error::Error;
use std::fmt;

/// Ways a reference page can be malformed. All failures are deterministic
/// functions of the input text; there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// No line whose trimmed text is exactly "Example" or "Examples".
    MissingExamplesHeading,
    /// The same sub-section heading appeared twice in one examples region.
    DuplicateSection(String),
    /// Leading whitespace contains a tab; indentation widths would be
    /// meaningless, so the document is rejected outright.
    TabIndentation { line: usize },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::MissingExamplesHeading => {
                write!(f, "document has no Example/Examples heading")
            }
            ExtractError::DuplicateSection(name) => {
                write!(f, "duplicate sub-section heading '{}'", name)
            }
            ExtractError::TabIndentation { line } => {
                write!(f, "tab character in leading whitespace on line {}", line)
            }
        }
    }
}

impl Error for ExtractError {}
