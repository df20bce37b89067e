// crates/rst_markers/src/lib.rs

//! The textual conventions of the operator reference pages, shared by every
//! crate in the extraction tool-chain.

/// Heading texts that open the examples region of a reference page.
/// Matched against the trimmed line, exact form only.
pub const EXAMPLES_HEADINGS: [&str; 2] = ["Examples", "Example"];

/// Lines dropped once the examples heading is found: the heading itself, its
/// underline, and the blank separator that follows. This is a fixed property
/// of the page format, not content-sensitive; a format change breaks it.
pub const HEADING_SKIP: usize = 3;

/// Fence introducer **with** the trailing space, so that only a directive
/// carrying a language tag matches.
pub const CODE_BLOCK_MARKER: &str = ".. code-block:: ";

/// Prefix of directive lines (`.. note::`, `.. versionadded:: 5.0`, ...).
pub const DIRECTIVE_PREFIX: &str = ".. ";

/// A page containing this marker anywhere documents a pipeline stage;
/// every other page documents an expression.
pub const PIPELINE_MARKER: &str = ".. pipeline:: $";

/// Characters a sub-section underline may be drawn with.
pub const UNDERLINE_CHARS: &str = "=-~^\"'`#*+._:";
