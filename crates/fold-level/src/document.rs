//! Document abstraction and line views.
//!
//! Every structural computation in this crate runs over an immutable,
//! line-indexed snapshot of a text buffer. Hosts expose their buffer through
//! the [`Document`] trait; [`TextDocument`] is a self-contained
//! `Vec<String>`-backed implementation for tests and simple embedders.

/// A read-only view of one document line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Zero-based index of this line in the document.
    pub line_number: usize,
    /// Raw line content including leading whitespace, excluding the line
    /// terminator.
    pub text: String,
}

impl Line {
    /// Create a line view.
    pub fn new(line_number: usize, text: impl Into<String>) -> Self {
        Self {
            line_number,
            text: text.into(),
        }
    }

    /// Whether the line is empty or contains only whitespace.
    ///
    /// Blank lines are skipped by every structural scan: they never act as a
    /// parent, sibling, or level-defining line.
    pub fn is_empty_or_whitespace(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

/// An immutable, line-indexed snapshot of a text buffer.
///
/// Implementations must keep `line_count` and per-line content stable for the
/// duration of a single structural computation; nothing in this crate mutates
/// the document.
pub trait Document {
    /// Total number of lines.
    fn line_count(&self) -> usize;

    /// The line at `line_number`, or `None` when out of range.
    fn line_at(&self, line_number: usize) -> Option<Line>;
}

/// A `Vec<String>`-backed [`Document`].
///
/// Line splitting follows editor semantics: N newlines produce N+1 lines, so
/// text ending in `'\n'` has a trailing empty line, and an empty document has
/// exactly one empty line. `'\r'` before a newline is stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    lines: Vec<String>,
}

impl TextDocument {
    /// Create an empty document (a single empty line).
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }

    /// Build a document from raw text.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: split_lines_preserve_trailing(text),
        }
    }

    /// Build a document from an explicit line sequence.
    ///
    /// The lines are taken verbatim; they must not contain `'\n'`.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if lines.is_empty() {
            return Self::new();
        }
        Self { lines }
    }

    /// Reassemble the full text, joining lines with `'\n'`.
    pub fn get_text(&self) -> String {
        self.lines.join("\n")
    }
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for TextDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_at(&self, line_number: usize) -> Option<Line> {
        self.lines.get(line_number).map(|text| Line {
            line_number,
            text: text.clone(),
        })
    }
}

pub(crate) fn split_lines_preserve_trailing(text: &str) -> Vec<String> {
    // `str::split('\n')` preserves trailing empty segments, which matches
    // typical editor line semantics (N newlines => N+1 lines).
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}
