#![warn(missing_docs)]
//! `fold-level-rope` - ropey-backed document adapter for `fold-level`.
//!
//! Hosts that already keep their buffer in a [`ropey::Rope`] can wrap it in
//! [`RopeDocument`] and run every `fold-level` scan directly on the rope,
//! without materializing a line vector. Line semantics match
//! `fold_level::TextDocument`: N newlines produce N+1 lines, so text ending
//! in `'\n'` has a trailing empty line.
//!
//! ```rust
//! use fold_level::{DEFAULT_TAB_WIDTH, line_level};
//! use fold_level_rope::RopeDocument;
//!
//! let doc = RopeDocument::from_text("a\n  b\n    c");
//! assert_eq!(line_level(&doc, 2, DEFAULT_TAB_WIDTH), 3);
//! ```

use fold_level::{Document, Line};
use ropey::Rope;

/// A [`Document`] backed by a [`ropey::Rope`].
#[derive(Debug, Clone)]
pub struct RopeDocument {
    rope: Rope,
}

impl RopeDocument {
    /// Build a rope document from raw text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Wrap an existing rope.
    pub fn from_rope(rope: Rope) -> Self {
        Self { rope }
    }

    /// Borrow the underlying rope.
    pub fn as_rope(&self) -> &Rope {
        &self.rope
    }

    /// Reassemble the full text.
    pub fn get_text(&self) -> String {
        self.rope.to_string()
    }
}

impl Document for RopeDocument {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line_at(&self, line_number: usize) -> Option<Line> {
        if line_number >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line_number).to_string();

        // Rope's line() includes the terminator; strip it to match the
        // line-view contract.
        if text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with('\r') {
            text.pop();
        }

        Some(Line::new(line_number, text))
    }
}
