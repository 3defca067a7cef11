//! Structural line scans.
//!
//! Pure scans over a [`Document`]: directional predicate searches, contiguous
//! block boundaries, and the indentation-based parent/child/sibling relations
//! the level navigator builds on. Every "not found" outcome is `None` or an
//! empty list, never an error.

use crate::columns::indent_width;
use crate::document::{Document, Line};
use regex::Regex;

/// First line strictly below `from_line` for which `predicate` holds.
///
/// The predicate is not evaluated on `from_line` itself; `None` when the
/// document ends without a match.
pub fn scan_down<D, F>(doc: &D, from_line: usize, predicate: F) -> Option<Line>
where
    D: Document + ?Sized,
    F: Fn(&Line) -> bool,
{
    for index in from_line + 1..doc.line_count() {
        let line = doc.line_at(index)?;
        if predicate(&line) {
            return Some(line);
        }
    }
    None
}

/// First line strictly above `from_line` for which `predicate` holds.
///
/// Symmetric to [`scan_down`], scanning toward line 0.
pub fn scan_up<D, F>(doc: &D, from_line: usize, predicate: F) -> Option<Line>
where
    D: Document + ?Sized,
    F: Fn(&Line) -> bool,
{
    for index in (0..from_line.min(doc.line_count())).rev() {
        let line = doc.line_at(index)?;
        if predicate(&line) {
            return Some(line);
        }
    }
    None
}

/// Last contiguous line at or below `from_line` for which `in_block` holds.
///
/// `from_line` itself is returned when the very next line already fails the
/// predicate. `None` only when `from_line` is out of range.
pub fn block_end<D, F>(doc: &D, from_line: usize, in_block: F) -> Option<Line>
where
    D: Document + ?Sized,
    F: Fn(&Line) -> bool,
{
    let mut last = doc.line_at(from_line)?;
    for index in from_line + 1..doc.line_count() {
        let line = doc.line_at(index)?;
        if !in_block(&line) {
            break;
        }
        last = line;
    }
    Some(last)
}

/// First contiguous line at or above `from_line` for which `in_block` holds.
///
/// Symmetric to [`block_end`], scanning toward line 0.
pub fn block_start<D, F>(doc: &D, from_line: usize, in_block: F) -> Option<Line>
where
    D: Document + ?Sized,
    F: Fn(&Line) -> bool,
{
    let mut first = doc.line_at(from_line)?;
    for index in (0..from_line).rev() {
        let line = doc.line_at(index)?;
        if !in_block(&line) {
            break;
        }
        first = line;
    }
    Some(first)
}

/// Nearest non-blank line above `from_line` with a strictly smaller indent
/// width than `from_line`'s own.
///
/// This is the parent relation of the level model. Blank lines are skipped
/// and never returned; `None` when the top of the document is reached without
/// a shallower line, including when `from_line` is line 0.
pub fn next_shallower_above<D>(doc: &D, from_line: usize, tab_width: usize) -> Option<Line>
where
    D: Document + ?Sized,
{
    let reference = indent_width(&doc.line_at(from_line)?.text, tab_width);
    for index in (0..=from_line).rev() {
        let line = doc.line_at(index)?;
        if line.is_empty_or_whitespace() {
            continue;
        }
        if indent_width(&line.text, tab_width) < reference {
            return Some(line);
        }
    }
    None
}

/// Nearest non-blank line below `from_line` with an indent width at or below
/// `from_line`'s own.
///
/// The downward block-boundary relation: the first line back at (or left of)
/// the starting indentation. `None` when the document ends first.
pub fn next_same_or_shallower_below<D>(doc: &D, from_line: usize, tab_width: usize) -> Option<Line>
where
    D: Document + ?Sized,
{
    let reference = indent_width(&doc.line_at(from_line)?.text, tab_width);
    for index in from_line + 1..doc.line_count() {
        let line = doc.line_at(index)?;
        if line.is_empty_or_whitespace() {
            continue;
        }
        if indent_width(&line.text, tab_width) <= reference {
            return Some(line);
        }
    }
    None
}

/// Whether the first non-blank line below `from_line` is strictly deeper
/// than `from_line`.
///
/// `None` when no non-blank line exists below.
pub fn is_next_deeper_below<D>(doc: &D, from_line: usize, tab_width: usize) -> Option<bool>
where
    D: Document + ?Sized,
{
    let reference = indent_width(&doc.line_at(from_line)?.text, tab_width);
    let next = scan_down(doc, from_line, |line| !line.is_empty_or_whitespace())?;
    Some(indent_width(&next.text, tab_width) > reference)
}

/// Immediate children of `parent_line`: every non-blank line below it at
/// exactly one indentation step deeper.
///
/// The first non-blank line below the parent defines the child indent width;
/// if it is not strictly deeper than the parent (or no non-blank line exists
/// below), there are no children and the result is empty. Collection stops at
/// the first non-blank line back at or left of the parent's indentation.
pub fn lines_one_level_deeper<D>(doc: &D, parent_line: usize, tab_width: usize) -> Vec<Line>
where
    D: Document + ?Sized,
{
    let Some(parent) = doc.line_at(parent_line) else {
        return Vec::new();
    };
    let parent_width = indent_width(&parent.text, tab_width);

    let Some(first_child) = scan_down(doc, parent_line, |line| !line.is_empty_or_whitespace())
    else {
        return Vec::new();
    };
    let child_width = indent_width(&first_child.text, tab_width);
    if child_width <= parent_width {
        return Vec::new();
    }

    let mut children = Vec::new();
    for index in parent_line + 1..doc.line_count() {
        let Some(line) = doc.line_at(index) else {
            break;
        };
        if line.is_empty_or_whitespace() {
            continue;
        }
        let width = indent_width(&line.text, tab_width);
        if width <= parent_width {
            break;
        }
        if width == child_width {
            children.push(line);
        }
    }
    children
}

/// Chain of ancestors of `from_line`, innermost first.
///
/// Repeatedly applies [`next_shallower_above`]. The starting line itself is
/// not part of the chain, so a root-level line yields an empty chain and the
/// chain length always equals the line's level minus one.
pub fn ancestors_to_root<D>(doc: &D, from_line: usize, tab_width: usize) -> Vec<Line>
where
    D: Document + ?Sized,
{
    let mut chain = Vec::new();
    let mut current = from_line;
    while let Some(parent) = next_shallower_above(doc, current, tab_width) {
        current = parent.line_number;
        chain.push(parent);
    }
    chain
}

/// Collect the inclusive line range `start_line..=end_line`, clamped to the
/// document.
pub fn collect_lines<D>(doc: &D, start_line: usize, end_line: usize) -> Vec<Line>
where
    D: Document + ?Sized,
{
    let mut lines = Vec::new();
    for index in start_line..=end_line.min(doc.line_count().saturating_sub(1)) {
        match doc.line_at(index) {
            Some(line) => lines.push(line),
            None => break,
        }
    }
    lines
}

/// Collect the lines in `start_line..=end_line` whose text satisfies
/// `filter`.
pub fn filter_lines<D, F>(doc: &D, start_line: usize, end_line: usize, filter: F) -> Vec<Line>
where
    D: Document + ?Sized,
    F: Fn(&str) -> bool,
{
    collect_lines(doc, start_line, end_line)
        .into_iter()
        .filter(|line| filter(&line.text))
        .collect()
}

/// Line numbers of every line whose text matches `pattern`.
pub fn matching_line_numbers<D>(doc: &D, pattern: &Regex) -> Vec<usize>
where
    D: Document + ?Sized,
{
    let mut numbers = Vec::new();
    for index in 0..doc.line_count() {
        if let Some(line) = doc.line_at(index) {
            if pattern.is_match(&line.text) {
                numbers.push(line.line_number);
            }
        }
    }
    numbers
}

/// Newline-joined text of `lines`.
pub fn text_from_lines(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
