//! Level computation and the ascend-to-level algorithm.
//!
//! Translates indentation structure into a 1-based nesting level and locates
//! the line that represents "go up to level K from here". The ascent is an
//! explicit loop with a step bound of the document length; each accepted
//! parent strictly decreases the reference line, so the walk terminates.

use crate::document::{Document, Line};
use crate::scan::{next_shallower_above, scan_down, scan_up};

/// Result of [`ascend_to_level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AscendOutcome {
    /// The reference position moved to this line (column 0).
    Moved(usize),
    /// The position already satisfies the request, or no legal move exists.
    Unchanged,
}

/// 1-based nesting level of `line_number`.
///
/// A line with no shallower ancestor is level 1; each ancestor found by
/// [`next_shallower_above`] adds one. A line strictly nested inside another
/// has a strictly greater level.
pub fn line_level<D>(doc: &D, line_number: usize, tab_width: usize) -> usize
where
    D: Document + ?Sized,
{
    let mut level = 1;
    let mut current = line_number;
    while let Some(parent) = next_shallower_above(doc, current, tab_width) {
        level += 1;
        current = parent.line_number;
    }
    level
}

/// Walk upward from `from_line` toward `target_level`, one parent at a time.
///
/// Each step moves to the nearest shallower non-blank line above, as long as
/// that parent's level is still at or above `target_level`; the final resting
/// line is the last accepted parent. `origin_line` is the line the walk was
/// first requested from (normally equal to `from_line`) and controls the
/// fallback when the scan runs off the top of the document:
///
/// - If no parent exists on the very first step, the origin is already at or
///   above the shallowest reachable level. A blank line directly above the
///   origin still becomes the resting position; otherwise nothing moves.
/// - If the top is reached after climbing partway, the position settles one
///   line above the current reference, unless that line would be line 0.
pub fn ascend_to_level<D>(
    doc: &D,
    from_line: usize,
    target_level: usize,
    origin_line: usize,
    tab_width: usize,
) -> AscendOutcome
where
    D: Document + ?Sized,
{
    let mut current = from_line;
    for _ in 0..=doc.line_count() {
        let Some(parent) = next_shallower_above(doc, current, tab_width) else {
            if current == origin_line {
                let above = origin_line
                    .checked_sub(1)
                    .and_then(|number| doc.line_at(number));
                if let Some(above) = above.filter(Line::is_empty_or_whitespace) {
                    return AscendOutcome::Moved(above.line_number);
                }
                break;
            }
            // Ran off the top after climbing partway: settle one line above,
            // unless that line would be the document start.
            if current > 1 {
                return AscendOutcome::Moved(current - 1);
            }
            break;
        };
        if line_level(doc, parent.line_number, tab_width) < target_level {
            break;
        }
        current = parent.line_number;
    }

    if current == from_line {
        AscendOutcome::Unchanged
    } else {
        AscendOutcome::Moved(current)
    }
}

/// Reference line to use for a level computation when `line_number` is blank.
///
/// A non-blank line is returned unchanged. For a blank line, the nearest
/// non-blank lines above and below are compared by level and the more deeply
/// nested one wins; the comparison is strict, so the upward candidate wins
/// ties. When only one side has a non-blank neighbor that side wins; an
/// all-blank document returns the input line.
///
/// This resolution is not applied by [`ascend_to_level`] itself; callers that
/// want blank-line disambiguation invoke it on the reference line first.
pub fn resolve_blank_reference_line<D>(doc: &D, line_number: usize, tab_width: usize) -> usize
where
    D: Document + ?Sized,
{
    let Some(current) = doc.line_at(line_number) else {
        return line_number;
    };
    if !current.is_empty_or_whitespace() {
        return line_number;
    }

    let above = scan_up(doc, line_number, |line| !line.is_empty_or_whitespace());
    let below = scan_down(doc, line_number, |line| !line.is_empty_or_whitespace());
    match (above, below) {
        (Some(above), Some(below)) => {
            let above_level = line_level(doc, above.line_number, tab_width);
            let below_level = line_level(doc, below.line_number, tab_width);
            if below_level > above_level {
                below.line_number
            } else {
                above.line_number
            }
        }
        (Some(above), None) => above.line_number,
        (None, Some(below)) => below.line_number,
        (None, None) => line_number,
    }
}
