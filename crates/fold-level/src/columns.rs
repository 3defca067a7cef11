//! Tab-stop column arithmetic.
//!
//! Translates between raw character indices and visual columns. Tabs advance
//! to the next tab stop (`width += tab_width - width % tab_width`), all other
//! characters advance by their UAX #11 cell width.

use unicode_width::UnicodeWidthChar;

/// Default tab width (in cells) used when a caller does not specify one.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Visual width (in cells) of `ch` when drawn at `cell_offset` within a line.
///
/// Notes:
/// - For `'\t'`, width advances to the next tab stop based on `tab_width`.
/// - For all other characters, width follows UAX #11 (CJK and fullwidth
///   characters occupy two cells, combining characters zero).
pub fn cell_width_at(ch: char, cell_offset: usize, tab_width: usize) -> usize {
    if ch == '\t' {
        let tab_width = tab_width.max(1);
        tab_width - cell_offset % tab_width
    } else {
        UnicodeWidthChar::width(ch).unwrap_or(1)
    }
}

/// Cell width of the line's leading whitespace prefix.
///
/// Spaces count one cell and tabs advance to the next tab stop; the scan
/// stops at the first character that is not a space or tab. A blank line
/// yields the width of its entire prefix.
pub fn indent_width(line_text: &str, tab_width: usize) -> usize {
    let tab_width = tab_width.max(1);
    let mut width = 0usize;
    for ch in line_text.chars() {
        match ch {
            ' ' => width += 1,
            '\t' => width += tab_width - width % tab_width,
            _ => break,
        }
    }
    width
}

/// Visual column of the character at `char_index` within `line_text`.
///
/// `char_index` is counted in `char`s (not bytes). Indices past the end of
/// the line yield the full line width.
pub fn column_for_char_index(line_text: &str, char_index: usize, tab_width: usize) -> usize {
    let mut column = 0usize;
    for ch in line_text.chars().take(char_index) {
        column = column.saturating_add(cell_width_at(ch, column, tab_width));
    }
    column
}

/// Character index whose cell span starts at or covers `column`.
///
/// Inverse of [`column_for_char_index`] for columns that fall on a character
/// boundary. A column strictly inside a tab's (or wide character's) span maps
/// to the index of the character following it. Columns past the end of the
/// line yield the line's character count.
pub fn char_index_for_column(line_text: &str, column: usize, tab_width: usize) -> usize {
    let mut current = 0usize;
    let mut count = 0usize;
    for (index, ch) in line_text.chars().enumerate() {
        if current >= column {
            return index;
        }
        current = current.saturating_add(cell_width_at(ch, current, tab_width));
        count = index + 1;
    }
    count
}
