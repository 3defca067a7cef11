#![warn(missing_docs)]
//! Fold Level - Headless Indentation-Structure Engine
//!
//! # Overview
//!
//! `fold-level` computes indentation-based structural levels of text lines
//! and derives fold/selection boundaries from them, for use inside a text
//! editor. It is headless and host-agnostic: the host exposes its buffer
//! through the [`Document`] trait, and every operation is a pure, synchronous
//! function over that snapshot. No host state is reached, nothing is mutated,
//! and every boundary case is a defined return value (`None`, an empty list,
//! [`AscendOutcome::Unchanged`]) rather than an error.
//!
//! # Core Features
//!
//! - **Tab-Stop Column Arithmetic**: indent widths and character↔column
//!   mapping with tab-stop expansion and UAX #11 cell widths
//! - **Structural Line Scans**: directional predicate searches, block
//!   boundaries, parent/sibling/ancestor relations over indentation
//! - **Level Navigation**: 1-based nesting levels and the ascend-to-level
//!   walk that fold commands resolve their target line with
//! - **Document Abstraction**: bring-your-own buffer via [`Document`];
//!   [`TextDocument`] ships as a self-contained implementation
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Level Navigator (levels + ascend)          │  ← Fold-level resolution
//! ├─────────────────────────────────────────────┤
//! │  Structural Scans (parents, blocks, peers)  │  ← Line relations
//! ├─────────────────────────────────────────────┤
//! │  Column Arithmetic (tab stops, UAX #11)     │  ← Cell geometry
//! ├─────────────────────────────────────────────┤
//! │  Document Abstraction (host buffer view)    │  ← Line access
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ## Levels and ascent
//!
//! ```rust
//! use fold_level::{AscendOutcome, DEFAULT_TAB_WIDTH, TextDocument, ascend_to_level, line_level};
//!
//! let doc = TextDocument::from_text("a\n  b\n    c\n  d\ne");
//!
//! // "    c" sits two ancestors below the root.
//! assert_eq!(line_level(&doc, 2, DEFAULT_TAB_WIDTH), 3);
//!
//! // Walking up to level 1 from "    c" lands on "a".
//! let outcome = ascend_to_level(&doc, 2, 1, 2, DEFAULT_TAB_WIDTH);
//! assert_eq!(outcome, AscendOutcome::Moved(0));
//!
//! // Asking for the level the line is already at is a no-op.
//! let outcome = ascend_to_level(&doc, 2, 3, 2, DEFAULT_TAB_WIDTH);
//! assert_eq!(outcome, AscendOutcome::Unchanged);
//! ```
//!
//! ## Structural scans
//!
//! ```rust
//! use fold_level::{DEFAULT_TAB_WIDTH, TextDocument, lines_one_level_deeper, next_shallower_above};
//!
//! let doc = TextDocument::from_text("a\n  b\n    c\n  d\ne");
//!
//! let parent = next_shallower_above(&doc, 2, DEFAULT_TAB_WIDTH).unwrap();
//! assert_eq!((parent.line_number, parent.text.as_str()), (1, "  b"));
//!
//! let children = lines_one_level_deeper(&doc, 0, DEFAULT_TAB_WIDTH);
//! let numbers: Vec<usize> = children.iter().map(|line| line.line_number).collect();
//! assert_eq!(numbers, vec![1, 3]);
//! ```
//!
//! # Module Description
//!
//! - [`document`] - `Line` views and the `Document` buffer abstraction
//! - [`columns`] - tab-stop column arithmetic and indent widths
//! - [`scan`] - structural line scans and indentation relations
//! - [`level`] - nesting levels and the ascend-to-level walk
//!
//! # Caller Contract
//!
//! Line numbers must lie in `[0, line_count)` and `tab_width` must be
//! positive; both are caller responsibilities. Accessors return `None` for
//! out-of-range lines and column arithmetic clamps a zero `tab_width` to 1,
//! so contract violations surface as "not found" rather than panics.

pub mod columns;
pub mod document;
pub mod level;
pub mod scan;

pub use columns::{
    DEFAULT_TAB_WIDTH, cell_width_at, char_index_for_column, column_for_char_index, indent_width,
};
pub use document::{Document, Line, TextDocument};
pub use level::{AscendOutcome, ascend_to_level, line_level, resolve_blank_reference_line};
pub use scan::{
    ancestors_to_root, block_end, block_start, collect_lines, filter_lines, is_next_deeper_below,
    lines_one_level_deeper, matching_line_numbers, next_same_or_shallower_below,
    next_shallower_above, scan_down, scan_up, text_from_lines,
};
