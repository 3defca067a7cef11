use fold_level::{
    AscendOutcome, Document, TextDocument, ancestors_to_root, ascend_to_level, block_end,
    indent_width, line_level, next_same_or_shallower_below, next_shallower_above,
    resolve_blank_reference_line,
};

const TAB: usize = 4;

fn sample() -> TextDocument {
    TextDocument::from_lines(["a", "  b", "    c", "  d", "e"])
}

#[test]
fn test_levels_in_sample_document() {
    let doc = sample();
    assert_eq!(line_level(&doc, 0, TAB), 1);
    assert_eq!(line_level(&doc, 1, TAB), 2);
    assert_eq!(line_level(&doc, 2, TAB), 3);
    assert_eq!(line_level(&doc, 3, TAB), 2);
    assert_eq!(line_level(&doc, 4, TAB), 1);
}

#[test]
fn test_parent_of_nested_line() {
    let doc = sample();
    let parent = next_shallower_above(&doc, 2, TAB).unwrap();
    assert_eq!(parent.line_number, 1);
    assert_eq!(parent.text, "  b");
}

#[test]
fn test_ascend_to_root_level() {
    let doc = sample();
    assert_eq!(ascend_to_level(&doc, 2, 1, 2, TAB), AscendOutcome::Moved(0));
}

#[test]
fn test_ascend_one_level() {
    let doc = sample();
    assert_eq!(ascend_to_level(&doc, 2, 2, 2, TAB), AscendOutcome::Moved(1));
}

#[test]
fn test_ascend_to_current_level_is_a_no_op() {
    let doc = sample();
    for line in 0..doc.line_count() {
        let level = line_level(&doc, line, TAB);
        assert_eq!(
            ascend_to_level(&doc, line, level, line, TAB),
            AscendOutcome::Unchanged,
            "line {line} at level {level} should not move"
        );
    }
}

#[test]
fn test_ascend_to_unreachable_deeper_level() {
    let doc = sample();
    assert_eq!(ascend_to_level(&doc, 2, 6, 2, TAB), AscendOutcome::Unchanged);
}

#[test]
fn test_structural_properties_hold_for_every_line() {
    let doc = TextDocument::from_lines([
        "mod a",
        "  fn b",
        "    if c",
        "      deep",
        "",
        "    else",
        "  fn d",
        "top",
    ]);

    for number in 0..doc.line_count() {
        let line = doc.line_at(number).unwrap();
        if line.is_empty_or_whitespace() {
            continue;
        }

        let level = line_level(&doc, number, TAB);
        assert!(level >= 1);

        if let Some(parent) = next_shallower_above(&doc, number, TAB) {
            assert!(indent_width(&parent.text, TAB) < indent_width(&line.text, TAB));
            assert_eq!(line_level(&doc, parent.line_number, TAB), level - 1);
        }

        let chain = ancestors_to_root(&doc, number, TAB);
        assert_eq!(chain.len(), level - 1);
        let widths: Vec<usize> = chain
            .iter()
            .map(|ancestor| indent_width(&ancestor.text, TAB))
            .collect();
        assert!(widths.windows(2).all(|pair| pair[1] < pair[0]));
    }
}

#[test]
fn test_single_line_document() {
    let doc = TextDocument::from_text("only");
    assert!(next_shallower_above(&doc, 0, TAB).is_none());
    assert!(next_same_or_shallower_below(&doc, 0, TAB).is_none());
    assert_eq!(line_level(&doc, 0, TAB), 1);
    assert_eq!(ascend_to_level(&doc, 0, 1, 0, TAB), AscendOutcome::Unchanged);
}

#[test]
fn test_all_blank_document() {
    let doc = TextDocument::from_lines(["", "   ", "\t"]);
    for line in 0..doc.line_count() {
        assert!(next_shallower_above(&doc, line, TAB).is_none());
        assert_eq!(line_level(&doc, line, TAB), 1);
    }
    // From line 0 there is nowhere to go; from deeper lines the blank line
    // directly above becomes the resting position.
    assert_eq!(ascend_to_level(&doc, 0, 1, 0, TAB), AscendOutcome::Unchanged);
    assert_eq!(ascend_to_level(&doc, 2, 1, 2, TAB), AscendOutcome::Moved(1));
}

#[test]
fn test_ascend_without_parent_rests_on_blank_line_above() {
    let doc = TextDocument::from_lines(["a", "", "b"]);
    assert_eq!(ascend_to_level(&doc, 2, 1, 2, TAB), AscendOutcome::Moved(1));
}

#[test]
fn test_ascend_without_parent_stays_when_line_above_has_text() {
    let doc = TextDocument::from_lines(["a", "b"]);
    assert_eq!(ascend_to_level(&doc, 1, 1, 1, TAB), AscendOutcome::Unchanged);
}

#[test]
fn test_ascend_off_the_top_of_a_nested_block() {
    // The shallowest non-blank line has no ancestor of its own, so the walk
    // runs off the top after one accepted step and settles one line above.
    let doc = TextDocument::from_lines(["", "", "  a", "    b"]);
    assert_eq!(ascend_to_level(&doc, 3, 1, 3, TAB), AscendOutcome::Moved(1));
}

#[test]
fn test_ascend_off_the_top_stops_at_document_start() {
    let doc = TextDocument::from_lines(["", "  a", "    b"]);
    assert_eq!(ascend_to_level(&doc, 2, 1, 2, TAB), AscendOutcome::Moved(1));
}

#[test]
fn test_blank_reference_resolution_feeds_the_ascent() {
    let doc = TextDocument::from_lines(["a", "  b", "    c", "", "e"]);

    // The blank line resolves to the deeper neighbor above it.
    let reference = resolve_blank_reference_line(&doc, 3, TAB);
    assert_eq!(reference, 2);

    assert_eq!(
        ascend_to_level(&doc, reference, 1, reference, TAB),
        AscendOutcome::Moved(0)
    );
}

#[test]
fn test_block_end_bounds_an_indented_region() {
    let doc = TextDocument::from_lines(["fn a", "  x", "  y", "fn b"]);
    let reference = indent_width("  x", TAB);
    let end = block_end(&doc, 1, |line| indent_width(&line.text, TAB) >= reference).unwrap();
    assert_eq!(end.line_number, 2);

    let boundary = next_same_or_shallower_below(&doc, 0, TAB).unwrap();
    assert_eq!(boundary.line_number, 3);
}

#[test]
fn test_tabs_and_spaces_mix_consistently() {
    // One tab and four spaces describe the same depth at tab width 4.
    let doc = TextDocument::from_lines(["root", "\tchild", "    sibling", "\t\tgrandchild"]);
    assert_eq!(line_level(&doc, 1, TAB), 2);
    assert_eq!(line_level(&doc, 2, TAB), 2);
    assert_eq!(line_level(&doc, 3, TAB), 3);
    assert_eq!(
        next_shallower_above(&doc, 3, TAB).unwrap().line_number,
        2
    );
    assert_eq!(ascend_to_level(&doc, 3, 1, 3, TAB), AscendOutcome::Moved(0));
}
