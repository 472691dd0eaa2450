use css::build_style_tree;
use css::values::ResolutionContext;
use dom::{Document, ElementData};
use layout::{layout_node, MonospaceFont, MonospaceProvider, ProviderMeasurer};
use selection::{click, collect_text_boxes, move_vertical, TextPosition};

fn ctx() -> ResolutionContext {
    ResolutionContext {
        containing_block: 400.0,
        font_size_px: 16.0,
        root_font_size_px: 16.0,
        viewport_width: 800.0,
        viewport_height: 600.0,
    }
}

/// Two stacked paragraphs, "abcdefghij" (10 chars) over "xy" (2 chars).
/// Caret starts at index 8 on the long line. Shift+Down lands on the short
/// line, clamped to its end (index 2). Shift+Up returns to index 8 on the
/// long line: the horizontal column is remembered across the round trip
/// even though the intervening line was too short to hold it (P8).
#[test]
fn goal_column_survives_a_shorter_line_in_between() {
    let mut doc = Document::new();
    let p1 = doc.create_element(ElementData::new("p"));
    let long_line = doc.create_text("abcdefghij");
    doc.append_child(p1, long_line);
    let p2 = doc.create_element(ElementData::new("p"));
    let short_line = doc.create_text("xy");
    doc.append_child(p2, short_line);
    doc.append_child(doc.root(), p1);
    doc.append_child(doc.root(), p2);

    let tree = build_style_tree(&doc, &[]);
    let provider = MonospaceProvider { font: MonospaceFont { advance_px: 8.0 } };
    let measurer = ProviderMeasurer { provider: &provider };
    let root_box = layout_node(&doc, &tree, 0.0, 0.0, 400.0, ctx(), &measurer);

    let entries = collect_text_boxes(&root_box);
    assert_eq!(entries.len(), 2);

    let start = TextPosition { node: entries[0].node, line: 0, char_index: 8 };
    let sel = click(start);

    let down = move_vertical(&sel, &entries, &measurer, 1, true);
    assert_eq!(down.focus.node, entries[1].node);
    assert_eq!(down.focus.char_index, 2, "clamped to end of the short line");

    let up = move_vertical(&down, &entries, &measurer, -1, true);
    assert_eq!(up.focus.node, entries[0].node);
    assert_eq!(up.focus.char_index, 8, "goal column restored on the long line");
}
