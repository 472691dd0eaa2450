use css::build_style_tree;
use css::values::ResolutionContext;
use dom::{Document, ElementData};
use layout::{layout_node, MonospaceFont, MonospaceProvider, ProviderMeasurer};
use selection::{collect_text_boxes, hit_test_exact, serialize_selection, triple_click};

fn ctx() -> ResolutionContext {
    ResolutionContext {
        containing_block: 800.0,
        font_size_px: 16.0,
        root_font_size_px: 16.0,
        viewport_width: 800.0,
        viewport_height: 600.0,
    }
}

/// Document `<p>Hello <strong>world</strong> today</p><p>Next</p>`.
/// Triple-click anywhere in the first `<p>`. Expected: selection covers
/// "Hello world today" across the text and the inline `<strong>`; the
/// second `<p>` is not selected.
#[test]
fn triple_click_selects_whole_first_paragraph_only() {
    let mut doc = Document::new();
    let p1 = doc.create_element(ElementData::new("p"));
    let before = doc.create_text("Hello ");
    let strong = doc.create_element(ElementData::new("strong"));
    let bold = doc.create_text("world");
    let after = doc.create_text(" today");
    doc.append_child(p1, before);
    doc.append_child(p1, strong);
    doc.append_child(strong, bold);
    doc.append_child(p1, after);

    let p2 = doc.create_element(ElementData::new("p"));
    let next = doc.create_text("Next");
    doc.append_child(p2, next);

    doc.append_child(doc.root(), p1);
    doc.append_child(doc.root(), p2);

    let tree = build_style_tree(&doc, &[]);
    let provider = MonospaceProvider { font: MonospaceFont { advance_px: 8.0 } };
    let measurer = ProviderMeasurer { provider: &provider };
    let root_box = layout_node(&doc, &tree, 0.0, 0.0, 800.0, ctx(), &measurer);

    let entries = collect_text_boxes(&root_box);
    let hit = hit_test_exact(&root_box, 10.0, 5.0, &measurer).expect("hit on Hello");
    let sel = triple_click(&doc, &entries, hit).expect("paragraph selection");

    let copied = serialize_selection(&entries, &sel);
    assert_eq!(copied, "Hello world today");
    assert!(!copied.contains("Next"));
}
