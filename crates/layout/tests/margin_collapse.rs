use css::build_style_tree;
use css::values::ResolutionContext;
use dom::{Document, ElementData};
use layout::{layout_node, MonospaceFont, MonospaceProvider, ProviderMeasurer};

fn ctx() -> ResolutionContext {
    ResolutionContext {
        containing_block: 400.0,
        font_size_px: 16.0,
        root_font_size_px: 16.0,
        viewport_width: 800.0,
        viewport_height: 600.0,
    }
}

/// Two block elements with `margin: 20px 0`: the gap between their border
/// boxes is 20 pixels, not 40.
#[test]
fn adjacent_twenty_pixel_margins_collapse_to_twenty() {
    let mut doc = Document::new();
    let mut a = ElementData::new("div");
    a.set_attribute("style", "margin: 20px 0");
    let a_id = doc.create_element(a);
    let mut b = ElementData::new("div");
    b.set_attribute("style", "margin: 20px 0");
    let b_id = doc.create_element(b);
    doc.append_child(doc.root(), a_id);
    doc.append_child(doc.root(), b_id);

    let tree = build_style_tree(&doc, &[]);
    let provider = MonospaceProvider { font: MonospaceFont { advance_px: 8.0 } };
    let measurer = ProviderMeasurer { provider: &provider };
    let root_box = layout_node(&doc, &tree, 0.0, 0.0, 400.0, ctx(), &measurer);

    let gap = root_box.children[1].border_box().y - root_box.children[0].border_box().bottom();
    assert!((gap - 20.0).abs() < 0.01, "expected a 20px collapsed gap, got {gap}");
}
