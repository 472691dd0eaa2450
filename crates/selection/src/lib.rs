//! Text selection over the render tree: hit-testing, click/drag event
//! mapping, keyboard caret movement, and copy serialization. Depends on
//! `layout`'s render tree for geometry and line boxes; never on `paint`
//! (selection painting is computed from ranges this crate exposes, but
//! turning a range into pixels is paint's job).

mod block_ancestor;
mod boxes;
mod caret;
mod events;
mod hit_test;
mod model;
mod serialize;
mod util;
mod word;

pub use block_ancestor::nearest_block_ancestor;
pub use boxes::{collect_text_boxes, index_of, TextBoxEntry};
pub use caret::{move_left, move_right, move_vertical, move_word_left, move_word_right, select_all};
pub use events::{click, double_click, drag_block, drag_character, drag_word, shift_click, triple_click};
pub use hit_test::{hit_test_exact, hit_test_nearest_line_at_y, hit_test_nearest_overall};
pub use model::{compare_positions, in_document_order, Selection, SelectionMode, TextPosition};
pub use serialize::{selection_range_for_line, serialize_selection};
pub use word::find_word_boundaries;

#[cfg(test)]
mod tests {
    use super::*;
    use css::build_style_tree;
    use dom::{Document as Doc, ElementData};
    use layout::{MonospaceFont, MonospaceProvider, ProviderMeasurer};

    fn ctx() -> css::values::ResolutionContext {
        css::values::ResolutionContext {
            containing_block: 400.0,
            font_size_px: 16.0,
            root_font_size_px: 16.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
        }
    }

    #[test]
    fn triple_click_selects_whole_paragraph_across_inline_children() {
        let mut doc = Doc::new();
        let p = doc.create_element(ElementData::new("p"));
        let before = doc.create_text("Hello ");
        let strong = doc.create_element(ElementData::new("strong"));
        let bold = doc.create_text("world");
        let after = doc.create_text(" today");
        doc.append_child(p, before);
        doc.append_child(p, strong);
        doc.append_child(strong, bold);
        doc.append_child(p, after);
        doc.append_child(doc.root(), p);

        let tree = build_style_tree(&doc, &[]);
        let provider = MonospaceProvider { font: MonospaceFont { advance_px: 8.0 } };
        let measurer = ProviderMeasurer { provider: &provider };
        let root_box = layout::layout_node(&doc, &tree, 0.0, 0.0, 800.0, ctx(), &measurer);

        let entries = collect_text_boxes(&root_box);
        let hit = hit_test_exact(&root_box, 10.0, 5.0, &measurer).expect("hit on Hello");
        let sel = triple_click(&doc, &entries, hit).expect("paragraph selection");

        let text = serialize_selection(&entries, &sel);
        assert_eq!(text, "Hello world today");
    }
}
