//! The flat, document-order list of text boxes selection operates over,
//! rebuilt every frame from the render tree (§4.1: rebuilt after layout,
//! never reused across a reflow).

use css::ComputedStyle;
use dom::NodeId;
use layout::{LayoutBox, TextLineBox};

/// One text render box: a node plus the line boxes it was wrapped into.
pub struct TextBoxEntry<'a> {
    pub node: NodeId,
    pub style: &'a ComputedStyle,
    pub lines: &'a [TextLineBox],
}

/// Pre-order DFS over the render tree, collecting every non-empty text box.
/// Matches P2: this order equals pre-order DFS over the DOM restricted to
/// text nodes with non-empty content, since the render tree mirrors the DOM.
pub fn collect_text_boxes(root: &LayoutBox) -> Vec<TextBoxEntry<'_>> {
    let mut out = Vec::new();
    collect_rec(root, &mut out);
    out
}

fn collect_rec<'a>(b: &'a LayoutBox, out: &mut Vec<TextBoxEntry<'a>>) {
    if b.is_text() && !b.lines.is_empty() {
        out.push(TextBoxEntry {
            node: b.node,
            style: &b.style,
            lines: b.lines.as_slice(),
        });
    }
    for child in &b.children {
        collect_rec(child, out);
    }
}

pub fn index_of(boxes: &[TextBoxEntry], node: NodeId) -> Option<usize> {
    boxes.iter().position(|b| b.node == node)
}
