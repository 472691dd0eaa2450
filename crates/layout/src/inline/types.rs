//! Flattened inline-level content: the input to line breaking.

use css::computed::ComputedStyle;
use css::StyledNode;
use dom::NodeId;

use crate::render_box::ReplacedKind;

#[derive(Debug)]
pub enum InlineItem<'a> {
    /// One word break-unit of a text node; `start`/`end` are byte offsets
    /// into `full_text`, the owning node's whole (whitespace-collapsed) string.
    Word {
        node: NodeId,
        full_text: &'a str,
        start: usize,
        end: usize,
        style: ComputedStyle,
    },
    /// One collapsed whitespace run.
    Space {
        node: NodeId,
        full_text: &'a str,
        start: usize,
        end: usize,
        style: ComputedStyle,
    },
    HardBreak,
    /// Fixed horizontal advance contributed by a simple (single-text-child)
    /// inline element's edge, placed immediately before/after its text run.
    EdgeBefore { owner: NodeId, width: f32 },
    EdgeAfter { owner: NodeId, width: f32 },
    /// An inline-block, replaced element, or "complex" inline element (more
    /// than a single text child) laid out as one unbreakable unit.
    Box {
        styled: &'a StyledNode,
        width: f32,
        replaced: Option<ReplacedKind>,
    },
}

pub fn classify_replaced(doc: &dom::Document, node: NodeId) -> Option<ReplacedKind> {
    let tag = doc.tag_name(node)?;
    match tag {
        "img" => Some(ReplacedKind::Img),
        "button" => Some(ReplacedKind::Button),
        "textarea" => Some(ReplacedKind::Textarea),
        "select" => Some(ReplacedKind::Select),
        "input" => {
            let ty = doc.element(node).and_then(|e| e.attribute("type"));
            match ty {
                Some("checkbox") => Some(ReplacedKind::Checkbox),
                Some("radio") => Some(ReplacedKind::Radio),
                _ => Some(ReplacedKind::InputText),
            }
        }
        _ => None,
    }
}

/// A chain of inline elements each with exactly one child, terminating in
/// a text node: e.g. `<strong><em>text</em></strong>`.
pub fn is_simple_inline_chain(doc: &dom::Document, styled: &StyledNode) -> bool {
    if doc.text(styled.node).is_some() {
        return true;
    }
    use css::computed::Display;
    styled.style.display == Display::Inline
        && styled.children.len() == 1
        && is_simple_inline_chain(doc, &styled.children[0])
}
