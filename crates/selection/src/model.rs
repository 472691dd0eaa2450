//! Selection state: an anchor/focus pair of [`TextPosition`]s plus the
//! granularity mode that governs how drag continuation grows it.

use dom::NodeId;

use crate::boxes::{self, TextBoxEntry};

/// A caret location: a text box, the wrapped line within it, and a byte
/// offset into that line's string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPosition {
    pub node: NodeId,
    pub line: usize,
    pub char_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Character,
    Word,
    Block,
}

#[derive(Debug, Clone)]
pub struct Selection {
    pub anchor: TextPosition,
    pub focus: TextPosition,
    pub mode: SelectionMode,
    pub dragging: bool,
    /// Sticky horizontal column for Shift+Up/Down; cleared on any
    /// horizontal caret move (P8).
    pub goal_x: Option<f32>,
    /// Word bounds remembered from a double-click, used to grow the
    /// selection symmetrically while a word-mode drag continues.
    pub anchor_word: Option<(TextPosition, TextPosition)>,
}

impl Selection {
    pub fn collapsed_at(pos: TextPosition) -> Self {
        Selection {
            anchor: pos,
            focus: pos,
            mode: SelectionMode::Character,
            dragging: false,
            goal_x: None,
            anchor_word: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.focus
    }
}

/// Document order of two positions, by text-box index first, then line,
/// then byte offset. Positions whose node isn't in `boxes` sort first.
pub fn compare_positions(boxes: &[TextBoxEntry], a: &TextPosition, b: &TextPosition) -> std::cmp::Ordering {
    let ia = boxes::index_of(boxes, a.node).unwrap_or(0);
    let ib = boxes::index_of(boxes, b.node).unwrap_or(0);
    ia.cmp(&ib).then(a.line.cmp(&b.line)).then(a.char_index.cmp(&b.char_index))
}

/// `(a, b)` reordered so the first element is not after the second.
pub fn in_document_order(
    boxes: &[TextBoxEntry],
    a: TextPosition,
    b: TextPosition,
) -> (TextPosition, TextPosition) {
    if compare_positions(boxes, &a, &b) != std::cmp::Ordering::Greater {
        (a, b)
    } else {
        (b, a)
    }
}
