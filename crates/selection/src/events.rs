//! Pointer-event to selection-state mapping: click, double/triple-click,
//! shift-click, and the three drag continuations.

use dom::Document;

use crate::block_ancestor::nearest_block_ancestor;
use crate::boxes::{self, TextBoxEntry};
use crate::model::{compare_positions, Selection, SelectionMode, TextPosition};
use crate::word::find_word_boundaries;

/// Single click: collapse to a caret, Character mode.
pub fn click(pos: TextPosition) -> Selection {
    Selection::collapsed_at(pos)
}

/// Shift+Click: keep the existing anchor, move focus, Character mode.
pub fn shift_click(existing: &Selection, pos: TextPosition) -> Selection {
    Selection {
        anchor: existing.anchor,
        focus: pos,
        mode: SelectionMode::Character,
        dragging: false,
        goal_x: None,
        anchor_word: None,
    }
}

/// Double click: select the word under the hit, Word mode, remembering the
/// word bounds so a following drag can grow symmetrically.
pub fn double_click(line_text: &str, pos: TextPosition) -> Selection {
    let (s, e) = find_word_boundaries(line_text, pos.char_index);
    let start = TextPosition { char_index: s, ..pos };
    let end = TextPosition { char_index: e, ..pos };
    Selection {
        anchor: start,
        focus: end,
        mode: SelectionMode::Word,
        dragging: true,
        goal_x: None,
        anchor_word: Some((start, end)),
    }
}

/// Triple click: select the whole nearest block ancestor's text, Block mode.
pub fn triple_click(doc: &Document, boxes: &[TextBoxEntry], pos: TextPosition) -> Option<Selection> {
    let block = nearest_block_ancestor(doc, pos.node)?;

    let mut first: Option<usize> = None;
    let mut last: Option<usize> = None;
    for (i, b) in boxes.iter().enumerate() {
        if doc.ancestors(b.node).any(|a| a == block) {
            first = first.or(Some(i));
            last = Some(i);
        }
    }
    let (first, last) = (first?, last?);

    let anchor = TextPosition {
        node: boxes[first].node,
        line: 0,
        char_index: 0,
    };
    let last_line_idx = boxes[last].lines.len().saturating_sub(1);
    let focus = TextPosition {
        node: boxes[last].node,
        line: last_line_idx,
        char_index: boxes[last].lines.get(last_line_idx).map(|l| l.text.len()).unwrap_or(0),
    };

    Some(Selection {
        anchor,
        focus,
        mode: SelectionMode::Block,
        dragging: false,
        goal_x: None,
        anchor_word: None,
    })
}

/// Character-mode drag continuation: move focus only.
pub fn drag_character(existing: &Selection, pos: TextPosition) -> Selection {
    Selection {
        anchor: existing.anchor,
        focus: pos,
        mode: SelectionMode::Character,
        dragging: true,
        goal_x: None,
        anchor_word: existing.anchor_word,
    }
}

/// Word-mode drag continuation: the selection always covers at least the
/// originally double-clicked word, growing toward whichever side the drag
/// target's word falls on.
pub fn drag_word(existing: &Selection, boxes: &[TextBoxEntry], line_text: &str, target: TextPosition) -> Selection {
    let (ws, we) = find_word_boundaries(line_text, target.char_index);
    let word_start = TextPosition { char_index: ws, ..target };
    let word_end = TextPosition { char_index: we, ..target };
    let (anchor_start, anchor_end) = existing.anchor_word.unwrap_or((existing.anchor, existing.anchor));

    let (anchor, focus) = if compare_positions(boxes, &word_start, &anchor_start) != std::cmp::Ordering::Less {
        (anchor_start, word_end)
    } else {
        (anchor_end, word_start)
    };

    Selection {
        anchor,
        focus,
        mode: SelectionMode::Word,
        dragging: true,
        goal_x: None,
        anchor_word: existing.anchor_word,
    }
}

/// Block-mode drag continuation: grows by whole lines toward the target.
pub fn drag_block(existing: &Selection, boxes: &[TextBoxEntry], target: TextPosition) -> Selection {
    let target_line_len = boxes::index_of(boxes, target.node)
        .and_then(|i| boxes[i].lines.get(target.line))
        .map(|l| l.text.len())
        .unwrap_or(target.char_index);
    let anchor_line_len = boxes::index_of(boxes, existing.anchor.node)
        .and_then(|i| boxes[i].lines.get(existing.anchor.line))
        .map(|l| l.text.len())
        .unwrap_or(existing.anchor.char_index);

    let after = compare_positions(boxes, &target, &existing.anchor) != std::cmp::Ordering::Less;
    let (anchor, focus) = if after {
        (
            TextPosition { char_index: 0, ..existing.anchor },
            TextPosition { char_index: target_line_len, ..target },
        )
    } else {
        (
            TextPosition { char_index: anchor_line_len, ..existing.anchor },
            TextPosition { char_index: 0, ..target },
        )
    };

    Selection {
        anchor,
        focus,
        mode: SelectionMode::Block,
        dragging: true,
        goal_x: None,
        anchor_word: existing.anchor_word,
    }
}
