//! Copy serialization and the range computation shared with selection
//! painting: which byte range of a given text box's given line is covered.

use crate::boxes::{self, TextBoxEntry};
use crate::model::{in_document_order, Selection, TextPosition};

/// Byte range of `line_idx` within box `box_idx` that the selection
/// `[lo, hi]` (already in document order, spanning boxes `lo_idx..=hi_idx`)
/// covers, or `None` if that line falls outside the selection entirely.
pub fn selection_range_for_line(
    lo: &TextPosition,
    hi: &TextPosition,
    lo_idx: usize,
    hi_idx: usize,
    box_idx: usize,
    line_idx: usize,
    line_len: usize,
) -> Option<(usize, usize)> {
    if box_idx < lo_idx || box_idx > hi_idx {
        return None;
    }
    let is_lo_box = box_idx == lo_idx;
    let is_hi_box = box_idx == hi_idx;
    if is_lo_box && line_idx < lo.line {
        return None;
    }
    if is_hi_box && line_idx > hi.line {
        return None;
    }
    let start = if is_lo_box && line_idx == lo.line { lo.char_index.min(line_len) } else { 0 };
    let end = if is_hi_box && line_idx == hi.line { hi.char_index.min(line_len) } else { line_len };
    Some((start, end.max(start)))
}

/// Plain-text serialization of the current selection: boxes join with a
/// single newline, wrapped lines within the same box join with a space.
pub fn serialize_selection(boxes: &[TextBoxEntry], sel: &Selection) -> String {
    if sel.is_empty() {
        return String::new();
    }
    let (lo, hi) = in_document_order(boxes, sel.anchor, sel.focus);
    let Some(lo_idx) = boxes::index_of(boxes, lo.node) else {
        return String::new();
    };
    let Some(hi_idx) = boxes::index_of(boxes, hi.node) else {
        return String::new();
    };

    let mut out = String::new();
    for box_idx in lo_idx..=hi_idx {
        if box_idx != lo_idx {
            out.push('\n');
        }
        let b = &boxes[box_idx];
        let mut emitted_in_box = false;
        for (line_idx, line) in b.lines.iter().enumerate() {
            let Some((start, end)) =
                selection_range_for_line(&lo, &hi, lo_idx, hi_idx, box_idx, line_idx, line.text.len())
            else {
                continue;
            };
            if start >= end {
                continue;
            }
            if emitted_in_box {
                out.push(' ');
            }
            out.push_str(&line.text[start..end]);
            emitted_in_box = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use css::ComputedStyle;
    use dom::Document as Doc;
    use layout::TextLineBox;

    fn line(text: &str) -> TextLineBox {
        TextLineBox {
            text: text.to_string(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 16.0,
            first_char_index: 0,
        }
    }

    #[test]
    fn serializes_mid_word_to_mid_word_across_elements_with_newline() {
        let mut doc = Doc::new();
        let alpha_node = doc.create_text("alpha");
        let beta_node = doc.create_text("beta");
        let style = ComputedStyle::initial();
        let alpha_lines = vec![line("alpha")];
        let beta_lines = vec![line("beta")];
        let entries = vec![
            TextBoxEntry { node: alpha_node, style: &style, lines: &alpha_lines },
            TextBoxEntry { node: beta_node, style: &style, lines: &beta_lines },
        ];

        let sel = Selection {
            anchor: TextPosition { node: alpha_node, line: 0, char_index: 2 },
            focus: TextPosition { node: beta_node, line: 0, char_index: 2 },
            mode: crate::model::SelectionMode::Character,
            dragging: false,
            goal_x: None,
            anchor_word: None,
        };

        assert_eq!(serialize_selection(&entries, &sel), "pha\nbe");
    }
}
