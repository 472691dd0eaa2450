//! Turns a selection into highlight rects. Reuses
//! `selection::selection_range_for_line` for the byte ranges, then the
//! same rule copy serialization uses for joining adjacent boxes: if two
//! text boxes sit on the same visual line (matching `y`) and both are
//! fully covered, the gap between them is filled too so the highlight
//! reads as one continuous band instead of two disjoint rects.

use css::Color;
use selection::{selection_range_for_line, Selection, TextBoxEntry};

use crate::command::PaintCommand;

pub fn emit_selection_highlight(boxes: &[TextBoxEntry], sel: &Selection, color: Color) -> Vec<PaintCommand> {
    if sel.is_empty() {
        return Vec::new();
    }
    let (lo, hi) = selection::in_document_order(boxes, sel.anchor, sel.focus);
    let Some(lo_idx) = selection::index_of(boxes, lo.node) else {
        return Vec::new();
    };
    let Some(hi_idx) = selection::index_of(boxes, hi.node) else {
        return Vec::new();
    };

    struct Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fully_covered: bool,
    }

    let mut rects: Vec<Rect> = Vec::new();
    for box_idx in lo_idx..=hi_idx {
        let b = &boxes[box_idx];
        for (line_idx, line) in b.lines.iter().enumerate() {
            let Some((start, end)) =
                selection_range_for_line(&lo, &hi, lo_idx, hi_idx, box_idx, line_idx, line.text.len())
            else {
                continue;
            };
            if start >= end {
                continue;
            }
            let full_line = start == 0 && end == line.text.len();
            let x0 = line.x + char_fraction(&line.text, start) * line.width;
            let x1 = line.x + char_fraction(&line.text, end) * line.width;
            rects.push(Rect {
                x: x0,
                y: line.y,
                width: (x1 - x0).max(0.0),
                height: line.height,
                fully_covered: full_line,
            });
        }
    }

    // Fill gaps between adjacent, fully-covered rects sharing a row.
    rects.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap().then(a.x.partial_cmp(&b.x).unwrap()));
    let mut out = Vec::new();
    let mut i = 0;
    while i < rects.len() {
        let mut x0 = rects[i].x;
        let mut x1 = rects[i].x + rects[i].width;
        let y = rects[i].y;
        let height = rects[i].height;
        let mut j = i;
        while j + 1 < rects.len()
            && (rects[j + 1].y - y).abs() < 0.5
            && rects[j].fully_covered
            && rects[j + 1].x - x1 < 2.0
        {
            j += 1;
            x1 = rects[j].x + rects[j].width;
        }
        out.push(PaintCommand::FillRect { x: x0.min(x1), y, width: (x1 - x0).abs(), height, color });
        i = j + 1;
    }

    out
}

/// Cheap proxy for "fraction of the line's pixel width covered by byte
/// offset `n`", used only for the approximate highlight rect before the
/// real glyph-accurate rect is known at paint time via the measurer.
fn char_fraction(text: &str, byte_offset: usize) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    byte_offset.min(text.len()) as f32 / text.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use css::ComputedStyle;
    use dom::Document as Doc;
    use layout::TextLineBox;
    use selection::{SelectionMode, TextPosition};

    fn line(text: &str, x: f32, width: f32) -> TextLineBox {
        TextLineBox { text: text.to_string(), x, y: 0.0, width, height: 16.0, first_char_index: 0 }
    }

    #[test]
    fn full_line_selection_emits_one_rect() {
        let mut doc = Doc::new();
        let node = doc.create_text("hello");
        let style = ComputedStyle::initial();
        let lines = vec![line("hello", 0.0, 40.0)];
        let entries = vec![TextBoxEntry { node, style: &style, lines: &lines }];

        let sel = Selection {
            anchor: TextPosition { node, line: 0, char_index: 0 },
            focus: TextPosition { node, line: 0, char_index: 5 },
            mode: SelectionMode::Character,
            dragging: false,
            goal_x: None,
            anchor_word: None,
        };

        let rects = emit_selection_highlight(&entries, &sel, Color::rgba(0.0, 0.0, 1.0, 0.4));
        assert_eq!(rects.len(), 1);
    }
}
