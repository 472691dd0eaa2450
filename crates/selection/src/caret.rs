//! Keyboard caret movement: character/word steps that cross box boundaries,
//! plus the sticky-column vertical move generalized from a single text
//! area's line list to the whole document's flat text-box list.

use layout::TextMeasurer;

use crate::boxes::{self, TextBoxEntry};
use crate::model::{Selection, SelectionMode, TextPosition};
use crate::util::{next_char_boundary, prev_char_boundary, skip_leading_space, trim_trailing_space_len};
use crate::word::find_word_boundaries;

fn advance(sel: &Selection, new_pos: TextPosition, extend: bool) -> Selection {
    if extend {
        Selection {
            anchor: sel.anchor,
            focus: new_pos,
            mode: SelectionMode::Character,
            dragging: false,
            goal_x: None,
            anchor_word: None,
        }
    } else {
        Selection::collapsed_at(new_pos)
    }
}

pub fn move_right(sel: &Selection, boxes: &[TextBoxEntry], extend: bool) -> Selection {
    let Some(idx) = boxes::index_of(boxes, sel.focus.node) else {
        return sel.clone();
    };
    let b = &boxes[idx];
    let Some(line) = b.lines.get(sel.focus.line) else {
        return sel.clone();
    };

    let new_focus = if sel.focus.char_index < line.text.len() {
        let next = next_char_boundary(&line.text, sel.focus.char_index);
        TextPosition { char_index: next, ..sel.focus }
    } else if sel.focus.line + 1 < b.lines.len() {
        let next_line = &b.lines[sel.focus.line + 1];
        let start = skip_leading_space(&next_line.text);
        TextPosition { node: sel.focus.node, line: sel.focus.line + 1, char_index: start }
    } else if idx + 1 < boxes.len() {
        let next_box = &boxes[idx + 1];
        let start = next_box.lines.first().map(|l| skip_leading_space(&l.text)).unwrap_or(0);
        TextPosition { node: next_box.node, line: 0, char_index: start }
    } else {
        sel.focus
    };

    advance(sel, new_focus, extend)
}

pub fn move_left(sel: &Selection, boxes: &[TextBoxEntry], extend: bool) -> Selection {
    let Some(idx) = boxes::index_of(boxes, sel.focus.node) else {
        return sel.clone();
    };
    let b = &boxes[idx];
    let Some(line) = b.lines.get(sel.focus.line) else {
        return sel.clone();
    };

    let new_focus = if sel.focus.char_index > 0 {
        let prev = prev_char_boundary(&line.text, sel.focus.char_index);
        TextPosition { char_index: prev, ..sel.focus }
    } else if sel.focus.line > 0 {
        let prev_line = &b.lines[sel.focus.line - 1];
        let end = trim_trailing_space_len(&prev_line.text);
        TextPosition { node: sel.focus.node, line: sel.focus.line - 1, char_index: end }
    } else if idx > 0 {
        let prev_box = &boxes[idx - 1];
        let last_line_idx = prev_box.lines.len().saturating_sub(1);
        let end = prev_box
            .lines
            .get(last_line_idx)
            .map(|l| trim_trailing_space_len(&l.text))
            .unwrap_or(0);
        TextPosition { node: prev_box.node, line: last_line_idx, char_index: end }
    } else {
        sel.focus
    };

    advance(sel, new_focus, extend)
}

/// Ctrl(+Shift)+Right: jump to the next word boundary, clamped to the
/// current line's box (never crosses into the next box).
pub fn move_word_right(sel: &Selection, boxes: &[TextBoxEntry], extend: bool) -> Selection {
    let Some(idx) = boxes::index_of(boxes, sel.focus.node) else {
        return sel.clone();
    };
    let Some(line) = boxes[idx].lines.get(sel.focus.line) else {
        return sel.clone();
    };
    let end = line.text.len();
    let new_char = if sel.focus.char_index >= end {
        end
    } else {
        let (_s, e) = find_word_boundaries(&line.text, sel.focus.char_index);
        e.max(sel.focus.char_index + 1).min(end)
    };
    advance(sel, TextPosition { char_index: new_char, ..sel.focus }, extend)
}

/// Ctrl(+Shift)+Left: jump to the previous word boundary, clamped to the
/// current line's box.
pub fn move_word_left(sel: &Selection, boxes: &[TextBoxEntry], extend: bool) -> Selection {
    let Some(idx) = boxes::index_of(boxes, sel.focus.node) else {
        return sel.clone();
    };
    let Some(line) = boxes[idx].lines.get(sel.focus.line) else {
        return sel.clone();
    };
    let new_char = if sel.focus.char_index == 0 {
        0
    } else {
        let probe = prev_char_boundary(&line.text, sel.focus.char_index);
        let (s, _e) = find_word_boundaries(&line.text, probe);
        s
    };
    advance(sel, TextPosition { char_index: new_char, ..sel.focus }, extend)
}

pub fn select_all(boxes: &[TextBoxEntry]) -> Option<Selection> {
    let first = boxes.first()?;
    let last = boxes.last()?;
    let anchor = TextPosition { node: first.node, line: 0, char_index: 0 };
    let last_line = last.lines.len().saturating_sub(1);
    let focus = TextPosition {
        node: last.node,
        line: last_line,
        char_index: last.lines.get(last_line).map(|l| l.text.len()).unwrap_or(0),
    };
    Some(Selection {
        anchor,
        focus,
        mode: SelectionMode::Character,
        dragging: false,
        goal_x: None,
        anchor_word: None,
    })
}

fn edge_distance(line_x: f32, line_width: f32, x: f32) -> f32 {
    if x < line_x {
        line_x - x
    } else if x > line_x + line_width {
        x - (line_x + line_width)
    } else {
        0.0
    }
}

/// Shift+Up/Down: move to the nearest line on the row above/below,
/// preferring the column (`goal_x`) the caret started the vertical run at.
pub fn move_vertical(
    sel: &Selection,
    boxes: &[TextBoxEntry],
    measurer: &dyn TextMeasurer,
    delta: i32,
    extend: bool,
) -> Selection {
    let mut all: Vec<(usize, usize)> = Vec::new();
    for (bi, b) in boxes.iter().enumerate() {
        for li in 0..b.lines.len() {
            all.push((bi, li));
        }
    }
    all.sort_by(|a, b| {
        let la = &boxes[a.0].lines[a.1];
        let lb = &boxes[b.0].lines[b.1];
        la.y.partial_cmp(&lb.y).unwrap().then(la.x.partial_cmp(&lb.x).unwrap())
    });

    let Some(cur_idx) = boxes::index_of(boxes, sel.focus.node)
        .and_then(|bi| all.iter().position(|&(b, l)| b == bi && l == sel.focus.line))
    else {
        return sel.clone();
    };

    let (cur_bi, cur_li) = all[cur_idx];
    let cur_line = &boxes[cur_bi].lines[cur_li];
    let cur_y = cur_line.y;

    let goal_x = sel
        .goal_x
        .unwrap_or_else(|| cur_line.x + measurer.position_at_index(&cur_line.text, sel.focus.char_index, boxes[cur_bi].style));

    let target_entry = if delta < 0 {
        all[..cur_idx]
            .iter()
            .rev()
            .find(|&&(bi, li)| boxes[bi].lines[li].y < cur_y - 1.0)
    } else {
        all[cur_idx + 1..].iter().find(|&&(bi, li)| boxes[bi].lines[li].y > cur_y + 1.0)
    };
    let Some(&(tbi, tli)) = target_entry else {
        return sel.clone();
    };
    let target_y = boxes[tbi].lines[tli].y;

    let band: Vec<(usize, usize)> = all
        .iter()
        .copied()
        .filter(|&(bi, li)| (boxes[bi].lines[li].y - target_y).abs() < 0.5)
        .collect();

    let pick = band
        .iter()
        .copied()
        .find(|&(bi, li)| {
            let l = &boxes[bi].lines[li];
            goal_x >= l.x && goal_x <= l.x + l.width.max(0.0)
        })
        .unwrap_or_else(|| {
            *band
                .iter()
                .min_by(|&&(bi1, li1), &&(bi2, li2)| {
                    let l1 = &boxes[bi1].lines[li1];
                    let l2 = &boxes[bi2].lines[li2];
                    edge_distance(l1.x, l1.width, goal_x)
                        .partial_cmp(&edge_distance(l2.x, l2.width, goal_x))
                        .unwrap()
                })
                .unwrap()
        });

    let (pbi, pli) = pick;
    let line = &boxes[pbi].lines[pli];
    let local_x = (goal_x - line.x).clamp(0.0, line.width.max(0.0));
    let char_index = measurer.hit_test(&line.text, local_x, boxes[pbi].style);
    let new_pos = TextPosition { node: boxes[pbi].node, line: pli, char_index };

    let mut out = if extend {
        Selection {
            anchor: sel.anchor,
            focus: new_pos,
            mode: SelectionMode::Character,
            dragging: false,
            goal_x: Some(goal_x),
            anchor_word: None,
        }
    } else {
        Selection::collapsed_at(new_pos)
    };
    out.goal_x = Some(goal_x);
    out
}
