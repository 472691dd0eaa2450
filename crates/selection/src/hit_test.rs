//! Turns a viewport point into a [`TextPosition`]: an exact hit inside a
//! text line's rect, or, failing that, the nearest line/box.

use layout::{LayoutBox, TextLineBox, TextMeasurer};

use crate::boxes::TextBoxEntry;
use crate::model::TextPosition;

/// Innermost text line box containing `(px, py)`, via reverse-child-order
/// DFS so overlapping later-painted boxes win, same as paint order.
pub fn hit_test_exact(root: &LayoutBox, px: f32, py: f32, measurer: &dyn TextMeasurer) -> Option<TextPosition> {
    for child in root.children.iter().rev() {
        if let Some(hit) = hit_test_exact(child, px, py, measurer) {
            return Some(hit);
        }
    }
    if root.is_text() {
        for (line_idx, line) in root.lines.iter().enumerate() {
            if px >= line.x && px < line.x + line.width.max(1.0) && py >= line.y && py < line.y + line.height {
                let local_x = px - line.x;
                let char_index = measurer.hit_test(&line.text, local_x, &root.style);
                return Some(TextPosition {
                    node: root.node,
                    line: line_idx,
                    char_index,
                });
            }
        }
    }
    None
}

fn edge_distance(line: &TextLineBox, x: f32) -> f32 {
    if x < line.x {
        line.x - x
    } else if x > line.x + line.width {
        x - (line.x + line.width)
    } else {
        0.0
    }
}

/// Falls back to the line whose Y-range contains `py` but whose X-range
/// doesn't contain `px`: picks by gap-midpoint between straddling lines on
/// that row, or the outer edge if `px` is past every line on the row.
pub fn hit_test_nearest_line_at_y(
    boxes: &[TextBoxEntry],
    px: f32,
    py: f32,
    measurer: &dyn TextMeasurer,
) -> Option<TextPosition> {
    struct Candidate<'a> {
        box_idx: usize,
        line_idx: usize,
        line: &'a TextLineBox,
    }

    let mut straddling: Vec<Candidate> = Vec::new();
    for (box_idx, b) in boxes.iter().enumerate() {
        for (line_idx, line) in b.lines.iter().enumerate() {
            if py >= line.y && py < line.y + line.height {
                straddling.push(Candidate { box_idx, line_idx, line });
            }
        }
    }

    if !straddling.is_empty() {
        straddling.sort_by(|a, b| a.line.x.partial_cmp(&b.line.x).unwrap());

        for c in &straddling {
            if px >= c.line.x && px < c.line.x + c.line.width.max(1.0) {
                let local_x = px - c.line.x;
                let char_index = measurer.hit_test(&c.line.text, local_x, boxes[c.box_idx].style);
                return Some(TextPosition {
                    node: boxes[c.box_idx].node,
                    line: c.line_idx,
                    char_index,
                });
            }
        }

        for w in straddling.windows(2) {
            let (a, b) = (&w[0], &w[1]);
            let a_right = a.line.x + a.line.width.max(0.0);
            let b_left = b.line.x;
            if px >= a_right && px < b_left {
                let mid = (a_right + b_left) / 2.0;
                return Some(if px < mid {
                    TextPosition {
                        node: boxes[a.box_idx].node,
                        line: a.line_idx,
                        char_index: a.line.text.len(),
                    }
                } else {
                    TextPosition {
                        node: boxes[b.box_idx].node,
                        line: b.line_idx,
                        char_index: 0,
                    }
                });
            }
        }

        return Some(if px < straddling[0].line.x {
            let first = &straddling[0];
            TextPosition {
                node: boxes[first.box_idx].node,
                line: first.line_idx,
                char_index: 0,
            }
        } else {
            let last = straddling.last().unwrap();
            TextPosition {
                node: boxes[last.box_idx].node,
                line: last.line_idx,
                char_index: last.line.text.len(),
            }
        });
    }

    let mut best: Option<(f32, usize, usize)> = None;
    for (box_idx, b) in boxes.iter().enumerate() {
        for (line_idx, line) in b.lines.iter().enumerate() {
            let mid = line.y + line.height / 2.0;
            let dist = (mid - py).abs();
            if best.map_or(true, |(d, _, _)| dist < d) {
                best = Some((dist, box_idx, line_idx));
            }
        }
    }
    let (_, box_idx, line_idx) = best?;
    let line = &boxes[box_idx].lines[line_idx];
    let char_index = if py < line.y { 0 } else { line.text.len() };
    Some(TextPosition {
        node: boxes[box_idx].node,
        line: line_idx,
        char_index,
    })
}

/// Last-resort hit test for a click with no line box anywhere near its Y:
/// the box whose center is closest, caret placed at its start or end
/// depending on whether the click fell above/left or below/right of it.
pub fn hit_test_nearest_overall(boxes: &[TextBoxEntry], px: f32, py: f32) -> Option<TextPosition> {
    let mut best: Option<(f32, usize, usize)> = None;
    for (box_idx, b) in boxes.iter().enumerate() {
        for (line_idx, line) in b.lines.iter().enumerate() {
            let cx = line.x + line.width / 2.0;
            let cy = line.y + line.height / 2.0;
            let dist = (cx - px).powi(2) + (cy - py).powi(2);
            if best.map_or(true, |(d, _, _)| dist < d) {
                best = Some((dist, box_idx, line_idx));
            }
        }
    }
    let (_, box_idx, line_idx) = best?;
    let line = &boxes[box_idx].lines[line_idx];
    let before = py < line.y || (py < line.y + line.height && px < line.x);
    let char_index = if before { 0 } else { line.text.len() };
    Some(TextPosition {
        node: boxes[box_idx].node,
        line: line_idx,
        char_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxes::TextBoxEntry;
    use css::ComputedStyle;
    use dom::Document as Doc;
    use layout::{MonospaceFont, MonospaceProvider, ProviderMeasurer};

    fn line(text: &str, x: f32, y: f32, width: f32) -> TextLineBox {
        TextLineBox {
            text: text.to_string(),
            x,
            y,
            width,
            height: 16.0,
            first_char_index: 0,
        }
    }

    #[test]
    fn nearest_line_at_y_picks_gap_midpoint() {
        let mut doc = Doc::new();
        let node = doc.create_text("left");
        let style = ComputedStyle::initial();
        let left_lines = vec![line("left", 0.0, 0.0, 40.0)];
        let right_lines = vec![line("right", 100.0, 0.0, 50.0)];
        let entries = vec![
            TextBoxEntry { node, style: &style, lines: &left_lines },
            TextBoxEntry { node, style: &style, lines: &right_lines },
        ];
        let provider = MonospaceProvider { font: MonospaceFont { advance_px: 8.0 } };
        let measurer = ProviderMeasurer { provider: &provider };

        let hit = hit_test_nearest_line_at_y(&entries, 60.0, 5.0, &measurer).unwrap();
        assert_eq!(hit.char_index, 4);
    }
}
