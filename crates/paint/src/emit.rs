//! Walks a render tree in paint order (§6 "painting order": background,
//! border, then content, back to front, depth-first) and emits a flat
//! command list. Subtrees whose margin box doesn't intersect the current
//! clip rect are skipped entirely (viewport culling).

use css::computed::{Overflow, TextDecoration};
use layout::{BoxKind, LayoutBox, ListMarker, Rectangle};
use log::trace;

use crate::command::PaintCommand;

fn intersects(a: Rectangle, b: Rectangle) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

fn paint_borders(out: &mut Vec<PaintCommand>, b: &LayoutBox) {
    let border = b.border;
    let color = b.style.border_color;
    let bb = b.border_box();
    if border.top > 0.0 {
        out.push(PaintCommand::FillRect { x: bb.x, y: bb.y, width: bb.width, height: border.top, color });
    }
    if border.bottom > 0.0 {
        out.push(PaintCommand::FillRect {
            x: bb.x,
            y: bb.bottom() - border.bottom,
            width: bb.width,
            height: border.bottom,
            color,
        });
    }
    if border.left > 0.0 {
        out.push(PaintCommand::FillRect { x: bb.x, y: bb.y, width: border.left, height: bb.height, color });
    }
    if border.right > 0.0 {
        out.push(PaintCommand::FillRect {
            x: bb.right() - border.right,
            y: bb.y,
            width: border.right,
            height: bb.height,
            color,
        });
    }
}

fn paint_list_marker(out: &mut Vec<PaintCommand>, b: &LayoutBox) {
    let marker_x = b.content_rect.x - 20.0;
    let marker_y = b.content_rect.y;
    let text = match b.list_marker {
        ListMarker::None => return,
        ListMarker::Unordered => "\u{2022}".to_string(),
        ListMarker::Ordered(n) => format!("{n}."),
    };
    out.push(PaintCommand::TextRun {
        x_baseline: marker_x,
        y_baseline: marker_y + b.style.font_size_px,
        text,
        font_family: b.style.font_family.clone(),
        font_weight: b.style.font_weight,
        font_style: b.style.font_style,
        size_px: b.style.font_size_px,
        color: b.style.color,
    });
}

fn paint_text(out: &mut Vec<PaintCommand>, b: &LayoutBox) {
    for line in &b.lines {
        let baseline_y = line.y + b.style.font_size_px * 0.8;
        out.push(PaintCommand::TextRun {
            x_baseline: line.x,
            y_baseline: baseline_y,
            text: line.text.clone(),
            font_family: b.style.font_family.clone(),
            font_weight: b.style.font_weight,
            font_style: b.style.font_style,
            size_px: b.style.font_size_px,
            color: b.style.color,
        });
        match b.style.text_decoration {
            TextDecoration::None => {}
            TextDecoration::Underline => out.push(PaintCommand::Line {
                x1: line.x,
                y1: line.y + line.height - 1.0,
                x2: line.x + line.width,
                y2: line.y + line.height - 1.0,
                thickness: 1.0,
                color: b.style.color,
            }),
            TextDecoration::LineThrough => out.push(PaintCommand::Line {
                x1: line.x,
                y1: line.y + line.height / 2.0,
                x2: line.x + line.width,
                y2: line.y + line.height / 2.0,
                thickness: 1.0,
                color: b.style.color,
            }),
        }
    }
}

fn walk(b: &LayoutBox, clip: Rectangle, out: &mut Vec<PaintCommand>) {
    if !intersects(b.margin_box(), clip) {
        return;
    }

    trace!("paint: node={:?} kind={:?}", b.node, b.kind);

    let bb = b.border_box();
    if b.style.background_color.a > 0.0 {
        if b.style.border_radius > 0.0 {
            out.push(PaintCommand::FillRoundedRect {
                x: bb.x,
                y: bb.y,
                width: bb.width,
                height: bb.height,
                radius: b.style.border_radius,
                color: b.style.background_color,
            });
        } else {
            out.push(PaintCommand::FillRect {
                x: bb.x,
                y: bb.y,
                width: bb.width,
                height: bb.height,
                color: b.style.background_color,
            });
        }
    }
    paint_borders(out, b);

    if b.kind == BoxKind::Block {
        paint_list_marker(out, b);
    }

    let clips = matches!(b.style.overflow_x, Overflow::Hidden | Overflow::Scroll | Overflow::Auto)
        || matches!(b.style.overflow_y, Overflow::Hidden | Overflow::Scroll | Overflow::Auto);
    let padding_box = b.padding_box();

    if clips {
        out.push(PaintCommand::PushClip {
            x: padding_box.x,
            y: padding_box.y,
            width: padding_box.width,
            height: padding_box.height,
        });
    }

    let scrolled = b.scroll_x != 0.0 || b.scroll_y != 0.0;
    if scrolled {
        out.push(PaintCommand::PushTranslate { dx: -b.scroll_x, dy: -b.scroll_y });
    }

    let inner_clip = if clips {
        padding_box
    } else {
        clip
    };

    if b.has_text_lines() {
        paint_text(out, b);
    }
    for child in &b.children {
        walk(child, inner_clip, out);
    }

    if scrolled {
        out.push(PaintCommand::PopTranslate);
    }
    if clips {
        out.push(PaintCommand::PopClip);
    }
}

/// Emits the full paint command list for one frame, starting from the
/// render tree's root and the viewport rect.
pub fn emit_frame(root: &LayoutBox, viewport: Rectangle) -> Vec<PaintCommand> {
    let mut out = Vec::new();
    walk(root, viewport, &mut out);
    out
}
