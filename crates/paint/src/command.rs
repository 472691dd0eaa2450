//! One flat enum of draw ops (§6, grounded on `BigBadE-valor`'s
//! `rewrite::renderer::display_list::DisplayList`) rather than a `dyn
//! PaintSink` trait with one method per op: plain data a backend can
//! match on, serialize, or diff, produced fresh every frame.

use css::computed::FontStyle;
use css::Color;

#[derive(Debug, Clone)]
pub enum PaintCommand {
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    },
    StrokeRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        thickness: f32,
        color: Color,
    },
    FillRoundedRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        color: Color,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        thickness: f32,
        color: Color,
    },
    TextRun {
        x_baseline: f32,
        y_baseline: f32,
        text: String,
        font_family: Vec<String>,
        font_weight: u16,
        font_style: FontStyle,
        size_px: f32,
        color: Color,
    },
    PushClip {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    PopClip,
    PushTranslate {
        dx: f32,
        dy: f32,
    },
    PopTranslate,
}
