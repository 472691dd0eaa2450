//! Inline formatting context: pen-position line breaking over flattened
//! text/replaced/inline-block content, then text-align shifting and a
//! vertical-align pass for non-text (replaced/inline-block) items on
//! each closed line.

mod breaker;
mod tokens;
mod types;

use std::collections::HashMap;

use css::computed::{ComputedStyle, Display, VerticalAlign};
use css::values::ResolutionContext;
use css::StyledNode;
use dom::{Document, NodeId};
use log::trace;

use crate::box_model::resolve_edges;
use crate::intrinsic::intrinsic_width;
use crate::render_box::{LayoutBox, TextLineBox};
use crate::text::TextMeasurer;
pub use types::classify_replaced;
use types::{is_simple_inline_chain, InlineItem};

struct Flattener<'a> {
    doc: &'a Document,
    measurer: &'a dyn TextMeasurer,
    ctx: ResolutionContext,
    items: Vec<InlineItem<'a>>,
}

impl<'a> Flattener<'a> {
    fn flatten_children(&mut self, children: &'a [StyledNode]) {
        for child in children {
            self.flatten_one(child);
        }
    }

    fn flatten_one(&mut self, styled: &'a StyledNode) {
        if let Some(text) = self.doc.text(styled.node) {
            self.push_text(styled.node, text, &styled.style);
            return;
        }

        let Some(tag) = self.doc.tag_name(styled.node) else {
            return;
        };

        if tag == "br" {
            self.items.push(InlineItem::HardBreak);
            return;
        }

        if let Some(replaced) = classify_replaced(self.doc, styled.node) {
            let w = intrinsic_width(self.doc, styled, self.ctx, self.measurer);
            self.items.push(InlineItem::Box {
                styled,
                width: w,
                replaced: Some(replaced),
            });
            return;
        }

        if styled.style.display == Display::Inline && is_simple_inline_chain(self.doc, styled) {
            let child_ctx = ResolutionContext {
                font_size_px: styled.style.font_size_px,
                ..self.ctx
            };
            let edges = resolve_edges(combined_edges(&styled.style), child_ctx);
            if edges.left > 0.0 {
                self.items.push(InlineItem::EdgeBefore {
                    owner: styled.node,
                    width: edges.left,
                });
            }
            self.flatten_children(&styled.children);
            if edges.right > 0.0 {
                self.items.push(InlineItem::EdgeAfter {
                    owner: styled.node,
                    width: edges.right,
                });
            }
            return;
        }

        // Anything else inline-level with non-trivial structure (multiple
        // children, or a non-inline display) is a complex unit laid out
        // recursively and placed as one unbreakable box on the line.
        let w = intrinsic_width(self.doc, styled, self.ctx, self.measurer);
        self.items.push(InlineItem::Box {
            styled,
            width: w,
            replaced: None,
        });
    }

    fn push_text(&mut self, node: NodeId, text: &'a str, style: &ComputedStyle) {
        for unit in tokens::tokenize(text) {
            match unit {
                tokens::BreakUnit::Word { start, end } => self.items.push(InlineItem::Word {
                    node,
                    full_text: text,
                    start,
                    end,
                    style: style.clone(),
                }),
                tokens::BreakUnit::Space { start, end } => self.items.push(InlineItem::Space {
                    node,
                    full_text: text,
                    start,
                    end,
                    style: style.clone(),
                }),
            }
        }
    }
}

/// Margin+border+padding on one side, folded to a single pixel length via
/// an em-only resolution (relative-to-containing-block edges on a purely
/// inline wrapper are rare enough that this approximation is acceptable).
fn combined_edges(style: &ComputedStyle) -> css::computed::BoxEdges {
    let ctx = ResolutionContext {
        containing_block: 0.0,
        font_size_px: style.font_size_px,
        root_font_size_px: 16.0,
        viewport_width: 0.0,
        viewport_height: 0.0,
    };
    let sum = |a: css::Length, b: css::Length, c: css::Length| {
        css::Length::Px(a.resolve(ctx).max(0.0) + b.resolve(ctx).max(0.0) + c.resolve(ctx).max(0.0))
    };
    css::computed::BoxEdges {
        top: css::Length::zero(),
        right: sum(style.margin.right, style.border_width.right, style.padding.right),
        bottom: css::Length::zero(),
        left: sum(style.margin.left, style.border_width.left, style.padding.left),
    }
}

/// Resolved left/right pixel edges of a simple inline chain wrapper;
/// reused by `block.rs` when it rebuilds a chain's nested boxes from the
/// text lines this module already flattened and laid out.
pub fn line_edges(style: &ComputedStyle, ctx: ResolutionContext) -> crate::box_model::EdgesPx {
    resolve_edges(combined_edges(style), ctx)
}

/// Wraps a standalone text node (no inline-level siblings, §4.3.6): pure
/// whitespace wrapping, trailing-space trimming, per-line text-align shift.
pub fn wrap_plain_text(
    text: &str,
    style: &ComputedStyle,
    avail_width: f32,
    start_x: f32,
    start_y: f32,
    measurer: &dyn TextMeasurer,
) -> Vec<TextLineBox> {
    let line_h = measurer.line_height(style);
    let mut lines = Vec::new();
    let mut cur = String::new();
    let mut cur_start = 0usize;
    let mut cursor_x = 0.0f32;
    let mut y = start_y;

    for unit in tokens::tokenize(text) {
        let (tok_start, tok_end, is_space) = match unit {
            tokens::BreakUnit::Word { start, end } => (start, end, false),
            tokens::BreakUnit::Space { start, end } => (start, end, true),
        };
        let slice = &text[tok_start..tok_end];
        let w = measurer.measure(slice, style);

        if cursor_x + w > avail_width && !cur.is_empty() && !is_space {
            push_plain_line(&mut lines, std::mem::take(&mut cur), cur_start, start_x, y, avail_width, style, measurer);
            y += line_h;
            cursor_x = 0.0;
        }
        if is_space && cur.is_empty() {
            continue;
        }
        if cur.is_empty() {
            cur_start = tok_start;
        }
        cur.push_str(slice);
        cursor_x += w;
    }
    push_plain_line(&mut lines, cur, cur_start, start_x, y, avail_width, style, measurer);
    lines
}

#[allow(clippy::too_many_arguments)]
fn push_plain_line(
    lines: &mut Vec<TextLineBox>,
    mut text: String,
    start_index: usize,
    start_x: f32,
    y: f32,
    avail_width: f32,
    style: &ComputedStyle,
    measurer: &dyn TextMeasurer,
) {
    if text.ends_with(' ') {
        text.pop();
    }
    if text.is_empty() {
        return;
    }
    let width = measurer.measure(&text, style);
    let dx = text_align_shift(width, avail_width, style.text_align);
    lines.push(TextLineBox {
        text,
        x: start_x + dx,
        y,
        width,
        height: measurer.line_height(style),
        first_char_index: start_index,
    });
}

/// A text run accumulating on the current line, owned by one text node.
struct PendingRun {
    node: NodeId,
    text: String,
    x: f32,
    style: ComputedStyle,
    first_char_index: usize,
}

struct PendingBox {
    node: NodeId,
    x: f32,
    height: f32,
    vertical_align: VerticalAlign,
    font_size_px: f32,
}

pub struct InlineLayoutResult {
    pub text_lines: HashMap<NodeId, Vec<TextLineBox>>,
    pub boxes: HashMap<NodeId, LayoutBox>,
    pub height: f32,
}

type LayoutSubtreeFn<'a> = dyn Fn(&'a StyledNode, f32, f32, f32, ResolutionContext) -> LayoutBox + 'a;

/// Lays out a run of inline-level children within `avail_width`, starting
/// at `(start_x, start_y)`.
pub fn layout_inline_run<'a>(
    doc: &'a Document,
    children: &'a [StyledNode],
    avail_width: f32,
    start_x: f32,
    start_y: f32,
    ctx: ResolutionContext,
    measurer: &'a dyn TextMeasurer,
    layout_subtree: &LayoutSubtreeFn<'a>,
) -> InlineLayoutResult {
    let mut flattener = Flattener {
        doc,
        measurer,
        ctx,
        items: Vec::new(),
    };
    flattener.flatten_children(children);
    let mut items = flattener.items;

    let mut text_lines: HashMap<NodeId, Vec<TextLineBox>> = HashMap::new();
    let mut boxes: HashMap<NodeId, LayoutBox> = HashMap::new();

    let mut cursor_x = start_x;
    let mut cursor_y = start_y;
    let mut line_height = measurer.line_height(&ComputedStyle::initial());
    let mut line_nonempty = false;
    let mut pending: Option<PendingRun> = None;
    let mut line_boxes: Vec<PendingBox> = Vec::new();

    let mut i = 0usize;
    while i < items.len() {
        if matches!(items[i], InlineItem::HardBreak) {
            finish_line(
                &mut pending,
                &mut text_lines,
                &mut boxes,
                &mut line_boxes,
                measurer,
                cursor_y,
                line_height,
            );
            cursor_y += line_height;
            cursor_x = start_x;
            line_height = measurer.line_height(&ComputedStyle::initial());
            line_nonempty = false;
            i += 1;
            continue;
        }

        let mut width = item_width(&items[i], measurer);

        // A single word wider than the whole available width never fits no
        // matter how the line breaks; split it at the widest prefix that does.
        let split = match &items[i] {
            InlineItem::Word {
                node,
                full_text,
                start,
                end,
                style,
            } if width > avail_width && *end - *start > 1 => {
                Some((*node, *full_text, *start, *end, style.clone()))
            }
            _ => None,
        };
        if let Some((node, full_text, start, end, style)) = split {
            let slice = &full_text[start..end];
            let prefix_end = breaker::break_word_prefix_end(measurer, &style, slice, avail_width.max(1.0));
            if prefix_end > 0 && prefix_end < slice.len() {
                let split_at = start + prefix_end;
                items[i] = InlineItem::Word {
                    node,
                    full_text,
                    start,
                    end: split_at,
                    style: style.clone(),
                };
                items.insert(
                    i + 1,
                    InlineItem::Word {
                        node,
                        full_text,
                        start: split_at,
                        end,
                        style,
                    },
                );
                width = item_width(&items[i], measurer);
            }
        }

        let is_space = matches!(items[i], InlineItem::Space { .. });
        let overflows = cursor_x + width > start_x + avail_width;

        if overflows && line_nonempty && !is_space {
            finish_line(
                &mut pending,
                &mut text_lines,
                &mut boxes,
                &mut line_boxes,
                measurer,
                cursor_y,
                line_height,
            );
            cursor_y += line_height;
            cursor_x = start_x;
            line_height = measurer.line_height(&ComputedStyle::initial());
            line_nonempty = false;
            continue; // re-evaluate this same item against the fresh line
        }

        if overflows && is_space && line_nonempty {
            // leading/overflowing space at end of line: drop it, no advance
            i += 1;
            continue;
        }

        match &items[i] {
            InlineItem::Word {
                node,
                full_text,
                start,
                end,
                style,
            } => {
                let slice = &full_text[*start..*end];
                line_height = line_height.max(measurer.line_height(style));
                push_or_extend(&mut pending, &mut text_lines, measurer, cursor_y, line_height, *node, slice, *start, cursor_x, style);
                cursor_x += width;
                line_nonempty = true;
            }
            InlineItem::Space {
                node,
                full_text,
                start,
                style,
                ..
            } => {
                line_height = line_height.max(measurer.line_height(style));
                push_or_extend(&mut pending, &mut text_lines, measurer, cursor_y, line_height, *node, " ", *start, cursor_x, style);
                let _ = full_text;
                cursor_x += width;
                line_nonempty = true;
            }
            InlineItem::EdgeBefore { .. } | InlineItem::EdgeAfter { .. } => {
                cursor_x += width;
            }
            InlineItem::Box {
                styled, replaced, ..
            } => {
                flush_pending(&mut pending, &mut text_lines, measurer, cursor_y, line_height, false);
                let laid_out = layout_subtree(styled, cursor_x, cursor_y, width.max(1.0), ctx);
                let box_h = laid_out.margin_box().height;
                line_height = line_height.max(box_h);
                line_boxes.push(PendingBox {
                    node: styled.node,
                    x: cursor_x,
                    height: box_h,
                    vertical_align: styled.style.vertical_align,
                    font_size_px: styled.style.font_size_px,
                });
                cursor_x += laid_out.margin_box().width;
                boxes.insert(styled.node, laid_out);
                let _ = replaced;
                line_nonempty = true;
            }
            InlineItem::HardBreak => unreachable!(),
        }

        i += 1;
    }

    finish_line(
        &mut pending,
        &mut text_lines,
        &mut boxes,
        &mut line_boxes,
        measurer,
        cursor_y,
        line_height,
    );
    if line_nonempty {
        cursor_y += line_height;
    }

    trace!("inline: laid out {} items", items.len());

    InlineLayoutResult {
        text_lines,
        boxes,
        height: (cursor_y - start_y).max(0.0),
    }
}

#[allow(clippy::too_many_arguments)]
fn push_or_extend(
    pending: &mut Option<PendingRun>,
    text_lines: &mut HashMap<NodeId, Vec<TextLineBox>>,
    measurer: &dyn TextMeasurer,
    y: f32,
    line_h: f32,
    node: NodeId,
    slice: &str,
    start_byte: usize,
    x: f32,
    style: &ComputedStyle,
) {
    if let Some(run) = pending {
        if run.node == node {
            run.text.push_str(slice);
            return;
        }
    }
    if let Some(run) = pending.take() {
        if !run.text.is_empty() {
            let width = measurer.measure(&run.text, &run.style);
            text_lines.entry(run.node).or_default().push(TextLineBox {
                text: run.text,
                x: run.x,
                y,
                width,
                height: line_h,
                first_char_index: run.first_char_index,
            });
        }
    }
    *pending = Some(PendingRun {
        node,
        text: slice.to_string(),
        x,
        style: style.clone(),
        first_char_index: start_byte,
    });
}

/// Flushes the pending text run (if any) to `text_lines`, measuring its
/// real width. `trim_trailing_space` drops one trailing collapsed space
/// when a line is closing (CSS never renders a trailing space glyph).
fn flush_pending(
    pending: &mut Option<PendingRun>,
    text_lines: &mut HashMap<NodeId, Vec<TextLineBox>>,
    measurer: &dyn TextMeasurer,
    y: f32,
    line_h: f32,
    trim_trailing_space: bool,
) {
    if let Some(run) = pending.take() {
        let mut text = run.text;
        if trim_trailing_space && text.ends_with(' ') {
            text.pop();
        }
        if text.is_empty() {
            return;
        }
        let width = measurer.measure(&text, &run.style);
        text_lines.entry(run.node).or_default().push(TextLineBox {
            text,
            x: run.x,
            y,
            width,
            height: line_h,
            first_char_index: run.first_char_index,
        });
    }
}

/// Closes the current line: flushes any pending text run and applies
/// `vertical-align` to every non-text box placed on it.
#[allow(clippy::too_many_arguments)]
fn finish_line(
    pending: &mut Option<PendingRun>,
    text_lines: &mut HashMap<NodeId, Vec<TextLineBox>>,
    boxes: &mut HashMap<NodeId, LayoutBox>,
    line_boxes: &mut Vec<PendingBox>,
    measurer: &dyn TextMeasurer,
    cursor_y: f32,
    line_height: f32,
) {
    flush_pending(pending, text_lines, measurer, cursor_y, line_height, true);
    for pb in line_boxes.drain(..) {
        let offset = vertical_align_offset(pb.vertical_align, line_height, pb.height, pb.font_size_px);
        if let Some(b) = boxes.get_mut(&pb.node) {
            b.content_rect.y += offset;
        }
    }
}

/// Vertical offset of a non-text inline-level box within its line band.
/// Text itself is always baseline-default in this simplified model.
/// `sub`/`super` are offsets from the font size (`em`), not the line
/// height.
pub fn vertical_align_offset(
    vertical_align: VerticalAlign,
    line_height: f32,
    box_height: f32,
    font_size_px: f32,
) -> f32 {
    match vertical_align {
        VerticalAlign::Top | VerticalAlign::TextTop => 0.0,
        VerticalAlign::Middle => (line_height - box_height) / 2.0,
        VerticalAlign::Sub => (line_height - box_height + font_size_px * 0.2).max(0.0),
        VerticalAlign::Super => -(font_size_px * 0.4),
        VerticalAlign::Baseline | VerticalAlign::Bottom | VerticalAlign::TextBottom => {
            line_height - box_height
        }
    }
}

fn item_width(item: &InlineItem, measurer: &dyn TextMeasurer) -> f32 {
    match item {
        InlineItem::Word {
            full_text,
            start,
            end,
            style,
            ..
        } => measurer.measure(&full_text[*start..*end], style),
        InlineItem::Space { style, .. } => measurer.measure(" ", style),
        InlineItem::EdgeBefore { width, .. } | InlineItem::EdgeAfter { width, .. } => *width,
        InlineItem::Box { width, .. } => *width,
        InlineItem::HardBreak => 0.0,
    }
}

/// Shifts every text line box's x by `dx` when `text-align` closes a line
/// off-center/right; called by `block.rs` once a line's natural width is known.
pub fn text_align_shift(natural_width: f32, avail_width: f32, align: css::computed::TextAlign) -> f32 {
    use css::computed::TextAlign as Align;
    match align {
        Align::Center => ((avail_width - natural_width) / 2.0).max(0.0),
        Align::Right => (avail_width - natural_width).max(0.0),
        Align::Left | Align::Justify => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{MonospaceFont, MonospaceProvider, ProviderMeasurer};
    use css::build_style_tree;
    use dom::{Document as Doc, ElementData};

    fn ctx() -> ResolutionContext {
        ResolutionContext {
            containing_block: 200.0,
            font_size_px: 16.0,
            root_font_size_px: 16.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
        }
    }

    #[test]
    fn wraps_text_across_lines_when_too_narrow() {
        let mut doc = Doc::new();
        let p = doc.create_element(ElementData::new("p"));
        let text = doc.create_text("one two three four five");
        doc.append_child(p, text);
        doc.append_child(doc.root(), p);

        let tree = build_style_tree(&doc, &[]);
        let p_styled = &tree.children[0];

        let provider = MonospaceProvider {
            font: MonospaceFont { advance_px: 8.0 },
        };
        let measurer = ProviderMeasurer {
            provider: &provider,
        };

        let noop_subtree = |_s: &StyledNode, x: f32, y: f32, w: f32, _c: ResolutionContext| {
            crate::render_box::LayoutBox {
                node: _s.node,
                kind: crate::render_box::BoxKind::Block,
                style: _s.style.clone(),
                content_rect: crate::geometry::Rectangle::new(x, y, w, 0.0),
                padding: Default::default(),
                border: Default::default(),
                margin: Default::default(),
                children: vec![],
                lines: vec![],
                list_marker: crate::render_box::ListMarker::None,
                scroll_x: 0.0,
                scroll_y: 0.0,
                scrollable_width: 0.0,
                scrollable_height: 0.0,
            }
        };

        let result = layout_inline_run(
            &doc,
            &p_styled.children,
            80.0,
            0.0,
            0.0,
            ctx(),
            &measurer,
            &noop_subtree,
        );

        let lines = result.text_lines.get(&text).unwrap();
        assert!(lines.len() > 1, "expected text to wrap across multiple lines");
    }

    #[test]
    fn splits_a_single_word_wider_than_the_line() {
        let mut doc = Doc::new();
        let p = doc.create_element(ElementData::new("p"));
        let text = doc.create_text("supercalifragilisticexpialidocious");
        doc.append_child(p, text);
        doc.append_child(doc.root(), p);

        let tree = build_style_tree(&doc, &[]);
        let p_styled = &tree.children[0];

        let provider = MonospaceProvider {
            font: MonospaceFont { advance_px: 8.0 },
        };
        let measurer = ProviderMeasurer {
            provider: &provider,
        };

        let noop_subtree = |_s: &StyledNode, x: f32, y: f32, w: f32, _c: ResolutionContext| {
            crate::render_box::LayoutBox {
                node: _s.node,
                kind: crate::render_box::BoxKind::Block,
                style: _s.style.clone(),
                content_rect: crate::geometry::Rectangle::new(x, y, w, 0.0),
                padding: Default::default(),
                border: Default::default(),
                margin: Default::default(),
                children: vec![],
                lines: vec![],
                list_marker: crate::render_box::ListMarker::None,
                scroll_x: 0.0,
                scroll_y: 0.0,
                scrollable_width: 0.0,
                scrollable_height: 0.0,
            }
        };

        // 35 chars * 8px = 280px, well over the 80px line; each line can
        // hold at most 10 chars (80px / 8px).
        let result = layout_inline_run(&doc, &p_styled.children, 80.0, 0.0, 0.0, ctx(), &measurer, &noop_subtree);

        let lines = result.text_lines.get(&text).unwrap();
        assert!(lines.len() > 1, "expected the long word to split across lines");
        for line in lines {
            assert!(line.width <= 80.0 + 0.01, "line segment overflowed: {}", line.width);
        }
        let rejoined: String = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(rejoined, "supercalifragilisticexpialidocious");
    }
}
