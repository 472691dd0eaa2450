//! Block formatting context (§4.3.2): stacks block-level children top to
//! bottom with vertical margin collapsing, grouping contiguous runs of
//! inline-level children into the inline formatting context (§4.3.3)
//! without inserting anonymous boxes into the tree.

use std::collections::HashMap;

use css::computed::{Display, ListStyleType};
use css::values::ResolutionContext;
use css::StyledNode;
use dom::{Document, NodeId};

use crate::box_model::resolve_margin;
use crate::geometry::Rectangle;
use crate::inline::{layout_inline_run, line_edges};
use crate::render_box::{BoxKind, LayoutBox, ListMarker, TextLineBox};
use crate::text::TextMeasurer;

fn is_inline_level(doc: &Document, styled: &StyledNode) -> bool {
    doc.text(styled.node).is_some()
        || matches!(styled.style.display, Display::Inline | Display::InlineBlock)
}

/// Lays out `children` top to bottom inside a block container whose content
/// box starts at `(content_x, content_y)` with the given width. Returns the
/// child boxes in DOM order (one per child, no anonymous boxes) plus the
/// total content height consumed.
pub fn layout_block_children<'a>(
    doc: &'a Document,
    children: &'a [StyledNode],
    content_x: f32,
    content_y: f32,
    content_width: f32,
    ctx: ResolutionContext,
    measurer: &'a dyn TextMeasurer,
) -> (Vec<LayoutBox>, f32) {
    if children.is_empty() {
        return (Vec::new(), 0.0);
    }

    if children.iter().all(|c| is_inline_level(doc, c)) {
        return layout_inline_group(doc, children, content_x, content_y, content_width, ctx, measurer);
    }

    let mut out = Vec::with_capacity(children.len());
    let mut cursor_y = content_y;
    let mut prev_margin_bottom = 0.0f32;

    let mut i = 0usize;
    while i < children.len() {
        if is_inline_level(doc, &children[i]) {
            let start = i;
            while i < children.len() && is_inline_level(doc, &children[i]) {
                i += 1;
            }
            let (mut boxes, h) = layout_inline_group(
                doc,
                &children[start..i],
                content_x,
                cursor_y,
                content_width,
                ctx,
                measurer,
            );
            cursor_y += h;
            prev_margin_bottom = 0.0;
            out.append(&mut boxes);
            continue;
        }

        let child = &children[i];
        let child_ctx = ResolutionContext {
            containing_block: content_width,
            font_size_px: child.style.font_size_px,
            ..ctx
        };
        let margin = resolve_margin(child.style.margin, child_ctx);

        let margin_box_top = cursor_y - prev_margin_bottom + prev_margin_bottom.max(margin.top);
        let border_y = margin_box_top + margin.top;

        let mut child_box = crate::layout_node(doc, child, content_x, border_y, content_width, child_ctx, measurer);
        child_box.list_marker = list_marker_for(child);

        cursor_y = child_box.border_box().bottom() + margin.bottom;
        prev_margin_bottom = margin.bottom;

        out.push(child_box);
        i += 1;
    }

    (out, (cursor_y - content_y).max(0.0))
}

fn layout_inline_group<'a>(
    doc: &'a Document,
    children: &'a [StyledNode],
    content_x: f32,
    content_y: f32,
    content_width: f32,
    ctx: ResolutionContext,
    measurer: &'a dyn TextMeasurer,
) -> (Vec<LayoutBox>, f32) {
    let result = layout_inline_run(
        doc,
        children,
        content_width,
        content_x,
        content_y,
        ctx,
        measurer,
        &|styled, x, y, w, c| crate::layout_node(doc, styled, x, y, w, c, measurer),
    );

    let mut text_lines = result.text_lines;
    let mut boxes = result.boxes;

    let out = children
        .iter()
        .map(|c| build_inline_child_box(doc, c, &mut text_lines, &mut boxes, ctx))
        .collect();

    (out, result.height)
}

fn build_inline_child_box(
    doc: &Document,
    styled: &StyledNode,
    text_lines: &mut HashMap<NodeId, Vec<TextLineBox>>,
    boxes: &mut HashMap<NodeId, LayoutBox>,
    ctx: ResolutionContext,
) -> LayoutBox {
    if doc.text(styled.node).is_some() {
        let lines = text_lines.remove(&styled.node).unwrap_or_default();
        let content_rect = bounding_rect(&lines);
        return LayoutBox {
            node: styled.node,
            kind: BoxKind::TextRun,
            style: styled.style.clone(),
            content_rect,
            padding: Default::default(),
            border: Default::default(),
            margin: Default::default(),
            children: Vec::new(),
            lines,
            list_marker: ListMarker::None,
            scroll_x: 0.0,
            scroll_y: 0.0,
            scrollable_width: 0.0,
            scrollable_height: 0.0,
        };
    }

    if let Some(mut b) = boxes.remove(&styled.node) {
        b.list_marker = list_marker_for(styled);
        return b;
    }

    // Simple inline chain wrapper: exactly one inline-level child, already
    // flattened through by `inline::layout_inline_run`. Recurse and inflate
    // the child's rect by this element's resolved left/right edges.
    let child_ctx = ResolutionContext {
        font_size_px: styled.style.font_size_px,
        ..ctx
    };
    let edges = line_edges(&styled.style, child_ctx);
    let child = &styled.children[0];
    let child_box = build_inline_child_box(doc, child, text_lines, boxes, child_ctx);
    let content_rect = Rectangle {
        x: child_box.content_rect.x - edges.left,
        y: child_box.content_rect.y,
        width: child_box.content_rect.width + edges.left + edges.right,
        height: child_box.content_rect.height,
    };
    LayoutBox {
        node: styled.node,
        kind: BoxKind::Inline,
        style: styled.style.clone(),
        content_rect,
        padding: Default::default(),
        border: Default::default(),
        margin: Default::default(),
        children: vec![child_box],
        lines: Vec::new(),
        list_marker: ListMarker::None,
        scroll_x: 0.0,
        scroll_y: 0.0,
        scrollable_width: 0.0,
        scrollable_height: 0.0,
    }
}

fn bounding_rect(lines: &[TextLineBox]) -> Rectangle {
    if lines.is_empty() {
        return Rectangle::default();
    }
    let min_x = lines.iter().map(|l| l.x).fold(f32::INFINITY, f32::min);
    let min_y = lines.iter().map(|l| l.y).fold(f32::INFINITY, f32::min);
    let max_right = lines.iter().map(|l| l.x + l.width).fold(f32::NEG_INFINITY, f32::max);
    let max_bottom = lines.iter().map(|l| l.y + l.height).fold(f32::NEG_INFINITY, f32::max);
    Rectangle {
        x: min_x,
        y: min_y,
        width: max_right - min_x,
        height: max_bottom - min_y,
    }
}

fn list_marker_for(styled: &StyledNode) -> ListMarker {
    if styled.style.display != Display::ListItem {
        return ListMarker::None;
    }
    match styled.style.list_style_type {
        ListStyleType::Disc => ListMarker::Unordered,
        ListStyleType::Decimal => ListMarker::Ordered(styled.style.list_item_index.unwrap_or(1)),
        ListStyleType::None => ListMarker::None,
    }
}
