//! Layout: turns a styled tree (`css::StyledNode`) into a render tree
//! (`LayoutBox`) with resolved geometry, one node at a time, recursively.
//!
//! Unlike a build-then-refine two-pass layout, this engine computes
//! geometry directly during a single top-down recursion: every box's
//! final `content_rect` is known by the time [`layout_node`] returns it.
//! Nothing here keeps a parent in a "provisional" state waiting on a
//! second pass.

pub mod block;
pub mod box_model;
pub mod flex;
pub mod geometry;
mod inline;
pub mod intrinsic;
pub mod render_box;
pub mod scroll;
pub mod table;
pub mod text;

pub use box_model::EdgesPx;
pub use geometry::Rectangle;
pub use inline::{classify_replaced, text_align_shift, vertical_align_offset, InlineLayoutResult};
pub use render_box::{BoxKind, LayoutBox, ListMarker, ReplacedKind, TextLineBox};
pub use scroll::clamp_scroll;
pub use text::{Font, FontProvider, MonospaceFont, MonospaceProvider, ProviderMeasurer, TextMeasurer};

use css::computed::{BoxSizing, Display};
use css::values::ResolutionContext;
use css::StyledNode;
use dom::Document;
use log::trace;

use crate::box_model::{clamp_height, clamp_width, content_x_and_width, content_y, resolve_edges, resolve_margin, used_width};
use crate::inline::{classify_replaced as classify, wrap_plain_text};
use crate::intrinsic::intrinsic_width;
use crate::render_box::ReplacedKind;

fn empty_box(styled: &StyledNode, x: f32, y: f32, width: f32, height: f32, kind: BoxKind) -> LayoutBox {
    LayoutBox {
        node: styled.node,
        kind,
        style: styled.style.clone(),
        content_rect: Rectangle::new(x, y, width.max(0.0), height.max(0.0)),
        padding: EdgesPx::default(),
        border: EdgesPx::default(),
        margin: EdgesPx::default(),
        children: Vec::new(),
        lines: Vec::new(),
        list_marker: ListMarker::None,
        scroll_x: 0.0,
        scroll_y: 0.0,
        scrollable_width: 0.0,
        scrollable_height: 0.0,
    }
}

fn layout_standalone_text(
    doc: &Document,
    styled: &StyledNode,
    x: f32,
    y: f32,
    avail_width: f32,
    measurer: &dyn TextMeasurer,
) -> LayoutBox {
    let text = doc.text(styled.node).unwrap_or("");
    let lines = wrap_plain_text(text, &styled.style, avail_width, x, y, measurer);
    let height: f32 = lines.iter().map(|l| l.height).sum();
    let width = lines.iter().map(|l| l.width).fold(0.0f32, f32::max);
    LayoutBox {
        node: styled.node,
        kind: BoxKind::TextRun,
        style: styled.style.clone(),
        content_rect: Rectangle::new(x, y, width, height),
        padding: EdgesPx::default(),
        border: EdgesPx::default(),
        margin: EdgesPx::default(),
        children: Vec::new(),
        lines,
        list_marker: ListMarker::None,
        scroll_x: 0.0,
        scroll_y: 0.0,
        scrollable_width: 0.0,
        scrollable_height: 0.0,
    }
}

/// Replaced-element intrinsic height, by tag. Layout's own counterpart to
/// the width rules in [`intrinsic`], which never needs a height.
fn intrinsic_height(kind: ReplacedKind, doc: &Document, styled: &StyledNode, measurer: &dyn TextMeasurer) -> f32 {
    match kind {
        ReplacedKind::Img => doc
            .element(styled.node)
            .and_then(|e| e.attribute("height"))
            .and_then(|h| h.parse::<f32>().ok())
            .unwrap_or(150.0),
        ReplacedKind::Checkbox | ReplacedKind::Radio => 16.0,
        ReplacedKind::Textarea => {
            let rows = doc
                .element(styled.node)
                .and_then(|e| e.attribute("rows"))
                .and_then(|r| r.parse::<f32>().ok())
                .unwrap_or(2.0);
            rows * measurer.line_height(&styled.style)
        }
        ReplacedKind::Select | ReplacedKind::Button | ReplacedKind::InputText => {
            measurer.line_height(&styled.style) + 8.0
        }
    }
}

fn layout_replaced<'a>(
    doc: &'a Document,
    styled: &'a StyledNode,
    kind: ReplacedKind,
    x: f32,
    y: f32,
    ctx: ResolutionContext,
    measurer: &'a dyn TextMeasurer,
) -> LayoutBox {
    let padding = resolve_edges(styled.style.padding, ctx);
    let border = resolve_edges(styled.style.border_width, ctx);
    let margin = resolve_margin(styled.style.margin, ctx);

    let width = used_width(&styled.style, ctx, &padding, &border)
        .unwrap_or_else(|| intrinsic_width(doc, styled, ctx, measurer));
    let width = clamp_width(&styled.style, ctx, width);

    let height = if !styled.style.height.is_auto() {
        clamp_height(&styled.style, ctx, styled.style.height.resolve(ctx))
    } else {
        clamp_height(&styled.style, ctx, intrinsic_height(kind, doc, styled, measurer))
    };

    let content_x = x + margin.left + border.left + padding.left;
    let content_y_px = y + margin.top + border.top + padding.top;

    LayoutBox {
        node: styled.node,
        kind: BoxKind::Replaced(kind),
        style: styled.style.clone(),
        content_rect: Rectangle::new(content_x, content_y_px, width, height),
        padding,
        border,
        margin,
        children: Vec::new(),
        lines: Vec::new(),
        list_marker: ListMarker::None,
        scroll_x: 0.0,
        scroll_y: 0.0,
        scrollable_width: 0.0,
        scrollable_height: 0.0,
    }
}

fn box_kind_for(display: Display) -> BoxKind {
    match display {
        Display::Block | Display::ListItem | Display::None => BoxKind::Block,
        Display::Inline => BoxKind::Inline,
        Display::InlineBlock => BoxKind::InlineBlock,
        Display::Flex => BoxKind::Flex,
        Display::Table => BoxKind::Table,
        Display::TableRow => BoxKind::TableRow,
        Display::TableCell => BoxKind::TableCell,
    }
}

/// Lays out one styled node and its subtree, returning the node's box with
/// resolved geometry. `avail_width` is the containing block's content width;
/// `ctx` carries the resolution context (viewport, font sizes) for length
/// resolution at this node's level.
///
/// Scroll offsets always resolve to 0: this core computes a box's
/// scrollable extent (`scrollable_width`/`scrollable_height`) but does not
/// persist a requested scroll position across frames, since that belongs
/// to whatever owns frame-to-frame state above this crate.
pub fn layout_node<'a>(
    doc: &'a Document,
    styled: &'a StyledNode,
    x: f32,
    y: f32,
    avail_width: f32,
    ctx: ResolutionContext,
    measurer: &'a dyn TextMeasurer,
) -> LayoutBox {
    if styled.style.display == Display::None {
        return empty_box(styled, x, y, 0.0, 0.0, BoxKind::Block);
    }

    if doc.text(styled.node).is_some() {
        return layout_standalone_text(doc, styled, x, y, avail_width, measurer);
    }

    let local_ctx = ResolutionContext {
        containing_block: avail_width,
        font_size_px: styled.style.font_size_px,
        ..ctx
    };

    if let Some(kind) = classify(doc, styled.node) {
        return layout_replaced(doc, styled, kind, x, y, local_ctx, measurer);
    }

    trace!(
        "layout_node: tag={:?} display={:?} avail_width={avail_width}",
        doc.tag_name(styled.node),
        styled.style.display
    );

    let padding = resolve_edges(styled.style.padding, local_ctx);
    let border = resolve_edges(styled.style.border_width, local_ctx);
    let margin = resolve_margin(styled.style.margin, local_ctx);

    let border_width = used_width(&styled.style, local_ctx, &padding, &border)
        .map(|w| w + padding.horizontal() + border.horizontal())
        .unwrap_or_else(|| avail_width - margin.horizontal());
    let (content_x, content_width) =
        content_x_and_width(&styled.style, x + margin.left, border_width, &padding, &border);
    let content_y_px = content_y(y + margin.top, &padding, &border);

    let child_ctx = ResolutionContext {
        containing_block: content_width,
        ..local_ctx
    };

    let (children, natural_content_height) = match styled.style.display {
        Display::Flex => flex::layout_flex_children(
            doc,
            &styled.style,
            &styled.children,
            content_x,
            content_y_px,
            content_width,
            child_ctx,
            measurer,
        ),
        Display::Table => {
            table::layout_table(doc, styled, content_x, content_y_px, content_width, child_ctx, measurer)
        }
        _ => block::layout_block_children(doc, &styled.children, content_x, content_y_px, content_width, child_ctx, measurer),
    };

    let natural_content_height = clamp_height(&styled.style, local_ctx, natural_content_height.max(0.0));
    let used_content_height = if !styled.style.height.is_auto() {
        let mut h = styled.style.height.resolve(local_ctx);
        if styled.style.box_sizing == BoxSizing::BorderBox {
            h -= padding.vertical() + border.vertical();
        }
        clamp_height(&styled.style, local_ctx, h.max(0.0))
    } else {
        natural_content_height
    };

    let (scrollable_height, scroll_y) =
        scroll::clamp_scroll(styled.style.overflow_y, natural_content_height, used_content_height, 0.0);
    let (scrollable_width, scroll_x) = scroll::clamp_scroll(styled.style.overflow_x, content_width, content_width, 0.0);

    LayoutBox {
        node: styled.node,
        kind: box_kind_for(styled.style.display),
        style: styled.style.clone(),
        content_rect: Rectangle::new(content_x, content_y_px, content_width, used_content_height),
        padding,
        border,
        margin,
        children,
        lines: Vec::new(),
        list_marker: ListMarker::None,
        scroll_x,
        scroll_y,
        scrollable_width,
        scrollable_height,
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
            containing_block: 400.0,
            font_size_px: 16.0,
            root_font_size_px: 16.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
        }
    }

    #[test]
    fn block_child_stacks_below_text_sibling() {
        let mut doc = Doc::new();
        let p = doc.create_element(ElementData::new("p"));
        let text = doc.create_text("hello");
        doc.append_child(p, text);
        let div = doc.create_element(ElementData::new("div"));
        doc.append_child(doc.root(), p);
        doc.append_child(doc.root(), div);

        let tree = build_style_tree(&doc, &[]);
        let provider = MonospaceProvider {
            font: MonospaceFont { advance_px: 8.0 },
        };
        let measurer = ProviderMeasurer {
            provider: &provider,
        };

        let root_box = layout_node(&doc, &tree, 0.0, 0.0, 400.0, ctx(), &measurer);
        assert_eq!(root_box.children.len(), 2);
        assert!(root_box.children[1].content_rect.y >= root_box.children[0].margin_box().bottom());
    }

    #[test]
    fn display_none_produces_zero_size_box() {
        let mut doc = Doc::new();
        let mut data = ElementData::new("div");
        data.set_attribute("style", "display: none");
        let div = doc.create_element(data);
        doc.append_child(doc.root(), div);

        let tree = build_style_tree(&doc, &[]);
        let provider = MonospaceProvider {
            font: MonospaceFont { advance_px: 8.0 },
        };
        let measurer = ProviderMeasurer {
            provider: &provider,
        };

        let root_box = layout_node(&doc, &tree, 0.0, 0.0, 400.0, ctx(), &measurer);
        assert_eq!(root_box.children[0].content_rect.width, 0.0);
        assert_eq!(root_box.children[0].content_rect.height, 0.0);
    }
}
