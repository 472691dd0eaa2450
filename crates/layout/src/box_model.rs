//! Box-model edge resolution: margin/padding/border widths resolved to
//! pixels, and the content-rect math that ties them to the border box.

use css::computed::{BoxEdges, BoxSizing, ComputedStyle};
use css::values::{Length, ResolutionContext};

#[derive(Debug, Clone, Copy, Default)]
pub struct EdgesPx {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl EdgesPx {
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

pub fn resolve_edges(edges: BoxEdges, ctx: ResolutionContext) -> EdgesPx {
    EdgesPx {
        top: resolve_nonneg(edges.top, ctx),
        right: resolve_nonneg(edges.right, ctx),
        bottom: resolve_nonneg(edges.bottom, ctx),
        left: resolve_nonneg(edges.left, ctx),
    }
}

/// Margins may legitimately be auto (treated as 0 by callers that don't
/// implement auto-margin centering); padding/border never go negative.
fn resolve_nonneg(len: Length, ctx: ResolutionContext) -> f32 {
    let v = len.resolve(ctx);
    if v < 0.0 {
        0.0
    } else {
        v
    }
}

/// Same as [`resolve_edges`] but lets `auto` margins resolve to the sentinel
/// (−1) instead of clamping to 0, for callers that care (none in this core
/// implement auto-margin centering, but the distinction is kept honest).
pub fn resolve_margin(edges: BoxEdges, ctx: ResolutionContext) -> EdgesPx {
    EdgesPx {
        top: edges.top.resolve(ctx).max(0.0),
        right: edges.right.resolve(ctx).max(0.0),
        bottom: edges.bottom.resolve(ctx).max(0.0),
        left: edges.left.resolve(ctx).max(0.0),
    }
}

/// Content-box x and width given the parent's available width and this
/// box's resolved horizontal edges. `explicit_width_px` is `None` when the
/// style's `width` is `auto` (caller falls back to available width minus
/// edges, or to intrinsic sizing upstream of this call).
pub fn content_x_and_width(
    style: &ComputedStyle,
    border_x: f32,
    border_width: f32,
    padding: &EdgesPx,
    border: &EdgesPx,
) -> (f32, f32) {
    let content_x = border_x + border.left + padding.left;
    let content_width = border_width - padding.horizontal() - border.horizontal();
    debug_assert!(
        content_width >= -0.01,
        "content_width went negative: border_width={border_width} padding={padding:?} border={border:?}"
    );
    let _ = style;
    (content_x, content_width.max(0.0))
}

pub fn content_y(border_y: f32, padding: &EdgesPx, border: &EdgesPx) -> f32 {
    border_y + border.top + padding.top
}

pub fn content_height(border_height: f32, padding: &EdgesPx, border: &EdgesPx) -> f32 {
    let h = border_height - padding.vertical() - border.vertical();
    debug_assert!(h >= -0.01, "content_height went negative: {border_height}");
    h.max(0.0)
}

/// Resolves the box's used width: explicit non-auto value (content-box
/// adjusted for `box-sizing: border-box`), else `None` meaning the caller
/// must fall back to available width or intrinsic sizing.
pub fn used_width(
    style: &ComputedStyle,
    ctx: ResolutionContext,
    padding: &EdgesPx,
    border: &EdgesPx,
) -> Option<f32> {
    if style.width.is_auto() {
        return None;
    }
    let mut w = style.width.resolve(ctx);
    if style.box_sizing == BoxSizing::BorderBox {
        w -= padding.horizontal() + border.horizontal();
    }
    Some(clamp_width(style, ctx, w.max(0.0)))
}

pub fn clamp_width(style: &ComputedStyle, ctx: ResolutionContext, width: f32) -> f32 {
    let mut w = width;
    if !style.max_width.is_auto() {
        w = w.min(style.max_width.resolve(ctx));
    }
    w.max(style.min_width.resolve(ctx))
}

pub fn clamp_height(style: &ComputedStyle, ctx: ResolutionContext, height: f32) -> f32 {
    let mut h = height;
    if !style.max_height.is_auto() {
        h = h.min(style.max_height.resolve(ctx));
    }
    h.max(style.min_height.resolve(ctx))
}
