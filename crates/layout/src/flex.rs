//! Flex formatting context (§4.3.4): row/column main axis, wrapping,
//! grow distribution and `justify-content`. `align-items` is not
//! implemented; cross-axis sizing is always the child's own natural size
//! (the effective default CSS calls "stretch" in spirit, not in fact).

use css::computed::{ComputedStyle, FlexDirection, FlexWrap, JustifyContent};
use css::values::ResolutionContext;
use css::StyledNode;
use dom::Document;

use crate::box_model::{resolve_margin, EdgesPx};
use crate::intrinsic::intrinsic_width;
use crate::render_box::LayoutBox;
use crate::text::TextMeasurer;

struct FlexChild<'a> {
    styled: &'a StyledNode,
    basis: f32,
    grow: f32,
    margin: EdgesPx,
}

pub fn layout_flex_children<'a>(
    doc: &'a Document,
    container: &ComputedStyle,
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

    let is_row = matches!(
        container.flex_direction,
        FlexDirection::Row | FlexDirection::RowReverse
    );
    let reverse = matches!(
        container.flex_direction,
        FlexDirection::RowReverse | FlexDirection::ColumnReverse
    );
    let wrap = container.flex_wrap == FlexWrap::Wrap;
    let gap = container.gap;

    let items: Vec<FlexChild> = children
        .iter()
        .map(|c| {
            let child_ctx = ResolutionContext {
                containing_block: content_width,
                font_size_px: c.style.font_size_px,
                ..ctx
            };
            let margin = resolve_margin(c.style.margin, child_ctx);
            let explicit_main_size = if is_row { c.style.width } else { c.style.height };
            let basis = if !c.style.flex_basis.is_auto() {
                c.style.flex_basis.resolve(child_ctx)
            } else if !explicit_main_size.is_auto() {
                explicit_main_size.resolve(child_ctx)
            } else if is_row {
                intrinsic_width(doc, c, child_ctx, measurer)
            } else {
                measurer.line_height(&c.style)
            };
            FlexChild {
                styled: c,
                basis,
                grow: c.style.flex_grow,
                margin,
            }
        })
        .collect();

    let lines = partition_lines(&items, is_row, wrap, content_width, gap);

    let mut laid_out: Vec<Option<LayoutBox>> = (0..items.len()).map(|_| None).collect();
    let mut cursor_y = content_y;
    let mut total_cross = 0.0f32;

    for (line_idx, line) in lines.iter().enumerate() {
        let main_total: f32 = line
            .iter()
            .map(|&i| items[i].basis + main_margin(&items[i].margin, is_row))
            .sum();
        let gaps = if line.len() > 1 {
            gap * (line.len() - 1) as f32
        } else {
            0.0
        };
        let free = if is_row {
            content_width - main_total - gaps
        } else {
            0.0
        };
        let total_grow: f32 = line.iter().map(|&i| items[i].grow).sum();

        let mut sizes = vec![0.0f32; items.len()];
        for &i in line {
            let mut size = items[i].basis;
            if is_row && free > 0.0 && total_grow > 0.0 {
                size += free * items[i].grow / total_grow;
            }
            sizes[i] = size;
        }

        let (start_offset, inter_gap) = if is_row {
            justify_offsets(container.justify_content, free.max(0.0), line.len())
        } else {
            (0.0, gap)
        };

        let mut main_cursor = start_offset;
        let mut cross_max = 0.0f32;
        let order: Vec<usize> = if reverse {
            line.iter().rev().copied().collect()
        } else {
            line.clone()
        };

        for &i in &order {
            let item = &items[i];
            let (x, y, w) = if is_row {
                (
                    content_x + main_cursor + item.margin.left,
                    cursor_y + item.margin.top,
                    sizes[i],
                )
            } else {
                (
                    content_x + item.margin.left,
                    cursor_y + main_cursor + item.margin.top,
                    (content_width - item.margin.horizontal()).max(0.0),
                )
            };
            let child_ctx = ResolutionContext {
                containing_block: content_width,
                font_size_px: item.styled.style.font_size_px,
                ..ctx
            };
            let child_box = crate::layout_node(doc, item.styled, x, y, w.max(0.0), child_ctx, measurer);
            let mb = child_box.margin_box();
            cross_max = cross_max.max(if is_row { mb.height } else { mb.width });
            main_cursor += (if is_row { mb.width } else { mb.height }) + inter_gap;
            laid_out[i] = Some(child_box);
        }

        cursor_y += cross_max;
        if line_idx + 1 < lines.len() {
            cursor_y += gap;
        }
        total_cross += cross_max;
    }

    if lines.len() > 1 {
        total_cross += gap * (lines.len() - 1) as f32;
    }

    let out = laid_out.into_iter().map(|b| b.expect("every flex item laid out")).collect();
    (out, total_cross.max(0.0))
}

fn main_margin(margin: &EdgesPx, is_row: bool) -> f32 {
    if is_row {
        margin.horizontal()
    } else {
        margin.vertical()
    }
}

fn partition_lines(items: &[FlexChild], is_row: bool, wrap: bool, avail: f32, gap: f32) -> Vec<Vec<usize>> {
    if !wrap || !is_row {
        return vec![(0..items.len()).collect()];
    }
    let mut lines = Vec::new();
    let mut cur = Vec::new();
    let mut used = 0.0f32;
    for (idx, item) in items.iter().enumerate() {
        let size = item.basis + main_margin(&item.margin, true);
        let extra = if cur.is_empty() { 0.0 } else { gap };
        if !cur.is_empty() && used + extra + size > avail {
            lines.push(std::mem::take(&mut cur));
            used = 0.0;
        }
        let extra = if cur.is_empty() { 0.0 } else { gap };
        used += extra + size;
        cur.push(idx);
    }
    if !cur.is_empty() {
        lines.push(cur);
    }
    lines
}

fn justify_offsets(justify: JustifyContent, free: f32, n: usize) -> (f32, f32) {
    match justify {
        JustifyContent::FlexStart => (0.0, 0.0),
        JustifyContent::Center => (free / 2.0, 0.0),
        JustifyContent::FlexEnd => (free, 0.0),
        JustifyContent::SpaceBetween => {
            if n > 1 {
                (0.0, free / (n - 1) as f32)
            } else {
                (0.0, 0.0)
            }
        }
        JustifyContent::SpaceAround => {
            let g = if n > 0 { free / n as f32 } else { 0.0 };
            (g / 2.0, g)
        }
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
            containing_block: 300.0,
            font_size_px: 16.0,
            root_font_size_px: 16.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
        }
    }

    #[test]
    fn grow_distributes_free_space() {
        let mut doc = Doc::new();
        let container = doc.create_element(ElementData::new("div"));
        let a = doc.create_element(ElementData::new("div"));
        let b = doc.create_element(ElementData::new("div"));
        doc.append_child(container, a);
        doc.append_child(container, b);
        doc.append_child(doc.root(), container);

        let mut tree = build_style_tree(&doc, &[]);
        let container_styled = &mut tree.children[0];
        container_styled.style.display = css::computed::Display::Flex;
        container_styled.children[0].style.flex_grow = 1.0;
        container_styled.children[1].style.flex_grow = 1.0;

        let provider = MonospaceProvider {
            font: MonospaceFont { advance_px: 8.0 },
        };
        let measurer = ProviderMeasurer {
            provider: &provider,
        };

        let (boxes, _h) = layout_flex_children(
            &doc,
            &container_styled.style,
            &container_styled.children,
            0.0,
            0.0,
            300.0,
            ctx(),
            &measurer,
        );
        assert_eq!(boxes.len(), 2);
        assert!((boxes[0].content_rect.width - 150.0).abs() < 1.0);
        assert!((boxes[1].content_rect.width - 150.0).abs() < 1.0);
    }
}
