//! Table formatting context (§4.3.5): two passes — global column widths,
//! then row-by-row cell placement. Row/column spans are out of scope.

use css::values::ResolutionContext;
use css::StyledNode;
use dom::Document;

use crate::box_model::resolve_edges;
use crate::geometry::Rectangle;
use crate::intrinsic::intrinsic_width;
use crate::render_box::{BoxKind, LayoutBox, ListMarker};
use crate::text::TextMeasurer;

pub fn layout_table<'a>(
    doc: &'a Document,
    styled: &'a StyledNode,
    content_x: f32,
    content_y: f32,
    content_width: f32,
    ctx: ResolutionContext,
    measurer: &'a dyn TextMeasurer,
) -> (Vec<LayoutBox>, f32) {
    let rows = collect_rows(doc, styled);
    let mut widths = compute_column_widths(doc, &rows, ctx, measurer);
    scale_to_fit(&mut widths, content_width);

    layout_group(doc, &styled.children, content_x, content_y, &widths, ctx, measurer)
}

fn collect_rows<'a>(doc: &Document, styled: &'a StyledNode) -> Vec<&'a StyledNode> {
    let mut rows = Vec::new();
    for child in &styled.children {
        match doc.tag_name(child.node) {
            Some("tr") => rows.push(child),
            Some("thead") | Some("tbody") | Some("tfoot") => rows.extend(collect_rows(doc, child)),
            _ => {}
        }
    }
    rows
}

fn is_cell(doc: &Document, node: &StyledNode) -> bool {
    matches!(doc.tag_name(node.node), Some("td") | Some("th"))
}

fn cell_intrinsic_width(
    doc: &Document,
    cell: &StyledNode,
    ctx: ResolutionContext,
    measurer: &dyn TextMeasurer,
) -> f32 {
    let local_ctx = ResolutionContext {
        font_size_px: cell.style.font_size_px,
        ..ctx
    };
    let border = resolve_edges(cell.style.border_width, local_ctx);
    intrinsic_width(doc, cell, local_ctx, measurer) + border.horizontal()
}

fn compute_column_widths(
    doc: &Document,
    rows: &[&StyledNode],
    ctx: ResolutionContext,
    measurer: &dyn TextMeasurer,
) -> Vec<f32> {
    let mut widths: Vec<f32> = Vec::new();
    for row in rows {
        let mut col = 0usize;
        for cell in row.children.iter().filter(|c| is_cell(doc, c)) {
            let w = cell_intrinsic_width(doc, cell, ctx, measurer);
            if col >= widths.len() {
                widths.push(w);
            } else {
                widths[col] = widths[col].max(w);
            }
            col += 1;
        }
    }
    widths
}

fn scale_to_fit(widths: &mut [f32], content_width: f32) {
    let total: f32 = widths.iter().sum();
    if total > content_width && total > 0.0 {
        let scale = content_width / total;
        for w in widths.iter_mut() {
            *w *= scale;
        }
    }
}

fn layout_group<'a>(
    doc: &'a Document,
    nodes: &'a [StyledNode],
    x: f32,
    y: f32,
    widths: &[f32],
    ctx: ResolutionContext,
    measurer: &'a dyn TextMeasurer,
) -> (Vec<LayoutBox>, f32) {
    let mut out = Vec::new();
    let mut cursor_y = y;
    for node in nodes {
        match doc.tag_name(node.node) {
            Some("thead") | Some("tbody") | Some("tfoot") => {
                let (children, h) = layout_group(doc, &node.children, x, cursor_y, widths, ctx, measurer);
                let total_width: f32 = widths.iter().sum();
                out.push(wrap_box(node, x, cursor_y, total_width, h, children));
                cursor_y += h;
            }
            Some("tr") => {
                let (row_box, h) = layout_row(doc, node, x, cursor_y, widths, ctx, measurer);
                out.push(row_box);
                cursor_y += h;
            }
            _ => {
                let total_width: f32 = widths.iter().sum();
                let child_box = crate::layout_node(doc, node, x, cursor_y, total_width, ctx, measurer);
                cursor_y += child_box.margin_box().height;
                out.push(child_box);
            }
        }
    }
    (out, (cursor_y - y).max(0.0))
}

fn layout_row<'a>(
    doc: &'a Document,
    row: &'a StyledNode,
    x: f32,
    y: f32,
    widths: &[f32],
    ctx: ResolutionContext,
    measurer: &'a dyn TextMeasurer,
) -> (LayoutBox, f32) {
    let mut cells = Vec::new();
    let mut cursor_x = x;
    let mut row_height = 0.0f32;
    let mut col = 0usize;
    for child in &row.children {
        if !is_cell(doc, child) {
            continue;
        }
        let w = widths.get(col).copied().unwrap_or(0.0);
        let cell_box = crate::layout_node(doc, child, cursor_x, y, w, ctx, measurer);
        row_height = row_height.max(cell_box.margin_box().height);
        cursor_x += w;
        cells.push(cell_box);
        col += 1;
    }
    let total_width: f32 = widths.iter().sum();
    let row_box = LayoutBox {
        node: row.node,
        kind: BoxKind::TableRow,
        style: row.style.clone(),
        content_rect: Rectangle::new(x, y, total_width, row_height),
        padding: Default::default(),
        border: Default::default(),
        margin: Default::default(),
        children: cells,
        lines: Vec::new(),
        list_marker: ListMarker::None,
        scroll_x: 0.0,
        scroll_y: 0.0,
        scrollable_width: 0.0,
        scrollable_height: 0.0,
    };
    (row_box, row_height)
}

fn wrap_box(node: &StyledNode, x: f32, y: f32, width: f32, height: f32, children: Vec<LayoutBox>) -> LayoutBox {
    LayoutBox {
        node: node.node,
        kind: BoxKind::Block,
        style: node.style.clone(),
        content_rect: Rectangle::new(x, y, width, height),
        padding: Default::default(),
        border: Default::default(),
        margin: Default::default(),
        children,
        lines: Vec::new(),
        list_marker: ListMarker::None,
        scroll_x: 0.0,
        scroll_y: 0.0,
        scrollable_width: 0.0,
        scrollable_height: 0.0,
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
    fn column_width_is_max_across_rows() {
        let mut doc = Doc::new();
        let table = doc.create_element(ElementData::new("table"));
        let mk_row = |doc: &mut Doc, texts: &[&str]| {
            let tr = doc.create_element(ElementData::new("tr"));
            for t in texts {
                let td = doc.create_element(ElementData::new("td"));
                let text = doc.create_text(t);
                doc.append_child(td, text);
                doc.append_child(tr, td);
            }
            tr
        };
        let r1 = mk_row(&mut doc, &["hi", "world"]);
        let r2 = mk_row(&mut doc, &["longer text here", "x"]);
        doc.append_child(table, r1);
        doc.append_child(table, r2);
        doc.append_child(doc.root(), table);

        let tree = build_style_tree(&doc, &[]);
        let table_styled = &tree.children[0];

        let provider = MonospaceProvider {
            font: MonospaceFont { advance_px: 8.0 },
        };
        let measurer = ProviderMeasurer {
            provider: &provider,
        };

        let rows = collect_rows(&doc, table_styled);
        assert_eq!(rows.len(), 2);
        let widths = compute_column_widths(&doc, &rows, ctx(), &measurer);
        assert_eq!(widths.len(), 2);
        assert!(widths[0] > 100.0); // "longer text here" dominates column 0
    }
}
