//! Intrinsic (content-driven) width measurement, used by inline/inline-block
//! and table column sizing.

use css::{ComputedStyle, StyledNode};
use css::values::ResolutionContext;
use dom::Document;

use crate::text::TextMeasurer;

pub fn intrinsic_width(
    doc: &Document,
    styled: &StyledNode,
    ctx: ResolutionContext,
    measurer: &dyn TextMeasurer,
) -> f32 {
    if let Some(text) = doc.text(styled.node) {
        return measurer.measure(text, &styled.style);
    }

    let Some(tag) = doc.tag_name(styled.node) else {
        return sum_children(doc, styled, ctx, measurer);
    };

    match tag {
        "input" => intrinsic_input(doc, styled),
        "button" => sum_children(doc, styled, ctx, measurer).max(40.0),
        "img" => doc
            .element(styled.node)
            .and_then(|e| e.attribute("width"))
            .and_then(|w| w.parse::<f32>().ok())
            .unwrap_or(150.0),
        "textarea" => {
            let cols = doc
                .element(styled.node)
                .and_then(|e| e.attribute("cols"))
                .and_then(|c| c.parse::<f32>().ok())
                .unwrap_or(20.0);
            cols * 0.6 * styled.style.font_size_px
        }
        "select" => 150.0,
        _ => sized_intrinsic(doc, styled, ctx, measurer),
    }
}

fn intrinsic_input(doc: &Document, styled: &StyledNode) -> f32 {
    let input_type = doc
        .element(styled.node)
        .and_then(|e| e.attribute("type"))
        .unwrap_or("text");
    match input_type {
        "checkbox" => 16.0 + 4.0,
        "radio" => 16.0,
        _ => 150.0,
    }
}

fn sized_intrinsic(
    doc: &Document,
    styled: &StyledNode,
    ctx: ResolutionContext,
    measurer: &dyn TextMeasurer,
) -> f32 {
    use css::computed::Display;
    let padding = styled.style.padding;
    let h_padding = padding.left.resolve(ctx).max(0.0) + padding.right.resolve(ctx).max(0.0);

    match styled.style.display {
        Display::Block | Display::ListItem | Display::Flex | Display::Table => {
            max_children(doc, styled, ctx, measurer) + h_padding
        }
        _ => sum_children(doc, styled, ctx, measurer) + h_padding,
    }
}

fn sum_children(
    doc: &Document,
    styled: &StyledNode,
    ctx: ResolutionContext,
    measurer: &dyn TextMeasurer,
) -> f32 {
    styled
        .children
        .iter()
        .map(|c| intrinsic_width(doc, c, child_ctx(ctx, &c.style), measurer))
        .sum()
}

fn max_children(
    doc: &Document,
    styled: &StyledNode,
    ctx: ResolutionContext,
    measurer: &dyn TextMeasurer,
) -> f32 {
    styled
        .children
        .iter()
        .map(|c| intrinsic_width(doc, c, child_ctx(ctx, &c.style), measurer))
        .fold(0.0, f32::max)
}

fn child_ctx(ctx: ResolutionContext, style: &ComputedStyle) -> ResolutionContext {
    ResolutionContext {
        font_size_px: style.font_size_px,
        ..ctx
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
            containing_block: 800.0,
            font_size_px: 16.0,
            root_font_size_px: 16.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
        }
    }

    #[test]
    fn checkbox_is_narrow() {
        let mut doc = Doc::new();
        let mut data = ElementData::new("input");
        data.set_attribute("type", "checkbox");
        let input = doc.create_element(data);
        doc.append_child(doc.root(), input);

        let tree = build_style_tree(&doc, &[]);
        let provider = MonospaceProvider {
            font: MonospaceFont { advance_px: 8.0 },
        };
        let measurer = ProviderMeasurer {
            provider: &provider,
        };
        let w = intrinsic_width(&doc, &tree.children[0], ctx(), &measurer);
        assert_eq!(w, 20.0);
    }

    #[test]
    fn text_input_default_width() {
        let mut doc = Doc::new();
        let input = doc.create_element(ElementData::new("input"));
        doc.append_child(doc.root(), input);
        let tree = build_style_tree(&doc, &[]);
        let provider = MonospaceProvider {
            font: MonospaceFont { advance_px: 8.0 },
        };
        let measurer = ProviderMeasurer {
            provider: &provider,
        };
        let w = intrinsic_width(&doc, &tree.children[0], ctx(), &measurer);
        assert_eq!(w, 150.0);
    }
}
