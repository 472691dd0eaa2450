//! Computed style: resolves cascaded declarations plus inheritance into the
//! full per-element style layout and paint consume.

use crate::color::{parse_color, Color};
use crate::values::{parse_length, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    Inline,
    InlineBlock,
    Flex,
    Table,
    TableRow,
    TableCell,
    ListItem,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Static,
    Relative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    Visible,
    Hidden,
    Scroll,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxSizing {
    ContentBox,
    BorderBox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
    Center,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDecoration {
    None,
    Underline,
    LineThrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Baseline,
    Top,
    Middle,
    Bottom,
    TextTop,
    TextBottom,
    Sub,
    Super,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexWrap {
    NoWrap,
    Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JustifyContent {
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyleType {
    Disc,
    Decimal,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSelect {
    Auto,
    None,
    All,
}

/// The four box-model edge widths, one set per edge kind (margin/padding/border).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxEdges {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl BoxEdges {
    pub fn zero() -> Self {
        Self {
            top: Length::zero(),
            right: Length::zero(),
            bottom: Length::zero(),
            left: Length::zero(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    pub display: Display,
    pub position: Position,
    pub overflow_x: Overflow,
    pub overflow_y: Overflow,
    pub box_sizing: BoxSizing,

    pub margin: BoxEdges,
    pub padding: BoxEdges,
    pub border_width: BoxEdges,
    pub border_color: Color,

    pub width: Length,
    pub height: Length,
    pub min_width: Length,
    pub max_width: Length,
    pub min_height: Length,
    pub max_height: Length,

    pub color: Color,
    pub background_color: Color,
    pub opacity: f32,
    pub border_radius: f32,

    pub font_family: Vec<String>,
    pub font_size_px: f32,
    pub line_height: f32,
    pub font_weight: u16,
    pub font_style: FontStyle,
    pub text_align: TextAlign,
    pub text_decoration: TextDecoration,
    pub vertical_align: VerticalAlign,

    pub flex_direction: FlexDirection,
    pub flex_wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: Length,
    pub gap: f32,

    pub list_style_type: ListStyleType,
    pub list_item_index: Option<u32>,
    pub user_select: UserSelect,
}

impl ComputedStyle {
    pub fn initial() -> Self {
        Self {
            display: Display::Inline,
            position: Position::Static,
            overflow_x: Overflow::Visible,
            overflow_y: Overflow::Visible,
            box_sizing: BoxSizing::ContentBox,

            margin: BoxEdges::zero(),
            padding: BoxEdges::zero(),
            border_width: BoxEdges::zero(),
            border_color: Color::BLACK,

            width: Length::Auto,
            height: Length::Auto,
            min_width: Length::Px(0.0),
            max_width: Length::None,
            min_height: Length::Px(0.0),
            max_height: Length::None,

            color: Color::BLACK,
            background_color: Color::TRANSPARENT,
            opacity: 1.0,
            border_radius: 0.0,

            font_family: vec!["serif".to_string()],
            font_size_px: 16.0,
            line_height: 1.2,
            font_weight: 400,
            font_style: FontStyle::Normal,
            text_align: TextAlign::Left,
            text_decoration: TextDecoration::None,
            vertical_align: VerticalAlign::Baseline,

            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::NoWrap,
            justify_content: JustifyContent::FlexStart,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: Length::Auto,
            gap: 0.0,

            list_style_type: ListStyleType::None,
            list_item_index: None,
            user_select: UserSelect::Auto,
        }
    }

    /// The default `display` for an element tag before the user-agent sheet
    /// or author rules refine it. Text nodes always start at `inline`.
    pub fn default_display_for_tag(tag: &str) -> Display {
        match tag {
            "div" | "p" | "ul" | "ol" | "li" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
            | "blockquote" | "pre" | "article" | "section" | "header" | "footer" | "main"
            | "nav" | "aside" | "table" | "form" => Display::Block,
            "tr" => Display::TableRow,
            "td" | "th" => Display::TableCell,
            "span" | "strong" | "em" | "a" | "b" | "i" | "label" => Display::Inline,
            "button" | "input" | "select" | "textarea" | "img" => Display::InlineBlock,
            _ => Display::Block,
        }
    }
}

/// Computes the final style for a node given the declarations the cascade
/// already chose (one winner per property) and the parent's computed style
/// (for inheritance). `tag` is `None` for text nodes.
pub fn compute_style(
    specified: &[(String, String)],
    parent: Option<&ComputedStyle>,
    tag: Option<&str>,
) -> ComputedStyle {
    let mut style = ComputedStyle::initial();

    if let Some(tag) = tag {
        style.display = ComputedStyle::default_display_for_tag(tag);
    }

    if let Some(parent) = parent {
        style.color = parent.color;
        style.font_family = parent.font_family.clone();
        style.font_size_px = parent.font_size_px;
        style.font_weight = parent.font_weight;
        style.font_style = parent.font_style;
        style.text_align = parent.text_align;
        style.text_decoration = parent.text_decoration;
        style.line_height = parent.line_height;
    }

    for (name, value) in specified {
        apply_declaration(&mut style, name, value);
    }

    style
}

fn apply_declaration(style: &mut ComputedStyle, name: &str, value: &str) {
    match name {
        "color" => {
            if let Some(c) = parse_color(value) {
                style.color = c;
            }
        }
        "background-color" => {
            if let Some(c) = parse_color(value) {
                style.background_color = c;
            }
        }
        "border-top-color" => set_if_color(&mut style.border_color, value),
        "border-right-color" => set_if_color(&mut style.border_color, value),
        "border-bottom-color" => set_if_color(&mut style.border_color, value),
        "border-left-color" => set_if_color(&mut style.border_color, value),
        "font-size" => style.font_size_px = parse_length(value).resolve(no_relative(style)),
        "font-weight" => {
            style.font_weight = match value {
                "normal" => 400,
                "bold" => 700,
                other => other.parse().unwrap_or(style.font_weight),
            }
        }
        "font-style" => {
            style.font_style = if value == "italic" {
                FontStyle::Italic
            } else {
                FontStyle::Normal
            }
        }
        "font-family" => {
            style.font_family = value.split(',').map(|s| s.trim().to_string()).collect()
        }
        "line-height" => {
            if let Ok(v) = value.parse::<f32>() {
                style.line_height = v;
            }
        }
        "text-align" => {
            style.text_align = match value {
                "right" => TextAlign::Right,
                "center" => TextAlign::Center,
                "justify" => TextAlign::Justify,
                _ => TextAlign::Left,
            }
        }
        "text-decoration" => {
            style.text_decoration = match value {
                "underline" => TextDecoration::Underline,
                "line-through" => TextDecoration::LineThrough,
                _ => TextDecoration::None,
            }
        }
        "vertical-align" => {
            style.vertical_align = match value {
                "top" => VerticalAlign::Top,
                "middle" => VerticalAlign::Middle,
                "bottom" => VerticalAlign::Bottom,
                "text-top" => VerticalAlign::TextTop,
                "text-bottom" => VerticalAlign::TextBottom,
                "sub" => VerticalAlign::Sub,
                "super" => VerticalAlign::Super,
                _ => VerticalAlign::Baseline,
            }
        }
        "margin-top" => style.margin.top = parse_length(value),
        "margin-right" => style.margin.right = parse_length(value),
        "margin-bottom" => style.margin.bottom = parse_length(value),
        "margin-left" => style.margin.left = parse_length(value),
        "padding-top" => style.padding.top = parse_length(value),
        "padding-right" => style.padding.right = parse_length(value),
        "padding-bottom" => style.padding.bottom = parse_length(value),
        "padding-left" => style.padding.left = parse_length(value),
        "border-top-width" => style.border_width.top = parse_length(value),
        "border-right-width" => style.border_width.right = parse_length(value),
        "border-bottom-width" => style.border_width.bottom = parse_length(value),
        "border-left-width" => style.border_width.left = parse_length(value),
        "border-radius" => {
            if let Ok(v) = value.trim_end_matches("px").parse::<f32>() {
                style.border_radius = v;
            }
        }
        "width" => style.width = parse_length(value),
        "height" => style.height = parse_length(value),
        "min-width" => style.min_width = parse_length(value),
        "max-width" => style.max_width = parse_length(value),
        "min-height" => style.min_height = parse_length(value),
        "max-height" => style.max_height = parse_length(value),
        "box-sizing" => {
            style.box_sizing = if value == "border-box" {
                BoxSizing::BorderBox
            } else {
                BoxSizing::ContentBox
            }
        }
        "opacity" => {
            if let Ok(v) = value.parse::<f32>() {
                style.opacity = v.clamp(0.0, 1.0);
            }
        }
        "overflow" => {
            let ov = parse_overflow(value);
            style.overflow_x = ov;
            style.overflow_y = ov;
        }
        "overflow-x" => style.overflow_x = parse_overflow(value),
        "overflow-y" => style.overflow_y = parse_overflow(value),
        "position" => {
            style.position = if value == "relative" {
                Position::Relative
            } else {
                Position::Static
            }
        }
        "display" => {
            style.display = match value {
                "block" => Display::Block,
                "inline" => Display::Inline,
                "inline-block" => Display::InlineBlock,
                "flex" => Display::Flex,
                "table" => Display::Table,
                "table-row" => Display::TableRow,
                "table-cell" => Display::TableCell,
                "list-item" => Display::ListItem,
                "none" => Display::None,
                _ => style.display,
            }
        }
        "flex-direction" => {
            style.flex_direction = match value {
                "row-reverse" => FlexDirection::RowReverse,
                "column" => FlexDirection::Column,
                "column-reverse" => FlexDirection::ColumnReverse,
                _ => FlexDirection::Row,
            }
        }
        "flex-wrap" => {
            style.flex_wrap = if value == "wrap" {
                FlexWrap::Wrap
            } else {
                FlexWrap::NoWrap
            }
        }
        "justify-content" => {
            style.justify_content = match value {
                "center" => JustifyContent::Center,
                "flex-end" => JustifyContent::FlexEnd,
                "space-between" => JustifyContent::SpaceBetween,
                "space-around" => JustifyContent::SpaceAround,
                _ => JustifyContent::FlexStart,
            }
        }
        "flex-grow" => {
            if let Ok(v) = value.parse() {
                style.flex_grow = v;
            }
        }
        "flex-shrink" => {
            if let Ok(v) = value.parse() {
                style.flex_shrink = v;
            }
        }
        "flex-basis" => style.flex_basis = parse_length(value),
        "gap" => {
            if let Length::Px(v) = parse_length(value) {
                style.gap = v;
            }
        }
        "list-style-type" => {
            style.list_style_type = match value {
                "disc" => ListStyleType::Disc,
                "decimal" => ListStyleType::Decimal,
                _ => ListStyleType::None,
            }
        }
        "user-select" => {
            style.user_select = match value {
                "none" => UserSelect::None,
                "all" => UserSelect::All,
                _ => UserSelect::Auto,
            }
        }
        _ => {}
    }
}

fn set_if_color(slot: &mut Color, value: &str) {
    if let Some(c) = parse_color(value) {
        *slot = c;
    }
}

fn parse_overflow(value: &str) -> Overflow {
    match value {
        "hidden" => Overflow::Hidden,
        "scroll" => Overflow::Scroll,
        "auto" => Overflow::Auto,
        _ => Overflow::Visible,
    }
}

// font-size never resolves against %, vw/vh meaningfully mid-cascade here;
// em is resolved against the style's current (pre-update) font size.
fn no_relative(style: &ComputedStyle) -> crate::values::ResolutionContext {
    crate::values::ResolutionContext {
        containing_block: 0.0,
        font_size_px: style.font_size_px,
        root_font_size_px: 16.0,
        viewport_width: 0.0,
        viewport_height: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inherits_color_and_font_size() {
        let mut parent = ComputedStyle::initial();
        parent.color = Color::rgba(1.0, 0.0, 0.0, 1.0);
        parent.font_size_px = 20.0;

        let child = compute_style(&[], Some(&parent), None);
        assert_eq!(child.color, parent.color);
        assert_eq!(child.font_size_px, 20.0);
    }

    #[test]
    fn does_not_inherit_margin() {
        let mut parent = ComputedStyle::initial();
        parent.margin.top = Length::Px(40.0);
        let child = compute_style(&[], Some(&parent), None);
        assert_eq!(child.margin.top, Length::zero());
    }

    #[test]
    fn applies_declarations_over_defaults() {
        let decls = vec![
            ("color".to_string(), "red".to_string()),
            ("display".to_string(), "flex".to_string()),
            ("margin-top".to_string(), "10px".to_string()),
        ];
        let style = compute_style(&decls, None, Some("div"));
        assert_eq!(style.color, Color::rgba(1.0, 0.0, 0.0, 1.0));
        assert_eq!(style.display, Display::Flex);
        assert_eq!(style.margin.top, Length::Px(10.0));
    }

    #[test]
    fn unknown_tag_defaults_to_block() {
        assert_eq!(ComputedStyle::default_display_for_tag("custom-element"), Display::Block);
        assert_eq!(ComputedStyle::default_display_for_tag("figure"), Display::Block);
    }
}
