//! The render tree: a per-node box carrying computed style and geometry,
//! mirroring the DOM exactly (no anonymous boxes are inserted).

use css::computed::ComputedStyle;
use dom::NodeId;

use crate::box_model::EdgesPx;
use crate::geometry::Rectangle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxKind {
    Block,
    Inline,
    InlineBlock,
    Flex,
    Table,
    TableRow,
    TableCell,
    Replaced(ReplacedKind),
    TextRun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacedKind {
    Img,
    InputText,
    Checkbox,
    Radio,
    Button,
    Textarea,
    Select,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    None,
    Unordered,
    Ordered(u32),
}

/// One shaped run of text: the unit of painted text and hit-testing.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLineBox {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Byte offset of `text`'s first character within the owning node's string.
    pub first_char_index: usize,
}

#[derive(Debug, Clone)]
pub struct LayoutBox {
    pub node: NodeId,
    pub kind: BoxKind,
    pub style: ComputedStyle,
    /// Content-box rect in document coordinates.
    pub content_rect: Rectangle,
    pub padding: EdgesPx,
    pub border: EdgesPx,
    pub margin: EdgesPx,
    pub children: Vec<LayoutBox>,
    /// Populated iff `node` is a text node that has been laid out.
    pub lines: Vec<TextLineBox>,
    pub list_marker: ListMarker,
    pub scroll_x: f32,
    pub scroll_y: f32,
    pub scrollable_width: f32,
    pub scrollable_height: f32,
}

impl LayoutBox {
    pub fn padding_box(&self) -> Rectangle {
        Rectangle {
            x: self.content_rect.x - self.padding.left,
            y: self.content_rect.y - self.padding.top,
            width: self.content_rect.width + self.padding.horizontal(),
            height: self.content_rect.height + self.padding.vertical(),
        }
    }

    pub fn border_box(&self) -> Rectangle {
        let p = self.padding_box();
        Rectangle {
            x: p.x - self.border.left,
            y: p.y - self.border.top,
            width: p.width + self.border.horizontal(),
            height: p.height + self.border.vertical(),
        }
    }

    pub fn margin_box(&self) -> Rectangle {
        let b = self.border_box();
        Rectangle {
            x: b.x - self.margin.left,
            y: b.y - self.margin.top,
            width: b.width + self.margin.horizontal(),
            height: b.height + self.margin.vertical(),
        }
    }

    pub fn is_text(&self) -> bool {
        self.kind == BoxKind::TextRun
    }

    pub fn has_text_lines(&self) -> bool {
        self.is_text() && !self.lines.is_empty()
    }
}
