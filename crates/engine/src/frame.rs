//! Per-frame orchestration: style → layout → paint, in that order, for one
//! DOM snapshot (§2, §5 "single-threaded cooperative frame loop").

use css::values::ResolutionContext;
use css::{build_style_tree, sheets_from_author_css, parse_stylesheet, Origin, Sheet};
use dom::Document;
use layout::{layout_node, LayoutBox, Rectangle, TextMeasurer};
use paint::PaintCommand;

use crate::config::EngineConfig;

/// One rendered frame: the render tree plus the paint commands derived
/// from it. Selection operates on the same `root_box` via
/// `selection::collect_text_boxes`, rebuilt by the caller as needed —
/// this crate doesn't cache it, since selection state outlives any one
/// frame's render tree while the render tree doesn't outlive a reflow.
pub struct Frame {
    pub root_box: LayoutBox,
    pub paint_commands: Vec<PaintCommand>,
}

pub struct Engine<'a> {
    config: EngineConfig,
    measurer: &'a dyn TextMeasurer,
}

impl<'a> Engine<'a> {
    pub fn new(config: EngineConfig, measurer: &'a dyn TextMeasurer) -> Result<Self, crate::error::EngineError> {
        config.validate()?;
        Ok(Engine { config, measurer })
    }

    fn sheets(&self, author_css: &[&str]) -> Vec<Sheet> {
        match &self.config.user_agent_stylesheet_source {
            Some(src) => {
                let mut sheets = vec![Sheet {
                    origin: Origin::UserAgent,
                    stylesheet: parse_stylesheet(src),
                }];
                sheets.extend(author_css.iter().map(|s| Sheet {
                    origin: Origin::Author,
                    stylesheet: parse_stylesheet(s),
                }));
                sheets
            }
            None => sheets_from_author_css(author_css),
        }
    }

    /// Styles, lays out, and paints `doc` against `author_css`. Never
    /// fails: per §7, everything downstream of config validation skips,
    /// clamps, or falls back rather than returning `Result`.
    pub fn run_frame(&self, doc: &Document, author_css: &[&str]) -> Frame {
        let sheets = self.sheets(author_css);
        let styled = build_style_tree(doc, &sheets);

        let ctx = ResolutionContext {
            containing_block: self.config.viewport_width,
            font_size_px: self.config.base_font_size_px,
            root_font_size_px: self.config.base_font_size_px,
            viewport_width: self.config.viewport_width,
            viewport_height: self.config.viewport_height,
        };

        let root_box = layout_node(
            doc,
            &styled,
            0.0,
            0.0,
            self.config.viewport_width,
            ctx,
            self.measurer,
        );

        let viewport = Rectangle::new(0.0, 0.0, self.config.viewport_width, self.config.viewport_height);
        let paint_commands = paint::emit_frame(&root_box, viewport);

        Frame { root_box, paint_commands }
    }
}
