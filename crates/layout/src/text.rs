//! Glyph metrics interface (§6 "Glyph provider") plus the `TextMeasurer`
//! facade layout threads through its recursion, mirroring the teacher's
//! `TextMeasurer` calling convention but widened to the full glyph contract.

use css::computed::{ComputedStyle, FontStyle};

/// One resolved font at a given family/weight/style, synchronous and safe
/// to call repeatedly without synchronization once first resolved (§5).
pub trait Font {
    fn advance(&self, codepoint: char, size_px: f32) -> f32;
    fn ascent(&self, size_px: f32) -> f32;
    fn descent(&self, size_px: f32) -> f32;

    fn text_width(&self, text: &str, size_px: f32) -> f32 {
        text.chars().map(|c| self.advance(c, size_px)).sum()
    }

    /// Nearest character boundary to `local_x`, by cumulative advance.
    fn hit_test(&self, text: &str, local_x: f32, size_px: f32) -> usize {
        if local_x <= 0.0 {
            return 0;
        }
        let mut x = 0.0;
        for (byte_off, ch) in text.char_indices() {
            let adv = self.advance(ch, size_px);
            if local_x < x + adv / 2.0 {
                return byte_off;
            }
            x += adv;
        }
        text.len()
    }

    fn position_at_index(&self, text: &str, index: usize, size_px: f32) -> f32 {
        let index = index.min(text.len());
        self.text_width(&text[..index], size_px)
    }
}

/// Resolves a `Font` for a family list / weight / style. Implemented by an
/// external rasterizer/atlas; this core only calls the methods above.
pub trait FontProvider {
    fn get_font(&self, family_list: &[String], weight: u16, style: FontStyle) -> &dyn Font;
}

/// The trait actually threaded through layout recursion: one borrow per
/// frame, never stored on the render tree.
pub trait TextMeasurer {
    fn measure(&self, text: &str, style: &ComputedStyle) -> f32;
    fn line_height(&self, style: &ComputedStyle) -> f32;
    fn ascent(&self, style: &ComputedStyle) -> f32;
    fn descent(&self, style: &ComputedStyle) -> f32;
    fn hit_test(&self, text: &str, local_x: f32, style: &ComputedStyle) -> usize;
    fn position_at_index(&self, text: &str, index: usize, style: &ComputedStyle) -> f32;
}

/// Adapts any [`FontProvider`] into a [`TextMeasurer`].
pub struct ProviderMeasurer<'a> {
    pub provider: &'a dyn FontProvider,
}

impl<'a> TextMeasurer for ProviderMeasurer<'a> {
    fn measure(&self, text: &str, style: &ComputedStyle) -> f32 {
        let font = self
            .provider
            .get_font(&style.font_family, style.font_weight, style.font_style);
        font.text_width(text, style.font_size_px)
    }

    fn line_height(&self, style: &ComputedStyle) -> f32 {
        style.line_height * style.font_size_px
    }

    fn ascent(&self, style: &ComputedStyle) -> f32 {
        let font = self
            .provider
            .get_font(&style.font_family, style.font_weight, style.font_style);
        font.ascent(style.font_size_px)
    }

    fn descent(&self, style: &ComputedStyle) -> f32 {
        let font = self
            .provider
            .get_font(&style.font_family, style.font_weight, style.font_style);
        font.descent(style.font_size_px)
    }

    fn hit_test(&self, text: &str, local_x: f32, style: &ComputedStyle) -> usize {
        let font = self
            .provider
            .get_font(&style.font_family, style.font_weight, style.font_style);
        font.hit_test(text, local_x, style.font_size_px)
    }

    fn position_at_index(&self, text: &str, index: usize, style: &ComputedStyle) -> f32 {
        let font = self
            .provider
            .get_font(&style.font_family, style.font_weight, style.font_style);
        font.position_at_index(text, index, style.font_size_px)
    }
}

/// A fixed-advance monospace-ish font, useful for tests and as a fallback
/// when no real rasterizer is wired up yet.
pub struct MonospaceFont {
    pub advance_px: f32,
}

impl Font for MonospaceFont {
    fn advance(&self, ch: char, size_px: f32) -> f32 {
        if ch == ' ' {
            self.advance_px * size_px / 16.0
        } else {
            self.advance_px * size_px / 16.0
        }
    }

    fn ascent(&self, size_px: f32) -> f32 {
        size_px * 0.8
    }

    fn descent(&self, size_px: f32) -> f32 {
        size_px * 0.2
    }
}

pub struct MonospaceProvider {
    pub font: MonospaceFont,
}

impl FontProvider for MonospaceProvider {
    fn get_font(&self, _family_list: &[String], _weight: u16, _style: FontStyle) -> &dyn Font {
        &self.font
    }
}
