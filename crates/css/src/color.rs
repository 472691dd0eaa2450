//! Color parsing: hex, `rgb()`/`rgba()`, `hsl()`/`hsla()`, and named colors.
//!
//! The teacher's own parser only covers hex plus a small named-color table;
//! full `rgb()/hsl()` support is enriched from `csscolorparser`, which other
//! repos in this pack already depend on for the same job.

/// Four floats in `[0, 1]`: red, green, blue, alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
}

/// Parses a CSS color value. Returns `None` on anything unrecognized;
/// callers skip the owning declaration silently rather than propagate.
pub fn parse_color(input: &str) -> Option<Color> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    csscolorparser::parse(s).ok().map(|c| {
        let [r, g, b, a] = c.to_array();
        Color::rgba(r as f32, g as f32, b as f32, a as f32)
    })
}
