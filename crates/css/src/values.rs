//! CSS value types: lengths/percentages and the context they resolve against.

/// A parsed length, percentage, or one of the two keyword sentinels.
///
/// Resolution to pixels needs the containing-block size, the current font
/// size (for `em`), and the viewport size (for `vw`/`vh`); `auto`/`none`
/// resolve to the [`AUTO`] sentinel rather than a real pixel value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    Em(f32),
    Rem(f32),
    Percent(f32),
    Vw(f32),
    Vh(f32),
    Auto,
    None,
}

/// Sentinel pixel value `auto`/`none` resolve to.
pub const AUTO: f32 = -1.0;

/// Ambient sizes a length is resolved against.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext {
    pub containing_block: f32,
    pub font_size_px: f32,
    pub root_font_size_px: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Length {
    pub fn resolve(self, ctx: ResolutionContext) -> f32 {
        match self {
            Length::Px(v) => v,
            Length::Em(v) => v * ctx.font_size_px,
            Length::Rem(v) => v * ctx.root_font_size_px,
            Length::Percent(v) => v / 100.0 * ctx.containing_block,
            Length::Vw(v) => v / 100.0 * ctx.viewport_width,
            Length::Vh(v) => v / 100.0 * ctx.viewport_height,
            Length::Auto | Length::None => AUTO,
        }
    }

    pub fn is_auto(self) -> bool {
        matches!(self, Length::Auto | Length::None)
    }

    pub fn zero() -> Self {
        Length::Px(0.0)
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::zero()
    }
}

/// Parses a single CSS `<length-percentage>` or `auto`/`none` token.
/// Unknown units fall back to `px`; unparsable input falls back to `0px`
/// per the "never abort on malformed input" contract.
pub fn parse_length(input: &str) -> Length {
    let s = input.trim();
    match s {
        "auto" => return Length::Auto,
        "none" => return Length::None,
        "" => return Length::Px(0.0),
        _ => {}
    }

    let (num_part, unit_part) = split_number_and_unit(s);
    let Ok(num) = num_part.parse::<f32>() else {
        return Length::Px(0.0);
    };

    match unit_part {
        "px" | "" => Length::Px(num),
        "em" => Length::Em(num),
        "rem" => Length::Rem(num),
        "%" => Length::Percent(num),
        "vw" => Length::Vw(num),
        "vh" => Length::Vh(num),
        _ => Length::Px(num),
    }
}

fn split_number_and_unit(s: &str) -> (&str, &str) {
    let end = s
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.' || *c == '-' || *c == '+'))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    (&s[..end], s[end..].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_units() {
        assert_eq!(parse_length("10px"), Length::Px(10.0));
        assert_eq!(parse_length("1.5em"), Length::Em(1.5));
        assert_eq!(parse_length("50%"), Length::Percent(50.0));
        assert_eq!(parse_length("auto"), Length::Auto);
        assert_eq!(parse_length("none"), Length::None);
        assert_eq!(parse_length("garbage"), Length::Px(0.0));
    }

    #[test]
    fn resolves_against_context() {
        let ctx = ResolutionContext {
            containing_block: 200.0,
            font_size_px: 20.0,
            root_font_size_px: 16.0,
            viewport_width: 800.0,
            viewport_height: 600.0,
        };
        assert_eq!(Length::Percent(50.0).resolve(ctx), 100.0);
        assert_eq!(Length::Em(2.0).resolve(ctx), 40.0);
        assert_eq!(Length::Rem(2.0).resolve(ctx), 32.0);
        assert_eq!(Length::Auto.resolve(ctx), AUTO);
    }
}
