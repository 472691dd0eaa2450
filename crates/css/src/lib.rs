//! CSS parsing, cascade, and computed style resolution.

pub mod cascade;
pub mod color;
pub mod computed;
pub mod selector;
pub mod shorthand;
pub mod syntax;
pub mod ua_stylesheet;
pub mod values;

pub use cascade::{build_style_tree, Origin, Sheet, StyledNode};
pub use color::Color;
pub use computed::ComputedStyle;
pub use selector::{CompoundSelector, SimpleSelector, Specificity};
pub use syntax::{parse_declaration_block, parse_stylesheet, Rule, Stylesheet};
pub use values::Length;

/// Convenience: builds the user-agent sheet plus every parsed author sheet
/// into the ordered list [`cascade::collect_candidates`] expects.
pub fn sheets_from_author_css(author_css: &[&str]) -> Vec<Sheet> {
    let mut sheets = vec![Sheet {
        origin: Origin::UserAgent,
        stylesheet: parse_stylesheet(ua_stylesheet::USER_AGENT_CSS),
    }];
    sheets.extend(author_css.iter().map(|src| Sheet {
        origin: Origin::Author,
        stylesheet: parse_stylesheet(src),
    }));
    sheets
}
