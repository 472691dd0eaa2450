//! Stylesheet and declaration-block parsing.
//!
//! Tolerant by design: a malformed rule or declaration is dropped, never
//! aborting the rest of the sheet.

use crate::selector::{CompoundSelector, SimpleSelector};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rule {
    pub selectors: Vec<CompoundSelector>,
    pub declarations: Vec<(String, String)>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

pub fn parse_stylesheet(input: &str) -> Stylesheet {
    let cleaned = strip_comments(input);
    let mut rules = Vec::new();

    for block in cleaned.split('}') {
        let Some(brace) = block.find('{') else {
            continue;
        };
        let (selector_part, decl_part) = block.split_at(brace);
        let decl_part = &decl_part[1..]; // drop '{'

        let selectors = parse_selector_list(selector_part);
        let declarations = parse_declarations(decl_part);
        if selectors.is_empty() || declarations.is_empty() {
            continue;
        }
        rules.push(Rule {
            selectors,
            declarations,
        });
    }

    Stylesheet { rules }
}

/// Parses a `style="..."` attribute value into longhand declarations,
/// shorthand expansion included.
pub fn parse_declaration_block(input: &str) -> Vec<(String, String)> {
    parse_declarations(input)
}

fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    loop {
        match rest.find("/*") {
            Some(start) => {
                out.push_str(&rest[..start]);
                let after_open = &rest[start + 2..];
                match after_open.find("*/") {
                    Some(end) => rest = &after_open[end + 2..],
                    None => break,
                }
            }
            None => {
                out.push_str(rest);
                break;
            }
        }
    }
    out
}

fn parse_selector_list(input: &str) -> Vec<CompoundSelector> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(parse_compound_selector)
        .collect()
}

fn parse_compound_selector(input: &str) -> Option<CompoundSelector> {
    let parts: Vec<SimpleSelector> = input
        .split_whitespace()
        .filter(|tok| !matches!(*tok, ">" | "+" | "~"))
        .filter_map(parse_simple_selector)
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(CompoundSelector { parts })
    }
}

fn parse_simple_selector(token: &str) -> Option<SimpleSelector> {
    if token == "*" {
        return Some(SimpleSelector::universal());
    }

    // Split the token at each '#'/'.' boundary into (kind, text) pieces,
    // where a leading bare run (no prefix) is the tag name.
    let mut pieces: Vec<(char, String)> = Vec::new();
    let mut cur_kind = '\0';
    let mut cur = String::new();
    for ch in token.chars() {
        if ch == '#' || ch == '.' {
            if !cur.is_empty() || cur_kind != '\0' {
                pieces.push((cur_kind, std::mem::take(&mut cur)));
            }
            cur_kind = ch;
        } else if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            cur.push(ch);
        } else {
            return None;
        }
    }
    pieces.push((cur_kind, cur));

    let mut sel = SimpleSelector::default();
    for (kind, text) in pieces {
        if text.is_empty() {
            continue;
        }
        match kind {
            '\0' => sel.tag = Some(text),
            '#' => sel.id = Some(text),
            '.' => sel.classes.push(text),
            _ => {}
        }
    }

    if sel.tag.is_none() && sel.id.is_none() && sel.classes.is_empty() {
        None
    } else {
        Some(sel)
    }
}

fn parse_declarations(input: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for decl in input.split(';') {
        let Some(colon) = decl.find(':') else {
            continue;
        };
        let (name, value) = decl.split_at(colon);
        let name = name.trim().to_ascii_lowercase();
        let value = value[1..].trim().to_string();
        if name.is_empty() || value.is_empty() {
            continue;
        }
        out.extend(crate::shorthand::expand_shorthand(&name, &value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_rule() {
        let sheet = parse_stylesheet("p { color: red; margin: 10px; }");
        assert_eq!(sheet.rules.len(), 1);
        let rule = &sheet.rules[0];
        assert_eq!(rule.selectors.len(), 1);
        assert!(rule
            .declarations
            .iter()
            .any(|(k, v)| k == "color" && v == "red"));
    }

    #[test]
    fn skips_malformed_rule_but_keeps_others() {
        let sheet = parse_stylesheet("p { color: red } garbage-no-brace .ok { color: blue }");
        assert_eq!(sheet.rules.len(), 2);
    }

    #[test]
    fn splits_comma_separated_selectors() {
        let sheet = parse_stylesheet("h1, h2.big { color: red }");
        assert_eq!(sheet.rules[0].selectors.len(), 2);
    }

    #[test]
    fn id_and_class_selector_parts() {
        let sel = parse_compound_selector("div#main.foo.bar").unwrap();
        let part = &sel.parts[0];
        assert_eq!(part.tag.as_deref(), Some("div"));
        assert_eq!(part.id.as_deref(), Some("main"));
        assert_eq!(part.classes, vec!["foo", "bar"]);
    }

    #[test]
    fn strips_block_comments() {
        let sheet = parse_stylesheet("/* hi */ p { color: red; /* inline */ }");
        assert_eq!(sheet.rules.len(), 1);
    }

    #[test]
    fn preserves_multibyte_text_outside_comments() {
        let sheet = parse_stylesheet("p { font-family: \"Résumé\"; /* é */ }");
        assert!(sheet.rules[0]
            .declarations
            .iter()
            .any(|(k, v)| k == "font-family" && v.contains('é')));
    }
}
