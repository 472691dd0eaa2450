//! The cascade: matches stylesheet rules against every element, resolves
//! winners by specificity/source-order, folds in the inline `style`
//! attribute, and recurses to build a style-annotated mirror of the DOM.

use std::collections::HashMap;

use dom::{Document, Node, NodeId};
use log::debug;

use crate::computed::{compute_style, ComputedStyle, ListStyleType};
use crate::selector::{matches_compound, specificity_of, Specificity};
use crate::syntax::{parse_declaration_block, Rule, Stylesheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    UserAgent,
    Author,
}

pub struct Sheet {
    pub origin: Origin,
    pub stylesheet: Stylesheet,
}

struct Candidate {
    property: String,
    value: String,
    specificity: Specificity,
    order: u32,
}

/// Collects every declaration from rules matching `node`, tagged with the
/// specificity/order needed to resolve the cascade, across all `sheets` in
/// the order given (earlier sheets lose ties to later ones at equal
/// specificity — callers pass user-agent before author).
fn collect_candidates(doc: &Document, node: NodeId, sheets: &[Sheet]) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut order = 0u32;

    for sheet in sheets {
        for rule in &sheet.stylesheet.rules {
            let matched = rule
                .selectors
                .iter()
                .any(|sel| matches_compound(doc, node, sel));
            if !matched {
                order += 1;
                continue;
            }
            let specificity = rule
                .selectors
                .iter()
                .filter(|sel| matches_compound(doc, node, sel))
                .map(specificity_of)
                .max()
                .unwrap_or(Specificity(0, 0, 0));

            for (name, value) in &rule.declarations {
                candidates.push(Candidate {
                    property: name.clone(),
                    value: value.clone(),
                    specificity,
                    order,
                });
            }
            order += 1;
        }
    }

    candidates
}

/// Resolves one winning declaration per property name: highest
/// `(specificity, order)` wins, ties broken by later source order.
fn resolve_winners(candidates: Vec<Candidate>) -> Vec<(String, String)> {
    let mut by_property: HashMap<String, Candidate> = HashMap::new();
    for cand in candidates {
        by_property
            .entry(cand.property.clone())
            .and_modify(|existing| {
                if (cand.specificity, cand.order) > (existing.specificity, existing.order) {
                    *existing = Candidate {
                        property: cand.property.clone(),
                        value: cand.value.clone(),
                        specificity: cand.specificity,
                        order: cand.order,
                    };
                }
            })
            .or_insert(cand);
    }
    by_property
        .into_iter()
        .map(|(k, v)| (k, v.value))
        .collect()
}

/// Declarations for one node, ready for [`compute_style`]: cascade winners
/// from stylesheet rules, then the inline `style` attribute appended last
/// so it unconditionally overrides (applied in order by `compute_style`).
fn specified_declarations(doc: &Document, node: NodeId, sheets: &[Sheet]) -> Vec<(String, String)> {
    let candidates = collect_candidates(doc, node, sheets);
    let mut winners = resolve_winners(candidates);

    if let Some(el) = doc.element(node) {
        if let Some(style_attr) = el.attribute("style") {
            winners.extend(parse_declaration_block(style_attr));
        }
    }
    winners
}

/// Runtime rules that cannot be expressed as static selectors: `li` under
/// `ul`/`ol` gets its list-style-type and (for `ol`) a 1-based ordinal.
fn apply_runtime_rules(doc: &Document, node: NodeId, style: &mut ComputedStyle) {
    let Some(tag) = doc.tag_name(node) else {
        return;
    };
    if tag != "li" {
        return;
    }
    let Some(parent) = doc.parent(node) else {
        return;
    };
    match doc.tag_name(parent) {
        Some("ul") => style.list_style_type = ListStyleType::Disc,
        Some("ol") => {
            style.list_style_type = ListStyleType::Decimal;
            let index = doc
                .children(parent)
                .filter(|c| doc.tag_name(*c) == Some("li"))
                .position(|c| c == node)
                .map(|i| i as u32 + 1);
            style.list_item_index = index;
        }
        _ => {}
    }
}

/// A DOM node paired with its computed style and styled children, mirroring
/// the DOM shape exactly (no anonymous boxes are introduced here).
pub struct StyledNode {
    pub node: NodeId,
    pub style: ComputedStyle,
    pub children: Vec<StyledNode>,
}

/// Builds the style tree for the whole document, recursively cascading and
/// inheriting from each node's freshly computed parent style.
pub fn build_style_tree(doc: &Document, sheets: &[Sheet]) -> StyledNode {
    let root = doc.root();
    let mut restyled = 0u32;
    let tree = build_recursive(doc, root, sheets, None, &mut restyled);
    debug!(
        "cascade: restyled {restyled} nodes across {} sheets",
        sheets.len()
    );
    tree
}

fn build_recursive(
    doc: &Document,
    node: NodeId,
    sheets: &[Sheet],
    parent_style: Option<&ComputedStyle>,
    restyled: &mut u32,
) -> StyledNode {
    let tag = doc.tag_name(node);
    let style = match doc.get(node) {
        Node::Document => ComputedStyle::initial(),
        Node::Text(_) => compute_style(&[], parent_style, None),
        Node::Element(_) => {
            let specified = specified_declarations(doc, node, sheets);
            let mut style = compute_style(&specified, parent_style, tag);
            apply_runtime_rules(doc, node, &mut style);
            style
        }
    };
    *restyled += 1;

    let children = doc
        .children(node)
        .map(|child| build_recursive(doc, child, sheets, Some(&style), restyled))
        .collect();

    StyledNode {
        node,
        style,
        children,
    }
}
