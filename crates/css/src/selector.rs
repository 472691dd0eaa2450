//! Selectors: one simple selector per compound-chain link, descendant
//! combinator only (`>`, `+`, `~` parse but behave as descendant).

use dom::{Document, NodeId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleSelector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl SimpleSelector {
    pub fn universal() -> Self {
        Self::default()
    }
}

/// An ordered outer-to-inner chain of simple selectors joined by the
/// descendant combinator; the last entry must match the target element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompoundSelector {
    pub parts: Vec<SimpleSelector>,
}

/// `(id-count, class-count, tag-count)`, compared lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Specificity(pub u32, pub u32, pub u32);

pub fn specificity_of(sel: &CompoundSelector) -> Specificity {
    let mut ids = 0;
    let mut classes = 0;
    let mut tags = 0;
    for part in &sel.parts {
        if part.id.is_some() {
            ids += 1;
        }
        classes += part.classes.len() as u32;
        if part.tag.is_some() {
            tags += 1;
        }
    }
    Specificity(ids, classes, tags)
}

fn matches_simple(doc: &Document, node: NodeId, sel: &SimpleSelector) -> bool {
    let Some(el) = doc.element(node) else {
        return false;
    };
    if let Some(tag) = &sel.tag {
        if tag != "*" && el.tag_name != *tag {
            return false;
        }
    }
    if let Some(id) = &sel.id {
        if el.id_attr() != Some(id.as_str()) {
            return false;
        }
    }
    sel.classes.iter().all(|c| el.has_class(c))
}

/// Matches a compound selector against `node`: the last part must match
/// `node` itself, each earlier part must match some ancestor, in order,
/// outer-to-inner.
pub fn matches_compound(doc: &Document, node: NodeId, sel: &CompoundSelector) -> bool {
    let Some((last, rest)) = sel.parts.split_last() else {
        return false;
    };
    if !matches_simple(doc, node, last) {
        return false;
    }

    let mut cursor = node;
    for part in rest.iter().rev() {
        let mut matched_ancestor = None;
        let mut walk = cursor;
        while let Some(ancestor) = doc.parent(walk) {
            if matches_simple(doc, ancestor, part) {
                matched_ancestor = Some(ancestor);
                break;
            }
            walk = ancestor;
        }
        match matched_ancestor {
            Some(a) => cursor = a,
            None => return false,
        }
    }
    true
}
