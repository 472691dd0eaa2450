//! Nearest block-level ancestor lookup, used for triple-click (paragraph
//! selection) and for judging `user-select` inheritance.

use dom::{Document, NodeId};

const BLOCK_TAGS: &[&str] = &[
    "p",
    "div",
    "li",
    "td",
    "th",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "blockquote",
    "pre",
    "article",
    "section",
    "header",
    "footer",
    "main",
    "nav",
    "aside",
];

pub fn nearest_block_ancestor(doc: &Document, node: NodeId) -> Option<NodeId> {
    doc.nearest_ancestor_with_tag(node, BLOCK_TAGS)
}
