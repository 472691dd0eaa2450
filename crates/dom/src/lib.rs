//! Arena-backed DOM tree.
//!
//! Nodes are owned by a single [`Document`] arena and referenced by
//! [`NodeId`], never by pointer or `Rc`. Parent links are therefore
//! non-owning by construction: dropping a subtree never keeps an
//! ancestor alive, and tree shape can be walked without borrowing the
//! arena recursively.
//!
//! Building the tree from HTML source is out of scope here; callers
//! (a tokenizer/tree-builder external to this crate) construct nodes
//! via [`Document::create_element`] / [`Document::create_text`] and
//! [`Document::append_child`].

use indextree::Arena;
use std::collections::HashMap;

/// Stable handle to a node within one [`Document`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(indextree::NodeId);

/// The three node shapes in the data model: a document owns children only,
/// an element carries a lower-cased tag and attributes, text is a string.
#[derive(Debug, Clone)]
pub enum Node {
    Document,
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone, Default)]
pub struct ElementData {
    pub tag_name: String,
    /// Insertion order preserved; lookups are linear (attribute counts are small).
    pub attributes: Vec<(String, String)>,
}

impl ElementData {
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: Vec::new(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        if let Some(entry) = self.attributes.iter_mut().find(|(k, _)| *k == name) {
            entry.1 = value.into();
        } else {
            self.attributes.push((name, value.into()));
        }
    }

    pub fn id_attr(&self) -> Option<&str> {
        self.attribute("id")
    }

    pub fn class_list(&self) -> impl Iterator<Item = &str> {
        self.attribute("class")
            .into_iter()
            .flat_map(|s| s.split_ascii_whitespace())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_list().any(|c| c == class)
    }
}

/// Owns the arena for one document; all [`NodeId`]s are scoped to it.
pub struct Document {
    arena: Arena<Node>,
    root: NodeId,
}

impl Document {
    pub fn new() -> Self {
        let mut arena = Arena::new();
        let root = arena.new_node(Node::Document);
        Self {
            arena,
            root: NodeId(root),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn create_element(&mut self, data: ElementData) -> NodeId {
        NodeId(self.arena.new_node(Node::Element(data)))
    }

    /// Collapses runs of ASCII whitespace to a single space before storing,
    /// matching the collapsed-text contract text nodes carry in this model.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        NodeId(self.arena.new_node(Node::Text(collapse_whitespace(text))))
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        parent.0.append(child.0, &mut self.arena);
    }

    pub fn get(&self, id: NodeId) -> &Node {
        self.arena[id.0].get()
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        self.arena[id.0].get_mut()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena[id.0].parent().map(NodeId)
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.0.children(&self.arena).map(NodeId)
    }

    /// Pre-order depth-first traversal including `id` itself.
    pub fn descendants(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.0.descendants(&self.arena).map(NodeId)
    }

    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.0.ancestors(&self.arena).map(NodeId)
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        match self.get(id) {
            Node::Element(e) => Some(e.tag_name.as_str()),
            _ => None,
        }
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.get(id) {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.get(id) {
            Node::Text(t) => Some(t.as_str()),
            _ => None,
        }
    }

    /// Nearest ancestor (not including `id`) whose tag is in `tags`.
    pub fn nearest_ancestor_with_tag(&self, id: NodeId, tags: &[&str]) -> Option<NodeId> {
        let mut cur = self.parent(id)?;
        loop {
            if let Some(tag) = self.tag_name(cur) {
                if tags.contains(&tag) {
                    return Some(cur);
                }
            }
            cur = self.parent(cur)?;
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapses internal whitespace runs to a single space and trims nothing
/// at the edges; edge trimming is the layout/inline-context's job since it
/// depends on adjacency to block ancestors (see the style/layout crates).
fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = false;
    for ch in text.chars() {
        if ch.is_ascii_whitespace() {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(ch);
            last_was_space = false;
        }
    }
    out
}

/// Lower-cases attribute values are *not* applied automatically; only tag
/// names are normalized to ASCII lowercase on construction helpers that use
/// this, matching the contract that tag names arrive lower-cased.
pub fn normalize_tag(name: &str) -> String {
    name.to_ascii_lowercase()
}

pub type AttrMap = HashMap<String, String>;
