use crate::dom::style::Style;
use crate::foundation::core::NodeId;
use crate::foundation::error::{VmlError, VmlResult};
use std::collections::BTreeMap;

/// Tag of the element every [`Document`] starts with.
pub const DOCUMENT_ROOT_TAG: &str = "html";

#[derive(Debug, Clone)]
pub(crate) struct ElementData {
    pub(crate) tag: String,
    pub(crate) attrs: BTreeMap<String, String>,
    pub(crate) style: Style,
}

#[derive(Debug, Clone)]
pub(crate) enum NodeData {
    Element(ElementData),
    Text(String),
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) data: NodeData,
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Arena-backed element tree standing in for the host document.
///
/// Node 0 is the document-level root element (`<html>`). Nodes created with
/// [`Document::create_element`] start out detached; a node is *connected* while its ancestor
/// chain reaches the document root.
///
/// Detached nodes stay allocated until [`Document::free_subtree`] releases them. Released slots
/// are reused by later allocations under a new generation, so stale [`NodeId`]s read as unknown.
#[derive(Debug, Clone)]
pub struct Document {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document holding only its root element.
    pub fn new() -> Self {
        Self {
            slots: vec![Slot {
                generation: 0,
                node: Some(Node {
                    parent: None,
                    children: Vec::new(),
                    data: NodeData::Element(ElementData {
                        tag: DOCUMENT_ROOT_TAG.to_owned(),
                        attrs: BTreeMap::new(),
                        style: Style::default(),
                    }),
                }),
            }],
            free: Vec::new(),
            live: 1,
        }
    }

    /// The document-level root element.
    pub fn root(&self) -> NodeId {
        NodeId::new(0, 0)
    }

    /// Number of live nodes (connected or not).
    pub fn len(&self) -> usize {
        self.live
    }

    /// Always `false`: the root element exists from construction.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of arena slots, live or waiting for reuse.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Allocate a detached element. Tag names are stored lowercased.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.alloc(NodeData::Element(ElementData {
            tag: tag.to_ascii_lowercase(),
            attrs: BTreeMap::new(),
            style: Style::default(),
        }))
    }

    /// Allocate a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(NodeData::Text(text.into()))
    }

    fn alloc(&mut self, data: NodeData) -> NodeId {
        let node = Node {
            parent: None,
            children: Vec::new(),
            data,
        };
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            return NodeId::new(index, slot.generation);
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId::new(index, 0)
    }

    /// Detach `id` and release it together with its whole subtree.
    ///
    /// Every released id stops resolving. Returns the number of nodes released; the root and
    /// unknown ids release nothing.
    pub fn free_subtree(&mut self, id: NodeId) -> usize {
        if id == self.root() || self.node(id).is_none() {
            return 0;
        }
        self.unlink(id);
        let mut released = 0;
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            let slot = &mut self.slots[n.index()];
            let Some(node) = slot.node.take() else {
                continue;
            };
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(n.index() as u32);
            stack.extend(node.children);
            released += 1;
        }
        self.live -= released;
        released
    }

    /// Release every child subtree of `id`. Returns the number of nodes released.
    pub fn free_children(&mut self, id: NodeId) -> usize {
        self.clear_children(id)
            .into_iter()
            .map(|c| self.free_subtree(c))
            .sum()
    }

    pub(crate) fn node(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index())
            .filter(|s| s.generation == id.generation())
            .and_then(|s| s.node.as_ref())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index())
            .filter(|s| s.generation == id.generation())
            .and_then(|s| s.node.as_mut())
    }

    fn element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.node(id)?.data {
            NodeData::Element(e) => Some(e),
            NodeData::Text(_) => None,
        }
    }

    fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        match &mut self.node_mut(id)?.data {
            NodeData::Element(e) => Some(e),
            NodeData::Text(_) => None,
        }
    }

    /// Tag name of an element, `None` for text nodes and unknown ids.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|e| e.tag.as_str())
    }

    /// Return `true` when `id` names an element.
    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    /// Parent of a node, `None` for the root and detached nodes.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    /// Children in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Element children only, in document order.
    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|&c| self.is_element(c))
            .collect()
    }

    /// Ancestors starting at `id` itself and ending at the topmost ancestor.
    pub fn ancestors_inclusive(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            doc: self,
            next: self.node(id).map(|_| id),
        }
    }

    /// Return `true` while the node hangs (transitively) off the document root.
    pub fn is_connected(&self, id: NodeId) -> bool {
        self.ancestors_inclusive(id).any(|a| a == self.root())
    }

    /// Return `true` when `ancestor` is `id` or one of its ancestors.
    pub fn contains(&self, ancestor: NodeId, id: NodeId) -> bool {
        self.ancestors_inclusive(id).any(|a| a == ancestor)
    }

    /// All descendants of `id` in pre-order, excluding `id`.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.children(n).iter().rev().copied());
        }
        out
    }

    /// Append `child` as the last child of `parent`, moving it out of its current parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> VmlResult<()> {
        if !self.is_element(parent) {
            return Err(VmlError::dom(format!(
                "node {parent} cannot have children"
            )));
        }
        if self.node(child).is_none() {
            return Err(VmlError::dom(format!("unknown node {child}")));
        }
        if child == self.root() {
            return Err(VmlError::dom("the document root cannot be re-parented"));
        }
        if self.contains(child, parent) {
            return Err(VmlError::dom(format!(
                "appending node {child} under {parent} would create a cycle"
            )));
        }
        self.unlink(child);
        self.link(parent, child);
        Ok(())
    }

    /// Detach a node (and its subtree) from its parent.
    pub fn remove(&mut self, id: NodeId) -> VmlResult<()> {
        if id == self.root() {
            return Err(VmlError::dom("the document root cannot be removed"));
        }
        if self.node(id).is_none() {
            return Err(VmlError::dom(format!("unknown node {id}")));
        }
        self.unlink(id);
        Ok(())
    }

    /// Detach every child of `id`, keeping them allocated. Returns the detached children.
    pub fn clear_children(&mut self, id: NodeId) -> Vec<NodeId> {
        let Some(node) = self.node_mut(id) else {
            return Vec::new();
        };
        let children = std::mem::take(&mut node.children);
        for &c in &children {
            if let Some(child) = self.node_mut(c) {
                child.parent = None;
            }
        }
        children
    }

    /// Replace all children of `id` with a single text node (`textContent = ...`). The old
    /// children are released.
    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        if !self.is_element(id) {
            return;
        }
        self.free_children(id);
        let t = self.create_text(text);
        self.link(id, t);
    }

    /// Allocate an element and append it under `parent`.
    ///
    /// `parent` must be an element; component builders only ever pass their host or nodes they
    /// just created.
    pub(crate) fn push_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        debug_assert!(self.is_element(parent));
        let id = self.create_element(tag);
        self.link(parent, id);
        id
    }

    pub(crate) fn push_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        debug_assert!(self.is_element(parent));
        let id = self.create_text(text);
        self.link(parent, id);
        id
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        if let Some(c) = self.node_mut(child) {
            c.parent = Some(parent);
        }
        if let Some(p) = self.node_mut(parent) {
            p.children.push(child);
        }
    }

    fn unlink(&mut self, id: NodeId) {
        let Some(parent) = self.node_mut(id).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(p) = self.node_mut(parent) {
            p.children.retain(|&c| c != id);
        }
    }

    /// Read an attribute.
    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.attrs.get(name).map(String::as_str)
    }

    /// Set an attribute. No-op on text nodes.
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: impl Into<String>) {
        if let Some(e) = self.element_mut(id) {
            e.attrs.insert(name.to_owned(), value.into());
        }
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attribute(&mut self, id: NodeId, name: &str) -> Option<String> {
        self.element_mut(id)?.attrs.remove(name)
    }

    pub(crate) fn attributes(&self, id: NodeId) -> Option<&BTreeMap<String, String>> {
        self.element(id).map(|e| &e.attrs)
    }

    /// Read an inline style declaration.
    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.element(id)?.style.get(property)
    }

    /// Set an inline style declaration (custom properties included).
    pub fn set_style(&mut self, id: NodeId, property: &str, value: impl Into<String>) {
        if let Some(e) = self.element_mut(id) {
            e.style.set(property, value);
        }
    }

    pub(crate) fn inline_style(&self, id: NodeId) -> Option<&Style> {
        self.element(id).map(|e| &e.style)
    }

    /// Computed value of a `--custom-property` on `id`.
    ///
    /// Custom properties inherit, so the nearest inclusive ancestor declaring it wins.
    pub fn computed_custom_property(&self, id: NodeId, name: &str) -> Option<&str> {
        self.ancestors_inclusive(id)
            .find_map(|a| self.element(a).and_then(|e| e.style.get(name)))
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(Node {
            data: NodeData::Text(t),
            ..
        }) = self.node(id)
        {
            out.push_str(t);
        }
        for d in self.descendants(id) {
            if let Some(Node {
                data: NodeData::Text(t),
                ..
            }) = self.node(d)
            {
                out.push_str(t);
            }
        }
        out
    }

    /// Elements in the subtree of `id` (inclusive) whose tag equals `tag`.
    pub fn elements_by_tag(&self, id: NodeId, tag: &str) -> Vec<NodeId> {
        std::iter::once(id)
            .chain(self.descendants(id))
            .filter(|&n| self.tag(n) == Some(tag))
            .collect()
    }

    /// Elements in the subtree of `id` (exclusive) whose `class` attribute contains `class`.
    pub fn elements_by_class(&self, id: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(id)
            .into_iter()
            .filter(|&n| {
                self.attribute(n, "class")
                    .is_some_and(|c| c.split_whitespace().any(|c| c == class))
            })
            .collect()
    }
}

/// Iterator returned by [`Document::ancestors_inclusive`].
#[derive(Debug)]
pub struct Ancestors<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let cur = self.next?;
        self.next = self.doc.parent(cur);
        Some(cur)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/dom/document.rs"]
mod tests;
