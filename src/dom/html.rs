//! HTML serialization of [`Document`] subtrees.

use crate::dom::document::{Document, NodeData};
use crate::foundation::core::NodeId;
use std::fmt::Write as _;

// Elements serialized without a closing tag.
const VOID_TAGS: [&str; 4] = ["br", "hr", "img", "meta"];

impl Document {
    /// Serialize `id` and its subtree.
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        write_node(self, id, &mut out);
        out
    }

    /// Serialize the children of `id`.
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for &c in self.children(id) {
            write_node(self, c, &mut out);
        }
        out
    }
}

fn write_node(doc: &Document, id: NodeId, out: &mut String) {
    let Some(node) = doc.node(id) else {
        return;
    };
    let el = match &node.data {
        NodeData::Text(t) => {
            out.push_str(&escape_text(t));
            return;
        }
        NodeData::Element(el) => el,
    };

    out.push('<');
    out.push_str(&el.tag);
    for (k, v) in &el.attrs {
        let _ = write!(out, " {k}=\"{}\"", escape_attr(v));
    }
    if !el.style.is_empty() {
        let _ = write!(out, " style=\"{}\"", escape_attr(&el.style.to_css()));
    }
    out.push('>');

    if VOID_TAGS.contains(&el.tag.as_str()) {
        return;
    }
    for &c in &node.children {
        write_node(doc, c, out);
    }
    let _ = write!(out, "</{}>", el.tag);
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
