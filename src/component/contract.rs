use crate::dom::document::Document;
use crate::foundation::core::NodeId;
use crate::props::bag::PropertyBag;
use crate::theme::resolver::{Theme, Typography};
use std::fmt;

/// When a component's render step runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPolicy {
    /// On attach and on every prop change.
    #[default]
    Always,
    /// Only the first time the element is attached; inert afterwards.
    Once,
}

/// Behavior shared by every renderable tag.
///
/// Implementations are stateless and shared between aliases; everything that varies per element
/// (props, motion targets, subscription) lives in the scene's instance table.
pub trait Component: fmt::Debug {
    /// Canonical implementation name, used in logs.
    fn name(&self) -> &'static str;

    /// Build the host's subtree. The host has already been emptied, so building from scratch is
    /// always correct.
    fn render(&self, cx: &mut RenderCtx<'_>);

    /// Render scheduling; see [`RenderPolicy`].
    fn render_policy(&self) -> RenderPolicy {
        RenderPolicy::Always
    }

    /// Per-tick behavior for components that bind to the timeline.
    fn motion(&self) -> Option<&dyn Motion> {
        None
    }
}

/// Timeline-bound visual update.
///
/// Runs on every tick with the targets recorded by the latest render. It may only touch those
/// nodes' visual properties: no rebuild, no prop decode.
pub trait Motion: fmt::Debug {
    /// Apply the state for `time` (elapsed seconds).
    fn tick(&self, doc: &mut Document, targets: &[MotionTarget], time: f64);
}

/// Node animated by a [`Motion`], with the state it was rendered from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionTarget {
    /// Animated element.
    pub node: NodeId,
    /// Position among the component's targets (drives phase offsets).
    pub index: usize,
    /// Base value derived at render time (e.g. a bar's proportion of the maximum).
    pub base: f64,
}

/// Everything a render step may read or write.
#[derive(Debug)]
pub struct RenderCtx<'a> {
    pub(crate) doc: &'a mut Document,
    pub(crate) host: NodeId,
    pub(crate) tag: &'a str,
    pub(crate) props: &'a PropertyBag,
    pub(crate) theme: &'a Theme,
    pub(crate) typography: &'a Typography,
    pub(crate) targets: &'a mut Vec<MotionTarget>,
}

impl<'a> RenderCtx<'a> {
    /// Build a context. `targets` is cleared so stale motion state never survives a render.
    pub fn new(
        doc: &'a mut Document,
        host: NodeId,
        tag: &'a str,
        props: &'a PropertyBag,
        theme: &'a Theme,
        typography: &'a Typography,
        targets: &'a mut Vec<MotionTarget>,
    ) -> Self {
        targets.clear();
        Self {
            doc,
            host,
            tag,
            props,
            theme,
            typography,
            targets,
        }
    }

    /// The element being rendered.
    pub fn host(&self) -> NodeId {
        self.host
    }

    /// Tag the element was created with (differs from the implementation name for aliases).
    pub fn tag(&self) -> &str {
        self.tag
    }

    /// Decoded props.
    pub fn props(&self) -> &'a PropertyBag {
        self.props
    }

    /// Resolved palette.
    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    /// Font stacks.
    pub fn typography(&self) -> &'a Typography {
        self.typography
    }

    /// Read-only document access.
    pub fn doc(&self) -> &Document {
        self.doc
    }

    /// Style the host element itself.
    pub fn host_el(&mut self) -> El<'_> {
        El {
            doc: &mut *self.doc,
            id: self.host,
        }
    }

    /// Append a new element under `parent`.
    pub fn el(&mut self, parent: NodeId, tag: &str) -> El<'_> {
        let id = self.doc.push_element(parent, tag);
        El {
            doc: &mut *self.doc,
            id,
        }
    }

    /// Record a node for the component's [`Motion`].
    pub fn track(&mut self, node: NodeId, base: f64) {
        let index = self.targets.len();
        self.targets.push(MotionTarget { node, index, base });
    }

    /// Targets recorded so far in this render.
    pub fn targets(&self) -> &[MotionTarget] {
        self.targets
    }
}

/// Fluent element builder returned by [`RenderCtx::el`].
#[derive(Debug)]
pub struct El<'d> {
    doc: &'d mut Document,
    id: NodeId,
}

impl El<'_> {
    /// Set one inline style declaration.
    pub fn style(self, property: &str, value: impl Into<String>) -> Self {
        self.doc.set_style(self.id, property, value);
        self
    }

    /// Set several inline style declarations in order.
    pub fn styles(self, decls: &[(&str, &str)]) -> Self {
        for (k, v) in decls {
            self.doc.set_style(self.id, k, *v);
        }
        self
    }

    /// Set an attribute.
    pub fn attr(self, name: &str, value: impl Into<String>) -> Self {
        self.doc.set_attribute(self.id, name, value);
        self
    }

    /// Set the `class` attribute.
    pub fn class(self, class: &str) -> Self {
        self.attr("class", class)
    }

    /// Append a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.doc.push_text(self.id, text);
        self
    }

    /// Finish building and return the element id.
    pub fn id(self) -> NodeId {
        self.id
    }
}
