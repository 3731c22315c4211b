use crate::component::contract::{Component, MotionTarget, RenderCtx, RenderPolicy};
use crate::component::render_into;
use crate::dom::document::Document;
use crate::dom::scope::closest;
use crate::foundation::core::{NodeId, is_valid_tag};
use crate::foundation::error::{VmlError, VmlResult};
use crate::props::bag::PropertyBag;
use crate::props::decode::decode;
use crate::registry::Registry;
use crate::scene::def::SceneDef;
use crate::scene::opts::SceneOpts;
use crate::theme::resolver::Theme;
use crate::theme::schemes::apply_scheme;
use crate::timeline::{Subscription, TimelineHub, TimelineTick};
use serde_json::Value;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Per-element component state.
#[derive(Debug)]
struct Instance {
    tag: String,
    component: Rc<dyn Component>,
    props: PropertyBag,
    attached: bool,
    rendered: bool,
    renders: u32,
    subscription: Option<Subscription>,
    targets: Vec<MotionTarget>,
}

impl Instance {
    fn new(tag: &str, component: Rc<dyn Component>) -> Self {
        Self {
            tag: tag.to_owned(),
            component,
            props: PropertyBag::default(),
            attached: false,
            rendered: false,
            renders: 0,
            subscription: None,
            targets: Vec::new(),
        }
    }
}

/// A document plus the component lifecycle that runs on it.
///
/// Every structural change goes through the scene so connection, attribute and removal callbacks
/// fire the way a host document would fire them:
///
/// - appending a subtree under a connected parent attaches every registered element in it, in
///   document order;
/// - changing the props attribute of an attached element re-renders it;
/// - removing a subtree detaches its instances and drops their timeline subscriptions.
///
/// Nothing on the render or tick path returns an error: bad props, missing tokens and missing
/// presentation roots all degrade to defaults.
#[derive(Debug)]
pub struct Scene {
    doc: Document,
    registry: Registry,
    hub: TimelineHub,
    instances: BTreeMap<NodeId, Instance>,
    opts: SceneOpts,
}

impl Default for Scene {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl Scene {
    /// Scene over an empty document using `registry` and default options.
    pub fn new(registry: Registry) -> Self {
        Self::with_opts(registry, SceneOpts::default())
    }

    /// Scene with explicit options.
    pub fn with_opts(registry: Registry, opts: SceneOpts) -> Self {
        Self {
            doc: Document::new(),
            registry,
            hub: TimelineHub::new(),
            instances: BTreeMap::new(),
            opts,
        }
    }

    /// Scene with the built-in catalog registered.
    pub fn with_builtins() -> Self {
        Self::new(Registry::with_builtins())
    }

    /// Read-only document access.
    pub fn doc(&self) -> &Document {
        &self.doc
    }

    /// The registry backing this scene.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Options the scene was built with.
    pub fn opts(&self) -> &SceneOpts {
        &self.opts
    }

    /// Document-level root element.
    pub fn root(&self) -> NodeId {
        self.doc.root()
    }

    /// Create a detached element. Fails for names outside the tag grammar (see
    /// [`is_valid_tag`]), so every hyphenated element a scene holds is one the fallback can bind.
    pub fn create_element(&mut self, tag: &str) -> VmlResult<NodeId> {
        if !is_valid_tag(tag) {
            return Err(VmlError::dom(format!("'{tag}' is not a valid tag name")));
        }
        Ok(self.doc.create_element(tag))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.doc.create_text(text)
    }

    /// Append `child` under `parent`, running disconnect/connect callbacks as needed.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> VmlResult<()> {
        let was_connected = self.doc.is_connected(child);
        self.doc.append_child(parent, child)?;
        if was_connected {
            self.disconnect_subtree(child);
        }
        if self.doc.is_connected(child) {
            self.connect_subtree(child);
        }
        Ok(())
    }

    /// Detach `node` from its parent, tearing down the instances in its subtree.
    pub fn remove(&mut self, node: NodeId) -> VmlResult<()> {
        let was_connected = self.doc.is_connected(node);
        self.doc.remove(node)?;
        if was_connected {
            self.disconnect_subtree(node);
        }
        Ok(())
    }

    /// Remove `node` and release its subtree. Instances inside it are torn down and forgotten;
    /// the ids stop resolving.
    pub fn discard(&mut self, node: NodeId) -> VmlResult<()> {
        self.remove(node)?;
        let nodes: Vec<NodeId> = std::iter::once(node)
            .chain(self.doc.descendants(node))
            .collect();
        for n in nodes {
            self.detach(n);
            self.instances.remove(&n);
        }
        self.doc.free_subtree(node);
        Ok(())
    }

    /// Set an attribute. Changing the props attribute of an attached element re-renders it.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        self.doc.set_attribute(node, name, value);
        if name == self.opts.props_attribute {
            self.props_changed(node);
        }
    }

    /// Remove an attribute, re-rendering with default props when it was the props attribute.
    pub fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if self.doc.remove_attribute(node, name).is_some() && name == self.opts.props_attribute {
            self.props_changed(node);
        }
    }

    /// Serialize `props` into the props attribute of `node`.
    pub fn set_props(&mut self, node: NodeId, props: &Value) -> VmlResult<()> {
        let raw = serde_json::to_string(props)?;
        let name = self.opts.props_attribute.clone();
        self.set_attribute(node, &name, raw);
        Ok(())
    }

    /// Set an inline style declaration (design tokens included). Does not re-render; call
    /// [`Scene::refresh`] after changing tokens.
    pub fn set_style(&mut self, node: NodeId, property: &str, value: impl Into<String>) {
        self.doc.set_style(node, property, value);
    }

    /// Register a component and upgrade connected elements already using the tag.
    ///
    /// Presentation root tags are rejected: they scope tokens and broadcast ticks, and never
    /// render.
    pub fn define(&mut self, tag: &str, component: Rc<dyn Component>) -> VmlResult<bool> {
        self.ensure_not_root(tag)?;
        let added = self.registry.define(tag, component)?;
        if added {
            self.upgrade(tag);
        }
        Ok(added)
    }

    /// Register `tag` as another name for `base`.
    pub fn define_alias(&mut self, tag: &str, base: &Rc<dyn Component>) -> VmlResult<bool> {
        self.ensure_not_root(tag)?;
        let added = self.registry.define_alias(tag, base)?;
        if added {
            self.upgrade(tag);
        }
        Ok(added)
    }

    /// Register `tag` with the same implementation as the registered tag `existing`.
    pub fn alias(&mut self, tag: &str, existing: &str) -> VmlResult<bool> {
        self.ensure_not_root(tag)?;
        let added = self.registry.alias(tag, existing)?;
        if added {
            self.upgrade(tag);
        }
        Ok(added)
    }

    fn ensure_not_root(&self, tag: &str) -> VmlResult<()> {
        if self.opts.is_root_tag(tag) {
            return Err(VmlError::validation(format!(
                "'{tag}' is a presentation root and cannot be bound to a component"
            )));
        }
        Ok(())
    }

    /// Bind unregistered custom tags under `root` to the fallback label and upgrade them.
    pub fn register_fallback(&mut self, root: NodeId) -> Vec<String> {
        let bound = self
            .registry
            .register_fallback(&self.doc, root, &self.opts.root_tags);
        for tag in &bound {
            self.upgrade(tag);
        }
        bound
    }

    /// Build `def` as a new subtree, append it under the document root and bind any unknown
    /// custom tags in it to the fallback. Returns the new subtree's top element.
    pub fn load(&mut self, def: &SceneDef) -> VmlResult<NodeId> {
        def.validate()?;
        let top = self.build(def)?;
        let root = self.doc.root();
        self.append_child(root, top)?;
        self.register_fallback(top);
        tracing::debug!(elements = def.element_count(), "scene loaded");
        Ok(top)
    }

    fn build(&mut self, def: &SceneDef) -> VmlResult<NodeId> {
        let el = self.doc.create_element(&def.tag);
        for (k, v) in &def.attrs {
            self.doc.set_attribute(el, k, v.as_str());
        }
        if let Some(props) = &def.props {
            let raw = serde_json::to_string(props)?;
            self.doc.set_attribute(el, &self.opts.props_attribute, raw);
        }
        if let Some(text) = &def.text {
            let t = self.doc.create_text(text.as_str());
            self.doc.append_child(el, t)?;
        }
        for child in &def.children {
            let c = self.build(child)?;
            self.doc.append_child(el, c)?;
        }
        Ok(el)
    }

    /// Re-render every attached instance in the subtree of `scope` (inclusive), picking up
    /// changed design tokens. Render-once components are left alone.
    pub fn refresh(&mut self, scope: NodeId) -> usize {
        let candidates: Vec<NodeId> = std::iter::once(scope)
            .chain(self.doc.descendants(scope))
            .filter(|n| self.instances.get(n).is_some_and(|i| i.attached))
            .collect();
        let mut count = 0;
        for node in candidates {
            // An earlier re-render may have cleared this node away.
            if !self.is_attached(node) {
                continue;
            }
            let policy = self.instances[&node].component.render_policy();
            if policy == RenderPolicy::Always {
                self.render(node);
                count += 1;
            }
        }
        count
    }

    /// Write a named color scheme's tokens onto `root` and re-render the components under it.
    pub fn apply_scheme(&mut self, root: NodeId, name: &str) -> VmlResult<()> {
        apply_scheme(&mut self.doc, root, name)?;
        self.refresh(root);
        Ok(())
    }

    /// Broadcast a tick from `root`. Returns the number of listeners that ran.
    #[tracing::instrument(level = "trace", skip(self, root), fields(root = %root))]
    pub fn tick(&mut self, root: NodeId, time: f64) -> usize {
        let mut ran = 0;
        for sub in self.hub.listeners(root) {
            let Some(inst) = self.instances.get(&sub.host) else {
                continue;
            };
            if !inst.attached {
                continue;
            }
            if let Some(motion) = inst.component.motion() {
                motion.tick(&mut self.doc, &inst.targets, time);
                ran += 1;
            }
        }
        ran
    }

    /// Dispatch a named event on `root`. Only the configured tick event with a well-formed
    /// `{time}` detail does anything; everything else is ignored.
    pub fn dispatch_event(&mut self, root: NodeId, name: &str, detail: &Value) -> usize {
        if name != self.opts.tick_event {
            tracing::trace!(name, "ignoring non-tick event");
            return 0;
        }
        match TimelineTick::from_detail(detail) {
            Some(tick) => self.tick(root, tick.time),
            None => {
                tracing::debug!(%detail, "malformed tick detail; ignoring");
                0
            }
        }
    }

    /// Return `true` while `node` hosts an attached component instance.
    pub fn is_attached(&self, node: NodeId) -> bool {
        self.instances.get(&node).is_some_and(|i| i.attached)
    }

    /// How many times the instance on `node` has rendered.
    pub fn render_count(&self, node: NodeId) -> u32 {
        self.instances.get(&node).map_or(0, |i| i.renders)
    }

    /// Live subscription of the instance on `node`.
    pub fn subscription(&self, node: NodeId) -> Option<Subscription> {
        self.instances.get(&node).and_then(|i| i.subscription)
    }

    /// Motion targets recorded by the latest render of `node`.
    pub fn motion_targets(&self, node: NodeId) -> &[MotionTarget] {
        self.instances
            .get(&node)
            .map_or(&[][..], |i| i.targets.as_slice())
    }

    /// Props decoded by the latest render of `node`.
    pub fn props(&self, node: NodeId) -> Option<&PropertyBag> {
        self.instances.get(&node).map(|i| &i.props)
    }

    /// Number of live timeline subscriptions.
    pub fn active_subscriptions(&self) -> usize {
        self.hub.active_count()
    }

    /// Serialize the whole document, doctype included.
    pub fn to_html(&self) -> String {
        format!("<!doctype html>{}", self.doc.outer_html(self.doc.root()))
    }

    fn upgrade(&mut self, tag: &str) {
        let root = self.doc.root();
        let matches = self.doc.elements_by_tag(root, tag);
        for node in matches {
            if self.doc.is_connected(node) {
                self.attach(node);
            }
        }
    }

    fn connect_subtree(&mut self, top: NodeId) {
        let nodes: Vec<NodeId> = std::iter::once(top)
            .chain(self.doc.descendants(top))
            .collect();
        for node in nodes {
            // Authored children of a component are replaced by its first render.
            if self.doc.is_connected(node) {
                self.attach(node);
            }
        }
    }

    fn disconnect_subtree(&mut self, top: NodeId) {
        let nodes: Vec<NodeId> = std::iter::once(top)
            .chain(self.doc.descendants(top))
            .collect();
        for node in nodes {
            self.detach(node);
        }
    }

    fn attach(&mut self, node: NodeId) {
        let Some(tag) = self.doc.tag(node) else {
            return;
        };
        let Some(component) = self.registry.get(tag) else {
            return;
        };
        let tag = tag.to_owned();
        let inst = self
            .instances
            .entry(node)
            .or_insert_with(|| Instance::new(&tag, component));
        if inst.attached {
            return;
        }
        inst.attached = true;
        let needs_render =
            inst.component.render_policy() == RenderPolicy::Always || !inst.rendered;
        let animated = inst.component.motion().is_some();
        tracing::debug!(tag = tag.as_str(), node = %node, "attach");

        if needs_render {
            self.render(node);
        }
        if animated {
            self.subscribe(node);
        }
    }

    fn subscribe(&mut self, node: NodeId) {
        let Some(root) = closest(&self.doc, node, &self.opts.root_tags) else {
            tracing::debug!(node = %node, "no presentation root; not subscribing");
            return;
        };
        let Some(inst) = self.instances.get_mut(&node) else {
            return;
        };
        if inst.subscription.is_none() {
            inst.subscription = Some(self.hub.subscribe(root, node));
        }
    }

    fn detach(&mut self, node: NodeId) {
        let Some(inst) = self.instances.get_mut(&node) else {
            return;
        };
        if !inst.attached {
            return;
        }
        inst.attached = false;
        if let Some(sub) = inst.subscription.take() {
            self.hub.unsubscribe(sub.id);
        }
        tracing::debug!(tag = inst.tag.as_str(), node = %node, "detach");
    }

    fn props_changed(&mut self, node: NodeId) {
        let Some(inst) = self.instances.get(&node) else {
            return;
        };
        if inst.attached && inst.component.render_policy() == RenderPolicy::Always {
            self.render(node);
        }
    }

    #[tracing::instrument(level = "debug", skip(self, node), fields(node = %node))]
    fn render(&mut self, node: NodeId) {
        // The old subtree is about to be freed; instances inside it go with it.
        for d in self.doc.descendants(node) {
            self.detach(d);
            self.instances.remove(&d);
        }
        let props = decode(self.doc.attribute(node, &self.opts.props_attribute));
        let theme = Theme::for_element(&self.doc, node, &self.opts.root_tags);
        let Some(inst) = self.instances.get_mut(&node) else {
            return;
        };
        inst.props = props;
        let component = Rc::clone(&inst.component);
        let cx = RenderCtx::new(
            &mut self.doc,
            node,
            &inst.tag,
            &inst.props,
            &theme,
            &self.opts.typography,
            &mut inst.targets,
        );
        render_into(component.as_ref(), cx);
        inst.rendered = true;
        inst.renders += 1;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/host.rs"]
mod tests;
