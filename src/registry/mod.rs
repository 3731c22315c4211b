//! Tag name → component implementation table.

use crate::component::cards::{CalloutCard, CardGrid, CodeBlock, QuoteCard, ThreeColumn};
use crate::component::chart::BarChart;
use crate::component::contract::Component;
use crate::component::overlays::{
    AbsRect, AbsText, AbsTextKind, BackgroundFill, Chyron, LowerThird, ProgressBar,
};
use crate::component::placeholder::{DemoPlaceholder, FallbackLabel};
use crate::component::screens::{
    BulletScreen, ChapterHeading, ContentHeader, TitleScreen, TwoColumn,
};
use crate::dom::document::Document;
use crate::foundation::core::{NodeId, is_custom_tag, validate_custom_tag};
use crate::foundation::error::{VmlError, VmlResult};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// How a registry entry came to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// Registered with [`Registry::define`].
    Defined,
    /// Registered with [`Registry::define_alias`] or [`Registry::alias`]; `of` names the
    /// implementation it shares.
    Alias {
        /// Canonical implementation name.
        of: &'static str,
    },
    /// Bound by [`Registry::register_fallback`].
    Fallback,
}

#[derive(Clone)]
struct Entry {
    component: Rc<dyn Component>,
    kind: EntryKind,
}

/// Explicit tag registry owned by the application's start-up sequence.
///
/// Aliases point at the same shared implementation; per-element state never lives here.
#[derive(Clone)]
pub struct Registry {
    entries: BTreeMap<String, Entry>,
    fallback: Rc<dyn Component>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("tags", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
            fallback: Rc::new(FallbackLabel),
        }
    }

    /// A registry holding the full built-in catalog and its aliases.
    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        for (tag, component, aliases) in builtins() {
            let defined = reg.define(tag, Rc::clone(&component));
            debug_assert!(matches!(defined, Ok(true)), "built-in '{tag}': {defined:?}");
            for alias in aliases {
                let aliased = reg.define_alias(alias, &component);
                debug_assert!(
                    matches!(aliased, Ok(true)),
                    "built-in alias '{alias}': {aliased:?}"
                );
            }
        }
        reg
    }

    /// Register `tag`. Returns `Ok(false)` without changes when the tag is already known.
    pub fn define(&mut self, tag: &str, component: Rc<dyn Component>) -> VmlResult<bool> {
        self.insert(tag, component, EntryKind::Defined)
    }

    /// Register `tag` as another name for `base`'s behavior.
    pub fn define_alias(&mut self, tag: &str, base: &Rc<dyn Component>) -> VmlResult<bool> {
        let kind = EntryKind::Alias { of: base.name() };
        self.insert(tag, Rc::clone(base), kind)
    }

    /// Register `tag` as an alias of the already registered `existing` tag.
    pub fn alias(&mut self, tag: &str, existing: &str) -> VmlResult<bool> {
        let base = self.get(existing).ok_or_else(|| {
            VmlError::validation(format!("cannot alias '{tag}' to unknown tag '{existing}'"))
        })?;
        self.define_alias(tag, &base)
    }

    fn insert(
        &mut self,
        tag: &str,
        component: Rc<dyn Component>,
        kind: EntryKind,
    ) -> VmlResult<bool> {
        validate_custom_tag(tag)?;
        if self.entries.contains_key(tag) {
            tracing::trace!(tag, "already defined; ignoring");
            return Ok(false);
        }
        tracing::debug!(tag, component = component.name(), ?kind, "define");
        self.entries.insert(tag.to_owned(), Entry { component, kind });
        Ok(true)
    }

    /// Implementation bound to `tag`.
    pub fn get(&self, tag: &str) -> Option<Rc<dyn Component>> {
        self.entries.get(tag).map(|e| Rc::clone(&e.component))
    }

    /// How `tag` was registered.
    pub fn kind(&self, tag: &str) -> Option<&EntryKind> {
        self.entries.get(tag).map(|e| &e.kind)
    }

    /// Return `true` when `tag` is registered.
    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Registered tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of registered tags.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bind every unregistered custom tag in the subtree of `root` (inclusive) to the fallback
    /// label. Tags listed in `skip` (presentation roots) are never bound.
    ///
    /// Returns the newly bound tags; a second scan over the same tree returns nothing.
    pub fn register_fallback<S: AsRef<str>>(
        &mut self,
        doc: &Document,
        root: NodeId,
        skip: &[S],
    ) -> Vec<String> {
        let mut bound = Vec::new();
        for node in std::iter::once(root).chain(doc.descendants(root)) {
            let Some(tag) = doc.tag(node) else {
                continue;
            };
            if !is_custom_tag(tag)
                || self.contains(tag)
                || skip.iter().any(|s| s.as_ref() == tag)
            {
                continue;
            }
            let fallback = Rc::clone(&self.fallback);
            if let Ok(true) = self.insert(tag, fallback, EntryKind::Fallback) {
                tracing::debug!(tag, "bound unregistered tag to fallback");
                bound.push(tag.to_owned());
            }
        }
        bound
    }
}

type Builtin = (&'static str, Rc<dyn Component>, &'static [&'static str]);

fn builtin<C: Component + 'static>(
    tag: &'static str,
    component: C,
    aliases: &'static [&'static str],
) -> Builtin {
    (tag, Rc::new(component), aliases)
}

fn builtins() -> Vec<Builtin> {
    vec![
        builtin("title-screen", TitleScreen, &["title-slide"]),
        builtin("bullet-screen", BulletScreen, &["bullet-list"]),
        builtin("bar-chart", BarChart, &["animated-bar-chart"]),
        builtin("two-column", TwoColumn, &["split-screen"]),
        builtin("chapter-heading", ChapterHeading, &[]),
        builtin("abs-title", AbsText::new(AbsTextKind::Title), &[]),
        builtin("abs-subtitle", AbsText::new(AbsTextKind::Subtitle), &[]),
        builtin("abs-rect", AbsRect, &[]),
        builtin("background-fill", BackgroundFill, &[]),
        builtin("progress-bar", ProgressBar, &[]),
        builtin("quote-card", QuoteCard, &[]),
        builtin("lower-third", LowerThird, &[]),
        builtin("chyron", Chyron, &[]),
        builtin("callout-card", CalloutCard, &[]),
        builtin("code-block", CodeBlock, &[]),
        builtin("content-header", ContentHeader, &[]),
        builtin("card-grid", CardGrid, &[]),
        builtin("three-column", ThreeColumn, &[]),
        builtin("demo-placeholder", DemoPlaceholder, &[]),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/registry/registry.rs"]
mod tests;
