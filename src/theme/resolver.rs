use crate::dom::document::Document;
use crate::dom::scope::closest;
use crate::foundation::core::{NodeId, PRESENTATION_ROOT_TAGS};

/// Resolved palette used whenever a component has no explicit color override.
///
/// Always fully populated: every slot falls back to a brand default when its token is missing.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Theme {
    /// Page background.
    pub background: String,
    /// Card / panel surface.
    pub surface: String,
    /// Primary foreground text.
    pub text: String,
    /// Secondary, de-emphasized text.
    pub muted: String,
    /// Accent used for highlights, bars and rules.
    pub accent: String,
    /// Recessed background (code blocks, tracks).
    pub recess: String,
}

/// One palette slot and the design token it is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSlot {
    /// `--background`
    Background = 0,
    /// `--card`
    Surface = 1,
    /// `--foreground`
    Text = 2,
    /// `--muted-foreground`
    Muted = 3,
    /// `--primary`
    Accent = 4,
    /// `--recess`
    Recess = 5,
}

impl ThemeSlot {
    /// All slots in palette order.
    pub const ALL: [ThemeSlot; 6] = [
        ThemeSlot::Background,
        ThemeSlot::Surface,
        ThemeSlot::Text,
        ThemeSlot::Muted,
        ThemeSlot::Accent,
        ThemeSlot::Recess,
    ];

    /// Custom property name carrying the slot's HSL triple.
    pub fn token(self) -> &'static str {
        match self {
            ThemeSlot::Background => "--background",
            ThemeSlot::Surface => "--card",
            ThemeSlot::Text => "--foreground",
            ThemeSlot::Muted => "--muted-foreground",
            ThemeSlot::Accent => "--primary",
            ThemeSlot::Recess => "--recess",
        }
    }

    /// Brand color used when the token is absent.
    pub fn brand_default(self) -> &'static str {
        match self {
            ThemeSlot::Background => "#0b1020",
            ThemeSlot::Surface => "#151c32",
            ThemeSlot::Text => "#f5f7ff",
            ThemeSlot::Muted => "#9aa3c0",
            ThemeSlot::Accent => "#6c8cff",
            ThemeSlot::Recess => "#070b16",
        }
    }
}

impl Default for Theme {
    /// The brand palette, i.e. what resolves when no tokens are present at all.
    fn default() -> Self {
        Self {
            background: ThemeSlot::Background.brand_default().to_owned(),
            surface: ThemeSlot::Surface.brand_default().to_owned(),
            text: ThemeSlot::Text.brand_default().to_owned(),
            muted: ThemeSlot::Muted.brand_default().to_owned(),
            accent: ThemeSlot::Accent.brand_default().to_owned(),
            recess: ThemeSlot::Recess.brand_default().to_owned(),
        }
    }
}

impl Theme {
    /// Color for `slot`.
    pub fn slot(&self, slot: ThemeSlot) -> &str {
        match slot {
            ThemeSlot::Background => &self.background,
            ThemeSlot::Surface => &self.surface,
            ThemeSlot::Text => &self.text,
            ThemeSlot::Muted => &self.muted,
            ThemeSlot::Accent => &self.accent,
            ThemeSlot::Recess => &self.recess,
        }
    }

    fn slot_mut(&mut self, slot: ThemeSlot) -> &mut String {
        match slot {
            ThemeSlot::Background => &mut self.background,
            ThemeSlot::Surface => &mut self.surface,
            ThemeSlot::Text => &mut self.text,
            ThemeSlot::Muted => &mut self.muted,
            ThemeSlot::Accent => &mut self.accent,
            ThemeSlot::Recess => &mut self.recess,
        }
    }

    /// Resolve the palette from the tokens visible at `scope`, or at the document root when no
    /// scope is given.
    pub fn resolve(doc: &Document, scope: Option<NodeId>) -> Self {
        let scope = scope.unwrap_or_else(|| doc.root());
        let mut theme = Theme::default();
        for slot in ThemeSlot::ALL {
            let raw = doc
                .computed_custom_property(scope, slot.token())
                .map(str::trim)
                .unwrap_or("");
            if !raw.is_empty() {
                *theme.slot_mut(slot) = format!("hsl({raw})");
            }
        }
        theme
    }

    /// Resolve the palette for a component element via its nearest presentation root.
    ///
    /// Components outside any root (isolated demos) resolve against the document root.
    pub fn for_element<S: AsRef<str>>(doc: &Document, el: NodeId, root_tags: &[S]) -> Self {
        Self::resolve(doc, closest(doc, el, root_tags))
    }

    /// [`Theme::for_element`] with the standard presentation-root tags.
    pub fn root_theme(doc: &Document, el: NodeId) -> Self {
        Self::for_element(doc, el, &PRESENTATION_ROOT_TAGS)
    }
}

/// Font stacks shared by every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typography {
    /// Body copy.
    pub body: String,
    /// Headings and large numerals.
    pub heading: String,
    /// Code blocks.
    pub mono: String,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            body: "Inter, 'Helvetica Neue', Arial, sans-serif".to_owned(),
            heading: "'Space Grotesk', Inter, 'Helvetica Neue', Arial, sans-serif".to_owned(),
            mono: "'JetBrains Mono', 'Fira Code', Menlo, monospace".to_owned(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/resolver.rs"]
mod tests;
