use crate::foundation::error::{VmlError, VmlResult};
use std::fmt;

pub use kurbo::{Affine, Rect};

/// Handle to a node inside a [`Document`](crate::Document) arena.
///
/// A handle pairs a slot index with the slot's generation. Freeing a node bumps the generation,
/// so a handle that outlived its node reads as unknown instead of aliasing whatever reuses the
/// slot.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

impl NodeId {
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub(crate) fn index(self) -> usize {
        self.index as usize
    }

    pub(crate) fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.generation == 0 {
            write!(f, "#{}", self.index)
        } else {
            write!(f, "#{}v{}", self.index, self.generation)
        }
    }
}

/// Tags that scope design tokens and own the timeline broadcast.
pub const PRESENTATION_ROOT_TAGS: [&str; 3] = ["vml", "videoml", "video-ml"];

/// Return `true` for names an element may be created with: an ASCII letter followed by ASCII
/// letters, digits, `-`, `.` or `_`.
pub fn is_valid_tag(tag: &str) -> bool {
    tag.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_'))
}

/// Return `true` for names that may be bound to a component: valid lowercase tag names
/// containing at least one hyphen.
///
/// Every such name can fall back to the placeholder label; anything else is a plain element.
pub fn is_custom_tag(tag: &str) -> bool {
    is_valid_tag(tag) && tag.contains('-') && !tag.chars().any(|c| c.is_ascii_uppercase())
}

/// Validate a custom tag name before it enters the registry.
pub fn validate_custom_tag(tag: &str) -> VmlResult<()> {
    if is_custom_tag(tag) {
        Ok(())
    } else {
        Err(VmlError::validation(format!(
            "'{tag}' is not a valid component tag (lowercase, starts with a letter, contains '-')"
        )))
    }
}

/// Format an affine transform as a CSS `matrix(...)` value.
pub fn css_matrix(affine: Affine) -> String {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    format!(
        "matrix({}, {}, {}, {}, {}, {})",
        fmt_num(a),
        fmt_num(b),
        fmt_num(c),
        fmt_num(d),
        fmt_num(e),
        fmt_num(f)
    )
}

/// Format a CSS pixel length.
pub fn px(v: f64) -> String {
    format!("{}px", fmt_num(v))
}

/// Format a CSS percentage.
pub fn percent(v: f64) -> String {
    format!("{}%", fmt_num(v))
}

// Rounds to 4 decimals so serialized styles stay stable across platforms.
pub(crate) fn fmt_num(v: f64) -> String {
    let r = (v * 10_000.0).round() / 10_000.0;
    if r == 0.0 {
        "0".to_owned()
    } else {
        format!("{r}")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
