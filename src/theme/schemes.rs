//! Static catalog of named color schemes.
//!
//! Each scheme is a set of HSL triples (no `hsl(...)` wrapper) written onto a presentation root
//! as design tokens; [`Theme::resolve`](crate::Theme::resolve) reads them back.

use crate::dom::document::Document;
use crate::foundation::core::NodeId;
use crate::foundation::error::{VmlError, VmlResult};
use crate::theme::resolver::ThemeSlot;

/// A named palette expressed as raw token values, in [`ThemeSlot::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheme {
    /// Catalog key.
    pub name: &'static str,
    /// Token values in slot order.
    pub tokens: [&'static str; 6],
}

impl Scheme {
    /// Raw token value for `slot`.
    pub fn token(&self, slot: ThemeSlot) -> &'static str {
        self.tokens[slot as usize]
    }
}

/// Every scheme shipped with the crate.
pub const SCHEMES: &[Scheme] = &[
    Scheme {
        name: "midnight",
        tokens: [
            "226 47% 8%",
            "226 40% 14%",
            "228 100% 98%",
            "226 22% 68%",
            "228 100% 71%",
            "226 52% 6%",
        ],
    },
    Scheme {
        name: "daylight",
        tokens: [
            "0 0% 100%",
            "210 40% 96%",
            "222 47% 11%",
            "215 16% 47%",
            "221 83% 53%",
            "210 40% 92%",
        ],
    },
    Scheme {
        name: "ember",
        tokens: [
            "20 14% 6%",
            "20 12% 11%",
            "40 33% 96%",
            "30 10% 62%",
            "24 95% 53%",
            "20 14% 4%",
        ],
    },
    Scheme {
        name: "forest",
        tokens: [
            "150 30% 7%",
            "150 24% 12%",
            "120 20% 95%",
            "140 10% 64%",
            "142 71% 45%",
            "150 30% 5%",
        ],
    },
    Scheme {
        name: "mono",
        tokens: [
            "0 0% 4%",
            "0 0% 10%",
            "0 0% 98%",
            "0 0% 64%",
            "0 0% 90%",
            "0 0% 2%",
        ],
    },
];

/// Look up a scheme by name.
pub fn scheme(name: &str) -> Option<&'static Scheme> {
    SCHEMES.iter().find(|s| s.name == name)
}

/// Write every token of the named scheme onto `scope`.
pub fn apply_scheme(doc: &mut Document, scope: NodeId, name: &str) -> VmlResult<()> {
    let Some(scheme) = scheme(name) else {
        let known = SCHEMES.iter().map(|s| s.name).collect::<Vec<_>>().join(", ");
        return Err(VmlError::validation(format!(
            "unknown color scheme '{name}' (known: {known})"
        )));
    };
    if !doc.is_element(scope) {
        return Err(VmlError::dom(format!("node {scope} is not an element")));
    }
    for slot in ThemeSlot::ALL {
        doc.set_style(scope, slot.token(), scheme.token(slot));
    }
    Ok(())
}
