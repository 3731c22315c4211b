use crate::dom::document::Document;
use crate::foundation::core::NodeId;

/// Nearest inclusive ancestor of `start` whose tag is one of `tags`.
///
/// Callers decide what "not found" means: the theme falls back to the document root, the
/// timeline simply does not subscribe.
pub fn closest<S: AsRef<str>>(doc: &Document, start: NodeId, tags: &[S]) -> Option<NodeId> {
    doc.ancestors_inclusive(start).find(|&a| {
        doc.tag(a)
            .is_some_and(|t| tags.iter().any(|want| want.as_ref() == t))
    })
}
