use super::*;

fn doc_with_root(tag: &str) -> (Document, NodeId) {
    let mut doc = Document::new();
    let root = doc.create_element(tag);
    doc.append_child(doc.root(), root).unwrap();
    (doc, root)
}

#[test]
fn no_tokens_yields_brand_defaults() {
    let (doc, root) = doc_with_root("vml");
    let theme = Theme::resolve(&doc, Some(root));
    assert_eq!(theme, Theme::default());
    for slot in ThemeSlot::ALL {
        assert!(!theme.slot(slot).is_empty());
    }
}

#[test]
fn defaults_are_distinct_per_slot() {
    let t = Theme::default();
    for (i, a) in ThemeSlot::ALL.iter().enumerate() {
        for b in &ThemeSlot::ALL[i + 1..] {
            assert_ne!(t.slot(*a), t.slot(*b));
        }
    }
}

#[test]
fn tokens_are_trimmed_and_wrapped() {
    let (mut doc, root) = doc_with_root("videoml");
    doc.set_style(root, "--primary", "  217 91% 60%  ");
    doc.set_style(root, "--card", "   ");
    let theme = Theme::resolve(&doc, Some(root));
    assert_eq!(theme.accent, "hsl(217 91% 60%)");
    assert_eq!(theme.surface, ThemeSlot::Surface.brand_default());
    assert_eq!(theme.text, ThemeSlot::Text.brand_default());
}

#[test]
fn missing_scope_reads_document_root() {
    let (mut doc, _) = doc_with_root("vml");
    let html = doc.root();
    doc.set_style(html, "--background", "0 0% 0%");
    assert_eq!(Theme::resolve(&doc, None).background, "hsl(0 0% 0%)");
}

#[test]
fn root_theme_walks_to_nearest_presentation_root() {
    let (mut doc, outer) = doc_with_root("vml");
    let inner = doc.create_element("video-ml");
    let slide = doc.create_element("title-screen");
    doc.append_child(outer, inner).unwrap();
    doc.append_child(inner, slide).unwrap();
    doc.set_style(outer, "--primary", "1 1% 1%");
    doc.set_style(inner, "--primary", "2 2% 2%");
    assert_eq!(Theme::root_theme(&doc, slide).accent, "hsl(2 2% 2%)");

    let stray = doc.create_element("title-screen");
    let html = doc.root();
    doc.append_child(html, stray).unwrap();
    doc.set_style(html, "--foreground", "3 3% 3%");
    let t = Theme::root_theme(&doc, stray);
    assert_eq!(t.text, "hsl(3 3% 3%)");
    assert_eq!(t.accent, ThemeSlot::Accent.brand_default());
}
