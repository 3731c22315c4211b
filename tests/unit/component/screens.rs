use super::*;
use crate::component::testing::render_standalone;

#[test]
fn title_screen_defaults_and_hidden_fields() {
    let r = render_standalone(&TitleScreen, "title-screen", "");
    assert_eq!(r.text(), "Untitled");
    assert!(r.by_class("eyebrow").is_empty());

    let r = render_standalone(
        &TitleScreen,
        "title-screen",
        r#"{"eyebrow":"Q3","title":"Results","subtitle":"Board update"}"#,
    );
    assert_eq!(r.text(), "Q3ResultsBoard update");
    assert_eq!(r.by_class("eyebrow").len(), 1);
}

#[test]
fn title_screen_color_override_is_trusted() {
    let r = render_standalone(
        &TitleScreen,
        "title-screen",
        r#"{"eyebrow":"Hi","color":"not-a-color"}"#,
    );
    let eyebrow = r.by_class("eyebrow")[0];
    assert_eq!(r.doc.style(eyebrow, "color"), Some("not-a-color"));
}

#[test]
fn bullet_items_are_stringified_independently() {
    let r = render_standalone(
        &BulletScreen,
        "bullet-screen",
        r#"{"title":"Agenda","bullets":{"items":["one", 2, true, {"k":1}]}}"#,
    );
    let list = r.by_class("bullets")[0];
    let items = r.doc.element_children(list);
    let texts: Vec<String> = items.iter().map(|&li| r.doc.text_content(li)).collect();
    assert_eq!(texts, vec!["one", "2", "true", "{\"k\":1}"]);
}

#[test]
fn bullet_screen_without_items_renders_empty_list() {
    let r = render_standalone(&BulletScreen, "bullet-screen", r#"{"bullets": 5}"#);
    let list = r.by_class("bullets")[0];
    assert!(r.doc.children(list).is_empty());
    assert!(r.text().contains("Key points"));
}

#[test]
fn rerender_is_idempotent() {
    let props = r#"{"title":"Agenda","bullets":{"items":["a","b","c"]}}"#;
    let mut r = render_standalone(&BulletScreen, "bullet-screen", props);
    let first = r.html();
    let nodes = r.doc.descendants(r.host).len();
    r.rerender(&BulletScreen, "bullet-screen", props);
    assert_eq!(r.html(), first);
    assert_eq!(r.doc.descendants(r.host).len(), nodes);
}

#[test]
fn two_column_panes_default_and_override() {
    let r = render_standalone(
        &TwoColumn,
        "two-column",
        r#"{"left":{"title":"Before","text":"slow"}}"#,
    );
    let left = r.by_class("left")[0];
    let right = r.by_class("right")[0];
    assert_eq!(r.doc.text_content(left), "Beforeslow");
    assert_eq!(r.doc.text_content(right), "Right");
    assert!(r.text().starts_with("Comparison"));
}

#[test]
fn chapter_ordinal_can_be_suppressed() {
    let r = render_standalone(&ChapterHeading, "chapter-heading", r#"{"number": 3}"#);
    assert_eq!(r.doc.text_content(r.by_class("ordinal")[0]), "3");
    assert!(r.text().ends_with("Chapter"));

    let r = render_standalone(
        &ChapterHeading,
        "chapter-heading",
        r#"{"showNumber": false, "title": "Setup"}"#,
    );
    assert!(r.by_class("ordinal").is_empty());
    assert_eq!(r.text(), "Setup");
}

#[test]
fn content_header_defaults() {
    let r = render_standalone(&ContentHeader, "content-header", "{broken");
    assert_eq!(r.text(), "Section");
}
