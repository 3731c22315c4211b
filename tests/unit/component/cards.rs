use super::*;
use crate::component::testing::render_standalone;

#[test]
fn quote_card_attribution_is_optional() {
    let r = render_standalone(&QuoteCard, "quote-card", "");
    assert_eq!(r.text(), "\u{201c}Add a quote");

    let r = render_standalone(
        &QuoteCard,
        "quote-card",
        r#"{"quote": "Ship it", "author": "Grace", "role": "Admiral"}"#,
    );
    assert!(r.text().ends_with("\u{2014} Grace, Admiral"));
}

#[test]
fn callout_defaults() {
    let r = render_standalone(&CalloutCard, "callout-card", "");
    assert_eq!(r.text(), "Callout");
}

#[test]
fn code_block_keeps_whitespace_and_recess_background() {
    let r = render_standalone(
        &CodeBlock,
        "code-block",
        r#"{"code": "fn main() {\n    println!(\"hi\");\n}", "language": "rust"}"#,
    );
    assert!(r.text().contains("\n    println!"));
    let frame = r.by_class("code-frame")[0];
    assert_eq!(
        r.doc.style(frame, "background"),
        Some(crate::theme::resolver::ThemeSlot::Recess.brand_default())
    );
    assert_eq!(r.by_class("language").len(), 1);
}

#[test]
fn card_grid_renders_one_card_per_item() {
    let r = render_standalone(
        &CardGrid,
        "card-grid",
        r#"{"title": "Features", "columns": 9, "items": ["Fast", {"title": "Safe", "text": "No UB"}, {"text": "untitled"}]}"#,
    );
    let cards = r.by_class("card");
    assert_eq!(cards.len(), 3);
    assert_eq!(r.doc.text_content(cards[1]), "SafeNo UB");
    assert_eq!(r.doc.text_content(cards[2]), "Item 3untitled");
    let grid = r.by_class("grid")[0];
    assert_eq!(
        r.doc.style(grid, "grid-template-columns"),
        Some("repeat(6, minmax(0, 1fr))")
    );
}

#[test]
fn card_grid_without_items_is_empty() {
    let r = render_standalone(&CardGrid, "card-grid", "");
    assert!(r.by_class("card").is_empty());
}

#[test]
fn three_column_always_has_three_cards() {
    let r = render_standalone(&ThreeColumn, "three-column", r#"{"columns": ["A"]}"#);
    let cards = r.by_class("card");
    assert_eq!(cards.len(), 3);
    assert_eq!(r.doc.text_content(cards[0]), "A");
    assert_eq!(r.doc.text_content(cards[2]), "Column 3");
}
