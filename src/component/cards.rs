//! Card-based screens and standalone cards.

use crate::component::contract::{Component, RenderCtx};
use crate::component::layout::{body_text, card, header_block, heading, screen};
use crate::foundation::core::px;
use crate::props::bag::display_string;
use serde_json::Value;

/// Title and body text of one card, read from either a bare value (title only) or an object with
/// `title` / `text` keys.
fn card_fields(item: &Value, default_title: &str) -> (String, String) {
    match item {
        Value::Object(m) => {
            let title = m
                .get("title")
                .filter(|v| !v.is_null())
                .map(display_string)
                .unwrap_or_else(|| default_title.to_owned());
            let text = m.get("text").map(display_string).unwrap_or_default();
            (title, text)
        }
        Value::Null => (default_title.to_owned(), String::new()),
        other => (display_string(other), String::new()),
    }
}

/// `quote-card`: quotation with attribution.
///
/// Props: `quote` (default `"Add a quote"`), `author` and `role` (hidden when empty), `color`
/// (quote-mark accent).
#[derive(Debug, Default)]
pub struct QuoteCard;

impl Component for QuoteCard {
    fn name(&self) -> &'static str {
        "quote-card"
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        let props = cx.props();
        let theme = cx.theme();
        let heading_font = cx.typography().heading.as_str();
        let host = cx.host();
        let c = card(cx, host);
        cx.doc.set_style(c, "max-width", "1200px");
        cx.el(c, "div")
            .class("mark")
            .styles(&[("font-size", "120px"), ("line-height", "0.8")])
            .style("font-family", heading_font)
            .style("color", props.color_or("color", &theme.accent))
            .text("\u{201c}");
        cx.el(c, "blockquote")
            .styles(&[
                ("margin", "0"),
                ("font-size", "44px"),
                ("line-height", "1.3"),
                ("font-style", "italic"),
            ])
            .style("color", &theme.text)
            .text(props.str_or("quote", "Add a quote"));

        let author = props.str_or("author", "");
        if !author.trim().is_empty() {
            let role = props.str_or("role", "");
            let line = if role.trim().is_empty() {
                format!("\u{2014} {author}")
            } else {
                format!("\u{2014} {author}, {role}")
            };
            cx.el(c, "cite")
                .styles(&[("font-style", "normal"), ("font-size", "26px")])
                .style("color", &theme.muted)
                .text(line);
        }
    }
}

/// `callout-card`: free-text card with an accent edge.
///
/// Props: `title` (hidden when empty), `text` (default `"Callout"`), `color` (edge).
#[derive(Debug, Default)]
pub struct CalloutCard;

impl Component for CalloutCard {
    fn name(&self) -> &'static str {
        "callout-card"
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        let props = cx.props();
        let theme = cx.theme();
        let host = cx.host();
        let c = card(cx, host);
        let accent = props.color_or("color", &theme.accent);
        cx.doc
            .set_style(c, "border-left", format!("8px solid {accent}"));
        cx.doc.set_style(c, "max-width", "900px");
        let title = props.str_or("title", "");
        if !title.trim().is_empty() {
            heading(cx, c, "h3", &title, 36.0, &theme.text);
        }
        body_text(cx, c, &props.str_or("text", "Callout"), 30.0, &theme.text);
    }
}

/// `code-block`: preformatted monospace code on the recessed background.
///
/// Props: `code` (default empty), `language` (badge, hidden when empty), `fontSize` (default 24).
#[derive(Debug, Default)]
pub struct CodeBlock;

impl Component for CodeBlock {
    fn name(&self) -> &'static str {
        "code-block"
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        let props = cx.props();
        let theme = cx.theme();
        let mono = cx.typography().mono.as_str();
        let host = cx.host();
        let frame = cx
            .el(host, "div")
            .class("code-frame")
            .styles(&[
                ("display", "flex"),
                ("flex-direction", "column"),
                ("gap", "12px"),
                ("padding", "28px 32px"),
                ("border-radius", "16px"),
            ])
            .style("background", &theme.recess)
            .id();
        let language = props.str_or("language", "");
        if !language.trim().is_empty() {
            cx.el(frame, "span")
                .class("language")
                .styles(&[
                    ("font-size", "18px"),
                    ("text-transform", "uppercase"),
                    ("letter-spacing", "0.12em"),
                ])
                .style("color", &theme.muted)
                .style("font-family", mono)
                .text(language);
        }
        let pre = cx
            .el(frame, "pre")
            .styles(&[("margin", "0"), ("white-space", "pre"), ("overflow", "hidden")])
            .id();
        cx.el(pre, "code")
            .style("font-family", mono)
            .style("font-size", px(props.f64_or("fontSize", 24.0).max(1.0)))
            .style("color", props.color_or("color", &theme.text))
            .text(props.str_or("code", ""));
    }
}

/// `card-grid`: title over a grid of item cards.
///
/// Props: `title` (hidden when empty), `eyebrow`, `subtitle`, `items` (sequence of strings or
/// `{title, text}` objects; empty by default), `columns` (default 3, clamped to 1..=6).
#[derive(Debug, Default)]
pub struct CardGrid;

impl Component for CardGrid {
    fn name(&self) -> &'static str {
        "card-grid"
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        let props = cx.props();
        let theme = cx.theme();
        screen(cx, "center", "stretch");
        let host = cx.host();
        header_block(cx, host, "", 56.0);

        let columns = props.f64_or("columns", 3.0).round().clamp(1.0, 6.0) as u32;
        let grid = cx
            .el(host, "div")
            .class("grid")
            .styles(&[("display", "grid"), ("gap", "28px")])
            .style(
                "grid-template-columns",
                format!("repeat({columns}, minmax(0, 1fr))"),
            )
            .id();
        for (i, item) in props.seq("items").iter().enumerate() {
            let (title, text) = card_fields(item, &format!("Item {}", i + 1));
            let c = card(cx, grid);
            heading(cx, c, "h3", &title, 32.0, &theme.text);
            if !text.is_empty() {
                body_text(cx, c, &text, 24.0, &theme.muted);
            }
        }
    }
}

/// `three-column`: exactly three cards side by side.
///
/// Props: `title` (hidden when empty), `eyebrow`, `subtitle`, `columns` (up to three strings or
/// `{title, text}` objects; missing entries render as `"Column N"` with no text).
#[derive(Debug, Default)]
pub struct ThreeColumn;

impl Component for ThreeColumn {
    fn name(&self) -> &'static str {
        "three-column"
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        let props = cx.props();
        let theme = cx.theme();
        screen(cx, "center", "stretch");
        let host = cx.host();
        header_block(cx, host, "", 56.0);

        let row = cx
            .el(host, "div")
            .class("three-column")
            .styles(&[
                ("display", "grid"),
                ("grid-template-columns", "repeat(3, minmax(0, 1fr))"),
                ("gap", "32px"),
            ])
            .id();
        let cols = props.seq("columns");
        for i in 0..3 {
            let default_title = format!("Column {}", i + 1);
            let (title, text) = cols
                .get(i)
                .map(|v| card_fields(v, &default_title))
                .unwrap_or((default_title, String::new()));
            let c = card(cx, row);
            heading(cx, c, "h3", &title, 36.0, &theme.text);
            if !text.is_empty() {
                body_text(cx, c, &text, 26.0, &theme.muted);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/component/cards.rs"]
mod tests;
