//! Full-frame slide screens.

use crate::component::contract::{Component, RenderCtx};
use crate::component::layout::{body_text, eyebrow, header_block, heading, screen, subtitle};
use crate::foundation::core::px;

/// `title-screen`: centered eyebrow / title / subtitle stack.
///
/// Props: `eyebrow` (hidden when empty), `title` (default `"Untitled"`), `subtitle` (hidden when
/// empty), `color` (eyebrow accent).
#[derive(Debug, Default)]
pub struct TitleScreen;

impl Component for TitleScreen {
    fn name(&self) -> &'static str {
        "title-screen"
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        let props = cx.props();
        let theme = cx.theme();
        screen(cx, "center", "center");
        let host = cx.host();
        let stack = cx
            .el(host, "div")
            .class("stack")
            .styles(&[
                ("display", "flex"),
                ("flex-direction", "column"),
                ("align-items", "center"),
                ("gap", "20px"),
                ("text-align", "center"),
                ("max-width", "80%"),
            ])
            .id();
        let accent = props.color_or("color", &theme.accent);
        eyebrow(cx, stack, &props.str_or("eyebrow", ""), &accent);
        let title = props.str_or("title", "Untitled");
        heading(cx, stack, "h1", &title, 96.0, &theme.text);
        subtitle(cx, stack, &props.str_or("subtitle", ""), 34.0);
    }
}

/// `bullet-screen`: header block plus an ordered list from `bullets.items`.
///
/// Every item is stringified on its own, so mixed sequences render item by item. A missing or
/// non-sequence `bullets.items` renders an empty list.
#[derive(Debug, Default)]
pub struct BulletScreen;

impl Component for BulletScreen {
    fn name(&self) -> &'static str {
        "bullet-screen"
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        let props = cx.props();
        let theme = cx.theme();
        screen(cx, "center", "stretch");
        let host = cx.host();
        header_block(cx, host, "Key points", 64.0);

        let size = props.f64_or("fontSize", 34.0).max(1.0);
        let list = cx
            .el(host, "ol")
            .class("bullets")
            .styles(&[
                ("display", "flex"),
                ("flex-direction", "column"),
                ("gap", "18px"),
                ("margin", "0"),
                ("padding-left", "1.4em"),
            ])
            .style("font-size", px(size))
            .id();
        for item in props.str_seq("bullets.items") {
            cx.el(list, "li")
                .styles(&[("line-height", "1.35")])
                .style("color", &theme.text)
                .text(item);
        }
    }
}

/// `two-column`: full-width header over two independently labeled panes.
///
/// Props: `title` (default `"Comparison"`), `eyebrow`, `subtitle`, `left.title` / `right.title`
/// (defaults `"Left"` / `"Right"`), `left.text` / `right.text` (default empty).
#[derive(Debug, Default)]
pub struct TwoColumn;

impl Component for TwoColumn {
    fn name(&self) -> &'static str {
        "two-column"
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        let props = cx.props();
        let theme = cx.theme();
        screen(cx, "center", "stretch");
        let host = cx.host();
        let grid = cx
            .el(host, "div")
            .class("columns")
            .styles(&[
                ("display", "grid"),
                ("grid-template-columns", "1fr 1fr"),
                ("gap", "48px"),
            ])
            .id();
        let header = header_block(cx, grid, "Comparison", 60.0);
        cx.doc.set_style(header, "grid-column", "1 / -1");

        let accent = props.color_or("color", &theme.accent);
        for (side, default_title) in [("left", "Left"), ("right", "Right")] {
            let pane = cx
                .el(grid, "section")
                .class(side)
                .styles(&[
                    ("display", "flex"),
                    ("flex-direction", "column"),
                    ("gap", "16px"),
                    ("padding-top", "24px"),
                ])
                .style("border-top", format!("4px solid {accent}"))
                .id();
            let title = props.str_or(&format!("{side}.title"), default_title);
            heading(cx, pane, "h3", &title, 40.0, &theme.text);
            let text = props.str_or(&format!("{side}.text"), "");
            if !text.is_empty() {
                body_text(cx, pane, &text, 28.0, &theme.muted);
            }
        }
    }
}

/// `chapter-heading`: large ordinal plus title and subtitle.
///
/// Props: `number` (default `"01"`), `showNumber` (default `true`), `title` (default
/// `"Chapter"`), `subtitle`, `color` (ordinal color).
#[derive(Debug, Default)]
pub struct ChapterHeading;

impl Component for ChapterHeading {
    fn name(&self) -> &'static str {
        "chapter-heading"
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        let props = cx.props();
        let theme = cx.theme();
        screen(cx, "center", "flex-start");
        let host = cx.host();
        if props.bool_or("showNumber", true) {
            let accent = props.color_or("color", &theme.accent);
            let number = props.str_or("number", "01");
            let el = heading(cx, host, "div", &number, 200.0, &accent);
            cx.doc.set_attribute(el, "class", "ordinal");
        }
        let title = props.str_or("title", "Chapter");
        heading(cx, host, "h1", &title, 84.0, &theme.text);
        subtitle(cx, host, &props.str_or("subtitle", ""), 32.0);
    }
}

/// `content-header`: left-aligned eyebrow / title / subtitle header screen.
#[derive(Debug, Default)]
pub struct ContentHeader;

impl Component for ContentHeader {
    fn name(&self) -> &'static str {
        "content-header"
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        screen(cx, "flex-end", "flex-start");
        let host = cx.host();
        let header = header_block(cx, host, "Section", 88.0);
        cx.doc.set_style(header, "max-width", "75%");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/component/screens.rs"]
mod tests;
