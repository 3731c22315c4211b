//! Building blocks shared by the catalog components.

use crate::component::contract::RenderCtx;
use crate::foundation::core::{NodeId, px};

/// Full-frame slide host: themed background, body font, flex column.
pub(crate) fn screen(cx: &mut RenderCtx<'_>, justify: &str, align: &str) {
    let theme = cx.theme();
    let font = cx.typography().body.as_str();
    cx.host_el()
        .styles(&[
            ("display", "flex"),
            ("flex-direction", "column"),
            ("box-sizing", "border-box"),
            ("width", "100%"),
            ("height", "100%"),
            ("padding", "96px 120px"),
            ("gap", "24px"),
        ])
        .style("justify-content", justify)
        .style("align-items", align)
        .style("background", &theme.background)
        .style("color", &theme.text)
        .style("font-family", font);
}

/// Heading in the heading font stack.
pub(crate) fn heading(
    cx: &mut RenderCtx<'_>,
    parent: NodeId,
    tag: &str,
    text: &str,
    size_px: f64,
    color: &str,
) -> NodeId {
    let font = cx.typography().heading.as_str();
    cx.el(parent, tag)
        .styles(&[
            ("margin", "0"),
            ("font-weight", "700"),
            ("line-height", "1.1"),
        ])
        .style("font-family", font)
        .style("font-size", px(size_px))
        .style("color", color)
        .text(text)
        .id()
}

/// Paragraph of body copy.
pub(crate) fn body_text(
    cx: &mut RenderCtx<'_>,
    parent: NodeId,
    text: &str,
    size_px: f64,
    color: &str,
) -> NodeId {
    cx.el(parent, "p")
        .styles(&[("margin", "0"), ("line-height", "1.45")])
        .style("font-size", px(size_px))
        .style("color", color)
        .text(text)
        .id()
}

/// Small uppercase kicker above a title. Skipped when `text` is blank.
pub(crate) fn eyebrow(
    cx: &mut RenderCtx<'_>,
    parent: NodeId,
    text: &str,
    color: &str,
) -> Option<NodeId> {
    if text.trim().is_empty() {
        return None;
    }
    let id = cx
        .el(parent, "p")
        .class("eyebrow")
        .styles(&[
            ("margin", "0"),
            ("font-size", "22px"),
            ("font-weight", "600"),
            ("letter-spacing", "0.16em"),
            ("text-transform", "uppercase"),
        ])
        .style("color", color)
        .text(text)
        .id();
    Some(id)
}

/// Optional secondary line. Skipped when `text` is blank.
pub(crate) fn subtitle(
    cx: &mut RenderCtx<'_>,
    parent: NodeId,
    text: &str,
    size_px: f64,
) -> Option<NodeId> {
    if text.trim().is_empty() {
        return None;
    }
    let muted = cx.theme().muted.as_str();
    Some(body_text(cx, parent, text, size_px, muted))
}

/// Surface-colored card container.
pub(crate) fn card(cx: &mut RenderCtx<'_>, parent: NodeId) -> NodeId {
    let surface = cx.theme().surface.as_str();
    cx.el(parent, "div")
        .class("card")
        .styles(&[
            ("display", "flex"),
            ("flex-direction", "column"),
            ("gap", "12px"),
            ("box-sizing", "border-box"),
            ("padding", "32px"),
            ("border-radius", "20px"),
        ])
        .style("background", surface)
        .id()
}

/// Eyebrow / title / subtitle header block used by most screens.
///
/// The title falls back to `default_title`; an empty default hides the title entirely.
pub(crate) fn header_block(
    cx: &mut RenderCtx<'_>,
    parent: NodeId,
    default_title: &str,
    title_size: f64,
) -> NodeId {
    let props = cx.props();
    let theme = cx.theme();
    let accent = props.color_or("color", &theme.accent);
    let header = cx
        .el(parent, "header")
        .styles(&[
            ("display", "flex"),
            ("flex-direction", "column"),
            ("gap", "12px"),
        ])
        .id();
    eyebrow(cx, header, &props.str_or("eyebrow", ""), &accent);
    let title = props.str_or("title", default_title);
    if !title.trim().is_empty() {
        heading(cx, header, "h2", &title, title_size, &theme.text);
    }
    subtitle(cx, header, &props.str_or("subtitle", ""), 28.0);
    header
}
