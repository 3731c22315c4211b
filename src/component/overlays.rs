//! Absolutely positioned primitives and overlays composited on top of screens.

use crate::component::contract::{Component, El, RenderCtx};
use crate::component::layout::heading;
use crate::foundation::core::{Rect, fmt_num, percent, px};
use crate::props::bag::PropertyBag;

/// Read `x`, `y`, `width`, `height` into a rect, with per-primitive size defaults.
fn placement(props: &PropertyBag, default_w: f64, default_h: f64) -> Rect {
    let x = props.f64_or("x", 0.0);
    let y = props.f64_or("y", 0.0);
    let w = props.f64_or("width", default_w).max(0.0);
    let h = props.f64_or("height", default_h).max(0.0);
    Rect::from_origin_size((x, y), (w, h))
}

fn place(el: El<'_>, rect: Rect, sized: bool) -> El<'_> {
    let el = el
        .style("position", "absolute")
        .style("left", px(rect.x0))
        .style("top", px(rect.y0));
    if sized {
        el.style("width", px(rect.width()))
            .style("height", px(rect.height()))
    } else {
        el
    }
}

/// Which text primitive an [`AbsText`] renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbsTextKind {
    /// `abs-title`: heading font, 72px, text color.
    Title,
    /// `abs-subtitle`: body font, 36px, muted color.
    Subtitle,
}

/// `abs-title` / `abs-subtitle`: text placed at `x`,`y`.
///
/// Props: `text`, `x`, `y`, optional `width` (text wraps inside it), `fontSize`, `color`.
#[derive(Debug)]
pub struct AbsText {
    kind: AbsTextKind,
}

impl AbsText {
    /// Text primitive of the given kind.
    pub fn new(kind: AbsTextKind) -> Self {
        Self { kind }
    }
}

impl Component for AbsText {
    fn name(&self) -> &'static str {
        match self.kind {
            AbsTextKind::Title => "abs-title",
            AbsTextKind::Subtitle => "abs-subtitle",
        }
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        let props = cx.props();
        let theme = cx.theme();
        let typo = cx.typography();
        let (default_text, size, color, font, weight) = match self.kind {
            AbsTextKind::Title => ("Title", 72.0, &theme.text, &typo.heading, "700"),
            AbsTextKind::Subtitle => ("Subtitle", 36.0, &theme.muted, &typo.body, "400"),
        };
        let rect = placement(props, 0.0, 0.0);
        let host = cx.host();
        let el = cx.el(host, "div").class(self.name());
        let el = place(el, rect, false)
            .style("margin", "0")
            .style("font-family", font)
            .style("font-weight", weight)
            .style("font-size", px(props.f64_or("fontSize", size).max(1.0)))
            .style("color", props.color_or("color", color));
        let el = match props.opt_f64("width") {
            Some(w) if w > 0.0 => el.style("width", px(w)),
            _ => el,
        };
        el.text(props.str_or("text", default_text));
    }
}

/// `abs-rect`: solid rectangle at `x`,`y` sized `width` x `height` (default 200 x 120).
///
/// Props: `color` (default accent), `radius` (default 0), `opacity` (clamped to [0,1]).
#[derive(Debug, Default)]
pub struct AbsRect;

impl Component for AbsRect {
    fn name(&self) -> &'static str {
        "abs-rect"
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        let props = cx.props();
        let theme = cx.theme();
        let rect = placement(props, 200.0, 120.0);
        let host = cx.host();
        let el = cx.el(host, "div").class("abs-rect");
        place(el, rect, true)
            .style("background", props.color_or("color", &theme.accent))
            .style("border-radius", px(props.f64_or("radius", 0.0).max(0.0)))
            .style(
                "opacity",
                fmt_num(props.f64_or("opacity", 1.0).clamp(0.0, 1.0)),
            );
    }
}

/// `background-fill`: full-bleed fill behind everything else.
///
/// Props: `color` (default theme background), `opacity` (clamped to [0,1]).
#[derive(Debug, Default)]
pub struct BackgroundFill;

impl Component for BackgroundFill {
    fn name(&self) -> &'static str {
        "background-fill"
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        let props = cx.props();
        let theme = cx.theme();
        let host = cx.host();
        cx.el(host, "div")
            .class("fill")
            .styles(&[("position", "absolute"), ("inset", "0"), ("z-index", "0")])
            .style("background", props.color_or("color", &theme.background))
            .style(
                "opacity",
                fmt_num(props.f64_or("opacity", 1.0).clamp(0.0, 1.0)),
            );
    }
}

/// Clamp a progress value into `[0, 100]`.
pub fn clamp_progress(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

/// `progress-bar`: labeled horizontal progress indicator.
///
/// Props: `value` (clamped to [0,100], default 0), `label` (default `"Progress"`), `showValue`
/// (default `true`), `color` (fill, default accent).
#[derive(Debug, Default)]
pub struct ProgressBar;

impl Component for ProgressBar {
    fn name(&self) -> &'static str {
        "progress-bar"
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        let props = cx.props();
        let theme = cx.theme();
        let font = cx.typography().body.as_str();
        let value = clamp_progress(props.f64_or("value", 0.0));
        let host = cx.host();
        cx.host_el()
            .styles(&[
                ("display", "flex"),
                ("flex-direction", "column"),
                ("gap", "12px"),
                ("width", "100%"),
            ])
            .style("font-family", font)
            .style("color", &theme.text);

        let row = cx
            .el(host, "div")
            .class("progress-label")
            .styles(&[
                ("display", "flex"),
                ("justify-content", "space-between"),
                ("font-size", "24px"),
            ])
            .id();
        cx.el(row, "span")
            .class("label")
            .text(props.str_or("label", "Progress"));
        if props.bool_or("showValue", true) {
            cx.el(row, "span")
                .class("value")
                .style("color", &theme.muted)
                .text(percent(value));
        }

        let track = cx
            .el(host, "div")
            .class("track")
            .styles(&[
                ("height", "16px"),
                ("border-radius", "999px"),
                ("overflow", "hidden"),
            ])
            .style("background", &theme.recess)
            .id();
        cx.el(track, "div")
            .class("fill")
            .styles(&[("height", "100%"), ("border-radius", "999px")])
            .style("width", percent(value))
            .style("background", props.color_or("color", &theme.accent));
    }
}

/// `lower-third`: name and role anchored bottom-left with an accent bar.
///
/// Props: `name` (default `"Name"`), `title` (default `"Title"`), `color`.
#[derive(Debug, Default)]
pub struct LowerThird;

impl Component for LowerThird {
    fn name(&self) -> &'static str {
        "lower-third"
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        let props = cx.props();
        let theme = cx.theme();
        let font = cx.typography().body.as_str();
        let host = cx.host();
        let accent = props.color_or("color", &theme.accent);
        let panel = cx
            .el(host, "div")
            .class("lower-third")
            .styles(&[
                ("position", "absolute"),
                ("left", "64px"),
                ("bottom", "64px"),
                ("max-width", "40%"),
                ("display", "flex"),
                ("flex-direction", "column"),
                ("gap", "6px"),
                ("padding", "20px 28px"),
            ])
            .style("background", &theme.surface)
            .style("border-left", format!("6px solid {accent}"))
            .style("font-family", font)
            .id();
        heading(
            cx,
            panel,
            "div",
            &props.str_or("name", "Name"),
            40.0,
            &theme.text,
        );
        cx.el(panel, "div")
            .class("role")
            .style("font-size", "24px")
            .style("color", &theme.muted)
            .text(props.str_or("title", "Title"));
    }
}

/// `chyron`: ticker-style strip anchored bottom-left.
///
/// Props: `label` (badge, default `"LIVE"`, hidden when empty), `text` (default
/// `"Breaking news"`), `color` (badge background).
#[derive(Debug, Default)]
pub struct Chyron;

impl Component for Chyron {
    fn name(&self) -> &'static str {
        "chyron"
    }

    fn render(&self, cx: &mut RenderCtx<'_>) {
        let props = cx.props();
        let theme = cx.theme();
        let font = cx.typography().body.as_str();
        let host = cx.host();
        let strip = cx
            .el(host, "div")
            .class("chyron")
            .styles(&[
                ("position", "absolute"),
                ("left", "0"),
                ("bottom", "48px"),
                ("max-width", "70%"),
                ("display", "flex"),
                ("align-items", "stretch"),
                ("font-size", "28px"),
            ])
            .style("font-family", font)
            .style("background", &theme.surface)
            .style("color", &theme.text)
            .id();
        let label = props.str_or("label", "LIVE");
        if !label.trim().is_empty() {
            cx.el(strip, "span")
                .class("badge")
                .styles(&[
                    ("padding", "12px 20px"),
                    ("font-weight", "700"),
                    ("letter-spacing", "0.08em"),
                ])
                .style("background", props.color_or("color", &theme.accent))
                .style("color", &theme.background)
                .text(label);
        }
        cx.el(strip, "span")
            .class("text")
            .styles(&[
                ("padding", "12px 24px"),
                ("white-space", "nowrap"),
                ("overflow", "hidden"),
                ("text-overflow", "ellipsis"),
            ])
            .text(props.str_or("text", "Breaking news"));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/component/overlays.rs"]
mod tests;
